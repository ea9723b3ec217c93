use crate::window::WindowId;

/// The errors for the window manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NoSuchWindow(WindowId),
    UnknownApp(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchWindow(id) => write!(f, "No window with id {}", id),
            Self::UnknownApp(name) => write!(f, "There is no app called `{}`", name),
        }
    }
}
