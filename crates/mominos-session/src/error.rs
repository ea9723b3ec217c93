/// The errors for the session layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingCredentials,
    InvalidCredentials,
    StorageUnavailable,
    Storage(String),
    Malformed(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Please select a user and enter password"),
            Self::InvalidCredentials => write!(f, "Invalid username or password"),
            Self::StorageUnavailable => write!(f, "Local storage is not available"),
            Self::Storage(reason) => write!(f, "Storage failure: {}", reason),
            Self::Malformed(reason) => write!(f, "Malformed session document: {}", reason),
        }
    }
}
