/// The errors for the assistant's remote completion path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Network(String),
    Http(u16),
    QuotaExceeded,
    Malformed(String),
    Unavailable(String),
}

impl Error {
    /// Whether the remote service told us to stop asking for a while
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded | Self::Http(429))
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "Completion request failed: {}", reason),
            Self::Http(status) => write!(f, "Completion request failed with status {}", status),
            Self::QuotaExceeded => write!(f, "Completion quota exceeded"),
            Self::Malformed(reason) => write!(f, "Malformed completion response: {}", reason),
            Self::Unavailable(reason) => write!(f, "{} is not available", reason),
        }
    }
}
