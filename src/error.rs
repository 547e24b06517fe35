use std::fmt;
use thiserror::Error;

/// Coarse classification of a failure, independent of any transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unavailable,
    NotFound,
    FailedPrecondition,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::NotFound => "not_found",
            ErrorKind::FailedPrecondition => "failed_precondition",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum StarsError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("failed to fetch from GitHub API")]
    Unavailable(#[source] reqwest::Error),

    #[error("repository not found")]
    NotFound,

    #[error("{0}")]
    FailedPrecondition(String),

    #[error("{0}")]
    Internal(String),
}

impl StarsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StarsError::Unavailable(_) => ErrorKind::Unavailable,
            StarsError::NotFound => ErrorKind::NotFound,
            StarsError::FailedPrecondition(_) => ErrorKind::FailedPrecondition,
            StarsError::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, StarsError>;
