use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidInputError(String),
    EmptyVocabularyError(String),
    InsufficientDataError(String),
    ConvergenceError(String),
    DegenerateInputError(String),
    ParserError(String),
    IoError(std::io::Error),
    Other(String),
}

impl Error {
    /// Whether the failure is local to a single fit and a sweep may carry on without it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ConvergenceError(_) | Error::DegenerateInputError(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInputError(msg) => write!(f, "Invalid Input Error: {}", msg),
            Error::EmptyVocabularyError(msg) => write!(f, "Empty Vocabulary Error: {}", msg),
            Error::InsufficientDataError(msg) => write!(f, "Insufficient Data Error: {}", msg),
            Error::ConvergenceError(msg) => write!(f, "Convergence Error: {}", msg),
            Error::DegenerateInputError(msg) => write!(f, "Degenerate Input Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
