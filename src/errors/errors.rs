use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ReadFailed { .. } => "ReadFailed",
            ErrorImpl::InvalidEncoding { .. } => "InvalidEncoding",
            ErrorImpl::WriteFailed { .. } => "WriteFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ReadFailed { input, .. } => {
                ErrorTip::Suggestion(format!("Could not read `{}`, does it exist?", input))
            }
            ErrorImpl::InvalidEncoding { .. } => ErrorTip::Suggestion(format!(
                "Input is not valid UTF-8 at byte {}",
                self.position.0
            )),
            ErrorImpl::WriteFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("failed to read {input:?}: {reason}")]
    ReadFailed { input: String, reason: String },
    #[error("{input:?} is not valid UTF-8")]
    InvalidEncoding { input: String },
    #[error("failed to write output: {reason}")]
    WriteFailed { reason: String },
}

pub fn write_failed(e: &std::io::Error) -> Error {
    Error::new(
        ErrorImpl::WriteFailed {
            reason: e.to_string(),
        },
        Position::null(),
    )
}
