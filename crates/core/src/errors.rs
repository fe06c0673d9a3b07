//! Core error types for the GTD client.
//!
//! Transport-agnostic: the HTTP layer translates its own failures (reqwest,
//! JSON decoding) into these variants so that services and stores only ever
//! see one error shape carrying a human-readable message.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the GTD client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request was aborted after the configured timeout elapsed.
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Any other transport or decoding failure, with the original message.
    #[error("{0}")]
    Transport(String),

    /// A failure that carried no usable message.
    #[error("An unexpected error occurred")]
    Unexpected,

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Client-side validation errors, raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,

    #[error("Title is too long ({actual}/{max} characters)")]
    TitleTooLong { max: usize, actual: usize },
}

impl Error {
    /// Wrap a transport failure message, falling back to [`Error::Unexpected`]
    /// when the message is blank.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Error::Unexpected
        } else {
            Error::Transport(message)
        }
    }

    /// The message surfaced to users and stored as collection error state.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::transport(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
