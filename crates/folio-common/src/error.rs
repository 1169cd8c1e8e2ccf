//! Common error types used throughout folio.
//!
//! This module provides a unified error type for everything that talks to the
//! portfolio backend or touches local files: HTTP status failures, transport
//! problems, rejected input and local I/O.

/// Common error type for folio.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request needs a valid admin token.
    #[error("Unauthorized")]
    Unauthorized,

    /// The token is valid but not allowed to perform the request.
    #[error("Forbidden")]
    Forbidden,

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Map a non-success HTTP status to the matching variant.
    ///
    /// 401, 403 and 404 get their own variants; anything else keeps the
    /// status code and body text.
    pub fn from_status<S: Into<String>>(status: u16, body: S) -> Self {
        let body = body.into();
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound(if body.is_empty() {
                "resource".to_string()
            } else {
                body
            }),
            _ => Self::Http { status, body },
        }
    }

    /// Whether the error means the admin token is missing or rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
