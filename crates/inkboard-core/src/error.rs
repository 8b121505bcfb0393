//! Error handling for Inkboard
//!
//! Provides error types for the editing layers:
//! - Document errors (pages, shapes, edit lock)
//! - Session errors (interactive edit lifecycle)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Raised by a document store when a mutation cannot be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The document is locked for editing
    #[error("Document is read-only")]
    ReadOnly,

    /// Page does not exist
    #[error("Page not found: {page_id}")]
    PageNotFound {
        /// The page identifier that was not found.
        page_id: String,
    },

    /// Shape does not exist
    #[error("Shape not found: {shape_id}")]
    ShapeNotFound {
        /// The shape identifier that was not found.
        shape_id: String,
    },

    /// A shape with the same id is already stored
    #[error("Shape already exists: {shape_id}")]
    DuplicateShape {
        /// The colliding shape identifier.
        shape_id: String,
    },
}

/// Session error type
///
/// Represents violations of the interactive edit session lifecycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Another session is still running
    #[error("Session already active on shape {shape_id}")]
    SessionActive {
        /// The shape the running session is bound to.
        shape_id: String,
    },

    /// Operation requires a running session
    #[error("No active session")]
    NoActiveSession,
}

/// Main error type for Inkboard
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }

    /// Check if this error was caused by the edit lock
    pub fn is_read_only(&self) -> bool {
        matches!(self, Error::Document(DocumentError::ReadOnly))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
