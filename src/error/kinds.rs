use std::{fmt, io};

/// Crate-wide `Result` type using [`CompletionError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Top-level error type for completion operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum CompletionError {
    /// Invalid argument passed to a completer.
    Argument(ArgumentError),

    /// I/O errors (directory scans, metadata lookups).
    Io(io::Error),

    /// Provider-specific error with a free-form message.
    Provider(String),
}

/// Argument validation errors.
///
/// Raised by completers that slice the buffer at the cursor, before any
/// candidate lookup takes place.
#[derive(Debug)]
pub enum ArgumentError {
    /// Cursor lies beyond the end of the buffer.
    CursorPastEnd { cursor: usize, len: usize },

    /// Cursor does not fall on a UTF-8 character boundary.
    CursorNotCharBoundary { cursor: usize },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::Argument(e) => write!(f, "Invalid argument: {e}"),
            CompletionError::Io(e) => write!(f, "I/O error: {e}"),
            CompletionError::Provider(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::CursorPastEnd { cursor, len } => {
                write!(f, "Cursor {cursor} is past the end of the buffer (length {len})")
            }
            ArgumentError::CursorNotCharBoundary { cursor } => {
                write!(f, "Cursor {cursor} is not on a character boundary")
            }
        }
    }
}

impl std::error::Error for CompletionError {}
impl std::error::Error for ArgumentError {}

/* ========================= Conversions to CompletionError ========================= */

impl From<io::Error> for CompletionError {
    fn from(err: io::Error) -> Self {
        CompletionError::Io(err)
    }
}

impl From<ArgumentError> for CompletionError {
    fn from(err: ArgumentError) -> Self {
        CompletionError::Argument(err)
    }
}

impl From<String> for CompletionError {
    fn from(msg: String) -> Self {
        CompletionError::Provider(msg)
    }
}

impl From<&str> for CompletionError {
    fn from(msg: &str) -> Self {
        CompletionError::Provider(msg.to_owned())
    }
}
