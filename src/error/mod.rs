//! Error handling module for completion operations.
//!
//! This module provides the error types shared by every completer in the crate:
//! - Argument validation errors for unusable cursor positions
//! - I/O errors surfaced by filesystem-backed completers
//! - Free-form provider errors for custom completer implementations
//!
//! # Example
//!
//! ```rust
//! use tabcomplete::error::{CompletionError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Completer failures convert into CompletionError variants
//!     Ok(())
//! }
//!
//! fn handle_error(err: &CompletionError) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ArgumentError, CompletionError, Result};
