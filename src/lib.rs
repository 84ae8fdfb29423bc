//! Tab Completion Library
//!
//! This library provides composable tab completion for interactive shells and
//! REPLs: a [`Completer`] trait, concrete completers for command names and
//! filesystem paths, and an aggregator that fans a single request out to many
//! completers and merges their answers into one sorted candidate list.
//!
//! # Modules
//!
//! - `completion`: Completer trait, aggregate completer, and built-in completers
//! - `error`: Error types and handling
//! - `repl`: Reedline integration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tabcomplete::{AggregateCompleter, Completer, StringsCompleter};
//!
//! let commands = StringsCompleter::with_strings(["help", "history", "quit"]);
//! let aggregate = AggregateCompleter::with_completers([
//!     Arc::new(commands) as Arc<dyn Completer>,
//! ]);
//!
//! let mut candidates = Vec::new();
//! let offset = aggregate.complete("he", 2, &mut candidates)?;
//! assert_eq!(offset, Some(0));
//! assert_eq!(candidates, vec!["help".to_string()]);
//! # Ok::<(), tabcomplete::CompletionError>(())
//! ```

pub mod completion;
pub mod error;
pub mod repl;

// Re-export commonly used types
pub use completion::{
    AggregateCompleter, Completer, PathCompleter, StringsCompleter, longest_common_prefix,
    prefix_before_cursor,
};
pub use error::{ArgumentError, CompletionError, Result};
pub use repl::ReplCompleter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
