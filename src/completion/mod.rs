//! Completion system for interactive shells
//!
//! This module provides the completer capability and the completers built on
//! it. A shell composes the pieces: concrete completers supply candidates
//! for one kind of input each, and the aggregate completer runs them as one.
//!
//! # Architecture
//!
//! - **Completer**: the capability every provider implements
//! - **AggregateCompleter**: fans a request out to child completers and
//!   merges the deepest-matching results
//! - **StringsCompleter**: completes against a fixed string set
//! - **PathCompleter**: completes the token under the cursor as a path
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tabcomplete::completion::{AggregateCompleter, Completer, StringsCompleter};
//!
//! let commands = StringsCompleter::with_strings(["show", "use", "quit"]);
//! let aggregate = AggregateCompleter::with_completers([
//!     Arc::new(commands) as Arc<dyn Completer>,
//! ]);
//!
//! let mut candidates = Vec::new();
//! let offset = aggregate.complete("sh", 2, &mut candidates)?;
//! assert_eq!(offset, Some(0));
//! assert_eq!(candidates, vec!["show".to_string()]);
//! # Ok::<(), tabcomplete::CompletionError>(())
//! ```

mod aggregate;
mod completer;
mod path;
mod strings;

pub use aggregate::AggregateCompleter;
pub use completer::{Completer, longest_common_prefix, prefix_before_cursor};
pub use path::PathCompleter;
pub use strings::StringsCompleter;
