//! Line-editor integration
//!
//! This module plugs crate completers into reedline. A shell builds its
//! completion stack out of [`completion`](crate::completion) pieces and
//! hands the top of the stack to [`ReplCompleter`], which speaks reedline's
//! completer interface on its behalf.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reedline::Reedline;
//! use tabcomplete::completion::{AggregateCompleter, Completer, PathCompleter, StringsCompleter};
//! use tabcomplete::repl::ReplCompleter;
//!
//! let aggregate = AggregateCompleter::with_completers([
//!     Arc::new(StringsCompleter::with_strings(["show", "use", "quit"])) as Arc<dyn Completer>,
//!     Arc::new(PathCompleter::new()) as Arc<dyn Completer>,
//! ]);
//!
//! let editor = Reedline::create()
//!     .with_completer(Box::new(ReplCompleter::new(Arc::new(aggregate))));
//! ```

mod completer;

pub use completer::ReplCompleter;
