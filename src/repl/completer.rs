//! Completer for reedline - provides completion suggestions

use std::sync::Arc;

use reedline::{Span, Suggestion};
use tracing::debug;

use crate::completion::Completer;

/// Reedline adapter around any crate completer
///
/// Reedline asks for suggestions through its own completer interface; this
/// type answers by consulting the wrapped [`Completer`] and translating its
/// candidates into suggestions whose span covers the replaced text.
pub struct ReplCompleter {
    /// Completer consulted on every completion request
    completer: Arc<dyn Completer>,
}

impl ReplCompleter {
    /// Create a new reedline adapter
    ///
    /// # Arguments
    /// * `completer` - Completer to consult, usually an aggregate
    ///
    /// # Returns
    /// * `Self` - New adapter
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }
}

impl reedline::Completer for ReplCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let mut candidates = Vec::new();
        let start = match self.completer.complete(line, pos, &mut candidates) {
            Ok(Some(start)) => start,
            Ok(None) => return Vec::new(),
            Err(err) => {
                // Reedline's interface cannot carry errors; trace and show
                // no suggestions.
                debug!("completion failed: {err}");
                return Vec::new();
            }
        };

        // Convert to reedline Suggestions
        candidates
            .into_iter()
            .map(|candidate| Suggestion {
                value: candidate,
                description: None,
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}
