//! String-set completer for command and keyword completion

use std::collections::BTreeSet;
use std::sync::RwLock;

use super::{Completer, prefix_before_cursor};
use crate::error::Result;

/// Completer backed by a set of fixed strings
///
/// Stores its candidates sorted and duplicate-free, and suggests every entry
/// that starts with the text before the cursor. The set can be changed
/// between calls, so a shell holding a second handle to the completer can
/// grow it as commands are registered.
#[derive(Debug)]
pub struct StringsCompleter {
    /// Candidate strings, kept sorted and duplicate-free
    strings: RwLock<BTreeSet<String>>,
}

impl StringsCompleter {
    /// Create a completer with no candidate strings
    pub fn new() -> Self {
        Self {
            strings: RwLock::new(BTreeSet::new()),
        }
    }

    /// Create a completer from the provided strings
    ///
    /// # Arguments
    ///
    /// * `strings` - A collection of candidate strings to suggest.
    pub fn with_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: RwLock::new(strings.into_iter().map(Into::into).collect()),
        }
    }

    /// Add a candidate string
    ///
    /// # Arguments
    /// * `string` - Candidate to add
    pub fn add(&self, string: impl Into<String>) {
        self.strings.write().unwrap().insert(string.into());
    }

    /// Replace the candidate set
    ///
    /// # Arguments
    /// * `strings` - New candidate strings
    pub fn set_strings<I, S>(&self, strings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.strings.write().unwrap() = strings.into_iter().map(Into::into).collect();
    }

    /// Snapshot of the current candidate set, in sorted order
    pub fn strings(&self) -> Vec<String> {
        self.strings.read().unwrap().iter().cloned().collect()
    }
}

impl Default for StringsCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for StringsCompleter {
    /// Suggest every stored string that starts with the text before the cursor
    ///
    /// An empty buffer matches everything. The reported offset is `0`:
    /// candidates replace the whole typed prefix.
    fn complete(
        &self,
        buffer: &str,
        cursor: usize,
        candidates: &mut Vec<String>,
    ) -> Result<Option<usize>> {
        let prefix = prefix_before_cursor(buffer, cursor)?;

        let strings = self.strings.read().unwrap();
        let before = candidates.len();
        candidates.extend(strings.iter().filter(|s| s.starts_with(prefix)).cloned());

        if candidates.len() > before {
            Ok(Some(0))
        } else {
            Ok(None)
        }
    }
}
