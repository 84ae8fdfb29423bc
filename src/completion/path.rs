//! Filesystem path completer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Completer, prefix_before_cursor};
use crate::error::Result;

/// Completer that suggests filesystem paths for the token under the cursor
///
/// The token is the whitespace-free run of characters ending at the cursor.
/// Each candidate replaces the whole token, so it carries the directory part
/// the user already typed; directory entries gain a trailing `/` so a second
/// tab press descends into them.
#[derive(Debug)]
pub struct PathCompleter {
    /// Whether dot-entries are suggested
    show_hidden: bool,
}

impl PathCompleter {
    /// Create a path completer that skips hidden entries
    pub fn new() -> Self {
        Self { show_hidden: false }
    }

    /// Set whether hidden entries are suggested
    pub fn with_hidden_files(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Split a path token into its directory part and file-name prefix
    ///
    /// The directory part keeps its trailing separator so candidates can be
    /// rebuilt by plain concatenation.
    fn split_token(token: &str) -> (&str, &str) {
        match token.rfind('/') {
            Some(idx) => token.split_at(idx + 1),
            None => ("", token),
        }
    }

    /// Resolve the directory part to the directory to scan
    ///
    /// An empty directory part scans the working directory; a leading `~/`
    /// expands to the home directory. Candidates keep the form the user
    /// typed either way.
    fn scan_target(dir_part: &str) -> PathBuf {
        if dir_part.is_empty() {
            return PathBuf::from(".");
        }
        if let Some(rest) = dir_part.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(dir_part)
    }

    /// List a directory's entries, sorted, with directories marked by `/`
    ///
    /// A missing or non-directory target yields an empty list rather than
    /// an error; a failed read of an existing directory propagates.
    fn directory_entries(&self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            if entry.file_type()?.is_dir() {
                entries.push(format!("{name}/"));
            } else {
                entries.push(name);
            }
        }

        entries.sort();
        Ok(entries)
    }
}

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset where the path token under the cursor begins
fn token_start(before_cursor: &str) -> usize {
    before_cursor
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(idx, ch)| idx + ch.len_utf8())
        .unwrap_or(0)
}

impl Completer for PathCompleter {
    /// Complete the path token ending at the cursor
    ///
    /// # Arguments
    /// * `buffer` - The input line
    /// * `cursor` - Cursor position (byte index)
    /// * `candidates` - Accumulator the path candidates are appended to
    ///
    /// # Returns
    /// * `Result<Option<usize>>` - Start of the token when anything matched
    fn complete(
        &self,
        buffer: &str,
        cursor: usize,
        candidates: &mut Vec<String>,
    ) -> Result<Option<usize>> {
        let before_cursor = prefix_before_cursor(buffer, cursor)?;
        let start = token_start(before_cursor);
        let token = &before_cursor[start..];

        let (dir_part, file_prefix) = Self::split_token(token);
        let target = Self::scan_target(dir_part);

        let entries = self.directory_entries(&target)?;
        debug!(
            "path completion: scanned {}, {} entries",
            target.display(),
            entries.len()
        );

        let before = candidates.len();
        candidates.extend(
            entries
                .into_iter()
                .filter(|entry| entry.starts_with(file_prefix))
                .map(|entry| format!("{dir_part}{entry}")),
        );

        if candidates.len() > before {
            Ok(Some(start))
        } else {
            Ok(None)
        }
    }
}
