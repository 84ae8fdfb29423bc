//! Completer capability shared by every completion provider
//!
//! This module defines the trait all completers implement, plus the cursor
//! and prefix helpers they share.

use crate::error::{ArgumentError, Result};

/// Trait for providing completion candidates
///
/// Implementors inspect `buffer` around `cursor` and append candidate
/// replacement strings to `candidates`. The returned offset is the byte
/// position in `buffer` from which those candidates should replace the
/// existing text; `None` means the completer has nothing to offer here.
///
/// Implementations must only append to `candidates`, never remove or reorder
/// what is already there, so completers can be layered by an aggregator.
pub trait Completer: Send + Sync {
    /// Complete the buffer at the given cursor position
    ///
    /// # Arguments
    /// * `buffer` - The input line (may be empty)
    /// * `cursor` - Cursor position (byte index)
    /// * `candidates` - Accumulator the completer appends its candidates to
    ///
    /// # Returns
    /// * `Result<Option<usize>>` - Replacement start offset, or `None` when
    ///   no completion applies
    fn complete(
        &self,
        buffer: &str,
        cursor: usize,
        candidates: &mut Vec<String>,
    ) -> Result<Option<usize>>;
}

/// Validate a cursor position and return the buffer text before it
///
/// # Arguments
/// * `buffer` - The input line
/// * `cursor` - Cursor position (byte index)
///
/// # Returns
/// * `Result<&str>` - Text between the start of the buffer and the cursor
pub fn prefix_before_cursor(buffer: &str, cursor: usize) -> Result<&str> {
    if cursor > buffer.len() {
        return Err(ArgumentError::CursorPastEnd {
            cursor,
            len: buffer.len(),
        }
        .into());
    }
    if !buffer.is_char_boundary(cursor) {
        return Err(ArgumentError::CursorNotCharBoundary { cursor }.into());
    }
    Ok(&buffer[..cursor])
}

/// Longest prefix shared by every candidate in the list
///
/// Front ends use this to fill in the unambiguous stem of a completion
/// before showing the full candidate menu.
pub fn longest_common_prefix(candidates: &[String]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };

    let mut prefix = first.as_str();
    for candidate in rest {
        let shared = prefix
            .char_indices()
            .zip(candidate.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| prefix.len().min(candidate.len()));
        prefix = &prefix[..shared];
        if prefix.is_empty() {
            break;
        }
    }

    prefix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_before_cursor_slices() {
        assert_eq!(prefix_before_cursor("show dbs", 4).unwrap(), "show");
        assert_eq!(prefix_before_cursor("", 0).unwrap(), "");
        assert_eq!(prefix_before_cursor("abc", 3).unwrap(), "abc");
    }

    #[test]
    fn test_prefix_before_cursor_past_end() {
        let err = prefix_before_cursor("ab", 5).unwrap_err();
        assert!(err.to_string().contains("past the end"));
    }

    #[test]
    fn test_prefix_before_cursor_mid_char() {
        // 'é' occupies two bytes, so byte 1 is inside it
        let err = prefix_before_cursor("été", 1).unwrap_err();
        assert!(err.to_string().contains("character boundary"));
    }

    #[test]
    fn test_common_prefix_shared_stem() {
        let candidates = vec!["prefix_file1.txt".to_string(), "prefix_file2.txt".to_string()];
        assert_eq!(longest_common_prefix(&candidates), "prefix_file");
    }

    #[test]
    fn test_common_prefix_single_candidate() {
        let candidates = vec!["single.txt".to_string()];
        assert_eq!(longest_common_prefix(&candidates), "single.txt");
    }

    #[test]
    fn test_common_prefix_empty_list() {
        assert_eq!(longest_common_prefix(&[]), "");
    }

    #[test]
    fn test_common_prefix_no_overlap() {
        let candidates = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(longest_common_prefix(&candidates), "");
    }

    #[test]
    fn test_common_prefix_shorter_candidate_wins() {
        let candidates = vec!["finders".to_string(), "find".to_string(), "findOne".to_string()];
        assert_eq!(longest_common_prefix(&candidates), "find");
    }

    #[test]
    fn test_common_prefix_multibyte() {
        let candidates = vec!["données".to_string(), "donné".to_string()];
        assert_eq!(longest_common_prefix(&candidates), "donné");
    }
}
