//! Reverse-order replacement over an immutable source text.

use std::cmp::Reverse;
use std::ops::Range;

/// Replacement of one byte range of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    #[must_use]
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// Applies non-overlapping edits, all located against `source`.
///
/// Edits are applied rightmost first so the offsets of edits further left
/// stay valid while the buffer changes length.
#[must_use]
pub fn apply_reversed(source: &str, mut edits: Vec<Edit>) -> String {
    if edits.is_empty() {
        return source.to_string();
    }

    edits.sort_by_key(|edit| Reverse(edit.range.start));

    let mut buffer = source.to_string();
    for edit in edits {
        buffer.replace_range(edit.range, &edit.replacement);
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edits_is_identity() {
        assert_eq!(apply_reversed("BEGIN:VCARD", Vec::new()), "BEGIN:VCARD");
    }

    #[test]
    fn edits_of_different_lengths_keep_offsets() {
        let source = "aa X bb Y cc";
        let edits = vec![
            Edit::new(3..4, "LONGER-REPLACEMENT"),
            Edit::new(8..9, ""),
        ];

        assert_eq!(apply_reversed(source, edits), "aa LONGER-REPLACEMENT bb  cc");
    }

    #[test]
    fn edit_order_does_not_matter() {
        let source = "one two three";
        let forward = vec![Edit::new(0..3, "1"), Edit::new(8..13, "3")];
        let backward = vec![Edit::new(8..13, "3"), Edit::new(0..3, "1")];

        assert_eq!(apply_reversed(source, forward), "1 two 3");
        assert_eq!(apply_reversed(source, backward), "1 two 3");
    }
}
