//! Character-level position handling
//!
//! Every offset this crate reports is a character (Unicode scalar value) index
//! into the original, untouched input text. Rust strings are indexed by byte,
//! so slicing a matched region back out of the text goes through a
//! [`CharIndex`] that records where each character starts.

use crate::error::{Result, VerbatimError};

/// Represents a span of characters in text, with both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharSpan {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (inclusive)
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// Whether the two spans share at least one character
    pub fn overlaps(&self, other: &CharSpan) -> bool {
        !self.is_empty() && !other.is_empty() && self.start <= other.end && other.start <= self.end
    }
}

/// Maps character positions of a text to byte offsets
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    /// Byte offset of every character, followed by the text length
    offsets: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(pos, _)| pos).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Byte offset at which the character `char_pos` starts.
    ///
    /// `char_pos == char_len()` maps to the end of the text.
    pub fn byte_offset(&self, char_pos: usize) -> Option<usize> {
        self.offsets.get(char_pos).copied()
    }

    /// Slice of the text between two character positions, `end` exclusive
    pub fn slice_range(&self, start: usize, end: usize) -> Result<&'a str> {
        if start > end {
            return Err(VerbatimError::InvalidSpan { start, end });
        }
        match (self.byte_offset(start), self.byte_offset(end)) {
            (Some(from), Some(to)) => Ok(&self.text[from..to]),
            _ => Err(VerbatimError::SpanOutOfRange {
                start,
                end,
                len: self.char_len(),
            }),
        }
    }

    /// Slice of the text covered by an inclusive span
    pub fn slice(&self, span: CharSpan) -> Result<&'a str> {
        if span.is_empty() {
            return Err(VerbatimError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end >= self.char_len() {
            return Err(VerbatimError::SpanOutOfRange {
                start: span.start,
                end: span.end,
                len: self.char_len(),
            });
        }
        self.slice_range(span.start, span.end + 1)
    }

    /// Everything from `start` to the end of the text
    pub fn tail(&self, start: usize) -> Result<&'a str> {
        self.slice_range(start, self.char_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_is_inclusive() {
        assert_eq!(CharSpan::new(2, 5).len(), 4);
        assert_eq!(CharSpan::new(3, 3).len(), 1);
        assert!(CharSpan::new(4, 3).is_empty());
    }

    #[test]
    fn test_span_overlap() {
        let a = CharSpan::new(0, 4);
        assert!(a.overlaps(&CharSpan::new(4, 9)));
        assert!(!a.overlaps(&CharSpan::new(5, 9)));
        assert!(a.contains(4));
        assert!(!a.contains(5));
    }

    #[test]
    fn test_multibyte_slicing() {
        let index = CharIndex::new("The café costs €50");
        assert_eq!(index.char_len(), 18);
        assert_eq!(index.slice(CharSpan::new(4, 7)).unwrap(), "café");
        assert_eq!(index.slice(CharSpan::new(15, 17)).unwrap(), "€50");
        assert_eq!(index.tail(15).unwrap(), "€50");
    }

    #[test]
    fn test_out_of_range_slice() {
        let index = CharIndex::new("abc");
        assert_eq!(
            index.slice(CharSpan::new(1, 3)),
            Err(VerbatimError::SpanOutOfRange { start: 1, end: 3, len: 3 })
        );
        assert_eq!(index.tail(3).unwrap(), "");
    }
}
