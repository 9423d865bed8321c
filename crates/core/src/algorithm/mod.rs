//! Word-run matching algorithm
//!
//! Matching happens in two passes over word-index space:
//!
//! 1. [`candidates`] enumerates every run of at least `min_words` equal
//!    consecutive words, for every pair of starting positions.
//! 2. [`greedy`] ranks the runs longest first and keeps each one whose words
//!    are still unclaimed on both sides.
//!
//! The greedy selection is not a global optimum for total aligned length;
//! results are defined by this exact ranking and must stay stable.
pub mod candidates;
pub mod greedy;

pub use candidates::enumerate_candidates;
pub use greedy::select_non_overlapping;

use crate::tokenizers::Word;

/// A run of equal consecutive words, in word-index space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotentialMatch {
    /// Index of the first word of the run in the first text
    pub word_index1: usize,
    /// Index of the first word of the run in the second text
    pub word_index2: usize,
    /// Number of words in the run
    pub word_length: usize,
}

impl PotentialMatch {
    pub fn new(word_index1: usize, word_index2: usize, word_length: usize) -> Self {
        Self {
            word_index1,
            word_index2,
            word_length,
        }
    }

    /// Word indices covered in the first text
    pub fn range1(&self) -> std::ops::Range<usize> {
        self.word_index1..self.word_index1 + self.word_length
    }

    /// Word indices covered in the second text
    pub fn range2(&self) -> std::ops::Range<usize> {
        self.word_index2..self.word_index2 + self.word_length
    }
}

/// Length of the run of equal words starting at `i` in `words1` and `j` in `words2`
pub fn run_length(words1: &[Word], words2: &[Word], i: usize, j: usize) -> usize {
    words1
        .get(i..)
        .unwrap_or_default()
        .iter()
        .zip(words2.get(j..).unwrap_or_default())
        .take_while(|(a, b)| a.text == b.text)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::{Tokenizer, WordTokenizer};

    pub fn create_words(text: &str) -> Vec<Word> {
        WordTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_run_length() {
        let a = create_words("the quick brown fox jumps");
        let b = create_words("a quick brown fox sleeps");

        assert_eq!(run_length(&a, &b, 1, 1), 3);
        assert_eq!(run_length(&a, &b, 0, 0), 0);
        assert_eq!(run_length(&a, &b, 2, 2), 2);
    }

    #[test]
    fn test_run_length_stops_at_end_of_either_text() {
        let a = create_words("one two three");
        let b = create_words("one two three four");

        assert_eq!(run_length(&a, &b, 0, 0), 3);
        assert_eq!(run_length(&a, &b, 3, 0), 0);
        assert_eq!(run_length(&a, &b, 0, 9), 0);
    }

    #[test]
    fn test_ranges() {
        let m = PotentialMatch::new(2, 5, 3);
        assert_eq!(m.range1(), 2..5);
        assert_eq!(m.range2(), 5..8);
    }
}
