//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the word tokenizer used for overlap
//! detection. Words carry their comparison key together with the character
//! span of the word in the original text.

use serde::Serialize;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::mapping::CharSpan;
use crate::normalizers::{Lowercase, Normalizer};

/// A single word of a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Comparison key (normalized, punctuation-trimmed, never empty)
    pub text: String,

    /// First character of the word in the original text (inclusive)
    pub start: usize,

    /// Last character of the word in the original text (inclusive)
    pub end: usize,
}

impl Word {
    pub fn new(text: String, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }

    /// Span of the word in the original text
    pub fn span(&self) -> CharSpan {
        CharSpan::new(self.start, self.end)
    }
}

/// Trait for tokenizers that split text into words
pub trait Tokenizer: Send + Sync {
    /// Split the text into words, left to right
    fn tokenize(&self, text: &str) -> Vec<Word>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Implement Clone for Box<dyn Tokenizer>
impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Whitespace word tokenizer
///
/// Splits on runs of whitespace, trims punctuation and symbol characters from
/// both edges of every block and drops blocks that are nothing but
/// punctuation. The remaining core is run through the normalizer chain, which
/// by default only lowercases.
#[derive(Clone)]
pub struct WordTokenizer {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            normalizers: vec![Box::new(Lowercase)],
        }
    }

    /// A tokenizer that keeps the trimmed core exactly as written
    pub fn case_sensitive() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Append a normalizer to the chain
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Names of the normalizers, in the order they run
    pub fn normalizer_names(&self) -> Vec<&str> {
        self.normalizers.iter().map(|n| n.name()).collect()
    }

    fn normalize(&self, core: String) -> String {
        self.normalizers
            .iter()
            .fold(core, |word, normalizer| normalizer.normalize(&word))
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Word> {
        let chars: Vec<char> = text.chars().collect();
        let mut words = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if chars[pos].is_whitespace() {
                pos += 1;
                continue;
            }

            let block_start = pos;
            while pos < chars.len() && !chars[pos].is_whitespace() {
                pos += 1;
            }

            // Trim edges only; interior punctuation ("don't", "e-mail") stays
            let mut core_start = block_start;
            let mut core_end = pos;
            while core_start < core_end && is_edge_punctuation(chars[core_start]) {
                core_start += 1;
            }
            while core_end > core_start && is_edge_punctuation(chars[core_end - 1]) {
                core_end -= 1;
            }

            if core_start == core_end {
                continue;
            }

            let core: String = chars[core_start..core_end].iter().collect();
            let normalized = self.normalize(core);
            if normalized.is_empty() {
                continue;
            }
            words.push(Word::new(normalized, core_start, core_end - 1));
        }

        words
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Unicode punctuation (P*) and symbol (S*) characters
pub fn is_edge_punctuation(ch: char) -> bool {
    matches!(
        ch.general_category_group(),
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizers::UnicodeNfkc;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_punctuation_is_trimmed() {
        let words = WordTokenizer::new().tokenize("Hello, world!");

        assert_eq!(texts(&words), vec!["hello", "world"]);
        assert_eq!(words[0].span(), CharSpan::new(0, 4));
        assert_eq!(words[1].span(), CharSpan::new(7, 11));
    }

    #[test]
    fn test_offsets_point_into_original_text() {
        let text = "  (\"Quoted\")   «Guillemets»";
        let words = WordTokenizer::new().tokenize(text);
        let chars: Vec<char> = text.chars().collect();

        assert_eq!(texts(&words), vec!["quoted", "guillemets"]);
        for word in &words {
            let original: String = chars[word.start..=word.end].iter().collect();
            assert_eq!(original.to_lowercase(), word.text);
        }
    }

    #[test]
    fn test_punctuation_only_blocks_are_dropped() {
        let words = WordTokenizer::new().tokenize("one --- two ... $ three");
        assert_eq!(texts(&words), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_interior_punctuation_is_kept() {
        let words = WordTokenizer::new().tokenize("Don't e-mail U.S.A.");
        assert_eq!(texts(&words), vec!["don't", "e-mail", "u.s.a"]);
    }

    #[test]
    fn test_symbols_are_trimmed() {
        let words = WordTokenizer::new().tokenize("$100 +5% ©2024");
        assert_eq!(texts(&words), vec!["100", "5", "2024"]);
        assert_eq!(words[0].span(), CharSpan::new(1, 3));
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
        assert!(WordTokenizer::new().tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_words_are_strictly_increasing() {
        let words = WordTokenizer::new().tokenize("a b\tc\n\nd, e; f");
        for pair in words.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_case_sensitive_tokenizer() {
        let words = WordTokenizer::case_sensitive().tokenize("Hello World");
        assert_eq!(texts(&words), vec!["Hello", "World"]);
    }

    #[test]
    fn test_normalizer_chain() {
        let tokenizer = WordTokenizer::new().with_normalizer(Box::new(UnicodeNfkc));
        assert_eq!(tokenizer.normalizer_names(), vec!["lowercase", "unicode_nfkc"]);

        let words = tokenizer.tokenize("ﬁle ＦＩＬＥ");
        assert_eq!(texts(&words), vec!["file", "file"]);
    }
}
