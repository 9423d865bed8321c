//! # Verbatim
//!
//! Detects verbatim textual overlap between two documents. Both texts are
//! split into words, the longest non-overlapping runs of identical
//! consecutive words are found, and the result can be rendered as a
//! side-by-side highlighted HTML view.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into words, trimming edge punctuation and
//!   keeping each word's character span in the original text
//! - **Normalizers**: Turn a word into its comparison key (lowercase by default)
//! - **MatchEngine**: Finds runs of at least `min_words` equal words and keeps
//!   them greedily, longest first, so no word is used twice on either side
//! - **HtmlRenderer**: Renders both texts with matched regions highlighted
//!
//! ## Example
//!
//! ```rust
//! use verbatim_core::{find_consecutive_word_matches, generate_html_highlight};
//!
//! let text1 = "It was the best of times, it was the worst of times.";
//! let text2 = "Dickens wrote that it was the best of times.";
//!
//! let matches = find_consecutive_word_matches(text1, text2, 3).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text1(text1).unwrap(), "It was the best of times");
//!
//! let html = generate_html_highlight(text1, text2, &matches).unwrap();
//! assert!(html.contains("data-match-id=\"1\""));
//! ```

pub mod algorithm;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod matches;
pub mod normalizers;
pub mod render;
pub mod tokenizers;

// Re-export main types
pub use config::{MatchConfig, DEFAULT_MIN_WORDS};
pub use engine::MatchEngine;
pub use error::{Result, VerbatimError};
pub use mapping::CharSpan;
pub use matches::{Match, MatchResult, MatchStatistics};
pub use render::{HtmlRenderer, SubMatch};
pub use tokenizers::{Tokenizer, Word, WordTokenizer};

/// Split a text into words with the default word tokenizer
///
/// # Example
///
/// ```rust
/// use verbatim_core::extract_words;
///
/// let words = extract_words("Hello, world!");
/// assert_eq!(words[0].text, "hello");
/// assert_eq!((words[1].start, words[1].end), (7, 11));
/// ```
pub fn extract_words(text: &str) -> Vec<Word> {
    WordTokenizer::new().tokenize(text)
}

/// Find the longest non-overlapping runs of at least `min_words` identical
/// consecutive words shared by the two texts
///
/// Matches are ordered by their position in `text1`. Fails only when
/// `min_words` is zero.
pub fn find_consecutive_word_matches(text1: &str, text2: &str, min_words: usize) -> Result<Vec<Match>> {
    let engine = MatchEngine::with_min_words(min_words)?;
    Ok(engine.find_matches(text1, text2))
}

/// Render both texts side by side with the given matches highlighted
///
/// `matches` must not overlap within either text, which holds for anything
/// returned by [`find_consecutive_word_matches`]. Overlapping or
/// out-of-range matches are reported as errors.
pub fn generate_html_highlight(text1: &str, text2: &str, matches: &[Match]) -> Result<String> {
    HtmlRenderer::new().render_fragment(text1, text2, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words() {
        let words = extract_words("Hello, world!");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], Word::new("hello".to_string(), 0, 4));
        assert_eq!(words[1], Word::new("world".to_string(), 7, 11));
    }

    #[test]
    fn test_full_text_match() {
        let matches =
            find_consecutive_word_matches("the quick brown fox", "the quick brown fox", 3).unwrap();
        assert_eq!(matches, vec![Match::new(0, 18, 0, 18)]);
    }

    #[test]
    fn test_too_short_for_threshold() {
        let matches = find_consecutive_word_matches("alpha beta", "alpha beta", 3).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_zero_min_words() {
        assert_eq!(
            find_consecutive_word_matches("a", "a", 0),
            Err(VerbatimError::InvalidMinWords(0))
        );
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let text1 = "a<b> cat sat mat";
        let text2 = "the cat sat mat";
        let matches = find_consecutive_word_matches(text1, text2, 3).unwrap();
        assert_eq!(matches, vec![Match::new(5, 15, 4, 14)]);

        let html = generate_html_highlight(text1, text2, &matches).unwrap();
        assert!(html.contains("a&lt;b&gt; <span"));
        assert!(html.contains("the <span"));
        assert_eq!(html.matches(">cat sat mat</span>").count(), 2);
    }
}
