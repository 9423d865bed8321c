//! Configuration for the match engine

use crate::error::{Result, VerbatimError};
use crate::tokenizers::{Tokenizer, WordTokenizer};

/// Default minimum number of consecutive words that counts as a match
pub const DEFAULT_MIN_WORDS: usize = 3;

/// Configuration for overlap detection
#[derive(Clone)]
pub struct MatchConfig {
    /// Minimum number of consecutive equal words for a run to count
    pub min_words: usize,

    /// Tokenizer to use (defaults to `WordTokenizer`)
    pub tokenizer: Option<Box<dyn Tokenizer>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            tokenizer: None,
        }
    }

    /// Only report long passages (5 words or more)
    pub fn strict() -> Self {
        Self::new().with_min_words(5)
    }

    /// Report short phrases as well (2 words or more)
    pub fn lenient() -> Self {
        Self::new().with_min_words(2)
    }

    /// Set the minimum match length in words
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Check that the configuration can be used for matching
    pub fn validate(&self) -> Result<()> {
        if self.min_words == 0 {
            return Err(VerbatimError::InvalidMinWords(self.min_words));
        }
        Ok(())
    }

    /// The configured tokenizer, or the default word tokenizer
    pub fn tokenizer(&self) -> Box<dyn Tokenizer> {
        self.tokenizer
            .as_ref()
            .map(|t| t.clone_box())
            .unwrap_or_else(|| Box::new(WordTokenizer::new()))
    }
}
