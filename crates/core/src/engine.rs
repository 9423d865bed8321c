//! Main match engine that orchestrates overlap detection

use tracing::{debug, trace};

use crate::algorithm::{enumerate_candidates, select_non_overlapping, PotentialMatch};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::matches::{Match, MatchResult, MatchStatistics};
use crate::tokenizers::{Tokenizer, Word};

/// The main match engine
pub struct MatchEngine {
    config: MatchConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl MatchEngine {
    /// Create a new match engine with the given configuration
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = config.tokenizer();
        Ok(Self { config, tokenizer })
    }

    /// Create a match engine requiring runs of at least `min_words` words
    pub fn with_min_words(min_words: usize) -> Result<Self> {
        Self::new(MatchConfig::new().with_min_words(min_words))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Split a text into words with the configured tokenizer
    pub fn extract_words(&self, text: &str) -> Vec<Word> {
        self.tokenizer.tokenize(text)
    }

    /// Find the verbatim overlaps between two texts, ordered by `start1`
    pub fn find_matches(&self, text1: &str, text2: &str) -> Vec<Match> {
        self.compare(text1, text2).matches
    }

    /// Compare two texts
    ///
    /// 1. Tokenize both texts
    /// 2. Enumerate every run of at least `min_words` equal words
    /// 3. Keep runs longest first, skipping any that reuse claimed words
    /// 4. Map the accepted runs back to character spans
    pub fn compare(&self, text1: &str, text2: &str) -> MatchResult {
        let words1 = self.extract_words(text1);
        let words2 = self.extract_words(text2);
        let min_words = self.config.min_words;
        debug!(
            words1 = words1.len(),
            words2 = words2.len(),
            min_words,
            "tokenized texts"
        );

        let mut statistics = MatchStatistics::new(words1.len(), words2.len());
        if words1.len() < min_words || words2.len() < min_words {
            statistics.calculate_coverage();
            return MatchResult {
                matches: Vec::new(),
                statistics,
            };
        }

        let candidates = enumerate_candidates(&words1, &words2, min_words);
        trace!(candidates = candidates.len(), "enumerated candidate runs");

        let accepted = select_non_overlapping(candidates, words1.len(), words2.len());
        debug!(accepted = accepted.len(), "selected non-overlapping runs");

        let mut matches = Vec::with_capacity(accepted.len());
        for run in &accepted {
            statistics.record(run.word_length);
            matches.push(to_char_match(run, &words1, &words2));
        }
        statistics.calculate_coverage();

        matches.sort_by_key(|m| m.start1);

        MatchResult {
            matches,
            statistics,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            tokenizer: MatchConfig::default().tokenizer(),
        }
    }
}

/// Convert a run in word-index space to character spans
fn to_char_match(run: &PotentialMatch, words1: &[Word], words2: &[Word]) -> Match {
    let last = run.word_length - 1;
    Match::new(
        words1[run.word_index1].start,
        words1[run.word_index1 + last].end,
        words2[run.word_index2].start,
        words2[run.word_index2 + last].end,
    )
}
