//! Match result types and structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::mapping::{CharIndex, CharSpan};

/// A verbatim overlap between the two texts
///
/// All offsets are inclusive character positions in the original texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
}

impl Match {
    pub fn new(start1: usize, end1: usize, start2: usize, end2: usize) -> Self {
        Self {
            start1,
            end1,
            start2,
            end2,
        }
    }

    /// Span of the match in the first text
    pub fn span1(&self) -> CharSpan {
        CharSpan::new(self.start1, self.end1)
    }

    /// Span of the match in the second text
    pub fn span2(&self) -> CharSpan {
        CharSpan::new(self.start2, self.end2)
    }

    /// The matched region of the first text, as written
    pub fn text1<'a>(&self, text1: &'a str) -> Result<&'a str> {
        CharIndex::new(text1).slice(self.span1())
    }

    /// The matched region of the second text, as written
    pub fn text2<'a>(&self, text2: &'a str) -> Result<&'a str> {
        CharIndex::new(text2).slice(self.span2())
    }
}

/// Statistics about a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStatistics {
    /// Words in the first text
    pub words1: usize,

    /// Words in the second text
    pub words2: usize,

    /// Words covered by matches (the same on both sides)
    pub matched_words: usize,

    /// Number of matches
    pub match_count: usize,

    /// Length of the longest match, in words
    pub longest_match: usize,

    /// Share of the first text's words covered by matches (0.0 to 1.0)
    pub coverage1: f64,

    /// Share of the second text's words covered by matches (0.0 to 1.0)
    pub coverage2: f64,
}

impl MatchStatistics {
    pub fn new(words1: usize, words2: usize) -> Self {
        Self {
            words1,
            words2,
            ..Default::default()
        }
    }

    /// Record an accepted match of `word_length` words
    pub fn record(&mut self, word_length: usize) {
        self.match_count += 1;
        self.matched_words += word_length;
        self.longest_match = self.longest_match.max(word_length);
    }

    /// Calculate the coverage ratios
    pub fn calculate_coverage(&mut self) {
        self.coverage1 = ratio(self.matched_words, self.words1);
        self.coverage2 = ratio(self.matched_words, self.words2);
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total > 0 {
        part as f64 / total as f64
    } else {
        0.0
    }
}

/// Complete result of comparing two texts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Matches ordered by position in the first text
    pub matches: Vec<Match>,

    /// Statistics about the comparison
    pub statistics: MatchStatistics,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Get a summary of the comparison
    pub fn summary(&self) -> String {
        format!(
            "Overlap Summary: {} matches covering {} words (longest {}). \
             Coverage: {:.1}% of text 1, {:.1}% of text 2",
            self.statistics.match_count,
            self.statistics.matched_words,
            self.statistics.longest_match,
            self.statistics.coverage1 * 100.0,
            self.statistics.coverage2 * 100.0
        )
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for (i, m) in self.matches.iter().enumerate() {
            writeln!(
                f,
                "  {}. text 1 [{}..={}] <-> text 2 [{}..={}]",
                i + 1,
                m.start1,
                m.end1,
                m.start2,
                m.end2
            )?;
        }
        Ok(())
    }
}
