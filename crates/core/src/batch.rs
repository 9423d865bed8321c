//! Parallel comparison of many independent text pairs
//!
//! Every comparison is a pure function of its two texts, so pairs are spread
//! across the rayon thread pool with no coordination between them.

use rayon::prelude::*;
use tracing::debug;

use crate::engine::MatchEngine;
use crate::matches::MatchResult;

/// Compare every `(text1, text2)` pair, returning results in input order
pub fn compare_pairs<S>(engine: &MatchEngine, pairs: &[(S, S)]) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
{
    debug!(pairs = pairs.len(), "comparing text pairs");
    pairs
        .par_iter()
        .map(|(text1, text2)| engine.compare(text1.as_ref(), text2.as_ref()))
        .collect()
}

/// Compare one text against many others, returning results in input order
pub fn compare_against<S>(engine: &MatchEngine, text: &str, others: &[S]) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
{
    debug!(others = others.len(), "comparing text against candidates");
    others
        .par_iter()
        .map(|other| engine.compare(text, other.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_keep_input_order() {
        let engine = MatchEngine::default();
        let pairs = vec![
            ("the quick brown fox", "the quick brown fox"),
            ("alpha beta", "alpha beta"),
            ("one two three four", "zero one two three"),
        ];
        let results = compare_pairs(&engine, &pairs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].statistics.longest_match, 4);
        assert!(results[1].is_empty());
        assert_eq!(results[2].statistics.longest_match, 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let engine = MatchEngine::default();
        let pairs: Vec<(String, String)> = (0..16)
            .map(|n| {
                let shared = "we hold these truths to be self evident";
                (format!("{n} said {shared} today"), format!("{shared} said {n}"))
            })
            .collect();

        let parallel = compare_pairs(&engine, &pairs);
        for ((text1, text2), result) in pairs.iter().zip(&parallel) {
            assert_eq!(result, &engine.compare(text1, text2));
        }
    }

    #[test]
    fn test_compare_against() {
        let engine = MatchEngine::default();
        let others = ["a b c d", "x y z", "b c d e"];
        let results = compare_against(&engine, "a b c d e", &others);

        assert_eq!(results[0].statistics.matched_words, 4);
        assert!(results[1].is_empty());
        assert_eq!(results[2].statistics.matched_words, 4);
    }
}
