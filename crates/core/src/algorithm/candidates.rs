use crate::algorithm::{run_length, PotentialMatch};
use crate::tokenizers::Word;

/// Enumerate every run of at least `min_words` equal consecutive words.
///
/// Runs are reported in `(word_index1, word_index2)` order. Once a run is
/// found at `(i, j)` the scan over the second text resumes after the run,
/// since no new run for this `i` can start inside it. Every `i` is still
/// visited, so runs that are suffixes of longer runs are reported too.
pub fn enumerate_candidates(
    words1: &[Word],
    words2: &[Word],
    min_words: usize,
) -> Vec<PotentialMatch> {
    let min_words = min_words.max(1);
    if words1.len() < min_words || words2.len() < min_words {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for i in 0..=words1.len() - min_words {
        let mut j = 0;
        while j <= words2.len() - min_words {
            let length = run_length(words1, words2, i, j);
            if length >= min_words {
                candidates.push(PotentialMatch::new(i, j, length));
                j += length;
            } else {
                j += 1;
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::super::tests::create_words;
    use super::*;

    #[test]
    fn test_identical_texts() {
        let words = create_words("the quick brown fox");
        let candidates = enumerate_candidates(&words, &words, 3);

        assert_eq!(
            candidates,
            vec![PotentialMatch::new(0, 0, 4), PotentialMatch::new(1, 1, 3)]
        );
    }

    #[test]
    fn test_below_threshold() {
        let a = create_words("alpha beta gamma");
        let b = create_words("alpha beta delta");
        assert!(enumerate_candidates(&a, &b, 3).is_empty());
        assert_eq!(enumerate_candidates(&a, &b, 2), vec![PotentialMatch::new(0, 0, 2)]);
    }

    #[test]
    fn test_too_few_words() {
        let a = create_words("alpha beta");
        assert!(enumerate_candidates(&a, &a, 3).is_empty());
    }

    #[test]
    fn test_repeated_phrase_found_at_every_position() {
        let a = create_words("one two three");
        let b = create_words("one two three and one two three");
        let candidates = enumerate_candidates(&a, &b, 3);

        assert_eq!(
            candidates,
            vec![PotentialMatch::new(0, 0, 3), PotentialMatch::new(0, 4, 3)]
        );
    }

    #[test]
    fn test_skip_resumes_after_run() {
        let a = create_words("x y z x y z");
        let candidates = enumerate_candidates(&a, &a, 3);

        // (0, 3) lies inside the run found at (0, 0) and is skipped;
        // for i = 3 the scan resumes at j = 3 right after the run at j = 0
        assert_eq!(
            candidates,
            vec![
                PotentialMatch::new(0, 0, 6),
                PotentialMatch::new(1, 1, 5),
                PotentialMatch::new(2, 2, 4),
                PotentialMatch::new(3, 0, 3),
                PotentialMatch::new(3, 3, 3),
            ]
        );
    }
}
