use crate::algorithm::PotentialMatch;

/// Rank candidates and keep the ones that do not reuse claimed words.
///
/// Candidates are ordered by length (longest first), then by position in the
/// first text, then by position in the second text. Walking that order, a
/// candidate is accepted only if none of its words is already claimed on
/// either side; accepting it claims all of them.
///
/// Accepted matches are returned in acceptance order.
pub fn select_non_overlapping(
    mut candidates: Vec<PotentialMatch>,
    len1: usize,
    len2: usize,
) -> Vec<PotentialMatch> {
    candidates.sort_by(|a, b| {
        b.word_length
            .cmp(&a.word_length)
            .then(a.word_index1.cmp(&b.word_index1))
            .then(a.word_index2.cmp(&b.word_index2))
    });

    let mut used1 = vec![false; len1];
    let mut used2 = vec![false; len2];
    let mut accepted = Vec::new();

    for candidate in candidates {
        let claimed = used1[candidate.range1()].iter().any(|&used| used)
            || used2[candidate.range2()].iter().any(|&used| used);
        if claimed {
            continue;
        }

        used1[candidate.range1()].fill(true);
        used2[candidate.range2()].fill(true);
        accepted.push(candidate);
    }

    accepted
}
