//! Candidate ordering: descending score, dense ranks 1..N.

use crate::models::Candidate;

/// Sorts candidates by descending score and assigns `rank = 1..N`.
///
/// The sort is stable, so candidates with equal scores keep their staging
/// order. Scores are finite by construction, so the `partial_cmp` fallback
/// never decides a real comparison.
pub fn assign_ranks(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = i + 1;
    }
    candidates
}
