use std::cmp::Ordering;

use crate::models::VideoRecord;

use super::similarity::SimilarityMatrix;

/// A candidate index paired with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

/// Sorts by descending score. The sort is stable, so equal scores keep
/// their corpus order.
fn sort_descending(scored: &mut [Scored]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Ranks documents by their similarity to the `reference` row of `matrix`
/// and keeps the best `limit`.
///
/// The reference itself is never ranked, nor is any index for which
/// `is_excluded` returns true.
pub fn rank_by_reference<F>(
    matrix: &SimilarityMatrix,
    reference: usize,
    limit: usize,
    is_excluded: F,
) -> Vec<Scored>
where
    F: Fn(usize) -> bool,
{
    let mut scored: Vec<Scored> = matrix
        .row(reference)
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != reference && !is_excluded(index))
        .map(|(index, &score)| Scored { index, score })
        .collect();

    sort_descending(&mut scored);
    scored.truncate(limit);
    scored
}

/// Ranks every candidate by a precomputed row of query similarities
pub fn rank_by_scores(scores: &[f64]) -> Vec<Scored> {
    let mut scored: Vec<Scored> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Scored { index, score })
        .collect();

    sort_descending(&mut scored);
    scored
}

/// Restricts the candidate pool to videos sharing at least one genre with
/// `favorite_genres`, preserving corpus order
pub fn filter_by_genres<'a>(
    corpus: &'a [VideoRecord],
    favorite_genres: &[String],
) -> Vec<&'a VideoRecord> {
    corpus
        .iter()
        .filter(|video| video.has_any_genre(favorite_genres))
        .collect()
}
