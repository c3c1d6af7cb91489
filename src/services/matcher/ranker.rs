//! Fine ranking of pre-filtered catalog candidates against a parsed item.

use super::scorer::similarity;
use super::types::{MatchCandidate, ParsedItem};
use crate::database::models::ProductRow;

/// A candidate below or at this similarity is never auto-selected.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Score every candidate against the item, best first.
///
/// Sorting is stable, so candidates with equal scores keep their input
/// order (the catalog search returns them ordered by name ascending).
pub fn rank_candidates(item: &ParsedItem, candidates: &[ProductRow]) -> Vec<MatchCandidate> {
    let mut ranked: Vec<MatchCandidate> = candidates
        .iter()
        .map(|product| MatchCandidate {
            score: similarity(
                &item.name,
                &product.name,
                item.brand.as_deref(),
                product.brand.as_deref(),
            ),
            product: product.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Id of the candidate with the strictly highest score above `threshold`,
/// or `None` when no candidate qualifies.
///
/// Ties resolve to the candidate seen first in input order. Pure and
/// infallible: a malformed item (empty name) scores 0 against everything
/// and simply yields `None`.
pub fn find_best_match(
    item: &ParsedItem,
    candidates: &[ProductRow],
    threshold: f64,
) -> Option<i64> {
    let mut best: Option<(i64, f64)> = None;

    for product in candidates {
        let score = similarity(
            &item.name,
            &product.name,
            item.brand.as_deref(),
            product.brand.as_deref(),
        );
        if score > threshold && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((product.id, score));
        }
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
#[path = "tests/ranker_tests.rs"]
mod tests;
