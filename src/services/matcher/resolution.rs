//! Match resolution protocol: turn a ranking result into an actionable
//! decision.
//!
//! Per item the flow is Pending → Proposed (default decision) → Resolved.
//! Interactive callers may override the proposal with any offered candidate,
//! "create new" or "skip"; unattended batch callers pass no override and
//! apply the default verbatim, so retries of the same item against an
//! unchanged catalog stay deterministic.

use super::ranker::find_best_match;
use super::types::{MatchDecision, MatchError, ParsedItem};
use crate::database::models::ProductRow;

/// Default decision for an item: best match above `threshold` →
/// `UseExisting`, otherwise `CreateNew`.
pub fn default_decision(
    item: &ParsedItem,
    candidates: &[ProductRow],
    threshold: f64,
) -> MatchDecision {
    match find_best_match(item, candidates, threshold) {
        Some(id) => MatchDecision::UseExisting(id),
        None => MatchDecision::CreateNew,
    }
}

/// Resolve an item to a final decision.
///
/// Without an override the default decision is returned. An override of
/// `UseExisting(id)` must name one of the offered `candidates` — anything
/// else is a caller bug and fails with
/// [`MatchError::InconsistentOverride`] rather than silently creating a
/// duplicate. `CreateNew` and `Skip` overrides are always accepted.
pub fn resolve(
    item: &ParsedItem,
    candidates: &[ProductRow],
    override_decision: Option<MatchDecision>,
) -> Result<MatchDecision, MatchError> {
    match override_decision {
        None => Ok(default_decision(item, candidates, super::MATCH_THRESHOLD)),
        Some(MatchDecision::UseExisting(id)) => {
            if candidates.iter().any(|candidate| candidate.id == id) {
                Ok(MatchDecision::UseExisting(id))
            } else {
                Err(MatchError::InconsistentOverride(id))
            }
        }
        Some(decision) => Ok(decision),
    }
}

#[cfg(test)]
#[path = "tests/resolution_tests.rs"]
mod tests;
