//! Product matching core.
//!
//! Decides whether a freshly parsed item (receipt OCR, barcode lookup, pasted
//! list) refers to an existing catalog entry or needs a new one. Pure
//! computation: normalization → keyword-set scoring → ranking → a decision
//! the caller applies against the catalog/inventory repositories.

pub mod normalizer;
pub mod ranker;
pub mod resolution;
pub mod scorer;
pub mod types;

pub use ranker::{find_best_match, rank_candidates, MATCH_THRESHOLD};
pub use resolution::{default_decision, resolve};
pub use scorer::similarity;
pub use types::{MatchCandidate, MatchDecision, MatchError, ParsedItem};
