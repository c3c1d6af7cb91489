use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::ProductRow;

/// A not-yet-persisted item produced by an import/OCR step. Consumed by
/// exactly one match attempt, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    pub name: String,
    pub brand: Option<String>,
}

impl ParsedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
        }
    }

    pub fn with_brand(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: Some(brand.into()),
        }
    }
}

/// A catalog entry paired with its similarity score against one ParsedItem.
/// Computed fresh per match attempt, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub product: ProductRow,
    pub score: f64,
}

/// The resolved outcome of comparing a new item against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchDecision {
    /// Attach inventory to an existing catalog entry.
    UseExisting(i64),
    /// Create a fresh catalog entry, then attach.
    CreateNew,
    /// No inventory mutation for this item.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An override named a product id that was not among the offered
    /// candidates. Caller bug; must not fall back to CreateNew silently.
    #[error("override references product {0}, which is not among the offered candidates")]
    InconsistentOverride(i64),
}
