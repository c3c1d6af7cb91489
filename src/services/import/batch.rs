//! Unattended batch import against the catalog.
//!
//! Items are resolved strictly in input order and candidates are re-queried
//! per item, so a catalog entry created for line N is already a candidate
//! for line N+1 — duplicate lines in one receipt collapse onto one entry.

use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::database::catalog_repo;
use crate::database::inventory_repo;
use crate::database::models::{AddToInventoryInput, CreateProductInput, TransactionSource};
use crate::services::matcher::{resolve, MatchDecision, ParsedItem};
use crate::types::errors::AppError;

/// One line of a batch: the parsed product plus inventory details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub name: String,
    pub brand: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportProgress {
    pub current: usize,
    pub total: usize,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportError {
    pub name: String,
    pub message: String,
}

/// Counts of what actually happened; partial application after a
/// cancellation or per-item failures is expected and reported, not rolled
/// back.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub created: usize,
    pub attached: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<ImportError>,
}

/// Run a batch of import requests to completion.
///
/// Each item gets the default match decision and applies it verbatim
/// (`UseExisting` → attach inventory, `CreateNew` → create entry, then
/// attach) — no human in the loop, no silent skips. A persistence failure
/// fails that item only; the batch moves on. Flipping `cancel` stops the
/// batch before the next item and counts the remainder as skipped.
pub async fn import_batch<F>(
    pool: &SqlitePool,
    requests: Vec<ImportRequest>,
    source: TransactionSource,
    cancel: &AtomicBool,
    mut on_progress: F,
) -> Result<ImportSummary, AppError>
where
    F: FnMut(ImportProgress),
{
    let total = requests.len();
    let mut summary = ImportSummary {
        total,
        ..Default::default()
    };

    for (index, request) in requests.into_iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            summary.skipped = total - index;
            log::info!(
                "Import cancelled after {} of {} items",
                index,
                total
            );
            break;
        }

        on_progress(ImportProgress {
            current: index + 1,
            total,
            name: request.name.clone(),
        });

        match import_one(pool, &request, source).await {
            Ok(MatchDecision::CreateNew) => summary.created += 1,
            Ok(MatchDecision::UseExisting(_)) => summary.attached += 1,
            Ok(MatchDecision::Skip) => summary.skipped += 1,
            Err(error) => {
                log::warn!("Import of {:?} failed: {error}", request.name);
                summary.failed += 1;
                summary.errors.push(ImportError {
                    name: request.name,
                    message: error.to_string(),
                });
            }
        }
    }

    log::info!(
        "Import finished: {} created, {} attached, {} skipped, {} failed",
        summary.created,
        summary.attached,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

/// Resolve and apply a single request. Returns the decision that was
/// applied so the caller can count outcomes.
async fn import_one(
    pool: &SqlitePool,
    request: &ImportRequest,
    source: TransactionSource,
) -> Result<MatchDecision, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("empty product name".to_string()));
    }

    let item = ParsedItem {
        name: request.name.clone(),
        brand: request.brand.clone(),
    };

    let candidates =
        catalog_repo::search_similar(pool, &item.name, item.brand.as_deref()).await?;
    let decision = resolve(&item, &candidates, None)?;

    let product_id = match decision {
        MatchDecision::UseExisting(id) => {
            log::debug!("{:?} matched existing product {id}", item.name);
            id
        }
        MatchDecision::CreateNew => {
            let input = CreateProductInput {
                barcode: None,
                name: item.name.clone(),
                brand: item.brand.clone(),
                default_quantity_unit: request.quantity_unit.clone(),
            };
            catalog_repo::create_product(pool, &input).await?.id
        }
        MatchDecision::Skip => return Ok(decision),
    };

    let mut add = AddToInventoryInput::basic(product_id, request.quantity, source);
    add.quantity_unit = request.quantity_unit.clone();
    add.expiry_date = request.expiry_date.clone();
    inventory_repo::add_to_inventory(pool, &add).await?;

    Ok(decision)
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
