//! Inventory persistence: stock rows per product/location/expiry batch,
//! with every mutation mirrored into the transaction log.

use chrono::{Duration, Local};
use sqlx::SqlitePool;

use super::models::{
    AddToInventoryInput, InventoryRow, InventoryWithProduct, PantryStats, TransactionSource,
    TransactionWithProduct,
};
use crate::DEFAULT_QUANTITY_UNIT;

/// Add stock for a product.
///
/// An existing row with the same product, location and expiry date is
/// incremented instead of duplicated; otherwise a fresh row is inserted.
/// Either way an `add` transaction is recorded.
pub async fn add_to_inventory(
    pool: &SqlitePool,
    input: &AddToInventoryInput,
) -> Result<InventoryRow, sqlx::Error> {
    let existing = sqlx::query_as::<_, InventoryRow>(
        r#"
        SELECT * FROM inventory
        WHERE product_id = ?
          AND (location IS ? OR (location IS NULL AND ? IS NULL))
          AND (expiry_date IS ? OR (expiry_date IS NULL AND ? IS NULL))
        LIMIT 1
        "#,
    )
    .bind(input.product_id)
    .bind(&input.location)
    .bind(&input.location)
    .bind(&input.expiry_date)
    .bind(&input.expiry_date)
    .fetch_optional(pool)
    .await?;

    let row = if let Some(existing) = existing {
        sqlx::query_as::<_, InventoryRow>(
            "UPDATE inventory SET quantity = ?, updated_at = datetime('now') WHERE id = ? RETURNING *",
        )
        .bind(existing.quantity + input.quantity)
        .bind(existing.id)
        .fetch_one(pool)
        .await?
    } else {
        sqlx::query_as::<_, InventoryRow>(
            r#"
            INSERT INTO inventory
                (product_id, quantity, quantity_unit, expiry_date, location, purchase_date, purchase_price)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(
            input
                .quantity_unit
                .as_deref()
                .unwrap_or(DEFAULT_QUANTITY_UNIT),
        )
        .bind(&input.expiry_date)
        .bind(&input.location)
        .bind(&input.purchase_date)
        .bind(input.purchase_price)
        .fetch_one(pool)
        .await?
    };

    record_transaction(pool, input.product_id, Some(row.id), "add", input.quantity, input.source)
        .await?;

    Ok(row)
}

/// Remove stock; a row drained to zero is deleted after its removal is
/// logged and old transaction references are detached.
pub async fn remove_from_inventory(
    pool: &SqlitePool,
    inventory_id: i64,
    quantity: f64,
    source: TransactionSource,
) -> Result<Option<InventoryRow>, sqlx::Error> {
    let current = sqlx::query_as::<_, InventoryRow>("SELECT * FROM inventory WHERE id = ?")
        .bind(inventory_id)
        .fetch_optional(pool)
        .await?;
    let Some(current) = current else {
        return Ok(None);
    };

    let remaining = current.quantity - quantity;

    if remaining <= 0.0 {
        record_transaction(pool, current.product_id, None, "remove", current.quantity, source)
            .await?;
        sqlx::query("UPDATE transactions SET inventory_id = NULL WHERE inventory_id = ?")
            .bind(inventory_id)
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM inventory WHERE id = ?")
            .bind(inventory_id)
            .execute(pool)
            .await?;
        return Ok(Some(InventoryRow {
            quantity: 0.0,
            ..current
        }));
    }

    let row = sqlx::query_as::<_, InventoryRow>(
        "UPDATE inventory SET quantity = ?, updated_at = datetime('now') WHERE id = ? RETURNING *",
    )
    .bind(remaining)
    .bind(inventory_id)
    .fetch_one(pool)
    .await?;

    record_transaction(pool, current.product_id, Some(inventory_id), "remove", quantity, source)
        .await?;

    Ok(Some(row))
}

/// Full stock listing, soonest expiry first, undated rows last.
pub async fn get_inventory(pool: &SqlitePool) -> Result<Vec<InventoryWithProduct>, sqlx::Error> {
    sqlx::query_as::<_, InventoryWithProduct>(
        r#"
        SELECT
            i.id, i.product_id, i.quantity, i.quantity_unit, i.expiry_date, i.location,
            p.name AS product_name,
            p.brand AS product_brand,
            p.barcode AS product_barcode
        FROM inventory i
        JOIN products p ON i.product_id = p.id
        ORDER BY i.expiry_date IS NULL, i.expiry_date ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Rows expiring within the next `days` days (already-expired included).
pub async fn get_expiring(
    pool: &SqlitePool,
    days: i64,
) -> Result<Vec<InventoryWithProduct>, sqlx::Error> {
    let threshold = (Local::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string();
    sqlx::query_as::<_, InventoryWithProduct>(
        r#"
        SELECT
            i.id, i.product_id, i.quantity, i.quantity_unit, i.expiry_date, i.location,
            p.name AS product_name,
            p.brand AS product_brand,
            p.barcode AS product_barcode
        FROM inventory i
        JOIN products p ON i.product_id = p.id
        WHERE i.expiry_date IS NOT NULL
          AND date(i.expiry_date) <= date(?)
          AND i.quantity > 0
        ORDER BY i.expiry_date ASC
        "#,
    )
    .bind(threshold)
    .fetch_all(pool)
    .await
}

pub async fn get_stats(pool: &SqlitePool) -> Result<PantryStats, sqlx::Error> {
    let total_items: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM inventory WHERE quantity > 0")
            .fetch_one(pool)
            .await?;
    let expiring_count: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM inventory
        WHERE expiry_date IS NOT NULL
          AND date(expiry_date) <= date('now', '+7 days')
          AND quantity > 0
        "#,
    )
    .fetch_one(pool)
    .await?;
    let low_stock_count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM inventory WHERE quantity > 0 AND quantity <= 1")
            .fetch_one(pool)
            .await?;

    Ok(PantryStats {
        total_items: total_items.0,
        expiring_count: expiring_count.0,
        low_stock_count: low_stock_count.0,
    })
}

/// Latest log entries with product names, newest first. Same-timestamp
/// rows fall back to insertion order via the rowid.
pub async fn get_recent_transactions(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<TransactionWithProduct>, sqlx::Error> {
    sqlx::query_as::<_, TransactionWithProduct>(
        r#"
        SELECT
            t.id, t.product_id, t.inventory_id, t.type, t.quantity, t.source, t.created_at,
            p.name AS product_name
        FROM transactions t
        JOIN products p ON t.product_id = p.id
        ORDER BY t.created_at DESC, t.id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

async fn record_transaction(
    pool: &SqlitePool,
    product_id: i64,
    inventory_id: Option<i64>,
    kind: &str,
    quantity: f64,
    source: TransactionSource,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO transactions (product_id, inventory_id, type, quantity, source) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(product_id)
    .bind(inventory_id)
    .bind(kind)
    .bind(quantity)
    .bind(source.to_string())
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/inventory_repo_test.rs"]
mod tests;
