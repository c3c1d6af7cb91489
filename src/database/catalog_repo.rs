//! Product catalog persistence: CRUD plus the cheap keyword prefilter that
//! feeds the matching core.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::models::{CreateProductInput, ProductRow, UpdateProductInput};
use crate::services::matcher::normalizer;
use crate::DEFAULT_QUANTITY_UNIT;

pub async fn get_product_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<ProductRow>, sqlx::Error> {
    sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_product_by_barcode(
    pool: &SqlitePool,
    barcode: &str,
) -> Result<Option<ProductRow>, sqlx::Error> {
    sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE barcode = ?")
        .bind(barcode)
        .fetch_optional(pool)
        .await
}

pub async fn get_products(pool: &SqlitePool) -> Result<Vec<ProductRow>, sqlx::Error> {
    sqlx::query_as::<_, ProductRow>("SELECT * FROM products ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Keyword-overlap prefilter for the candidate ranker.
///
/// Folded terms of the item's name (and brand, if any) are OR-ed as LIKE
/// probes against the precomputed `keywords` index; the fine scoring
/// happens in the matcher, this only has to be cheap and recall-friendly.
/// Candidates come back ordered by name ascending so downstream ties
/// resolve alphabetically. A name that normalizes to zero terms cannot be
/// compared and returns no candidates without touching the database.
pub async fn search_similar(
    pool: &SqlitePool,
    name: &str,
    brand: Option<&str>,
) -> Result<Vec<ProductRow>, sqlx::Error> {
    let mut terms = normalizer::search_terms(name);
    if let Some(brand) = brand {
        terms.extend(normalizer::search_terms(brand));
    }
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM products WHERE (");
    let mut first = true;
    for term in &terms {
        if !first {
            qb.push(" OR ");
        }
        qb.push("keywords LIKE ");
        qb.push_bind(format!("%{term}%"));
        first = false;
    }
    qb.push(") ORDER BY name ASC");

    qb.build_query_as::<ProductRow>().fetch_all(pool).await
}

pub async fn create_product(
    pool: &SqlitePool,
    input: &CreateProductInput,
) -> Result<ProductRow, sqlx::Error> {
    let keywords = normalizer::keyword_index(&input.name, input.brand.as_deref());
    sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (barcode, name, brand, default_quantity_unit, keywords)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&input.barcode)
    .bind(&input.name)
    .bind(&input.brand)
    .bind(
        input
            .default_quantity_unit
            .as_deref()
            .unwrap_or(DEFAULT_QUANTITY_UNIT),
    )
    .bind(keywords)
    .fetch_one(pool)
    .await
}

/// Partial update; re-derives the keyword index when name or brand change.
pub async fn update_product(
    pool: &SqlitePool,
    id: i64,
    input: &UpdateProductInput,
) -> Result<Option<ProductRow>, sqlx::Error> {
    let current = match get_product_by_id(pool, id).await? {
        Some(row) => row,
        None => return Ok(None),
    };

    let name = input.name.clone().unwrap_or(current.name);
    let brand = input.brand.clone().or(current.brand);
    let barcode = input.barcode.clone().or(current.barcode);
    let unit = input
        .default_quantity_unit
        .clone()
        .unwrap_or(current.default_quantity_unit);
    let keywords = normalizer::keyword_index(&name, brand.as_deref());

    sqlx::query_as::<_, ProductRow>(
        r#"
        UPDATE products
        SET barcode = ?, name = ?, brand = ?, default_quantity_unit = ?,
            keywords = ?, updated_at = datetime('now')
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(barcode)
    .bind(name)
    .bind(brand)
    .bind(unit)
    .bind(keywords)
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
#[path = "tests/catalog_repo_test.rs"]
mod tests;
