use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an inventory mutation came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    Manual,
    Barcode,
    Receipt,
    Import,
}

impl fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionSource::Manual => write!(f, "manual"),
            TransactionSource::Barcode => write!(f, "barcode"),
            TransactionSource::Receipt => write!(f, "receipt"),
            TransactionSource::Import => write!(f, "import"),
        }
    }
}

impl FromStr for TransactionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(TransactionSource::Manual),
            "barcode" => Ok(TransactionSource::Barcode),
            "receipt" => Ok(TransactionSource::Receipt),
            "import" => Ok(TransactionSource::Import),
            _ => Err(format!("Unknown transaction source: {s}")),
        }
    }
}

/// A catalog entry: canonical product definition, distinct from any
/// particular inventory quantity. Identity is the rowid.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub barcode: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub default_quantity_unit: String,
    /// Diacritic-folded keyword index, maintained on create/update.
    pub keywords: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One stored batch of a product (quantity at a location with an expiry).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryRow {
    pub id: i64,
    pub product_id: i64,
    pub quantity: f64,
    pub quantity_unit: String,
    pub expiry_date: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Transaction log row joined with its product name, for the history view.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TransactionWithProduct {
    pub id: i64,
    pub product_id: i64,
    pub inventory_id: Option<i64>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub quantity: f64,
    pub source: String,
    pub created_at: Option<String>,
    pub product_name: String,
}

/// Inventory row joined with its product, for listings.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryWithProduct {
    pub id: i64,
    pub product_id: i64,
    pub quantity: f64,
    pub quantity_unit: String,
    pub expiry_date: Option<String>,
    pub location: Option<String>,
    pub product_name: String,
    pub product_brand: Option<String>,
    pub product_barcode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductInput {
    pub barcode: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub default_quantity_unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductInput {
    pub barcode: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub default_quantity_unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddToInventoryInput {
    pub product_id: i64,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub expiry_date: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub source: TransactionSource,
}

impl AddToInventoryInput {
    /// Bare add: one unit-less quantity against a product, nothing else known.
    pub fn basic(product_id: i64, quantity: f64, source: TransactionSource) -> Self {
        Self {
            product_id,
            quantity,
            quantity_unit: None,
            expiry_date: None,
            location: None,
            purchase_date: None,
            purchase_price: None,
            source,
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Serialize)]
pub struct PantryStats {
    pub total_items: i64,
    pub expiring_count: i64,
    pub low_stock_count: i64,
}
