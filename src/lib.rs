pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Default quantity unit for catalog entries and inventory rows.
pub const DEFAULT_QUANTITY_UNIT: &str = "units";
