pub mod catalog_repo;
pub mod inventory_repo;
pub mod models;
