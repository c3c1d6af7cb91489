pub mod import;
pub mod matcher;
