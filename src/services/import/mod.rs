//! Batch import: pasted shopping lists and OCR'd receipt lines resolved
//! against the catalog, one item at a time, in input order.

pub mod batch;
pub mod parser;

pub use batch::{import_batch, ImportError, ImportProgress, ImportRequest, ImportSummary};
pub use parser::parse_lines;
