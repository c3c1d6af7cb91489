//! Fallback free-text parser for pasted product lists.
//!
//! One line per item, e.g. `"Mleko UHT 2 szt"` or `"Mąka pszenna 1kg"`.
//! Quantity and unit are best-effort; anything unparsed stays in the name.

use regex::Regex;
use std::sync::LazyLock;

use super::batch::ImportRequest;

/// A quantity (comma or dot decimals) with an optionally attached unit.
static RE_QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+[.,]?\d*)\s*(szt|kg|g|l|ml)?\b\.?").expect("Invalid regex")
});

/// Parse one line into an import request. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<ImportRequest> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // quantity/unit come from the first numeric group on the line
    let (quantity, unit) = match RE_QUANTITY_UNIT.captures(line) {
        Some(caps) => (
            caps.get(1)
                .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
                .unwrap_or(1.0),
            caps.get(2).map(|m| m.as_str().to_lowercase()),
        ),
        None => (1.0, None),
    };

    let stripped = RE_QUANTITY_UNIT.replace_all(line, "");
    let name = stripped.trim();
    // a line that is nothing but numbers keeps its raw text as the name
    let name = if name.is_empty() { line } else { name };

    Some(ImportRequest {
        name: name.to_string(),
        brand: None,
        quantity,
        quantity_unit: unit,
        expiry_date: None,
    })
}

/// Parse a pasted multi-line list, dropping blank lines.
pub fn parse_lines(text: &str) -> Vec<ImportRequest> {
    text.lines().filter_map(parse_line).collect()
}
