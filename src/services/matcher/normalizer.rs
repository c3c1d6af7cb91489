//! Text normalization for product names and brands.
//!
//! Turns free-form text ("Mleko UHT 3,2% 1L") into a comparable keyword set,
//! and produces the diacritic-folded terms used by the catalog LIKE prefilter.

use deunicode::deunicode;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// Compiled regex matching everything that is not a keyword character.
/// ASCII letters, digits and the Polish diacritic letters survive; applied
/// after lowercasing, so only lowercase ranges are listed.
static RE_NON_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9ąćęłńóśźż]+").expect("Invalid regex"));

/// Tokens this short (unit abbreviations, stray letters) carry no signal.
const MIN_KEYWORD_LEN: usize = 3;

/// Extract the keyword set from a product name or brand.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Replace every non-keyword character with a space
/// 3. Split on whitespace runs, drop tokens shorter than 3 chars
///
/// Empty or punctuation-only input yields an empty set; callers treat an
/// empty set as "cannot compare" (similarity 0).
pub fn keywords(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    let clean = RE_NON_KEYWORD.replace_all(&lower, " ");
    clean
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .map(|token| token.to_string())
        .collect()
}

/// Same tokens as [`keywords`], diacritic-folded via deunicode.
///
/// Receipt OCR routinely drops Polish diacritics ("Łaciate" → "Laciate"), so
/// the SQL prefilter compares folded terms against the folded
/// `products.keywords` index instead of raw text.
pub fn search_terms(text: &str) -> BTreeSet<String> {
    keywords(text)
        .into_iter()
        .map(|token| deunicode(&token))
        .collect()
}

/// Build the `products.keywords` index value for a catalog entry: folded
/// name + brand terms, sorted, space-joined.
pub fn keyword_index(name: &str, brand: Option<&str>) -> String {
    let mut terms = search_terms(name);
    if let Some(brand) = brand {
        terms.extend(search_terms(brand));
    }
    terms.into_iter().collect::<Vec<_>>().join(" ")
}
