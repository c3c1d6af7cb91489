//! Keyword-set similarity scoring between two product descriptions.

use std::collections::HashSet;

use super::normalizer;

/// Brand keyword score above which the brand boost applies.
const BRAND_MATCH_THRESHOLD: f64 = 0.5;

/// Added to the base score when both brands are present and agree.
const BRAND_BOOST: f64 = 0.2;

/// Similarity of two product descriptions, 0.0..=1.0.
///
/// Base score compares the name keyword sets; a keyword matches when it
/// contains, or is contained in, a keyword of the other set — substring
/// containment in both directions absorbs singular/plural and OCR
/// truncation variants ("mleko" vs "mleka"). The score is the matched
/// count over the larger set size, so one-sided keyword surplus (long
/// descriptive names) drags the score down instead of inflating it.
///
/// When both brands are present and their own keyword score exceeds 0.5,
/// the base score gets +0.2, capped at 1.0. A brand on only one side never
/// boosts.
///
/// Either name normalizing to an empty keyword set means the items cannot
/// be compared: the result is 0.0, brand or not.
pub fn similarity(
    name_a: &str,
    name_b: &str,
    brand_a: Option<&str>,
    brand_b: Option<&str>,
) -> f64 {
    let keywords_a = normalizer::keywords(name_a);
    let keywords_b = normalizer::keywords(name_b);
    if keywords_a.is_empty() || keywords_b.is_empty() {
        return 0.0;
    }

    let mut score = keyword_score(&keywords_a, &keywords_b);

    if let (Some(brand_a), Some(brand_b)) = (brand_a, brand_b) {
        let brand_a = normalizer::keywords(brand_a);
        let brand_b = normalizer::keywords(brand_b);
        if !brand_a.is_empty()
            && !brand_b.is_empty()
            && keyword_score(&brand_a, &brand_b) > BRAND_MATCH_THRESHOLD
        {
            score = (score + BRAND_BOOST).min(1.0);
        }
    }

    score
}

/// Matched keywords over the larger set size.
///
/// Counting matches from both sides and taking the smaller count keeps the
/// score symmetric even when several keywords of one set collapse onto a
/// single keyword of the other ("mleko"/"mlekowy" both matching "mleko").
fn keyword_score(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let hits_ab = matched_count(a, b);
    let hits_ba = matched_count(b, a);
    hits_ab.min(hits_ba) as f64 / a.len().max(b.len()) as f64
}

/// Keywords of `from` with a bidirectional substring partner in `against`.
fn matched_count(from: &HashSet<String>, against: &HashSet<String>) -> usize {
    from.iter()
        .filter(|keyword| {
            against
                .iter()
                .any(|other| other.contains(keyword.as_str()) || keyword.contains(other.as_str()))
        })
        .count()
}

#[cfg(test)]
#[path = "tests/scorer_tests.rs"]
mod tests;
