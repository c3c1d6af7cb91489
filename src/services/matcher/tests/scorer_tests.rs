use super::similarity;

#[test]
fn test_identical_names_score_max() {
    assert_eq!(similarity("Mleko UHT Łaciate", "Mleko UHT Łaciate", None, None), 1.0);
    assert_eq!(
        similarity("Jogurt Naturalny", "Jogurt Naturalny", Some("Danone"), Some("Danone")),
        1.0
    );
}

#[test]
fn test_symmetric() {
    let cases = [
        ("Mleko UHT 2%", "mleko uht łaciate", None, None),
        ("Jogurt Naturalny 400g", "Jogurt Owocowy", Some("Danone"), Some("Bakoma")),
        ("Mleko", "Mleko mlekowy napój", None, None),
    ];
    for (a, b, brand_a, brand_b) in cases {
        assert_eq!(
            similarity(a, b, brand_a, brand_b),
            similarity(b, a, brand_b, brand_a),
            "asymmetric for {a:?} vs {b:?}"
        );
    }
}

#[test]
fn test_empty_or_punctuation_name_scores_zero() {
    assert_eq!(similarity("", "Mleko UHT", None, None), 0.0);
    assert_eq!(similarity("Mleko UHT", "  !?% ", None, None), 0.0);
    // brand boost must not resurrect an incomparable pair
    assert_eq!(similarity("", "Mleko UHT", Some("Łaciate"), Some("Łaciate")), 0.0);
}

#[test]
fn test_substring_containment_absorbs_truncation() {
    // OCR cut "mleko" down to "mlek"; containment still pairs them up
    let score = similarity("Mleko świeże", "Mlek świeże", None, None);
    assert_eq!(score, 1.0);
}

#[test]
fn test_surplus_keywords_penalized() {
    // two of five keywords overlap; max-cardinality denominator keeps it low
    let score = similarity(
        "Mleko UHT",
        "Mleko UHT wiejskie pełne butelka szklana",
        None,
        None,
    );
    assert!(score < 0.6, "got {score}");
}

#[test]
fn test_brand_on_one_side_does_not_boost() {
    let base = similarity("Mleko UHT Laciate 1L", "Mleko UHT 3.2%", None, None);
    let one_sided = similarity("Mleko UHT Laciate 1L", "Mleko UHT 3.2%", Some("Laciate"), None);
    assert_eq!(base, one_sided);
}

#[test]
fn test_brand_agreement_boosts() {
    let base = similarity("Mleko UHT 2%", "Mleko zagęszczone", None, None);
    let boosted = similarity(
        "Mleko UHT 2%",
        "Mleko zagęszczone",
        Some("Łaciate"),
        Some("Łaciate"),
    );
    assert!(base > 0.0 && base < 0.8);
    assert!((boosted - (base + 0.2)).abs() < 1e-9, "base {base}, boosted {boosted}");
}

#[test]
fn test_brand_boost_capped_at_one() {
    let score = similarity("Mleko UHT", "Mleko UHT", Some("Łaciate"), Some("Łaciate"));
    assert_eq!(score, 1.0);
}

#[test]
fn test_disagreeing_brands_do_not_boost() {
    let base = similarity("Jogurt Naturalny", "Jogurt Naturalny 400g", None, None);
    let with_brands = similarity(
        "Jogurt Naturalny",
        "Jogurt Naturalny 400g",
        Some("Danone"),
        Some("Bakoma"),
    );
    assert_eq!(base, with_brands);
}
