//! Recommendation engine property-based and unit tests
//!
//! Covers:
//! - Revenue identity: gross revenue = total yield x MSP
//! - Profit identity: net profit = gross revenue - total input costs
//! - Ranking: results sorted non-increasing by suitability score
//! - Fallback behavior for unknown crop types and missing MSP quotes

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::{
    build_recommendations, cost_multipliers, default_msp, CropCandidate, CropType, Season,
    GENERIC_COST_MULTIPLIERS,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn candidate(crop: CropType, score: Decimal, yield_per_acre: Decimal) -> CropCandidate {
    CropCandidate {
        crop_type: crop,
        suitability_score: score,
        estimated_yield_per_acre: yield_per_acre,
        maturity_days: 110,
        advantages: vec![],
        challenges: vec![],
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Land area in acres, 0.01 to 1000.00
fn acres_strategy() -> impl Strategy<Value = Decimal> {
    (1..=100_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// MSP per quintal, 1.00 to 10000.00
fn msp_strategy() -> impl Strategy<Value = Decimal> {
    (100..=1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Yield per acre in quintals, 0.00 to 100.00
fn yield_strategy() -> impl Strategy<Value = Decimal> {
    (0..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Suitability score, 0.00 to 100.00
fn score_strategy() -> impl Strategy<Value = Decimal> {
    (0..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Any crop type with a notified MSP
fn crop_strategy() -> impl Strategy<Value = CropType> {
    prop_oneof![
        Just(CropType::Soybean),
        Just(CropType::Wheat),
        Just(CropType::Paddy),
        Just(CropType::Cotton),
        Just(CropType::Maize),
        Just(CropType::Groundnut),
        Just(CropType::Mustard),
        Just(CropType::Gram),
        Just(CropType::Sugarcane),
    ]
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// gross revenue = total yield x MSP, exactly at currency precision
    #[test]
    fn prop_revenue_identity(
        acres in acres_strategy(),
        msp in msp_strategy(),
        yield_per_acre in yield_strategy(),
        crop in crop_strategy(),
    ) {
        let mut quotes = HashMap::new();
        quotes.insert(crop.clone(), msp);

        let recs = build_recommendations(
            acres,
            Season::Kharif,
            &[candidate(crop, dec("50"), yield_per_acre)],
            &quotes,
        )
        .unwrap();

        let rec = &recs[0];
        prop_assert_eq!(rec.msp_price_per_quintal, msp);
        prop_assert_eq!(
            rec.projected_gross_revenue,
            (rec.estimated_yield_quintals * msp).round_dp(2)
        );
    }

    /// net profit = gross revenue - total input costs, and the per-acre
    /// figure divides back out
    #[test]
    fn prop_profit_identity(
        acres in acres_strategy(),
        msp in msp_strategy(),
        yield_per_acre in yield_strategy(),
        crop in crop_strategy(),
    ) {
        let mut quotes = HashMap::new();
        quotes.insert(crop.clone(), msp);

        let recs = build_recommendations(
            acres,
            Season::Rabi,
            &[candidate(crop, dec("50"), yield_per_acre)],
            &quotes,
        )
        .unwrap();

        let rec = &recs[0];
        prop_assert_eq!(
            rec.net_profit,
            rec.projected_gross_revenue - rec.input_costs.total()
        );
        prop_assert_eq!(
            rec.profit_per_acre,
            (rec.net_profit / acres).round_dp(2)
        );
    }

    /// The ranked list is sorted non-increasing by suitability score
    #[test]
    fn prop_sorted_by_suitability(
        scores in prop::collection::vec(score_strategy(), 1..8),
    ) {
        let candidates: Vec<CropCandidate> = scores
            .iter()
            .map(|score| candidate(CropType::Wheat, *score, dec("10")))
            .collect();

        let recs = build_recommendations(
            dec("2"),
            Season::Rabi,
            &candidates,
            &HashMap::new(),
        )
        .unwrap();

        for pair in recs.windows(2) {
            prop_assert!(pair[0].suitability_score >= pair[1].suitability_score);
        }
    }

    /// Input costs scale linearly with land area per the crop's row
    #[test]
    fn prop_costs_scale_with_acres(
        acres in acres_strategy(),
        crop in crop_strategy(),
    ) {
        let expected = cost_multipliers(&crop).for_acres(acres);
        let recs = build_recommendations(
            acres,
            Season::Kharif,
            &[candidate(crop, dec("50"), dec("10"))],
            &HashMap::new(),
        )
        .unwrap();
        prop_assert_eq!(recs[0].input_costs.clone(), expected);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_soybean_example_figures() {
    let mut quotes = HashMap::new();
    quotes.insert(CropType::Soybean, dec("4500"));

    let recs = build_recommendations(
        dec("2.5"),
        Season::Kharif,
        &[candidate(CropType::Soybean, dec("85"), dec("10"))],
        &quotes,
    )
    .unwrap();

    let rec = &recs[0];
    assert_eq!(rec.estimated_yield_quintals, dec("25"));
    assert_eq!(rec.projected_gross_revenue, dec("112500"));

    let costs = cost_multipliers(&CropType::Soybean).for_acres(dec("2.5"));
    assert_eq!(rec.input_costs, costs);
    assert_eq!(rec.net_profit, dec("112500") - costs.total());
}

#[test]
fn test_unlisted_crop_uses_generic_row() {
    let crop = CropType::Other("turmeric".to_string());
    assert_eq!(cost_multipliers(&crop), GENERIC_COST_MULTIPLIERS);
    assert_eq!(default_msp(&crop), None);
}

#[test]
fn test_quoted_msp_wins_over_default() {
    let mut quotes = HashMap::new();
    quotes.insert(CropType::Wheat, dec("2400"));

    let recs = build_recommendations(
        dec("1"),
        Season::Rabi,
        &[candidate(CropType::Wheat, dec("80"), dec("12"))],
        &quotes,
    )
    .unwrap();
    assert_eq!(recs[0].msp_price_per_quintal, dec("2400"));
}

#[test]
fn test_every_notified_crop_has_msp_and_costs() {
    for crop in [
        CropType::Soybean,
        CropType::Wheat,
        CropType::Paddy,
        CropType::Cotton,
        CropType::Maize,
        CropType::Groundnut,
        CropType::Mustard,
        CropType::Gram,
        CropType::Sugarcane,
    ] {
        assert!(default_msp(&crop).is_some(), "{} missing MSP", crop);
        assert!(cost_multipliers(&crop).for_acres(dec("1")).total() > Decimal::ZERO);
    }
}
