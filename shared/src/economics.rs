//! Crop-plan recommendation and cost engine
//!
//! Pure, synchronous computation: candidates arrive scored from the backend
//! planning service, MSP quotes arrive from the price feed, and everything
//! else (yield projection, itemized input costs, net profit, ROI) is
//! derived locally. The per-crop cost-multiplier table below is the single
//! authoritative copy used by every screen, native or WASM.

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CropCandidate, CropRecommendation, CropType, InputCosts, Season};

/// Errors raised by the recommendation engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("land area must be greater than zero")]
    NonPositiveAcres,

    #[error("no crop candidates available for recommendation")]
    NoCandidates,

    #[error("no MSP available for crop {0}")]
    MissingMsp(String),

    #[error("invalid candidate {crop}: {reason}")]
    InvalidCandidate { crop: String, reason: &'static str },
}

/// Per-acre input cost multipliers in rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMultipliers {
    pub seed: i64,
    pub fertilizer: i64,
    pub pesticide: i64,
    pub labor: i64,
    pub irrigation: i64,
}

impl CostMultipliers {
    /// Scale the per-acre multipliers to a plot, rounding each component to
    /// currency precision
    pub fn for_acres(&self, acres: Decimal) -> InputCosts {
        let scale = |per_acre: i64| (Decimal::from(per_acre) * acres).round_dp(2);
        InputCosts {
            seed: scale(self.seed),
            fertilizer: scale(self.fertilizer),
            pesticide: scale(self.pesticide),
            labor: scale(self.labor),
            irrigation: scale(self.irrigation),
        }
    }
}

/// Fallback multiplier row for crops without an explicit entry
pub const GENERIC_COST_MULTIPLIERS: CostMultipliers = CostMultipliers {
    seed: 1500,
    fertilizer: 2000,
    pesticide: 1000,
    labor: 3500,
    irrigation: 1200,
};

/// Per-acre input cost multipliers for a crop type
pub fn cost_multipliers(crop: &CropType) -> CostMultipliers {
    match crop {
        CropType::Soybean => CostMultipliers {
            seed: 1200,
            fertilizer: 1800,
            pesticide: 900,
            labor: 3500,
            irrigation: 800,
        },
        CropType::Wheat => CostMultipliers {
            seed: 1500,
            fertilizer: 2200,
            pesticide: 600,
            labor: 3000,
            irrigation: 1500,
        },
        CropType::Paddy => CostMultipliers {
            seed: 1000,
            fertilizer: 2500,
            pesticide: 1100,
            labor: 4500,
            irrigation: 2000,
        },
        CropType::Cotton => CostMultipliers {
            seed: 2200,
            fertilizer: 2800,
            pesticide: 2500,
            labor: 5000,
            irrigation: 1200,
        },
        CropType::Maize => CostMultipliers {
            seed: 1400,
            fertilizer: 2000,
            pesticide: 800,
            labor: 2800,
            irrigation: 1000,
        },
        CropType::Groundnut => CostMultipliers {
            seed: 2500,
            fertilizer: 1600,
            pesticide: 900,
            labor: 3800,
            irrigation: 900,
        },
        CropType::Mustard => CostMultipliers {
            seed: 400,
            fertilizer: 1500,
            pesticide: 500,
            labor: 2200,
            irrigation: 700,
        },
        CropType::Gram => CostMultipliers {
            seed: 1800,
            fertilizer: 1200,
            pesticide: 700,
            labor: 2500,
            irrigation: 500,
        },
        CropType::Sugarcane => CostMultipliers {
            seed: 6000,
            fertilizer: 3500,
            pesticide: 1200,
            labor: 8000,
            irrigation: 2500,
        },
        CropType::Other(_) => GENERIC_COST_MULTIPLIERS,
    }
}

/// Notified MSP per quintal for a crop type, in rupees
///
/// Used when the live price feed has no quote. `Other` crops carry no
/// notified MSP and must be quoted explicitly.
pub fn default_msp(crop: &CropType) -> Option<Decimal> {
    let msp = match crop {
        CropType::Soybean => 4892,
        CropType::Wheat => 2275,
        CropType::Paddy => 2183,
        CropType::Cotton => 7121,
        CropType::Maize => 2090,
        CropType::Groundnut => 6377,
        CropType::Mustard => 5650,
        CropType::Gram => 5440,
        CropType::Sugarcane => 340,
        CropType::Other(_) => return None,
    };
    Some(Decimal::from(msp))
}

/// Resolve the MSP for a crop: live quote first, notified default second
pub fn resolve_msp(crop: &CropType, quotes: &HashMap<CropType, Decimal>) -> Option<Decimal> {
    quotes.get(crop).copied().or_else(|| default_msp(crop))
}

/// Derived financials for one crop on one plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEconomics {
    pub estimated_yield_quintals: Decimal,
    pub gross_revenue: Decimal,
    pub input_costs: InputCosts,
    pub net_profit: Decimal,
    pub profit_per_acre: Decimal,
    pub roi_percentage: Decimal,
}

/// Compute yield, revenue, costs and profit for a crop on a plot
///
/// Callers must have validated `acres > 0` and `msp > 0`; this keeps the
/// identities `gross = yield * msp` and `net = gross - costs` exact at
/// currency precision.
pub fn plan_economics(
    acres: Decimal,
    yield_per_acre: Decimal,
    msp_per_quintal: Decimal,
    multipliers: CostMultipliers,
) -> PlanEconomics {
    let estimated_yield_quintals = (yield_per_acre * acres).round_dp(2);
    let gross_revenue = (estimated_yield_quintals * msp_per_quintal).round_dp(2);
    let input_costs = multipliers.for_acres(acres);
    let total_costs = input_costs.total();
    let net_profit = gross_revenue - total_costs;
    let profit_per_acre = (net_profit / acres).round_dp(2);
    let roi_percentage = if total_costs > Decimal::ZERO {
        (net_profit / total_costs * Decimal::from(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    PlanEconomics {
        estimated_yield_quintals,
        gross_revenue,
        input_costs,
        net_profit,
        profit_per_acre,
        roi_percentage,
    }
}

/// Build costed recommendations from externally-scored candidates
///
/// Rejects non-positive land area and empty candidate lists up front: when
/// the suitability source is unavailable the engine surfaces an error
/// instead of fabricating rows. MSP falls back per crop to the notified
/// default; a crop resolvable by neither the quote map nor the default
/// table rejects the whole request before any arithmetic runs.
///
/// The result is sorted non-increasing by suitability score; ties keep
/// input order.
pub fn build_recommendations(
    acres: Decimal,
    season: Season,
    candidates: &[CropCandidate],
    msp_quotes: &HashMap<CropType, Decimal>,
) -> Result<Vec<CropRecommendation>, EngineError> {
    if acres <= Decimal::ZERO {
        return Err(EngineError::NonPositiveAcres);
    }
    if candidates.is_empty() {
        return Err(EngineError::NoCandidates);
    }

    let mut recommendations = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.estimated_yield_per_acre < Decimal::ZERO {
            return Err(EngineError::InvalidCandidate {
                crop: candidate.crop_type.to_string(),
                reason: "estimated yield per acre cannot be negative",
            });
        }
        if candidate.suitability_score < Decimal::ZERO
            || candidate.suitability_score > Decimal::from(100)
        {
            return Err(EngineError::InvalidCandidate {
                crop: candidate.crop_type.to_string(),
                reason: "suitability score must be between 0 and 100",
            });
        }

        let msp = resolve_msp(&candidate.crop_type, msp_quotes)
            .ok_or_else(|| EngineError::MissingMsp(candidate.crop_type.to_string()))?;

        let economics = plan_economics(
            acres,
            candidate.estimated_yield_per_acre,
            msp,
            cost_multipliers(&candidate.crop_type),
        );

        recommendations.push(CropRecommendation {
            crop_type: candidate.crop_type.clone(),
            crop_name: candidate.crop_type.to_string(),
            season,
            suitability_score: candidate.suitability_score,
            land_acres: acres,
            estimated_yield_per_acre: candidate.estimated_yield_per_acre,
            estimated_yield_quintals: economics.estimated_yield_quintals,
            maturity_days: candidate.maturity_days,
            msp_price_per_quintal: msp,
            projected_gross_revenue: economics.gross_revenue,
            input_costs: economics.input_costs,
            net_profit: economics.net_profit,
            profit_per_acre: economics.profit_per_acre,
            roi_percentage: economics.roi_percentage,
            advantages: candidate.advantages.clone(),
            challenges: candidate.challenges.clone(),
        });
    }

    // Stable: candidates with equal scores keep their input order.
    recommendations.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn candidate(crop: CropType, score: &str, yield_per_acre: &str) -> CropCandidate {
        CropCandidate {
            crop_type: crop,
            suitability_score: dec(score),
            estimated_yield_per_acre: dec(yield_per_acre),
            maturity_days: 100,
            advantages: vec!["Good market demand".to_string()],
            challenges: vec![],
        }
    }

    #[test]
    fn test_soybean_scenario() {
        // acres=2.5, soybean, msp=4500, yield_per_acre=10
        let mut quotes = HashMap::new();
        quotes.insert(CropType::Soybean, dec("4500"));

        let recs = build_recommendations(
            dec("2.5"),
            Season::Kharif,
            &[candidate(CropType::Soybean, "85", "10")],
            &quotes,
        )
        .unwrap();

        let rec = &recs[0];
        assert_eq!(rec.estimated_yield_quintals, dec("25"));
        assert_eq!(rec.projected_gross_revenue, dec("112500"));

        let expected_costs = cost_multipliers(&CropType::Soybean).for_acres(dec("2.5"));
        assert_eq!(rec.input_costs, expected_costs);
        assert_eq!(rec.net_profit, dec("112500") - expected_costs.total());
    }

    #[test]
    fn test_revenue_and_profit_identities() {
        let recs = build_recommendations(
            dec("3.2"),
            Season::Rabi,
            &[
                candidate(CropType::Wheat, "90", "12.5"),
                candidate(CropType::Gram, "70", "6"),
            ],
            &HashMap::new(),
        )
        .unwrap();

        for rec in &recs {
            assert_eq!(
                rec.projected_gross_revenue,
                (rec.estimated_yield_quintals * rec.msp_price_per_quintal).round_dp(2)
            );
            assert_eq!(
                rec.net_profit,
                rec.projected_gross_revenue - rec.input_costs.total()
            );
        }
    }

    #[test]
    fn test_sorted_descending_by_suitability() {
        let recs = build_recommendations(
            dec("1"),
            Season::Kharif,
            &[
                candidate(CropType::Maize, "60", "9"),
                candidate(CropType::Soybean, "88", "10"),
                candidate(CropType::Cotton, "75", "5"),
            ],
            &HashMap::new(),
        )
        .unwrap();

        assert_eq!(recs[0].crop_type, CropType::Soybean);
        assert_eq!(recs[1].crop_type, CropType::Cotton);
        assert_eq!(recs[2].crop_type, CropType::Maize);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let recs = build_recommendations(
            dec("1"),
            Season::Kharif,
            &[
                candidate(CropType::Maize, "80", "9"),
                candidate(CropType::Paddy, "80", "14"),
                candidate(CropType::Soybean, "80", "10"),
            ],
            &HashMap::new(),
        )
        .unwrap();

        assert_eq!(recs[0].crop_type, CropType::Maize);
        assert_eq!(recs[1].crop_type, CropType::Paddy);
        assert_eq!(recs[2].crop_type, CropType::Soybean);
    }

    #[test]
    fn test_unknown_crop_uses_fallback_row() {
        let crop = CropType::Other("millet".to_string());
        assert_eq!(cost_multipliers(&crop), GENERIC_COST_MULTIPLIERS);

        // With a quoted MSP the unknown crop computes like any other.
        let mut quotes = HashMap::new();
        quotes.insert(crop.clone(), dec("2500"));
        let recs = build_recommendations(
            dec("2"),
            Season::Zaid,
            &[candidate(crop, "50", "8")],
            &quotes,
        )
        .unwrap();
        assert_eq!(
            recs[0].input_costs,
            GENERIC_COST_MULTIPLIERS.for_acres(dec("2"))
        );
    }

    #[test]
    fn test_msp_falls_back_to_notified_default() {
        let recs = build_recommendations(
            dec("2"),
            Season::Rabi,
            &[candidate(CropType::Wheat, "90", "12")],
            &HashMap::new(),
        )
        .unwrap();
        assert_eq!(recs[0].msp_price_per_quintal, default_msp(&CropType::Wheat).unwrap());
    }

    #[test]
    fn test_missing_msp_rejected_before_computation() {
        let err = build_recommendations(
            dec("2"),
            Season::Zaid,
            &[candidate(CropType::Other("quinoa".to_string()), "40", "5")],
            &HashMap::new(),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::MissingMsp("quinoa".to_string()));
    }

    #[test]
    fn test_non_positive_acres_rejected() {
        let candidates = [candidate(CropType::Soybean, "85", "10")];
        assert_eq!(
            build_recommendations(Decimal::ZERO, Season::Kharif, &candidates, &HashMap::new()),
            Err(EngineError::NonPositiveAcres)
        );
        assert_eq!(
            build_recommendations(dec("-2"), Season::Kharif, &candidates, &HashMap::new()),
            Err(EngineError::NonPositiveAcres)
        );
    }

    #[test]
    fn test_empty_candidates_rejected() {
        assert_eq!(
            build_recommendations(dec("2"), Season::Kharif, &[], &HashMap::new()),
            Err(EngineError::NoCandidates)
        );
    }

    #[test]
    fn test_negative_yield_rejected() {
        let err = build_recommendations(
            dec("2"),
            Season::Kharif,
            &[candidate(CropType::Soybean, "85", "-1")],
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidCandidate { .. }));
    }

    #[test]
    fn test_profit_per_acre_consistent() {
        let economics = plan_economics(
            dec("4"),
            dec("11"),
            dec("2275"),
            cost_multipliers(&CropType::Wheat),
        );
        assert_eq!(
            economics.profit_per_acre,
            (economics.net_profit / dec("4")).round_dp(2)
        );
    }
}
