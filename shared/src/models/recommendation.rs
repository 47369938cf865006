//! Crop recommendation models
//!
//! Candidates are scored by the backend planning service; the client turns
//! them into costed recommendations locally. Recommendations are ephemeral
//! and discarded once a plan is created from one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CropType, InputCosts, Season};

/// An externally-scored crop candidate for a given plot and season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropCandidate {
    pub crop_type: CropType,
    /// Suitability for the plot's soil and weather, 0-100
    pub suitability_score: Decimal,
    pub estimated_yield_per_acre: Decimal,
    /// Days from sowing to maturity
    pub maturity_days: u32,
    pub advantages: Vec<String>,
    pub challenges: Vec<String>,
}

/// A fully costed recommendation shown on the planning screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub crop_type: CropType,
    pub crop_name: String,
    pub season: Season,
    pub suitability_score: Decimal,
    pub land_acres: Decimal,
    pub estimated_yield_per_acre: Decimal,
    pub estimated_yield_quintals: Decimal,
    pub maturity_days: u32,
    pub msp_price_per_quintal: Decimal,
    pub projected_gross_revenue: Decimal,
    pub input_costs: InputCosts,
    pub net_profit: Decimal,
    pub profit_per_acre: Decimal,
    pub roi_percentage: Decimal,
    pub advantages: Vec<String>,
    pub challenges: Vec<String>,
}
