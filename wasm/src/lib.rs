//! WebAssembly module for the AgriSetu Platform
//!
//! Provides client-side computation for the web dashboards:
//! - Field validation (mobile, pincode, Aadhaar, land area)
//! - Crop-plan economics and ranked recommendations
//! - Plan status lifecycle lookups

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::economics::*;
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate an Indian mobile number
#[wasm_bindgen]
pub fn validate_mobile_number(phone: &str) -> bool {
    validate_mobile(phone).is_ok()
}

/// Validate an Indian postal PIN code
#[wasm_bindgen]
pub fn validate_pin_code(pincode: &str) -> bool {
    validate_pincode(pincode).is_ok()
}

/// Validate an Aadhaar number
#[wasm_bindgen]
pub fn validate_aadhaar_number(aadhaar: &str) -> bool {
    validate_aadhaar(aadhaar).is_ok()
}

/// Validate a land area in acres
#[wasm_bindgen]
pub fn validate_land_area(acres: f64) -> bool {
    Decimal::try_from(acres)
        .map(|d| validate_land_acres(d).is_ok())
        .unwrap_or(false)
}

/// Projected gross revenue for a yield at an MSP
#[wasm_bindgen]
pub fn plan_gross_revenue(total_yield_quintals: f64, msp_per_quintal: f64) -> f64 {
    if total_yield_quintals <= 0.0 || msp_per_quintal <= 0.0 {
        return 0.0;
    }
    total_yield_quintals * msp_per_quintal
}

/// One MSP quote in a recommendation request
#[derive(Debug, Deserialize)]
struct MspQuoteJson {
    crop_type: CropType,
    price_per_quintal: Decimal,
}

/// JSON shape accepted by [`build_recommendations_json`]
#[derive(Debug, Deserialize)]
struct RecommendationRequest {
    land_acres: Decimal,
    season: Season,
    candidates: Vec<CropCandidate>,
    #[serde(default)]
    msp_quotes: Vec<MspQuoteJson>,
}

/// Build ranked crop recommendations from a JSON request
///
/// Input: `{ land_acres, season, candidates, msp_quotes }` with candidates
/// as scored by the planning service. Returns the sorted recommendation
/// array as JSON, or an error message for invalid input.
#[wasm_bindgen]
pub fn build_recommendations_json(request_json: &str) -> Result<String, JsValue> {
    let request: RecommendationRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    let quotes: HashMap<CropType, Decimal> = request
        .msp_quotes
        .into_iter()
        .map(|q| (q.crop_type, q.price_per_quintal))
        .collect();

    let recommendations = build_recommendations(
        request.land_acres,
        request.season,
        &request.candidates,
        &quotes,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&recommendations)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// The next plan status in the lifecycle, if any
#[wasm_bindgen]
pub fn next_plan_status(current: &str) -> Option<String> {
    PlanStatus::parse(current)
        .and_then(|status| status.next())
        .map(|status| status.as_str().to_string())
}

/// Whether a plan in the given status may convert to a marketplace lot
#[wasm_bindgen]
pub fn can_convert_to_lot(status: &str, has_actual_yield: bool) -> bool {
    match PlanStatus::parse(status) {
        Some(PlanStatus::Harvested) => has_actual_yield,
        Some(PlanStatus::ConvertedToLot) => true,
        _ => false,
    }
}
