//! Crop-plan creation wizard
//!
//! Three steps: land & season, crop selection, review. The selection step
//! is backed by the recommendation engine: externally-scored candidates
//! plus the MSP feed produce the costed, ranked list the farmer picks
//! from. Creating a plan consumes the chosen recommendation; the rest are
//! discarded.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shared::{
    build_recommendations, CreatePlanInput, CropCandidate, CropRecommendation, CropType, Season,
    SoilType,
};

use crate::api::plans::CandidateQuery;
use crate::error::{AppError, AppResult};

use super::{acres_field, date_field, season_field, FormField, FormStep, FormWizard};

pub const STEP_LAND: usize = 0;
pub const STEP_SELECT_CROP: usize = 1;
pub const STEP_REVIEW: usize = 2;

/// Wizard state for the crop planning flow
#[derive(Debug, Clone)]
pub struct PlanWizard {
    pub form: FormWizard,
    recommendations: Vec<CropRecommendation>,
    selected: Option<usize>,
}

impl PlanWizard {
    pub fn new() -> Self {
        let form = FormWizard::new(
            "Crop Plan",
            vec![
                FormStep::new("Land & Season")
                    .field(
                        FormField::new("land_acres", "Land area (acres)")
                            .required()
                            .with_validator(acres_field),
                    )
                    .field(
                        FormField::new("season", "Season")
                            .required()
                            .with_validator(season_field),
                    )
                    .field(FormField::new("soil_type", "Soil type"))
                    .field(
                        FormField::new("sowing_date", "Planned sowing date")
                            .required()
                            .with_validator(date_field),
                    ),
                FormStep::new("Select Crop"),
                FormStep::new("Review"),
            ],
        );

        Self {
            form,
            recommendations: Vec::new(),
            selected: None,
        }
    }

    /// Build the candidate query from the validated first step
    pub fn candidate_query(&mut self) -> AppResult<CandidateQuery> {
        self.form.validate_step(STEP_LAND).map_err(AppError::from)?;
        let values = self.form.values();

        Ok(CandidateQuery {
            season: parse_season(&values)?,
            land_acres: parse_acres(&values)?,
            soil_type: values
                .get("soil_type")
                .and_then(|s| SoilType::parse(s.trim())),
            district: None,
        })
    }

    /// Run the engine over fetched candidates and MSP quotes
    ///
    /// Failures (no candidates, unresolvable MSP, bad land area) surface
    /// to the caller; the wizard never shows fabricated rows.
    pub fn load_recommendations(
        &mut self,
        candidates: &[CropCandidate],
        msp_quotes: &HashMap<CropType, Decimal>,
    ) -> AppResult<()> {
        self.form.validate_step(STEP_LAND).map_err(AppError::from)?;
        let values = self.form.values();
        let acres = parse_acres(&values)?;
        let season = parse_season(&values)?;

        self.recommendations = build_recommendations(acres, season, candidates, msp_quotes)?;
        self.selected = None;
        Ok(())
    }

    /// Ranked recommendations for the selection step
    pub fn recommendations(&self) -> &[CropRecommendation] {
        &self.recommendations
    }

    /// Select a recommendation by its position in the ranked list
    pub fn select(&mut self, index: usize) -> AppResult<()> {
        if index >= self.recommendations.len() {
            return Err(AppError::ValidationError(
                "Please choose one of the recommended crops".to_string(),
            ));
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn selected_recommendation(&self) -> Option<&CropRecommendation> {
        self.selected.and_then(|i| self.recommendations.get(i))
    }

    /// Build the persistence payload from the selected recommendation
    pub fn build_plan_input(&self) -> AppResult<CreatePlanInput> {
        let recommendation = self.selected_recommendation().ok_or_else(|| {
            AppError::ValidationError("Please choose one of the recommended crops".to_string())
        })?;
        let values = self.form.values();
        let sowing_date = values
            .get("sowing_date")
            .map(|v| super::parse_date(v))
            .transpose()
            .map_err(AppError::ValidationError)?
            .ok_or_else(|| AppError::ValidationError("Planned sowing date is required".into()))?;

        Ok(plan_from_recommendation(recommendation, sowing_date))
    }
}

impl Default for PlanWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_acres(values: &HashMap<&'static str, String>) -> AppResult<Decimal> {
    values
        .get("land_acres")
        .map(|v| super::parse_decimal(v))
        .transpose()
        .map_err(AppError::ValidationError)?
        .ok_or_else(|| AppError::ValidationError("Land area is required".into()))
}

fn parse_season(values: &HashMap<&'static str, String>) -> AppResult<Season> {
    values
        .get("season")
        .and_then(|s| Season::parse(s.trim()))
        .ok_or_else(|| AppError::ValidationError("Season must be kharif, rabi or zaid".into()))
}

/// Turn a recommendation into a plan payload
///
/// The financial figures carry over unchanged, so the persisted plan
/// satisfies the same revenue and profit identities the recommendation
/// was computed with.
pub fn plan_from_recommendation(
    recommendation: &CropRecommendation,
    sowing_date: NaiveDate,
) -> CreatePlanInput {
    CreatePlanInput {
        crop_type: recommendation.crop_type.clone(),
        crop_name: recommendation.crop_name.clone(),
        land_acres: recommendation.land_acres,
        sowing_date,
        maturity_days: recommendation.maturity_days.max(1),
        season: recommendation.season,
        msp_price_per_quintal: recommendation.msp_price_per_quintal,
        estimated_yield_quintals: recommendation.estimated_yield_quintals,
        estimated_yield_per_acre: recommendation.estimated_yield_per_acre,
        input_costs: recommendation.input_costs.clone(),
        net_profit: recommendation.net_profit,
        profit_per_acre: recommendation.profit_per_acre,
        roi_percentage: recommendation.roi_percentage,
    }
}
