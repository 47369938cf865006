//! Crop plan endpoints
//!
//! Candidate scoring and MSP quotes come from the backend planning
//! service; the financial figures on a plan are computed locally by
//! `shared::economics` before the plan is persisted here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{
    CreatePlanInput, CropCandidate, CropPlan, CropType, Season, SoilType, TradeLot,
    UpdatePlanStatusInput,
};

use crate::error::AppResult;

use super::ApiClient;

/// Query for externally-scored crop candidates
#[derive(Debug, Clone, Serialize)]
pub struct CandidateQuery {
    pub season: Season,
    pub land_acres: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<SoilType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// One MSP quote from the price feed
#[derive(Debug, Clone, Deserialize)]
pub struct MspQuote {
    pub crop_type: CropType,
    pub price_per_quintal: Decimal,
}

/// Crop plan CRUD and lifecycle calls
#[derive(Clone)]
pub struct PlanApi {
    client: ApiClient,
}

impl PlanApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch scored crop candidates for a plot
    ///
    /// When the planning service is unavailable this propagates the error;
    /// the planning screen must not invent candidates.
    pub async fn fetch_candidates(&self, query: &CandidateQuery) -> AppResult<Vec<CropCandidate>> {
        self.client
            .post_json("/api/v1/crop-plans/candidates", query)
            .await
    }

    /// Fetch current MSP quotes keyed by crop type
    ///
    /// Callers treat a failed fetch as an empty quote map; the engine then
    /// falls back to the notified defaults per crop.
    pub async fn fetch_msp_quotes(&self) -> AppResult<HashMap<CropType, Decimal>> {
        let quotes: Vec<MspQuote> = self.client.get_json("/api/v1/msp-prices").await?;
        Ok(quotes
            .into_iter()
            .map(|q| (q.crop_type, q.price_per_quintal))
            .collect())
    }

    /// List a farmer's plans
    pub async fn list(&self, farmer_id: Uuid) -> AppResult<Vec<CropPlan>> {
        self.client
            .get_json(&format!("/api/v1/farmers/{}/crop-plans", farmer_id))
            .await
    }

    /// Fetch a plan by id
    pub async fn get(&self, plan_id: Uuid) -> AppResult<CropPlan> {
        self.client
            .get_json(&format!("/api/v1/crop-plans/{}", plan_id))
            .await
    }

    /// Persist a plan built from a recommendation
    pub async fn create(&self, farmer_id: Uuid, input: &CreatePlanInput) -> AppResult<CropPlan> {
        self.client
            .post_json(&format!("/api/v1/farmers/{}/crop-plans", farmer_id), input)
            .await
    }

    /// Update a plan's lifecycle status
    ///
    /// The transition is validated locally against the plan's state machine
    /// before the round trip; the server-confirmed plan is returned.
    pub async fn update_status(
        &self,
        plan: &CropPlan,
        input: &UpdatePlanStatusInput,
    ) -> AppResult<CropPlan> {
        // Run the same transition on a scratch copy so an invalid request
        // never reaches the backend.
        let mut scratch = plan.clone();
        match input.status {
            shared::PlanStatus::Harvested => {
                let yield_quintals =
                    input.actual_yield_quintals.unwrap_or(Decimal::ZERO);
                scratch.record_harvest(yield_quintals)?;
            }
            shared::PlanStatus::ConvertedToLot => {
                scratch.convert_to_lot(plan.id)?;
            }
            other => scratch.advance_status(other)?,
        }

        self.client
            .put_json(&format!("/api/v1/crop-plans/{}/status", plan.id), input)
            .await
    }

    /// Convert a harvested plan into a marketplace lot
    ///
    /// One-way; the backend enforces idempotency per plan and returns the
    /// existing lot on repeat calls.
    pub async fn convert_to_lot(&self, plan_id: Uuid) -> AppResult<TradeLot> {
        self.client
            .post_json(
                &format!("/api/v1/crop-plans/{}/convert-to-lot", plan_id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Delete a plan that never left the planned stage
    pub async fn remove(&self, plan_id: Uuid) -> AppResult<()> {
        self.client
            .delete(&format!("/api/v1/crop-plans/{}", plan_id))
            .await
    }
}
