//! Crop plan models and status lifecycle

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{CropType, Season};

/// Status of a crop plan
///
/// Transitions are strictly monotonic:
/// planned -> sowing -> growing -> ready_to_harvest -> harvested -> converted_to_lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Planned,
    Sowing,
    Growing,
    ReadyToHarvest,
    Harvested,
    ConvertedToLot,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planned => "planned",
            PlanStatus::Sowing => "sowing",
            PlanStatus::Growing => "growing",
            PlanStatus::ReadyToHarvest => "ready_to_harvest",
            PlanStatus::Harvested => "harvested",
            PlanStatus::ConvertedToLot => "converted_to_lot",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(PlanStatus::Planned),
            "sowing" => Some(PlanStatus::Sowing),
            "growing" => Some(PlanStatus::Growing),
            "ready_to_harvest" => Some(PlanStatus::ReadyToHarvest),
            "harvested" => Some(PlanStatus::Harvested),
            "converted_to_lot" => Some(PlanStatus::ConvertedToLot),
            _ => None,
        }
    }

    /// The next status in the lifecycle, if any
    pub fn next(&self) -> Option<PlanStatus> {
        match self {
            PlanStatus::Planned => Some(PlanStatus::Sowing),
            PlanStatus::Sowing => Some(PlanStatus::Growing),
            PlanStatus::Growing => Some(PlanStatus::ReadyToHarvest),
            PlanStatus::ReadyToHarvest => Some(PlanStatus::Harvested),
            PlanStatus::Harvested => Some(PlanStatus::ConvertedToLot),
            PlanStatus::ConvertedToLot => None,
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Planned => write!(f, "Planned"),
            PlanStatus::Sowing => write!(f, "Sowing"),
            PlanStatus::Growing => write!(f, "Growing"),
            PlanStatus::ReadyToHarvest => write!(f, "Ready to Harvest"),
            PlanStatus::Harvested => write!(f, "Harvested"),
            PlanStatus::ConvertedToLot => write!(f, "Converted to Lot"),
        }
    }
}

/// Errors raised by plan lifecycle operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("cannot move plan from {from} to {to}")]
    InvalidTransition { from: PlanStatus, to: PlanStatus },

    #[error("actual harvested yield must be supplied when marking a plan harvested")]
    ActualYieldRequired,

    #[error("actual yield must be greater than zero")]
    InvalidActualYield,

    #[error("record the actual harvested yield before converting this plan to a lot")]
    ActualYieldNotRecorded,
}

/// Itemized per-plan input costs in rupees
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InputCosts {
    pub seed: Decimal,
    pub fertilizer: Decimal,
    pub pesticide: Decimal,
    pub labor: Decimal,
    pub irrigation: Decimal,
}

impl InputCosts {
    pub fn total(&self) -> Decimal {
        self.seed + self.fertilizer + self.pesticide + self.labor + self.irrigation
    }
}

/// A crop plan created from a recommendation and tracked to harvest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropPlan {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub crop_type: CropType,
    pub crop_name: String,
    pub land_acres: Decimal,
    pub sowing_date: NaiveDate,
    /// Days from sowing to expected maturity (always >= 1)
    pub maturity_days: u32,
    pub season: Season,
    pub msp_price_per_quintal: Decimal,
    pub estimated_yield_quintals: Decimal,
    pub estimated_yield_per_acre: Decimal,
    pub input_costs: InputCosts,
    pub net_profit: Decimal,
    pub profit_per_acre: Decimal,
    pub roi_percentage: Decimal,
    pub status: PlanStatus,
    pub actual_yield_quintals: Option<Decimal>,
    pub converted_lot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CropPlan {
    /// Expected harvest date derived from sowing date and maturity
    ///
    /// Strictly later than the sowing date since `maturity_days >= 1`.
    pub fn expected_harvest_date(&self) -> NaiveDate {
        self.sowing_date + Duration::days(i64::from(self.maturity_days.max(1)))
    }

    /// Projected gross revenue at MSP
    pub fn gross_revenue(&self) -> Decimal {
        self.estimated_yield_quintals * self.msp_price_per_quintal
    }

    /// Advance the plan one step along the lifecycle
    ///
    /// Only the intermediate cultivation stages move through here; use
    /// [`CropPlan::record_harvest`] and [`CropPlan::convert_to_lot`] for the
    /// terminal transitions, which carry extra data.
    pub fn advance_status(&mut self, to: PlanStatus) -> Result<(), PlanError> {
        match to {
            PlanStatus::Harvested => return Err(PlanError::ActualYieldRequired),
            PlanStatus::ConvertedToLot => return Err(PlanError::ActualYieldNotRecorded),
            _ => {}
        }
        if self.status.next() != Some(to) {
            return Err(PlanError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the plan harvested, recording the actual yield
    pub fn record_harvest(&mut self, actual_yield_quintals: Decimal) -> Result<(), PlanError> {
        if self.status != PlanStatus::ReadyToHarvest {
            return Err(PlanError::InvalidTransition {
                from: self.status,
                to: PlanStatus::Harvested,
            });
        }
        if actual_yield_quintals <= Decimal::ZERO {
            return Err(PlanError::InvalidActualYield);
        }
        self.actual_yield_quintals = Some(actual_yield_quintals);
        self.status = PlanStatus::Harvested;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Convert a harvested plan into a marketplace lot
    ///
    /// One-way and idempotent: converting an already-converted plan returns
    /// the existing lot reference unchanged. Requires an actual yield on
    /// record, even for plans that arrived in `harvested` state from the
    /// backend.
    pub fn convert_to_lot(&mut self, lot_id: Uuid) -> Result<Uuid, PlanError> {
        if self.status == PlanStatus::ConvertedToLot {
            return Ok(self.converted_lot_id.unwrap_or(lot_id));
        }
        if self.status != PlanStatus::Harvested {
            return Err(PlanError::InvalidTransition {
                from: self.status,
                to: PlanStatus::ConvertedToLot,
            });
        }
        if self.actual_yield_quintals.is_none() {
            return Err(PlanError::ActualYieldNotRecorded);
        }
        self.status = PlanStatus::ConvertedToLot;
        self.converted_lot_id = Some(lot_id);
        self.updated_at = Utc::now();
        Ok(lot_id)
    }
}

/// Input for persisting a plan built from a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanInput {
    pub crop_type: CropType,
    pub crop_name: String,
    pub land_acres: Decimal,
    pub sowing_date: NaiveDate,
    pub maturity_days: u32,
    pub season: Season,
    pub msp_price_per_quintal: Decimal,
    pub estimated_yield_quintals: Decimal,
    pub estimated_yield_per_acre: Decimal,
    pub input_costs: InputCosts,
    pub net_profit: Decimal,
    pub profit_per_acre: Decimal,
    pub roi_percentage: Decimal,
}

/// Input for a server-side plan status update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlanStatusInput {
    pub status: PlanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_yield_quintals: Option<Decimal>,
}
