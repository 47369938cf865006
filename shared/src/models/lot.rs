//! Marketplace lot and trade listing models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CropType;

/// A procurement lot listed for trade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeLot {
    pub id: Uuid,
    pub fpo_id: Uuid,
    /// Unique lot code (e.g. "AGS-2026-VIDARB-0001")
    pub lot_code: String,
    pub crop_type: CropType,
    pub quantity_quintals: Decimal,
    pub asking_price_per_quintal: Decimal,
    pub status: LotStatus,
    /// Plan this lot was converted from, if any
    pub source_plan_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status of a trade listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    Listed,
    BidReceived,
    Sold,
    Completed,
    Cancelled,
}

impl LotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LotStatus::Listed => "listed",
            LotStatus::BidReceived => "bid_received",
            LotStatus::Sold => "sold",
            LotStatus::Completed => "completed",
            LotStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal listings accept no further updates
    pub fn is_terminal(&self) -> bool {
        matches!(self, LotStatus::Completed | LotStatus::Cancelled)
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotStatus::Listed => write!(f, "Listed"),
            LotStatus::BidReceived => write!(f, "Bid Received"),
            LotStatus::Sold => write!(f, "Sold"),
            LotStatus::Completed => write!(f, "Completed"),
            LotStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Input for listing a lot on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingInput {
    pub crop_type: CropType,
    pub quantity_quintals: Decimal,
    pub asking_price_per_quintal: Decimal,
    pub source_plan_id: Option<Uuid>,
}

/// Generate a lot code
pub fn generate_lot_code(fpo_code: &str, year: i32, sequence: i32) -> String {
    format!("AGS-{}-{}-{:04}", year, fpo_code, sequence)
}
