//! Harvest models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WeatherSnapshot;

/// Minimum days between sowing and a recorded harvest
pub const MIN_SOWING_TO_HARVEST_DAYS: i64 = 30;

/// A harvest record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestRecord {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub farmer_id: Uuid,
    pub harvest_date: NaiveDate,
    pub quantity_quintals: Decimal,
    pub moisture_percent: Option<Decimal>,
    pub weather_snapshot: Option<WeatherSnapshot>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a harvest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordHarvestInput {
    pub crop_id: Uuid,
    pub harvest_date: NaiveDate,
    pub quantity_quintals: Decimal,
    pub moisture_percent: Option<Decimal>,
    pub notes: Option<String>,
}
