//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A weather snapshot at a point in time
///
/// Attached to harvest records at recording time for later agronomy review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub timestamp: DateTime<Utc>,
    pub location: GpsCoordinates,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub precipitation_mm: Decimal,
    pub conditions: String,
}
