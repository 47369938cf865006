//! Processing batch models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CropType;

/// Processing operations run on procured produce
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    Cleaning,
    Grading,
    Milling,
    Packaging,
}

impl std::fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessKind::Cleaning => write!(f, "Cleaning"),
            ProcessKind::Grading => write!(f, "Grading"),
            ProcessKind::Milling => write!(f, "Milling"),
            ProcessKind::Packaging => write!(f, "Packaging"),
        }
    }
}

/// Status of a processing batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Queued,
    InProgress,
    Completed,
}

/// A batch of produce moving through a processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingBatch {
    pub id: Uuid,
    pub fpo_id: Uuid,
    pub lot_id: Option<Uuid>,
    pub crop_type: CropType,
    pub process: ProcessKind,
    pub input_quantity_quintals: Decimal,
    pub output_quantity_quintals: Option<Decimal>,
    pub started_on: NaiveDate,
    pub status: ProcessingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a processing batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProcessingBatchInput {
    pub lot_id: Option<Uuid>,
    pub crop_type: CropType,
    pub process: ProcessKind,
    pub input_quantity_quintals: Decimal,
    pub started_on: NaiveDate,
}
