//! Crop disease detection models
//!
//! Inference happens in an external service; these types only carry its
//! results back to the screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CropType;

/// Severity of a detected disease
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseSeverity {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for DiseaseSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseSeverity::Low => write!(f, "Low"),
            DiseaseSeverity::Moderate => write!(f, "Moderate"),
            DiseaseSeverity::High => write!(f, "High"),
        }
    }
}

/// Result of a disease detection request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseDetection {
    pub request_id: String,
    pub crop_id: Option<Uuid>,
    pub crop_type: Option<CropType>,
    pub image_url: String,
    pub disease_name: String,
    /// Model confidence, 0-1
    pub confidence_score: f32,
    pub severity: DiseaseSeverity,
    /// Advisory lines shown to the farmer
    pub treatment_advisory: Vec<String>,
    pub annotated_image_url: Option<String>,
    pub detected_at: DateTime<Utc>,
}
