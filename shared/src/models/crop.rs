//! Crop and season models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Crop types supported by the platform
///
/// The closed set covers the MSP-notified crops the marketplace trades in;
/// anything else is carried as `Other` with its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Soybean,
    Wheat,
    Paddy,
    Cotton,
    Maize,
    Groundnut,
    Mustard,
    Gram,
    Sugarcane,
    Other(String),
}

impl CropType {
    pub fn as_str(&self) -> &str {
        match self {
            CropType::Soybean => "soybean",
            CropType::Wheat => "wheat",
            CropType::Paddy => "paddy",
            CropType::Cotton => "cotton",
            CropType::Maize => "maize",
            CropType::Groundnut => "groundnut",
            CropType::Mustard => "mustard",
            CropType::Gram => "gram",
            CropType::Sugarcane => "sugarcane",
            CropType::Other(name) => name,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "soybean" => CropType::Soybean,
            "wheat" => CropType::Wheat,
            "paddy" => CropType::Paddy,
            "cotton" => CropType::Cotton,
            "maize" => CropType::Maize,
            "groundnut" => CropType::Groundnut,
            "mustard" => CropType::Mustard,
            "gram" => CropType::Gram,
            "sugarcane" => CropType::Sugarcane,
            other => CropType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Soybean => write!(f, "Soybean"),
            CropType::Wheat => write!(f, "Wheat"),
            CropType::Paddy => write!(f, "Paddy"),
            CropType::Cotton => write!(f, "Cotton"),
            CropType::Maize => write!(f, "Maize"),
            CropType::Groundnut => write!(f, "Groundnut"),
            CropType::Mustard => write!(f, "Mustard"),
            CropType::Gram => write!(f, "Gram"),
            CropType::Sugarcane => write!(f, "Sugarcane"),
            CropType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Monsoon sowing (June-July), autumn harvest
    Kharif,
    /// Winter sowing (October-December), spring harvest
    Rabi,
    /// Summer season between Rabi and Kharif
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }

    /// Sowing window as (start month, end month), 1-based
    pub fn sowing_window(&self) -> (u32, u32) {
        match self {
            Season::Kharif => (6, 7),
            Season::Rabi => (10, 12),
            Season::Zaid => (3, 4),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif"),
            Season::Rabi => write!(f, "Rabi"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

/// Soil classifications used by the planning screens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    BlackCotton,
    Red,
    Laterite,
    Sandy,
    Clay,
    Loamy,
}

impl SoilType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "alluvial" => Some(SoilType::Alluvial),
            "black_cotton" => Some(SoilType::BlackCotton),
            "red" => Some(SoilType::Red),
            "laterite" => Some(SoilType::Laterite),
            "sandy" => Some(SoilType::Sandy),
            "clay" => Some(SoilType::Clay),
            "loamy" => Some(SoilType::Loamy),
            _ => None,
        }
    }
}

/// Status of a registered crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Active,
    Harvested,
    Failed,
}

/// A crop registered against a farmer's land
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub crop_type: CropType,
    pub variety: Option<String>,
    pub season: Season,
    pub area_acres: Decimal,
    pub soil_type: Option<SoilType>,
    pub sowing_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub status: CropStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a new crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCropInput {
    pub crop_type: CropType,
    pub variety: Option<String>,
    pub season: Season,
    pub area_acres: Decimal,
    pub soil_type: Option<SoilType>,
    pub sowing_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
}

/// Input for updating a registered crop; only supplied fields change
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCropInput {
    pub variety: Option<String>,
    pub area_acres: Option<Decimal>,
    pub soil_type: Option<SoilType>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub status: Option<CropStatus>,
}
