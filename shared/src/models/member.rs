//! FPO, member and farmer models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{GpsCoordinates, Language, MediaReference};

/// A Farmer Producer Organization registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fpo {
    pub id: Uuid,
    pub name: String,
    /// Short code used in lot identifiers (e.g. "VIDARB")
    pub code: String,
    pub registration_year: i32,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub location: Option<GpsCoordinates>,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Roles an FPO member can hold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Manager,
    Member,
}

/// A member of an FPO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FpoMember {
    pub id: Uuid,
    pub fpo_id: Uuid,
    pub farmer_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

/// KYC verification status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Submitted,
    Verified,
    Rejected,
}

/// KYC details captured during profile editing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycDetails {
    pub aadhaar_number: String,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub status: KycStatus,
}

/// A farmer registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farmer {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub land_holding_acres: Decimal,
    pub kyc: Option<KycDetails>,
    pub photo: Option<MediaReference>,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a new farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterFarmerInput {
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub land_holding_acres: Decimal,
    pub preferred_language: Language,
}

/// Input for adding a member to an FPO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberInput {
    pub farmer_id: Uuid,
    pub role: MemberRole,
}

/// Input for updating a farmer profile (KYC edit screen)
///
/// Only supplied fields are changed; the photo travels separately as a
/// multipart upload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub aadhaar_number: Option<String>,
    pub bank_account_number: Option<String>,
    pub ifsc_code: Option<String>,
}
