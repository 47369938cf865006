//! Profile and KYC editing endpoints

use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use shared::{Farmer, MediaReference, UpdateProfileInput};

use crate::error::{AppError, AppResult};

use super::ApiClient;

/// Profile editing for the farmer app
#[derive(Clone)]
pub struct ProfileApi {
    client: ApiClient,
    max_image_bytes: u64,
}

impl ProfileApi {
    pub fn new(client: ApiClient, max_image_bytes: u64) -> Self {
        Self {
            client,
            max_image_bytes,
        }
    }

    /// Update profile and KYC fields
    ///
    /// KYC identifiers are validated locally before the round trip.
    pub async fn update(&self, farmer_id: Uuid, input: &UpdateProfileInput) -> AppResult<Farmer> {
        if let Some(aadhaar) = &input.aadhaar_number {
            if let Err(message) = shared::validate_aadhaar(aadhaar) {
                return Err(AppError::Validation {
                    field: "aadhaar_number".to_string(),
                    message: message.to_string(),
                    message_hi: "आधार संख्या मान्य नहीं है".to_string(),
                });
            }
        }
        if let Some(ifsc) = &input.ifsc_code {
            if let Err(message) = shared::validate_ifsc(ifsc) {
                return Err(AppError::Validation {
                    field: "ifsc_code".to_string(),
                    message: message.to_string(),
                    message_hi: "IFSC कोड मान्य नहीं है".to_string(),
                });
            }
        }

        self.client
            .put_json(&format!("/api/v1/farmers/{}/profile", farmer_id), input)
            .await
    }

    /// Upload a profile photo as multipart form data
    pub async fn upload_photo(
        &self,
        farmer_id: Uuid,
        bytes: Vec<u8>,
        filename: &str,
    ) -> AppResult<MediaReference> {
        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "Please choose a photo to upload".to_string(),
            ));
        }
        if bytes.len() as u64 > self.max_image_bytes {
            return Err(AppError::ValidationError(format!(
                "Photo exceeds the {} MB upload limit",
                self.max_image_bytes / (1024 * 1024)
            )));
        }

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("photo", part);

        self.client
            .post_multipart(&format!("/api/v1/farmers/{}/profile/photo", farmer_id), form)
            .await
    }
}
