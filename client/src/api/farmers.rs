//! Farmer registration endpoints

use uuid::Uuid;

use shared::{Farmer, RegisterFarmerInput};

use crate::error::{AppError, AppResult};

use super::ApiClient;

/// Farmer onboarding and lookup
#[derive(Clone)]
pub struct FarmerApi {
    client: ApiClient,
}

impl FarmerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new farmer
    ///
    /// Field validation runs in the form controller; this re-checks the
    /// two fields the backend rejects hardest on before the round trip.
    pub async fn create(&self, input: &RegisterFarmerInput) -> AppResult<Farmer> {
        if let Err(message) = shared::validate_mobile(&input.mobile) {
            return Err(AppError::Validation {
                field: "mobile".to_string(),
                message: message.to_string(),
                message_hi: "मोबाइल नंबर मान्य नहीं है".to_string(),
            });
        }
        if let Err(message) = shared::validate_pincode(&input.pincode) {
            return Err(AppError::Validation {
                field: "pincode".to_string(),
                message: message.to_string(),
                message_hi: "पिन कोड मान्य नहीं है".to_string(),
            });
        }

        self.client.post_json("/api/v1/farmers", input).await
    }

    /// Fetch a farmer by id
    pub async fn get(&self, farmer_id: Uuid) -> AppResult<Farmer> {
        self.client
            .get_json(&format!("/api/v1/farmers/{}", farmer_id))
            .await
    }
}
