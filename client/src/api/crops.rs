//! Crop registration endpoints

use uuid::Uuid;

use shared::{Crop, RegisterCropInput, UpdateCropInput};

use crate::error::AppResult;

use super::ApiClient;

/// Crop CRUD for the farmer dashboard
#[derive(Clone)]
pub struct CropApi {
    client: ApiClient,
}

impl CropApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List the crops registered by a farmer
    pub async fn list(&self, farmer_id: Uuid) -> AppResult<Vec<Crop>> {
        self.client
            .get_json(&format!("/api/v1/farmers/{}/crops", farmer_id))
            .await
    }

    /// Fetch a crop by id
    pub async fn get(&self, crop_id: Uuid) -> AppResult<Crop> {
        self.client
            .get_json(&format!("/api/v1/crops/{}", crop_id))
            .await
    }

    /// Register a crop against a farmer's land
    pub async fn create(&self, farmer_id: Uuid, input: &RegisterCropInput) -> AppResult<Crop> {
        self.client
            .post_json(&format!("/api/v1/farmers/{}/crops", farmer_id), input)
            .await
    }

    /// Update a registered crop
    pub async fn update(&self, crop_id: Uuid, input: &UpdateCropInput) -> AppResult<Crop> {
        self.client
            .put_json(&format!("/api/v1/crops/{}", crop_id), input)
            .await
    }

    /// Delete a registered crop
    pub async fn remove(&self, crop_id: Uuid) -> AppResult<()> {
        self.client
            .delete(&format!("/api/v1/crops/{}", crop_id))
            .await
    }
}
