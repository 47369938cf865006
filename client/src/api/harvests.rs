//! Harvest recording endpoints

use uuid::Uuid;

use shared::{HarvestRecord, RecordHarvestInput};

use crate::error::AppResult;

use super::ApiClient;

/// Harvest recording for the farmer dashboard
#[derive(Clone)]
pub struct HarvestApi {
    client: ApiClient,
}

impl HarvestApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Record a harvest against a registered crop
    pub async fn record(&self, input: &RecordHarvestInput) -> AppResult<HarvestRecord> {
        self.client.post_json("/api/v1/harvests", input).await
    }

    /// List the harvests recorded for a crop
    pub async fn list_for_crop(&self, crop_id: Uuid) -> AppResult<Vec<HarvestRecord>> {
        self.client
            .get_json(&format!("/api/v1/crops/{}/harvests", crop_id))
            .await
    }
}
