//! Processing batch endpoints

use uuid::Uuid;

use shared::{CreateProcessingBatchInput, ProcessingBatch};

use crate::error::AppResult;

use super::ApiClient;

/// Processor dashboard operations
#[derive(Clone)]
pub struct ProcessingApi {
    client: ApiClient,
}

impl ProcessingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a processing batch
    pub async fn create_batch(
        &self,
        fpo_id: Uuid,
        input: &CreateProcessingBatchInput,
    ) -> AppResult<ProcessingBatch> {
        self.client
            .post_json(&format!("/api/v1/fpos/{}/processing-batches", fpo_id), input)
            .await
    }

    /// List the batches of an FPO
    pub async fn list(&self, fpo_id: Uuid) -> AppResult<Vec<ProcessingBatch>> {
        self.client
            .get_json(&format!("/api/v1/fpos/{}/processing-batches", fpo_id))
            .await
    }
}
