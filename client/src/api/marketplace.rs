//! Marketplace trade listing endpoints

use uuid::Uuid;

use shared::{CreateListingInput, TradeLot};

use crate::error::AppResult;

use super::ApiClient;

/// Trade listings for the marketplace screens
#[derive(Clone)]
pub struct MarketplaceApi {
    client: ApiClient,
}

impl MarketplaceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List an FPO's trade lots
    pub async fn list(&self, fpo_id: Uuid) -> AppResult<Vec<TradeLot>> {
        self.client
            .get_json(&format!("/api/v1/fpos/{}/lots", fpo_id))
            .await
    }

    /// List a lot for trade
    pub async fn create_listing(
        &self,
        fpo_id: Uuid,
        input: &CreateListingInput,
    ) -> AppResult<TradeLot> {
        self.client
            .post_json(&format!("/api/v1/fpos/{}/lots", fpo_id), input)
            .await
    }

    /// Mark a listing completed
    ///
    /// Returns the server-confirmed listing; callers must replace their
    /// local copy from this response rather than flipping the status
    /// optimistically, so a failed request leaves the screen unchanged.
    pub async fn complete_listing(&self, lot_id: Uuid) -> AppResult<TradeLot> {
        self.client
            .post_json(
                &format!("/api/v1/lots/{}/complete", lot_id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Cancel a listing
    pub async fn cancel_listing(&self, lot_id: Uuid) -> AppResult<TradeLot> {
        self.client
            .post_json(
                &format!("/api/v1/lots/{}/cancel", lot_id),
                &serde_json::json!({}),
            )
            .await
    }
}
