//! Payment and wallet query endpoints

use uuid::Uuid;

use shared::{PaginatedResponse, Pagination, PaymentTransaction, WalletBalance};

use crate::error::AppResult;

use super::ApiClient;

/// Wallet queries for the payments screen
#[derive(Clone)]
pub struct PaymentApi {
    client: ApiClient,
}

impl PaymentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the wallet balance for a farmer or FPO
    pub async fn wallet(&self, owner_id: Uuid) -> AppResult<WalletBalance> {
        self.client
            .get_json(&format!("/api/v1/wallets/{}", owner_id))
            .await
    }

    /// Fetch a page of wallet transactions
    pub async fn transactions(
        &self,
        owner_id: Uuid,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<PaymentTransaction>> {
        self.client
            .get_json(&format!(
                "/api/v1/wallets/{}/transactions?page={}&per_page={}",
                owner_id, pagination.page, pagination.per_page
            ))
            .await
    }
}
