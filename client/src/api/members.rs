//! FPO member management endpoints

use uuid::Uuid;

use shared::{AddMemberInput, FpoMember};

use crate::error::AppResult;

use super::ApiClient;

/// Member management for an FPO dashboard
#[derive(Clone)]
pub struct MemberApi {
    client: ApiClient,
}

impl MemberApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List the members of an FPO
    pub async fn list(&self, fpo_id: Uuid) -> AppResult<Vec<FpoMember>> {
        self.client
            .get_json(&format!("/api/v1/fpos/{}/members", fpo_id))
            .await
    }

    /// Add a farmer to an FPO
    pub async fn add(&self, fpo_id: Uuid, input: &AddMemberInput) -> AppResult<FpoMember> {
        self.client
            .post_json(&format!("/api/v1/fpos/{}/members", fpo_id), input)
            .await
    }

    /// Remove a member from an FPO
    pub async fn remove(&self, fpo_id: Uuid, member_id: Uuid) -> AppResult<()> {
        self.client
            .delete(&format!("/api/v1/fpos/{}/members/{}", fpo_id, member_id))
            .await
    }
}
