//! REST gateway to the AgriSetu backend
//!
//! One thin module per backend resource; every call is a single
//! request/response with no retries. Mutating calls return the
//! server-confirmed resource, and callers update local state only from
//! that response.

pub mod crops;
pub mod detection;
pub mod farmers;
pub mod harvests;
pub mod marketplace;
pub mod members;
pub mod payments;
pub mod plans;
pub mod processing;
pub mod profile;

pub use crops::CropApi;
pub use detection::DetectionApi;
pub use farmers::FarmerApi;
pub use harvests::HarvestApi;
pub use marketplace::MarketplaceApi;
pub use members::MemberApi;
pub use payments::PaymentApi;
pub use plans::PlanApi;
pub use processing::ProcessingApi;
pub use profile::ProfileApi;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{parse_api_error, AppError, AppResult};

/// Envelope shape used by most backend endpoints
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[allow(dead_code)]
    status: String,
    #[allow(dead_code)]
    message: Option<String>,
    data: T,
}

/// Authenticated HTTP client for the platform backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(AppError::Request)?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token to all subsequent requests
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .authorize(self.http.put(self.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> AppResult<()> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(parse_api_error(status, &body));
        }
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a response as the `{status, message, data}` envelope or as a
    /// raw resource object, whichever parses
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &body));
        }

        if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<T>>(&body) {
            return Ok(envelope.data);
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::warn!(error = %e, "response matched neither envelope nor raw shape");
            AppError::Parse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_envelope_parsing() {
        let body = r#"{"status": "ok", "message": null, "data": {"name": "soybean"}}"#;
        let envelope: ApiEnvelope<Sample> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.name, "soybean");
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(
            client.url("/api/v1/crops"),
            "https://api.example.com/api/v1/crops"
        );
    }
}
