//! Crop disease detection endpoints
//!
//! The model runs in an external service; this client submits a photo and
//! reads back the result. One submission per screen at a time — the form
//! controller's busy flag guards against double uploads.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{CropType, DiseaseDetection};

use crate::error::{AppError, AppResult};

use super::ApiClient;

/// Request to detect disease in a crop photo
#[derive(Debug, Serialize)]
pub struct DetectDiseaseRequest {
    pub image_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<CropType>,
}

/// Detection status for async processing
#[derive(Debug, Deserialize)]
pub struct DetectionStatus {
    pub request_id: String,
    pub status: String,
    pub detection: Option<DiseaseDetection>,
    pub error: Option<String>,
}

/// Disease detection client
#[derive(Clone)]
pub struct DetectionApi {
    client: ApiClient,
    max_image_bytes: u64,
}

impl DetectionApi {
    pub fn new(client: ApiClient, max_image_bytes: u64) -> Self {
        Self {
            client,
            max_image_bytes,
        }
    }

    /// Encode raw image bytes for submission
    pub fn encode_image(&self, bytes: &[u8]) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "Please choose a photo to analyse".to_string(),
            ));
        }
        if bytes.len() as u64 > self.max_image_bytes {
            return Err(AppError::ValidationError(format!(
                "Photo exceeds the {} MB upload limit",
                self.max_image_bytes / (1024 * 1024)
            )));
        }
        Ok(general_purpose::STANDARD.encode(bytes))
    }

    /// Submit a crop photo for disease detection
    pub async fn submit(&self, request: &DetectDiseaseRequest) -> AppResult<DiseaseDetection> {
        self.client
            .post_json("/api/v1/disease-detections", request)
            .await
    }

    /// Poll an in-flight detection
    pub async fn get_status(&self, request_id: &str) -> AppResult<DetectionStatus> {
        self.client
            .get_json(&format!("/api/v1/disease-detections/{}", request_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> DetectionApi {
        DetectionApi::new(ApiClient::with_base_url("http://localhost:9999"), 1024)
    }

    #[test]
    fn test_encode_image() {
        let encoded = api().encode_image(b"leaf pixels").unwrap();
        assert_eq!(
            general_purpose::STANDARD.decode(encoded).unwrap(),
            b"leaf pixels"
        );
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(api().encode_image(&[]).is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let bytes = vec![0u8; 2048];
        assert!(api().encode_image(&bytes).is_err());
    }
}
