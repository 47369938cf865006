//! Error handling for the AgriSetu client core
//!
//! Provides consistent user-facing notices in English and Hindi. Every
//! failure is recoverable: callers show the notice as a toast and leave
//! screen state untouched.

use serde::Serialize;
use thiserror::Error;

use shared::{EngineError, PlanError};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Recommendation engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    // Backend API errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError::InvalidStateTransition(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// User-facing notice rendered as a toast or alert
#[derive(Debug, Clone, Serialize)]
pub struct ErrorNotice {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Build the notice shown to the user for this error
    ///
    /// Unexpected shapes collapse to a generic message; the detail is
    /// logged rather than shown.
    pub fn notice(&self) -> ErrorNotice {
        let notice = match self {
            AppError::Unauthorized => ErrorNotice {
                code: "UNAUTHORIZED".to_string(),
                message_en: "Please sign in to continue".to_string(),
                message_hi: "जारी रखने के लिए कृपया साइन इन करें".to_string(),
                field: None,
            },
            AppError::TokenExpired => ErrorNotice {
                code: "TOKEN_EXPIRED".to_string(),
                message_en: "Your session has expired, please sign in again".to_string(),
                message_hi: "आपका सत्र समाप्त हो गया है, कृपया फिर से साइन इन करें".to_string(),
                field: None,
            },
            AppError::Validation {
                field,
                message,
                message_hi,
            } => ErrorNotice {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_hi: message_hi.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorNotice {
                code: "VALIDATION_ERROR".to_string(),
                message_en: msg.clone(),
                message_hi: format!("अमान्य इनपुट: {}", msg),
                field: None,
            },
            AppError::NotFound(resource) => ErrorNotice {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_hi: format!("{} नहीं मिला", resource),
                field: None,
            },
            AppError::InvalidStateTransition(msg) => ErrorNotice {
                code: "INVALID_STATE_TRANSITION".to_string(),
                message_en: msg.clone(),
                message_hi: format!("स्थिति नहीं बदली जा सकती: {}", msg),
                field: None,
            },
            AppError::Engine(err) => ErrorNotice {
                code: "RECOMMENDATION_ERROR".to_string(),
                message_en: err.to_string(),
                message_hi: format!("सिफारिश तैयार नहीं हो सकी: {}", err),
                field: None,
            },
            AppError::SubmissionInFlight => ErrorNotice {
                code: "SUBMISSION_IN_FLIGHT".to_string(),
                message_en: "Please wait for the current submission to finish".to_string(),
                message_hi: "कृपया वर्तमान सबमिशन पूरा होने की प्रतीक्षा करें".to_string(),
                field: None,
            },
            AppError::Api { message, .. } => ErrorNotice {
                code: "API_ERROR".to_string(),
                message_en: message.clone(),
                message_hi: format!("सर्वर त्रुटि: {}", message),
                field: None,
            },
            AppError::Request(_) => ErrorNotice {
                code: "NETWORK_ERROR".to_string(),
                message_en: "Could not reach the server, please try again".to_string(),
                message_hi: "सर्वर से संपर्क नहीं हो सका, कृपया पुनः प्रयास करें".to_string(),
                field: None,
            },
            AppError::Parse(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                ErrorNotice {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "Something went wrong, please try again".to_string(),
                    message_hi: "कुछ गलत हो गया, कृपया पुनः प्रयास करें".to_string(),
                    field: None,
                }
            }
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        notice
    }
}

/// Map a non-2xx API response to an [`AppError`]
///
/// The backend reports errors as `{ message }`, `{ detail }` or
/// `{ error }`; whichever is present wins. Unknown bodies keep the HTTP
/// status and a generic message.
pub fn parse_api_error(status: u16, body: &str) -> AppError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        tracing::warn!(status, body, "unrecognised error body from API");
        "Request failed".to_string()
    });

    match status {
        401 => AppError::Unauthorized,
        404 => AppError::NotFound(message),
        _ => AppError::Api { status, message },
    }
}

/// Extract the human-readable message from a known error body shape
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "detail", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    // Some endpoints nest the message one level down: { "error": { "message": ... } }
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
