//! Actix handlers for the JSON API.

use actix_web::HttpResponse;
use log::error;
use serde::Serialize;
use validator::ValidationErrors;

use crate::services::ServiceError;

pub mod inquiry;
pub mod property;

/// Error contract shared by every endpoint: a message, plus field-level
/// detail for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            error: "Validation error".to_string(),
            details: serde_json::to_value(errors).ok(),
        }
    }
}

/// Maps a service failure onto the error contract. Internal causes are
/// logged server-side and replaced with a generic message so no storage
/// detail leaks to the caller.
pub(crate) fn error_response(entity: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{entity} not found")))
        }
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }
        ServiceError::Repository(cause) => {
            error!("{entity} request failed: {cause}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}
