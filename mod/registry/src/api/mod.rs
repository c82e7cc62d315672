pub mod building_codes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;

use bcodes_core::ServiceError;

use crate::service::RegistryService;

/// Shared application state.
pub type AppState = Arc<RegistryService>;

/// Build the registry API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(building_codes::routes())
        .with_state(state)
}

/// Standard API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        }));
        (status, body).into_response()
    }
}

impl ApiError {
    /// Map a service error to the endpoint's response.
    ///
    /// NotFound and Validation keep their short service message. Store
    /// and internal failures are collapsed to `store_message` with
    /// `store_code` — detail stays in the server log, never in the
    /// response body.
    pub(crate) fn from_service(err: ServiceError, store_code: u16, store_message: &str) -> Self {
        match err {
            ServiceError::NotFound(msg) => ApiError {
                code: 404,
                message: msg,
            },
            ServiceError::Validation(msg) => ApiError {
                code: 400,
                message: msg,
            },
            ServiceError::Storage(detail) | ServiceError::Internal(detail) => {
                tracing::error!("{}: {}", store_message, detail);
                ApiError {
                    code: store_code,
                    message: store_message.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_service_message() {
        let err = ApiError::from_service(
            ServiceError::NotFound("building code 'x' not found".into()),
            500,
            "error fetching building code",
        );
        assert_eq!(err.code, 404);
        assert_eq!(err.message, "building code 'x' not found");
    }

    #[test]
    fn validation_keeps_service_message() {
        let err = ApiError::from_service(
            ServiceError::Validation("buildingName is required".into()),
            400,
            "error creating building code",
        );
        assert_eq!(err.code, 400);
        assert_eq!(err.message, "buildingName is required");
    }

    #[test]
    fn storage_detail_is_hidden() {
        let err = ApiError::from_service(
            ServiceError::Storage("disk I/O error at offset 4096".into()),
            500,
            "error fetching building codes",
        );
        assert_eq!(err.code, 500);
        assert_eq!(err.message, "error fetching building codes");
    }

    #[test]
    fn storage_code_follows_endpoint() {
        // POST and PUT report store failures as 400.
        let err = ApiError::from_service(
            ServiceError::Storage("locked".into()),
            400,
            "error creating building code",
        );
        assert_eq!(err.code, 400);
    }
}
