use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use bcodes_store::BuildingCode;

use super::{ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/building-codes/",
            get(list_codes).post(create_code),
        )
        .route(
            "/api/building-codes/{id}",
            get(get_code).put(update_code).delete(delete_code),
        )
}

/// Request body for POST and PUT. Both fields are resupplied in full on
/// update. Missing fields deserialize to empty strings so that the
/// store's validation answers with 400 rather than a decode rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildingCodeBody {
    #[serde(default)]
    building_name: String,
    #[serde(default)]
    code: String,
}

async fn list_codes(
    State(svc): State<AppState>,
) -> Result<Json<Vec<BuildingCode>>, ApiError> {
    svc.list_codes()
        .map(Json)
        .map_err(|e| ApiError::from_service(e, 500, "error fetching building codes"))
}

async fn get_code(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BuildingCode>, ApiError> {
    svc.get_code(&id)
        .map(Json)
        .map_err(|e| ApiError::from_service(e, 500, "error fetching building code"))
}

async fn create_code(
    State(svc): State<AppState>,
    Json(body): Json<BuildingCodeBody>,
) -> Result<(StatusCode, Json<BuildingCode>), ApiError> {
    svc.create_code(&body.building_name, &body.code)
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(|e| ApiError::from_service(e, 400, "error creating building code"))
}

async fn update_code(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<BuildingCodeBody>,
) -> Result<Json<BuildingCode>, ApiError> {
    svc.update_code(&id, &body.building_name, &body.code)
        .map(Json)
        .map_err(|e| ApiError::from_service(e, 400, "error updating building code"))
}

async fn delete_code(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    svc.delete_code(&id)
        .map_err(|e| ApiError::from_service(e, 500, "error deleting building code"))?;
    Ok(Json(serde_json::json!({
        "message": "building code deleted successfully"
    })))
}
