use crate::AppState;
use crate::error::{ApiError, ApiResult};
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use store::Settings;

/// GET /api/settings. Initializes the default record on first read.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<Settings>> {
    Ok(Json(state.store.load_settings()?))
}

#[derive(Serialize)]
pub struct SaveSettingsResponse {
    message: &'static str,
    settings: Settings,
}

/// POST /api/settings. Overwrites the record wholesale after a
/// superficial type check on the `endpoint` field; no URL validation.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<SaveSettingsResponse>> {
    let endpoint = body
        .get("endpoint")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("Invalid endpoint format".to_string()))?;

    let settings = Settings {
        endpoint: endpoint.to_string(),
    };
    state.store.store_settings(&settings)?;
    Ok(Json(SaveSettingsResponse {
        message: "Settings saved successfully",
        settings,
    }))
}
