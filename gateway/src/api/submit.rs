use crate::AppState;
use crate::error::ApiResult;
use crate::forward;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct SubmitResponse {
    success: bool,
    data: Value,
}

/// POST /api/submit-entry. The payload is forwarded verbatim to the
/// configured endpoint and never persisted here; `data` is whatever the
/// remote replied with (or `{}` if its body was not JSON).
pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<SubmitResponse>> {
    let data = forward::forward_submission(&state.client, &state.store, &payload).await?;
    Ok(Json(SubmitResponse {
        success: true,
        data,
    }))
}
