use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::metrics_defs::{self, counter};
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use store::{InventoryItem, InventorySnapshot};

/// GET /api/rm-inventory. The last-pushed snapshot; before any push the
/// timestamp is null and the item list empty.
pub async fn get_inventory(State(state): State<AppState>) -> ApiResult<Json<InventorySnapshot>> {
    Ok(Json(state.store.load_inventory()?))
}

#[derive(Serialize)]
pub struct PushInventoryResponse {
    message: &'static str,
    #[serde(rename = "lastUpdated")]
    last_updated: Option<String>,
    #[serde(rename = "itemCount")]
    item_count: usize,
}

/// POST /api/rm-inventory. The external pusher sends a bare JSON array
/// of stock rows; the server stamps the timestamp and overwrites the
/// snapshot wholesale. No history is kept.
pub async fn push_inventory(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<PushInventoryResponse>> {
    if !body.is_array() {
        return Err(ApiError::BadRequest(
            "Payload must be an array of inventory items".to_string(),
        ));
    }
    let items: Vec<InventoryItem> = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed inventory items: {e}")))?;

    let snapshot = state.store.store_inventory(items)?;
    counter!(metrics_defs::INVENTORY_PUSH).increment(1);
    Ok(Json(PushInventoryResponse {
        message: "Inventory updated successfully",
        last_updated: snapshot.last_updated,
        item_count: snapshot.items.len(),
    }))
}
