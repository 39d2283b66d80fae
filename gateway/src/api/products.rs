use crate::AppState;
use crate::error::{ApiError, ApiResult};
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use store::ProductKind;

#[derive(Deserialize, Debug, Default)]
pub struct ProductsQuery {
    r#type: Option<String>,
}

/// GET /api/products?type=... Returns the dropdown list for a form
/// type. A missing `type` is a client error; an unrecognized one
/// yields an empty list rather than an error so a stale or
/// misconfigured form still renders.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let form_type = params.r#type.ok_or_else(|| {
        ApiError::BadRequest("Missing or invalid type parameter".to_string())
    })?;
    let Ok(kind) = form_type.parse::<ProductKind>() else {
        tracing::debug!(r#type = form_type, "unknown product type requested");
        return Ok(Json(Vec::new()));
    };
    Ok(Json(state.store.load_products(kind.family())?))
}
