use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::metrics_defs::{self, counter};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use serde::Serialize;
use store::ProductKind;

#[derive(Serialize)]
pub struct UploadResponse {
    message: &'static str,
    count: usize,
    #[serde(rename = "firstFew")]
    first_few: Vec<String>,
}

/// POST /api/admin/update-products. Multipart form carrying the
/// workbook (`file`) plus `type`, `sheetName` and `columnRef` fields.
/// Extracts the named column and replaces the matching family's product
/// list wholesale.
pub async fn update_products(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut file: Option<Bytes> = None;
    let mut kind: Option<String> = None;
    let mut sheet_name: Option<String> = None;
    let mut column_ref: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => file = Some(field.bytes().await?),
            Some("type") => kind = Some(field.text().await?),
            Some("sheetName") => sheet_name = Some(field.text().await?),
            Some("columnRef") => column_ref = Some(field.text().await?),
            _ => {}
        }
    }

    let (Some(file), Some(kind), Some(sheet_name), Some(column_ref)) =
        (file, kind, sheet_name, column_ref)
    else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let kind: ProductKind = kind
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid type: {kind}")))?;

    let products = ingest::extract_column(&file, &sheet_name, &column_ref)?;
    state.store.store_products(kind.family(), &products)?;
    counter!(metrics_defs::PRODUCTS_UPLOAD).increment(1);

    let first_few = products.iter().take(3).cloned().collect();
    Ok(Json(UploadResponse {
        message: "Product list updated successfully",
        count: products.len(),
        first_few,
    }))
}
