//! HTTP surface of the data-entry gateway.
//!
//! One axum router carries every endpoint: settings, product lists,
//! the spreadsheet upload, the inventory snapshot, and the submission
//! proxy. An optional static directory is served as the fallback for
//! the browser UI.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use store::Store;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

pub mod api;
mod error;
mod forward;
pub mod metrics_defs;

pub use error::ApiError;

/// Inventory pushes can carry thousands of stock rows; spreadsheet
/// uploads a whole workbook.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared per-request state: the flat-file store and one reqwest client
/// reused across outbound forwards.
#[derive(Clone)]
pub struct AppState {
    pub(crate) store: Arc<Store>,
    pub(crate) client: reqwest::Client,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store: Arc::new(store),
            client: reqwest::Client::new(),
        }
    }
}

/// Builds the application router. Methods not routed on a known path
/// get axum's default 405.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/api/settings",
            get(api::settings::get_settings).post(api::settings::update_settings),
        )
        .route("/api/products", get(api::products::list_products))
        .route("/api/admin/update-products", post(api::upload::update_products))
        .route(
            "/api/rm-inventory",
            get(api::inventory::get_inventory).post(api::inventory::push_inventory),
        )
        .route("/api/submit-entry", post(api::submit::submit_entry))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router
}

#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binds the listener and serves the router until the process exits.
pub async fn serve(
    host: &str,
    port: u16,
    state: AppState,
    static_dir: Option<&Path>,
) -> Result<(), ServeError> {
    let app = router(state, static_dir);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
