//! Outbound leg of the submission proxy.

use crate::error::ApiError;
use crate::metrics_defs::{self, counter};
use serde_json::Value;
use store::Store;

/// Forwards one submission payload to the configured endpoint.
///
/// Reads the forwarding URL from the store; if none is configured the
/// submission is rejected before any network call. Exactly one outbound
/// POST is attempted - no retries. A non-2xx reply from the remote is an
/// error carrying that status and body. On success the remote body is
/// opportunistically parsed as JSON; an unparseable body is treated as
/// an empty object rather than a failure.
pub async fn forward_submission(
    client: &reqwest::Client,
    store: &Store,
    payload: &Value,
) -> Result<Value, ApiError> {
    let settings = store.load_settings()?;
    if settings.endpoint.is_empty() {
        return Err(ApiError::EndpointNotConfigured);
    }

    tracing::info!(endpoint = %settings.endpoint, "forwarding submission");
    let response = client.post(&settings.endpoint).json(payload).send().await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        counter!(metrics_defs::SUBMIT_FORWARD_FAILED).increment(1);
        return Err(ApiError::UpstreamStatus { status, body });
    }

    counter!(metrics_defs::SUBMIT_FORWARDED).increment(1);
    Ok(serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(Default::default())))
}
