use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    sandbox,
    server::{params::GenerateUrlParams, state::AppState},
    Error, Result,
};

/// Handle GET /generate-url requests.
///
/// Gated by the static API key in the `x-api-key` header. The named file
/// must exist under the asset root; the response carries a fully qualified
/// signed URL for it.
pub async fn handle_generate_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<GenerateUrlParams>,
) -> Result<Response> {
    let provided = headers.get("x-api-key").and_then(|v| v.to_str().ok());
    if provided != Some(state.config.api_key.as_str()) {
        tracing::warn!("generate-url request with missing or invalid API key");
        return Err(Error::Unauthorized);
    }

    let file = params
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .ok_or(Error::MissingFileParameter)?;

    // Existence and sandbox check before issuing anything.
    sandbox::resolve(&state.config.asset_root, file).await?;

    let ttl = params.expires_in.unwrap_or(state.config.default_ttl);
    let public_path = sandbox::normalize(file);
    let signed = state.signer.issue(&public_path, ttl);

    tracing::info!(file = %public_path, expires = signed.expires, "issued signed URL");

    Ok(Json(serde_json::json!({ "url": signed.url.to_string() })).into_response())
}
