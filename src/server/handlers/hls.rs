use std::path::Path as FsPath;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::{
    media::MediaType,
    playlist::{PlaylistRewriter, RewriteContext},
    sandbox,
    server::{params::SignedUrlParams, state::AppState, verify},
    Error, Result,
};

/// Handle GET /hls/{*path} requests.
///
/// Verifies the signed URL, confines the path to the asset root, then
/// serves the asset: playlists are rewritten so every embedded reference
/// becomes a freshly signed URL, segments and subtitles are streamed raw.
pub async fn handle_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(params): Query<SignedUrlParams>,
) -> Result<Response> {
    // The signature covers the public path exactly as requested.
    verify::verify_request(
        state.signer.key(),
        &path,
        params.expires.as_deref(),
        params.signature.as_deref(),
    )?;

    let absolute = sandbox::resolve(&state.config.asset_root, &path).await?;
    let media_type = MediaType::from_path(&path)?;

    match media_type {
        MediaType::Playlist => serve_playlist(&state, &path, &absolute).await,
        MediaType::Segment | MediaType::Subtitle => stream_media(media_type, &absolute).await,
    }
}

/// Read a playlist, rewrite its references into signed URLs, and return
/// the rewritten text.
async fn serve_playlist(state: &AppState, public_path: &str, absolute: &FsPath) -> Result<Response> {
    let content = tokio::fs::read_to_string(absolute).await.map_err(|e| {
        tracing::error!(path = public_path, error = %e, "failed to read playlist");
        Error::Internal(e.to_string())
    })?;

    let playlist_path = sandbox::normalize(public_path);
    let context = RewriteContext::for_playlist(
        state.signer.clone(),
        &playlist_path,
        state.config.rewrite_ttl,
    );
    let rewritten = PlaylistRewriter::new(context).rewrite(&content);

    tracing::debug!(path = public_path, "served rewritten playlist");

    Ok((
        [(header::CONTENT_TYPE, MediaType::Playlist.content_type())],
        rewritten,
    )
        .into_response())
}

/// Stream a segment or subtitle file without buffering it whole. A client
/// disconnect simply drops the stream; no second response is written.
async fn stream_media(media_type: MediaType, absolute: &FsPath) -> Result<Response> {
    let file = tokio::fs::File::open(absolute).await?;
    let stream = ReaderStream::new(file);

    Ok((
        [(header::CONTENT_TYPE, media_type.content_type())],
        Body::from_stream(stream),
    )
        .into_response())
}
