use crate::error::{AppError, Result};
use crate::model::{ShortenUrlRequest, UrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;
use url::Url;

/// Any body that does not carry a usable `originalUrl` string, including
/// one that fails to deserialize, is answered like a malformed URL.
pub async fn shorten_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenUrlRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>> {
    let original_url = match payload {
        Ok(Json(request)) => request.original_url.unwrap_or_default(),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "rejecting unreadable shorten request");
            return Err(AppError::InvalidUrl(rejection.body_text()));
        }
    };

    if !is_well_formed_absolute_url(&original_url) {
        debug!(url = %original_url, "rejecting malformed url");
        return Err(AppError::InvalidUrl(original_url));
    }

    let url = state.shortener().shorten(&original_url).await?;
    Ok(Json(UrlResponse { url }))
}

pub async fn resolve_url_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<UrlResponse>> {
    resolve(&state, &short_id).await
}

/// `GET /api/shorten` hits the static route first; it is looked up like any
/// other short id so unknown ids answer 404 rather than 405.
pub async fn resolve_shorten_segment_handler(
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>> {
    resolve(&state, "shorten").await
}

async fn resolve(state: &AppState, short_id: &str) -> Result<Json<UrlResponse>> {
    let url = state.shortener().resolve(short_id).await?;
    Ok(Json(UrlResponse { url }))
}

/// An absolute URI with a scheme, written without raw whitespace.
///
/// `Url::parse` rejects relative references but silently percent-encodes
/// spaces, so those are checked separately.
fn is_well_formed_absolute_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    Url::parse(input).is_ok()
}
