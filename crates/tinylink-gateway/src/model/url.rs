use serde::{Deserialize, Serialize};

/// Body of `POST /api/shorten`.
///
/// A missing or `null` `originalUrl` is treated as empty, which then fails
/// URL validation like any other malformed input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Carries a short URL on create and the original URL on lookup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlResponse {
    pub url: String,
}
