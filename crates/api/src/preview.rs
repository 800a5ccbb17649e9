//! Link-preview metadata client.
//!
//! The admin panel shows a title/description/image card when the curator
//! pastes an article URL. Metadata extraction is delegated to a hosted
//! service with a microlink-compatible response shape; this module validates
//! the URL, makes the call, and flattens the response.

use serde::{Deserialize, Serialize};

use crate::config::PreviewConfig;

/// Upstream call timeout. A hung metadata fetch must not hold the request
/// open for the full server timeout.
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Failure fetching link metadata.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The submitted URL is not a fetchable http(s) URL.
    #[error("invalid preview URL: {0}")]
    InvalidUrl(String),

    /// The metadata service failed or returned an unusable response.
    #[error("metadata service error: {0}")]
    Upstream(String),
}

/// Flattened metadata for a previewed link.
#[derive(Debug, Clone, Serialize)]
pub struct LinkMetadata {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// Response envelope of the metadata service.
#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    status: String,
    #[serde(default)]
    data: UpstreamData,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<UpstreamImage>,
}

#[derive(Debug, Deserialize)]
struct UpstreamImage {
    url: Option<String>,
}

/// Client for the metadata service.
pub struct LinkPreviewClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LinkPreviewClient {
    pub fn new(config: &PreviewConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("reqwest client construction cannot fail with static options");
        LinkPreviewClient {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch title/description/image for `url`.
    ///
    /// The URL is validated first; the service is never called for
    /// non-http(s) input.
    pub async fn fetch(&self, url: &str) -> Result<LinkMetadata, PreviewError> {
        validate_preview_url(url)?;

        let mut request = self.http.get(&self.endpoint).query(&[("url", url)]);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PreviewError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PreviewError::Upstream(format!(
                "metadata service returned {}",
                response.status()
            )));
        }

        let body: UpstreamResponse = response
            .json()
            .await
            .map_err(|e| PreviewError::Upstream(e.to_string()))?;

        if body.status != "success" {
            return Err(PreviewError::Upstream(format!(
                "metadata service status: {}",
                body.status
            )));
        }

        Ok(LinkMetadata {
            title: body.data.title.unwrap_or_default(),
            description: body.data.description.unwrap_or_default(),
            image: body.data.image.and_then(|i| i.url),
        })
    }
}

/// Accept only absolute http(s) URLs with a host.
pub fn validate_preview_url(url: &str) -> Result<(), PreviewError> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| PreviewError::InvalidUrl(format!("not an http(s) URL: {url}")))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || !host.contains('.') {
        return Err(PreviewError::InvalidUrl(format!("missing host: {url}")));
    }
    Ok(())
}
