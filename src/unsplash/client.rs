//! HTTP client creation and request handling for the Unsplash API.

use anyhow::{Context, Result};
use reqwest::header;
use tracing::debug;
use url::Url;

use super::types::{DownloadResponse, Photo, SearchResponse};
use crate::config::Config;
use crate::TARGET_PHOTO_API;

/// Content-safety level applied to every search request.
const CONTENT_FILTER: &str = "high";

#[derive(Clone, Debug)]
pub struct UnsplashClient {
    http: reqwest::Client,
    api_url: Url,
    api_key: String,
}

impl UnsplashClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(UnsplashClient {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .with_context(|| format!("Invalid API endpoint path: {}", path))
    }

    fn authorization(&self) -> String {
        format!("Client-ID {}", self.api_key)
    }

    /// Search photos for one keyword, capped at `per_page` results.
    pub async fn search_photos(&self, keyword: &str, per_page: usize) -> Result<Vec<Photo>> {
        let url = self.endpoint("/search/photos")?;
        debug!(target: TARGET_PHOTO_API, "Searching photos for '{}' ({} per page)", keyword, per_page);

        let per_page = per_page.to_string();
        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, self.authorization())
            .query(&[
                ("query", keyword),
                ("per_page", per_page.as_str()),
                ("content_filter", CONTENT_FILTER),
            ])
            .send()
            .await
            .with_context(|| format!("Search request for '{}' failed", keyword))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Search for '{}' returned status {}",
                keyword,
                response.status()
            );
        }

        let body: SearchResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to decode search response for '{}'", keyword))?;

        debug!(target: TARGET_PHOTO_API, "Search for '{}' returned {} photos", keyword, body.results.len());
        Ok(body.results)
    }

    /// Resolve the short-lived full-resolution asset URL for a photo.
    pub async fn resolve_download_url(&self, photo_id: &str) -> Result<String> {
        let url = self.endpoint(&format!("/photos/{}/download", photo_id))?;
        debug!(target: TARGET_PHOTO_API, "Resolving download URL for photo {}", photo_id);

        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, self.authorization())
            .send()
            .await
            .with_context(|| format!("Download request for photo {} failed", photo_id))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Download endpoint for photo {} returned status {}",
                photo_id,
                response.status()
            );
        }

        let body: DownloadResponse = response.json().await.with_context(|| {
            format!("Failed to decode download response for photo {}", photo_id)
        })?;
        Ok(body.url)
    }

    /// Fetch the raw bytes of an already-resolved asset URL.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Asset request to {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Asset request to {} returned status {}", url, response.status());
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read asset bytes from {}", url))?;
        Ok(bytes.to_vec())
    }
}
