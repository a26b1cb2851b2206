use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default base URL of the photo-search API.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Runtime configuration, sourced from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Unsplash client credential, sent as `Client-ID` on every request.
    pub api_key: String,
    /// API base URL. Overridable via `UNSPLASH_API_URL`.
    pub api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("UNSPLASH_API_KEY")
            .context("UNSPLASH_API_KEY environment variable required")?;

        let api_url =
            env::var("UNSPLASH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)
            .with_context(|| format!("UNSPLASH_API_URL is not a valid URL: {}", api_url))?;

        Ok(Config { api_key, api_url })
    }
}
