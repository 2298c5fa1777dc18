use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Plain JSON-over-HTTP client for the member feed.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        info!("[ApiClient] Created HTTP client");
        Ok(Self { client })
    }

    /// Add `http://` when no scheme was given and trim trailing slashes, so
    /// values like `localhost:3000/members.json` still resolve.
    pub fn normalize_url(raw: &str) -> String {
        let trimmed = raw.trim().trim_end_matches('/');
        let normalized = if trimmed.starts_with("http://")
            || trimmed.starts_with("https://")
        {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
        if normalized != raw {
            log::warn!(
                "[ApiClient] Normalized URL from '{}' to '{}'",
                raw,
                normalized
            );
        }
        normalized
    }

    /// GET `url` and decode the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let url = Self::normalize_url(url);
        debug!("[ApiClient] GET request to: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!(
                "Request to {} failed with status {}: {}",
                url,
                status,
                error_text
            );
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Invalid JSON body from {}", url))
    }
}
