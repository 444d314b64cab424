// API client module: a small blocking HTTP client that downloads the
// catalog document. It only moves bytes; decoding happens in the service.

use crate::config::Config;
use crate::error::CatalogError;
use crate::service::BookSource;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

/// Holds a reqwest blocking client and the catalog URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

impl ApiClient {
    /// Create an ApiClient from the configuration. With `config.timeout`
    /// unset a slow server may block the request indefinitely.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            url: config.url.clone(),
        })
    }

    /// The catalog URL this client downloads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BookSource for ApiClient {
    /// GET the catalog URL and return the raw body.
    fn fetch(&self) -> Result<Vec<u8>, CatalogError> {
        debug!(url = %self.url, "fetching catalog");
        let res = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| CatalogError::Retrieval(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_default();
            return Err(CatalogError::Retrieval(format!(
                "unexpected status {}: {}",
                status,
                txt.trim()
            )));
        }

        let body = res.bytes().map_err(|e| CatalogError::Read(e.to_string()))?;
        Ok(body.to_vec())
    }
}
