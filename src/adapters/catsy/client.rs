//! HTTP client for the Catsy saved-query export endpoint

use super::models::CatalogPage;
use crate::adapters::{preview, CatalogSource};
use crate::config::{CatsyConfig, SecretString};
use crate::domain::{CatalogError, Result, SyncError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Catsy export client
///
/// Issues `GET <base_url>?limit=<n>&offset=<o>` with a bearer token.
///
/// # Example
///
/// ```no_run
/// use pricesync::adapters::{CatalogSource, CatsyClient};
/// use pricesync::config::{secret_string, CatsyConfig};
///
/// # async fn example() -> pricesync::domain::Result<()> {
/// let config = CatsyConfig {
///     bearer_token: Some(secret_string("token".to_string())),
///     ..Default::default()
/// };
/// let client = CatsyClient::new(&config, false)?;
/// let first_page = client.fetch_page(0, config.page_size).await?;
/// println!("{} items", first_page.len());
/// # Ok(())
/// # }
/// ```
pub struct CatsyClient {
    base_url: String,
    client: Client,
    bearer_token: SecretString,
    timeout: Duration,
    debug: bool,
}

impl CatsyClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no bearer token is set or the
    /// HTTP client cannot be built.
    pub fn new(config: &CatsyConfig, debug: bool) -> Result<Self> {
        let bearer_token = config.bearer_token.clone().ok_or_else(|| {
            SyncError::Configuration("catsy.bearer_token is required".to_string())
        })?;

        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to build catalog HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            bearer_token,
            timeout: Duration::from_secs(config.timeout_seconds),
            debug,
        })
    }
}

#[async_trait]
impl CatalogSource for CatsyClient {
    async fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> std::result::Result<CatalogPage, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("limit", limit), ("offset", offset)])
            .bearer_auth(self.bearer_token.expose_secret().as_str())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if self.debug {
            tracing::debug!(offset, status = status.as_u16(), "Catalog page response");
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        CatalogPage::from_body(body, offset == 0)
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}
