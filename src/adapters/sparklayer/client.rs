//! HTTP client for the SparkLayer auth and pricing endpoints

use super::models::{AccessToken, PushReceipt, TokenRequest, TokenResponse};
use crate::adapters::{preview, PricingTarget};
use crate::config::{SecretString, SparkLayerConfig};
use crate::domain::{PricingUpdateItem, Result, StorefrontError, SyncError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Response};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Header scoping every call to one storefront
const SITE_ID_HEADER: &str = "Site-Id";

/// Statuses the bulk pricing endpoint uses for success
const PUSH_SUCCESS_STATUSES: [u16; 3] = [200, 201, 204];

/// SparkLayer pricing client
///
/// Authenticates with a client-credentials grant and PATCHes price list
/// entries in bulk.
pub struct SparkLayerClient {
    base_url: String,
    site_id: String,
    client_id: String,
    client_secret: SecretString,
    resource: String,
    client: Client,
    auth_timeout: Duration,
    push_timeout: Duration,
}

impl SparkLayerClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL or any credential is missing.
    pub fn new(config: &SparkLayerConfig) -> Result<Self> {
        let required = |value: &Option<String>, name: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SyncError::Configuration(format!("sparklayer.{name} is required")))
        };

        let base_url = required(&config.base_url, "base_url")?;
        let site_id = required(&config.site_id, "site_id")?;
        let client_id = required(&config.client_id, "client_id")?;
        let client_secret = config.client_secret.clone().ok_or_else(|| {
            SyncError::Configuration("sparklayer.client_secret is required".to_string())
        })?;

        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to build storefront HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            site_id,
            client_id,
            client_secret,
            resource: config.price_list_resource.trim_matches('/').to_string(),
            client,
            auth_timeout: Duration::from_secs(config.auth_timeout_seconds),
            push_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Token endpoint URL
    pub fn token_url(&self) -> String {
        format!("{}/api/auth/token", self.base_url)
    }

    /// Bulk pricing endpoint URL
    pub fn pricing_url(&self) -> String {
        format!("{}/api/v1/{}", self.base_url, self.resource)
    }
}

#[async_trait]
impl PricingTarget for SparkLayerClient {
    async fn request_token(&self) -> std::result::Result<AccessToken, StorefrontError> {
        let url = self.token_url();
        tracing::info!("Requesting new access token from SparkLayer");
        tracing::debug!(token_url = %url, "Token request");

        let body = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret().as_str(),
        };

        let response = self
            .client
            .post(&url)
            .header(SITE_ID_HEADER, self.site_id.as_str())
            .header(ACCEPT, "application/json")
            .json(&body)
            .timeout(self.auth_timeout)
            .send()
            .await
            .map_err(|e| {
                StorefrontError::AuthenticationFailed(format!("Token request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(StorefrontError::AuthenticationFailed(format!(
                "Token request failed with status {}: {}",
                status.as_u16(),
                preview(&text)
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            StorefrontError::InvalidResponse(format!("Failed to parse token response: {e}"))
        })?;

        match token.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::info!("Access token obtained successfully");
                Ok(AccessToken::new(token))
            }
            None => Err(StorefrontError::InvalidResponse(
                "Token response did not contain access_token".to_string(),
            )),
        }
    }

    async fn push_pricing(
        &self,
        token: &AccessToken,
        items: &[PricingUpdateItem],
    ) -> std::result::Result<PushReceipt, StorefrontError> {
        let response = self
            .client
            .patch(self.pricing_url())
            .bearer_auth(token.expose())
            .header(SITE_ID_HEADER, self.site_id.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(items)
            .timeout(self.push_timeout)
            .send()
            .await
            .map_err(|e| StorefrontError::ConnectionFailed(e.to_string()))?;

        let status = response.status().as_u16();
        if PUSH_SUCCESS_STATUSES.contains(&status) {
            let body = decode_body(response).await.ok().flatten();
            return Ok(PushReceipt { status, body });
        }

        Err(StorefrontError::PushRejected {
            status,
            detail: error_detail(response).await,
        })
    }
}

/// Decodes a JSON body, `None` when the body is empty
async fn decode_body(
    response: Response,
) -> std::result::Result<Option<serde_json::Value>, reqwest::Error> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_slice(&bytes).ok())
}

/// Structured error body when the endpoint returned JSON, otherwise a text preview
async fn error_detail(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => json.to_string(),
        Err(_) => preview(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::Sku;
    use mockito::Matcher;
    use serde_json::json;

    fn config(base_url: String) -> SparkLayerConfig {
        SparkLayerConfig {
            base_url: Some(base_url),
            site_id: Some("site-42".to_string()),
            client_id: Some("cid".to_string()),
            client_secret: Some(secret_string("csecret".to_string())),
            ..Default::default()
        }
    }

    fn items() -> Vec<PricingUpdateItem> {
        vec![
            PricingUpdateItem::single_unit(Sku::new("A-1").unwrap(), 10.0).unwrap(),
            PricingUpdateItem::single_unit(Sku::new("A-2").unwrap(), 12.5).unwrap(),
        ]
    }

    #[test]
    fn test_urls() {
        let client = SparkLayerClient::new(&config("https://spark.example/".to_string())).unwrap();
        assert_eq!(client.token_url(), "https://spark.example/api/auth/token");
        assert_eq!(
            client.pricing_url(),
            "https://spark.example/api/v1/price-lists/wholesale/pricing"
        );
    }

    #[test]
    fn test_new_requires_credentials() {
        let mut cfg = config("https://spark.example".to_string());
        cfg.client_id = None;
        assert!(matches!(
            SparkLayerClient::new(&cfg),
            Err(SyncError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_request_token_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/token")
            .match_header("site-id", "site-42")
            .match_body(Matcher::Json(json!({
                "grant_type": "client_credentials",
                "client_id": "cid",
                "client_secret": "csecret"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"access_token": "tok-1", "expires_in": 3600}).to_string())
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let token = client.request_token().await.unwrap();

        mock.assert_async().await;
        assert_eq!(token.expose(), "tok-1");
    }

    #[tokio::test]
    async fn test_request_token_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/auth/token")
            .with_status(401)
            .with_body(json!({"error": "invalid_client"}).to_string())
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let err = client.request_token().await.unwrap_err();
        assert!(matches!(err, StorefrontError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_request_token_missing_field() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/auth/token")
            .with_status(200)
            .with_body(json!({"token_type": "bearer"}).to_string())
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let err = client.request_token().await.unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_push_pricing_success_with_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v1/price-lists/wholesale/pricing")
            .match_header("authorization", "Bearer tok-1")
            .match_header("site-id", "site-42")
            .match_body(Matcher::Json(json!([
                {"sku": "A-1", "pricing": [{"quantity": 1, "price": 10.0, "unit_of_measure": null}]},
                {"sku": "A-2", "pricing": [{"quantity": 1, "price": 12.5, "unit_of_measure": null}]}
            ])))
            .with_status(204)
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let receipt = client
            .push_pricing(&AccessToken::new("tok-1"), &items())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(receipt.status, 204);
        assert!(receipt.body.is_none());
    }

    #[tokio::test]
    async fn test_push_pricing_rejected_with_json_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PATCH", "/api/v1/price-lists/wholesale/pricing")
            .with_status(422)
            .with_body(json!({"message": "unknown sku"}).to_string())
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let err = client
            .push_pricing(&AccessToken::new("tok-1"), &items())
            .await
            .unwrap_err();

        match err {
            StorefrontError::PushRejected { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("unknown sku"));
            }
            other => panic!("Expected PushRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_push_pricing_accepted_status_is_not_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PATCH", "/api/v1/price-lists/wholesale/pricing")
            .with_status(202)
            .create_async()
            .await;

        let client = SparkLayerClient::new(&config(server.url())).unwrap();
        let result = client.push_pricing(&AccessToken::new("t"), &items()).await;
        assert!(matches!(
            result,
            Err(StorefrontError::PushRejected { status: 202, .. })
        ));
    }
}
