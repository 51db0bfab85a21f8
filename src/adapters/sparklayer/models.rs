//! SparkLayer request and response models

use crate::config::{secret_string, SecretString};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client-credentials token request body
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// Token endpoint response
///
/// Only `access_token` matters; anything else the endpoint returns is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Storefront access token, valid for an unspecified duration
///
/// Never cached: every batch asks for a fresh one.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wraps a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(secret_string(token.into()))
    }

    /// The raw token, for the Authorization header only
    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_str()
    }
}

/// Successful bulk update response
#[derive(Debug, Clone, PartialEq)]
pub struct PushReceipt {
    /// HTTP status (200, 201 or 204)
    pub status: u16,

    /// Decoded response body, if the endpoint returned one
    pub body: Option<Value>,
}
