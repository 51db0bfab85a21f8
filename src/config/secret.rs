//! Credential wrappers built on the secrecy crate
//!
//! The catalog bearer token, the storefront client secret and the access
//! tokens handed out by the storefront all live in a [`SecretString`]. The
//! value is zeroed on drop, redacted in `Debug` output and only reachable
//! through `expose_secret()`.
//!
//! ```rust
//! use pricesync::config::{secret_string, redacted};
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("catsy-token-123".to_string());
//! assert_eq!(token.expose_secret().as_str(), "catsy-token-123");
//! assert_eq!(redacted(&token), "cats****");
//! assert!(!format!("{token:?}").contains("catsy-token-123"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, ExposeSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload stored inside a [`SecretString`]
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl SecretValue {
    /// True when no credential was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The credential as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Zeroizing, debug-redacted string credential
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Wraps an optional string, treating empty values as absent
#[inline]
pub fn secret_string_opt(value: Option<String>) -> Option<SecretString> {
    value.filter(|s| !s.is_empty()).map(secret_string)
}

/// Short, log-safe rendering of a credential: first four characters then `****`
pub fn redacted(secret: &SecretString) -> String {
    let prefix: String = secret.expose_secret().as_str().chars().take(4).collect();
    format!("{prefix}****")
}
