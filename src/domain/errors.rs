//! Domain error types
//!
//! Errors are grouped by the remote system they come from. None of them
//! expose third-party types; HTTP client errors are stringified at the
//! adapter boundary.

use thiserror::Error;

/// Main pricesync error type
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog (source) errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Storefront (target) errors
    #[error("Storefront error: {0}")]
    Storefront(#[from] StorefrontError),

    /// Record transformation errors
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Snapshot export errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while paging through the catalog export endpoint
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request never produced a response
    #[error("Failed to reach catalog: {0}")]
    ConnectionFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Catalog returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Body could not be decoded as a page
    #[error("Invalid catalog page: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the storefront pricing API
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Token request was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request never produced a response
    #[error("Failed to reach storefront: {0}")]
    ConnectionFailed(String),

    /// Response could not be decoded
    #[error("Invalid response from storefront: {0}")]
    InvalidResponse(String),

    /// Bulk update answered with a non-success status
    #[error("Pricing update rejected with status {status}: {detail}")]
    PushRejected { status: u16, detail: String },
}

/// Reasons a single catalog record cannot become a pricing update
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// SKU has a type that cannot be used as an identifier
    #[error("Unsupported SKU value: {0}")]
    InvalidSku(String),

    /// price_trade is not a finite number
    #[error("Invalid price_trade value for SKU {sku}: {value}")]
    InvalidPrice { sku: String, value: String },
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for SyncError {
    fn from(err: csv::Error) -> Self {
        SyncError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_error_display() {
        let err = SyncError::Configuration("SITE_ID is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: SITE_ID is not set");
    }

    #[test]
    fn test_storefront_error_conversion() {
        let err: SyncError = StorefrontError::AuthenticationFailed("401".to_string()).into();
        assert!(matches!(
            err,
            SyncError::Storefront(StorefrontError::AuthenticationFailed(_))
        ));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::UnexpectedStatus {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog returned status 503: maintenance");
    }

    #[test]
    fn test_invalid_price_display() {
        let err = TransformError::InvalidPrice {
            sku: "ABC-1".to_string(),
            value: "\"n/a\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price_trade value for SKU ABC-1: \"n/a\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SyncError = io_err.into();
        assert!(matches!(err, SyncError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: SyncError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
