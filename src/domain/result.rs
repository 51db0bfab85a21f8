//! Result type alias for pricesync

use super::errors::SyncError;

/// Result type alias using [`SyncError`] as the error type
///
/// # Examples
///
/// ```
/// use pricesync::domain::result::Result;
/// use pricesync::domain::errors::SyncError;
///
/// fn require_site(site_id: &str) -> Result<()> {
///     if site_id.is_empty() {
///         return Err(SyncError::Configuration("site id missing".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(require_site("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, SyncError>;
