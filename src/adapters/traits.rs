//! Seams between the sync pipeline and the two remote APIs
//!
//! The pipeline only talks to these traits. The HTTP clients in
//! [`crate::adapters::catsy`] and [`crate::adapters::sparklayer`] are the
//! production implementations; tests substitute in-memory fakes.

use super::catsy::CatalogPage;
use super::sparklayer::{AccessToken, PushReceipt};
use crate::domain::{CatalogError, PricingUpdateItem, StorefrontError};
use async_trait::async_trait;

/// Read-only, offset-paginated catalog export
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of at most `limit` records starting at `offset`
    ///
    /// The total-count hint is only extracted when `offset` is zero.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and undecodable bodies.
    async fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> std::result::Result<CatalogPage, CatalogError>;

    /// Endpoint being paged, for logging
    fn endpoint(&self) -> &str;
}

/// Storefront pricing API
#[async_trait]
pub trait PricingTarget: Send + Sync {
    /// Exchange client credentials for a fresh access token
    ///
    /// # Errors
    ///
    /// [`StorefrontError::AuthenticationFailed`] on a non-success status,
    /// [`StorefrontError::InvalidResponse`] when the token is missing.
    async fn request_token(&self) -> std::result::Result<AccessToken, StorefrontError>;

    /// Send one batch to the bulk pricing endpoint
    ///
    /// # Errors
    ///
    /// [`StorefrontError::PushRejected`] for any status other than
    /// 200/201/204, [`StorefrontError::ConnectionFailed`] on transport errors.
    async fn push_pricing(
        &self,
        token: &AccessToken,
        items: &[PricingUpdateItem],
    ) -> std::result::Result<PushReceipt, StorefrontError>;
}
