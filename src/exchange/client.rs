//! Upstream bid client.
//!
//! [`BidSource`] is the seam between the auction pipeline and the network.
//! The production implementation, [`HttpBidSource`], POSTs the bid request
//! to each endpoint over plain HTTP; tests substitute scripted sources.
//!
//! A call succeeds only when the upstream answers 200 OK or 201 Created
//! with a decodable bid-response body. Anything else is a [`SourceError`],
//! which the dispatcher treats as "no bid" from that endpoint. Timeouts are
//! not enforced here; the dispatcher bounds each call from the outside so
//! the budget covers the entire call, including body decode.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::SourceError;

use super::types::{AdRequest, AdResponse};

/// Path every upstream bidder serves bid requests on.
pub const BID_REQUEST_PATH: &str = "bid_request";

// =============================================================================
// BidSource Trait
// =============================================================================

/// Trait for requesting bids from one upstream endpoint.
///
/// Implementations must be cheap to call concurrently: the dispatcher issues
/// one call per configured endpoint against a single shared source.
#[async_trait]
pub trait BidSource: Send + Sync {
    /// Request bids for `request` from the upstream at `endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Upstream address as `host:port`
    /// * `request` - The bid request shared across all concurrent calls
    ///
    /// # Returns
    /// The upstream's bid response, or the reason this call produced no bid.
    async fn request_bids(
        &self,
        endpoint: &str,
        request: &AdRequest,
    ) -> Result<AdResponse, SourceError>;
}

// =============================================================================
// HTTP implementation
// =============================================================================

/// [`BidSource`] backed by a reqwest HTTP client.
///
/// Connection pooling is disabled so no upstream connection outlives the
/// placement request that opened it.
#[derive(Debug, Clone)]
pub struct HttpBidSource {
    client: reqwest::Client,
}

impl HttpBidSource {
    /// Create a source with a fresh non-pooling client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Create a source around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Full bid-request URL for an upstream address.
    fn bid_url(endpoint: &str) -> String {
        format!("http://{}/{}", endpoint, BID_REQUEST_PATH)
    }

    fn is_bid_status(status: StatusCode) -> bool {
        status == StatusCode::OK || status == StatusCode::CREATED
    }
}

impl Default for HttpBidSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BidSource for HttpBidSource {
    async fn request_bids(
        &self,
        endpoint: &str,
        request: &AdRequest,
    ) -> Result<AdResponse, SourceError> {
        let response = self
            .client
            .post(Self::bid_url(endpoint))
            .json(request)
            .send()
            .await
            .map_err(|e| SourceError::Connection(e.to_string()))?;

        let status = response.status();
        if !Self::is_bid_status(status) {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<AdResponse>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
