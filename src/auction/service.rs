//! Auction service orchestrating one aggregation pass per request.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::exchange::BidSource;
use crate::placement::{PlacementRequest, PlacementResponse};

use super::dispatch::{collect, dispatch};
use super::select::{assemble, select_winners};
use super::translate::translate;

// =============================================================================
// Auction Outcome
// =============================================================================

/// Terminal outcome of one auction pass.
///
/// Aggregation itself cannot fail: upstream problems only shrink the bid
/// pool, and an empty pool is the distinct [`AuctionOutcome::NoBids`]
/// outcome rather than an error.
#[derive(Debug, Clone)]
pub enum AuctionOutcome {
    /// At least one tile drew a winning bid
    Filled(PlacementResponse),

    /// No upstream produced a usable bid for any tile
    NoBids,
}

// =============================================================================
// Auction Service
// =============================================================================

/// Runs the full aggregation pipeline for placement requests.
///
/// One call to [`run_auction`](AuctionService::run_auction) performs exactly
/// one pass: translate, dispatch to every configured endpoint, collect until
/// all calls resolve, select winners, assemble. All per-request state lives
/// on the call's stack; the service itself only holds the static endpoint
/// list, the per-call timeout, and the shared [`BidSource`].
///
/// # Type Parameters
///
/// * `S` - The bid source implementation (HTTP in production, scripted in
///   tests)
///
/// # Example
///
/// ```ignore
/// use tilebid::auction::AuctionService;
/// use tilebid::exchange::HttpBidSource;
///
/// let service = AuctionService::new(
///     HttpBidSource::new(),
///     vec!["ads-a:9000".to_string(), "ads-b:9000".to_string()],
///     std::time::Duration::from_millis(200),
/// );
///
/// match service.run_auction(&placement).await {
///     AuctionOutcome::Filled(response) => println!("{} tiles filled", response.imp.len()),
///     AuctionOutcome::NoBids => println!("no bids"),
/// }
/// ```
pub struct AuctionService<S: BidSource> {
    /// Shared bid source; one instance serves all concurrent calls
    source: Arc<S>,

    /// Upstream endpoints, fixed at startup
    endpoints: Vec<String>,

    /// Per-call timeout applied to each upstream call independently
    bid_timeout: Duration,
}

impl<S: BidSource + 'static> AuctionService<S> {
    /// Create a service that owns its bid source.
    pub fn new(source: S, endpoints: Vec<String>, bid_timeout: Duration) -> Self {
        Self {
            source: Arc::new(source),
            endpoints,
            bid_timeout,
        }
    }

    /// Create a service over an already shared bid source.
    pub fn with_shared_source(source: Arc<S>, endpoints: Vec<String>, bid_timeout: Duration) -> Self {
        Self {
            source,
            endpoints,
            bid_timeout,
        }
    }

    /// The configured upstream endpoints.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// The per-call upstream timeout.
    pub fn bid_timeout(&self) -> Duration {
        self.bid_timeout
    }

    /// Run one auction for a validated placement request.
    ///
    /// Suspends until every upstream call has resolved (response, error, or
    /// timeout), never longer than the per-call timeout plus scheduling
    /// noise. The placement must have passed
    /// [`validate`](PlacementRequest::validate); this does not re-check it.
    pub async fn run_auction(&self, placement: &PlacementRequest) -> AuctionOutcome {
        let request = Arc::new(translate(placement));

        let stream = dispatch(
            Arc::clone(&self.source),
            &self.endpoints,
            self.bid_timeout,
            request,
        );
        let imps = collect(stream).await;

        if imps.is_empty() {
            debug!(request_id = %placement.id, "Auction collected no bids");
            return AuctionOutcome::NoBids;
        }
        debug!(
            request_id = %placement.id,
            candidates = imps.len(),
            "Auction collected bids"
        );

        let winners = select_winners(imps);
        AuctionOutcome::Filled(assemble(&winners, placement))
    }
}

// =============================================================================
// Tests
// =============================================================================
