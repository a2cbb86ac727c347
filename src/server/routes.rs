//! Router configuration for the bid-aggregation gateway.
//!
//! This module defines the HTTP routes and applies the transport-level
//! timeout and tracing middleware.
//!
//! # Route Structure
//!
//! ```text
//! /health                - Health check
//! /placements/request    - Placement auction endpoint (POST)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tilebid::server::routes::{create_router, RouterConfig};
//! use tilebid::auction::AuctionService;
//! use tilebid::exchange::HttpBidSource;
//!
//! // Create the auction service
//! let service = AuctionService::new(
//!     HttpBidSource::new(),
//!     vec!["ads-a:9000".to_string()],
//!     std::time::Duration::from_millis(200),
//! );
//!
//! // Configure and create router
//! let config = RouterConfig::new().with_request_timeout(Duration::from_millis(250));
//! let router = create_router(service, config);
//!
//! // Run the server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, placement_handler, AppState};
use crate::auction::AuctionService;
use crate::exchange::BidSource;

/// Default outer request timeout.
///
/// Independent of the per-call upstream timeout: it bounds the whole
/// inbound exchange, response write included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(250);

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Outer timeout applied to every inbound request
    pub request_timeout: Duration,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with default settings.
    ///
    /// By default:
    /// - The request timeout is 250 ms
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            enable_tracing: true,
        }
    }

    /// Set the outer request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The placement auction endpoint
/// - The health check endpoint
/// - The outer request timeout
/// - Request tracing (optional)
///
/// # Arguments
///
/// * `auction` - The auction service handling placement requests
/// * `config` - Router configuration
///
/// # Returns
///
/// A configured Axum router ready to be served.
pub fn create_router<S>(auction: AuctionService<S>, config: RouterConfig) -> Router
where
    S: BidSource + 'static,
{
    let app_state = AppState::new(auction);

    let router = Router::new()
        .route("/placements/request", post(placement_handler::<S>))
        .route("/health", get(health_handler))
        .with_state(app_state)
        .layer(TimeoutLayer::new(config.request_timeout));

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
