//! # tilebid
//!
//! A bid-aggregation gateway for tiled ad placements.
//!
//! This library accepts one placement request describing a set of ad tiles,
//! fans it out concurrently to every configured upstream bidder, collects
//! the bids that arrive within a hard per-call timeout, and merges them
//! into one response that keeps, per tile, the highest-priced bid.
//!
//! ## Features
//!
//! - **Concurrent fan-out**: one bounded call per upstream, none blocking the others
//! - **Abandonment, not retries**: a slow or failing upstream just contributes no bid
//! - **Per-request fan-in barrier**: results stream in until every call has resolved
//! - **Price-based selection**: strictly higher price wins a tile, first-seen wins ties
//! - **Order-preserving assembly**: the response lists tiles in the caller's order
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`placement`] - Inbound/outbound wire model and semantic validation
//! - [`exchange`] - Upstream wire model, [`BidSource`] trait, HTTP client
//! - [`auction`] - The aggregation engine: translate, dispatch, collect, select, assemble
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use tilebid::{create_router, AuctionService, HttpBidSource, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = AuctionService::new(
//!         HttpBidSource::new(),
//!         vec!["ads-a:9000".to_string(), "ads-b:9000".to_string()],
//!         Duration::from_millis(200),
//!     );
//!
//!     let router = create_router(service, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod auction;
pub mod config;
pub mod error;
pub mod exchange;
pub mod placement;
pub mod server;

// Re-export commonly used types
pub use auction::{
    assemble, collect, dispatch, select_winners, translate, AuctionOutcome, AuctionService,
};
pub use config::Config;
pub use error::{SourceError, ValidationError};
pub use exchange::{
    AdImp, AdRequest, AdResponse, AdResponseImp, BidSource, HttpBidSource, BID_REQUEST_PATH,
};
pub use placement::{Context, PlacementImp, PlacementRequest, PlacementResponse, Tile};
pub use server::{
    create_router, health_handler, placement_handler, AppState, HealthResponse, RouterConfig,
    DEFAULT_REQUEST_TIMEOUT,
};
