//! Upstream ad-exchange boundary.
//!
//! Everything the gateway knows about talking to upstream bidders lives
//! here: the bid-request/bid-response wire model and the [`BidSource`]
//! trait behind which the HTTP client sits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            AuctionService               │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │            BidSource Trait              │
//! │   (one call per configured endpoint)    │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │            HttpBidSource                │
//! │  POST http://{endpoint}/bid_request     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Tests swap in scripted [`BidSource`] implementations, so the auction
//! pipeline never needs a live network to be exercised.

mod client;
mod types;

pub use client::{BidSource, HttpBidSource, BID_REQUEST_PATH};
pub use types::{AdImp, AdRequest, AdResponse, AdResponseImp};
