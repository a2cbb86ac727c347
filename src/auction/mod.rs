//! The bid-aggregation engine.
//!
//! One placement request makes exactly one pass through this pipeline:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  translate   │──▶│   dispatch   │──▶│   collect    │
//! │ tiles → imps │   │ N concurrent │   │ drain until  │
//! │ (pure)       │   │ bounded calls│   │ stream close │
//! └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                              │
//!                    ┌──────────────┐   ┌──────▼───────┐
//!                    │   assemble   │◀──│select_winners│
//!                    │ caller order │   │ price fold   │
//!                    └──────────────┘   └──────────────┘
//! ```
//!
//! Data flows strictly forward. Every value is created fresh per request
//! and dropped once the response is built; nothing here is shared between
//! concurrent placement requests. [`AuctionService`] wires the stages
//! together over any [`BidSource`](crate::exchange::BidSource).

mod dispatch;
mod select;
mod service;
mod translate;

pub use dispatch::{collect, dispatch};
pub use select::{assemble, select_winners};
pub use service::{AuctionOutcome, AuctionService};
pub use translate::translate;
