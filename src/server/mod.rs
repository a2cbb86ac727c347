//! HTTP server layer for the bid-aggregation gateway.
//!
//! This module provides the HTTP API wrapping the auction engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │                 POST /placements/request                        │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌─────────────────────────────┐  │
//! │  │        handlers          │  │          routes             │  │
//! │  │ (decode, validate, map   │  │ (router config, timeout,    │  │
//! │  │  auction outcome to 3-   │  │  tracing layers)            │  │
//! │  │  way status)             │  │                             │  │
//! │  └──────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{health_handler, placement_handler, AppState, HealthResponse};
pub use routes::{create_router, RouterConfig, DEFAULT_REQUEST_TIMEOUT};
