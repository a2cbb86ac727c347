//! HTTP request handlers for the bid-aggregation API.
//!
//! This module contains the Axum handlers for placement requests and health
//! checks.
//!
//! # Endpoints
//!
//! - `POST /placements/request` - Run one auction for a placement request
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use http::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::auction::{AuctionOutcome, AuctionService};
use crate::exchange::BidSource;
use crate::placement::{PlacementRequest, PlacementResponse};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the auction service.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: BidSource> {
    /// The auction service that runs the aggregation pipeline
    pub auction: Arc<AuctionService<S>>,
}

impl<S: BidSource> AppState<S> {
    /// Create a new application state with the given auction service.
    pub fn new(auction: AuctionService<S>) -> Self {
        Self {
            auction: Arc::new(auction),
        }
    }
}

impl<S: BidSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auction: Arc::clone(&self.auction),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle placement requests.
///
/// # Endpoint
///
/// `POST /placements/request`
///
/// # Request Body
///
/// JSON-encoded placement request:
/// ```json
/// {
///   "id": "abc123",
///   "tiles": [{"id": 1, "width": 300, "ratio": 0.5}],
///   "context": {"ip": "10.0.0.1", "user_agent": "Mozilla/5.0"}
/// }
/// ```
///
/// # Response
///
/// - `201 Created`: JSON placement response with the winning imps
/// - `204 No Content`: No upstream produced a usable bid; empty body
/// - `400 Bad Request`: Undecodable or invalid request; empty body
///
/// Callers only ever see this 3-way outcome; individual upstream failures
/// are absorbed by the dispatcher and never surface here.
pub async fn placement_handler<S: BidSource + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Response {
    let placement: PlacementRequest = match serde_json::from_slice(&body) {
        Ok(placement) => placement,
        Err(e) => {
            warn!(error = %e, "Rejecting undecodable placement request");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if let Err(e) = placement.validate() {
        warn!(request_id = %placement.id, error = %e, "Rejecting invalid placement request");
        return StatusCode::BAD_REQUEST.into_response();
    }

    debug!(
        request_id = %placement.id,
        tiles = placement.tiles.len(),
        "Running auction"
    );

    match state.auction.run_auction(&placement).await {
        AuctionOutcome::NoBids => StatusCode::NO_CONTENT.into_response(),
        AuctionOutcome::Filled(response) => {
            debug!(
                request_id = %response.id,
                imps = response.imp.len(),
                "Placement filled"
            );
            created_response(&response)
        }
    }
}

/// Serialize a filled placement response behind a `201 Created`.
///
/// An encoding failure is logged at error level and the status is still
/// written, with an empty body.
fn created_response(response: &PlacementResponse) -> Response {
    match serde_json::to_vec(response) {
        Ok(body) => Response::builder()
            .status(StatusCode::CREATED)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        Err(e) => {
            error!(request_id = %response.id, error = %e, "Failed to encode placement response");
            StatusCode::CREATED.into_response()
        }
    }
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
