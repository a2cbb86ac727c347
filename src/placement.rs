//! Inbound and outbound wire model for placement requests.
//!
//! A placement request names a set of tiles (ad slots) the caller wants
//! filled, plus the end-user context that upstream bidders price against.
//! The matching response carries at most one filled imp per requested tile,
//! in the caller's tile order, with bid prices stripped.
//!
//! Decoding is strict: every field below is required, and a request missing
//! any of them fails to decode and is rejected. Values that decode but
//! describe an unusable placement are caught by [`PlacementRequest::validate`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Placement Request
// =============================================================================

/// An inbound request to fill a set of ad tiles.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementRequest {
    /// Opaque request identifier, echoed back in the response
    pub id: String,

    /// Tiles to auction, in the order the caller wants them back
    pub tiles: Vec<Tile>,

    /// End-user context forwarded to every upstream bidder
    pub context: Context,
}

/// A single ad slot with its size constraints.
#[derive(Debug, Clone, Deserialize)]
pub struct Tile {
    /// Tile identifier, unique within the request
    pub id: u64,

    /// Target width in pixels
    pub width: u32,

    /// Height-to-width aspect ratio; the minimum height sent upstream is
    /// floor(width * ratio)
    pub ratio: f64,
}

/// End-user context attached to a placement request.
///
/// Forwarded verbatim on every outbound bid request, so the same type
/// decodes the inbound side and encodes the upstream side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Client IP address
    pub ip: String,

    /// Client user agent string
    pub user_agent: String,
}

impl PlacementRequest {
    /// Check that a structurally decoded request describes a usable auction.
    ///
    /// Runs once at the transport boundary, before translation; the auction
    /// pipeline itself never re-validates.
    ///
    /// # Errors
    ///
    /// Returns the first problem found:
    /// - empty request id
    /// - empty tile list
    /// - a tile with zero width
    /// - a tile whose ratio is not a positive finite number
    /// - empty context ip or user agent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyRequestId);
        }
        if self.tiles.is_empty() {
            return Err(ValidationError::NoTiles);
        }
        for tile in &self.tiles {
            if tile.width == 0 {
                return Err(ValidationError::InvalidWidth { id: tile.id });
            }
            if !tile.ratio.is_finite() || tile.ratio <= 0.0 {
                return Err(ValidationError::InvalidRatio { id: tile.id });
            }
        }
        if self.context.ip.is_empty() {
            return Err(ValidationError::EmptyIp);
        }
        if self.context.user_agent.is_empty() {
            return Err(ValidationError::EmptyUserAgent);
        }
        Ok(())
    }
}

// =============================================================================
// Placement Response
// =============================================================================

/// The final aggregated response for a placement request.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementResponse {
    /// The original request id, unchanged
    pub id: String,

    /// Winning imps in the original tile order; tiles that drew no bid
    /// are omitted entirely
    pub imp: Vec<PlacementImp>,
}

/// A winning ad for one tile.
///
/// Carries the creative fields of the winning bid; the price never leaves
/// the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementImp {
    /// Tile id this imp fills
    pub id: u64,

    /// Creative width in pixels
    pub width: u32,

    /// Creative height in pixels
    pub height: u32,

    /// Ad title
    pub title: String,

    /// Click-through URL
    pub url: String,
}

// =============================================================================
// Tests
// =============================================================================
