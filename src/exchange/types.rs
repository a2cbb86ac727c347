//! Wire model for upstream bid traffic.
//!
//! The outbound side serializes strictly. The inbound side decodes leniently:
//! a bidder that omits fields gets zero values for them, and only a body that
//! is not valid JSON for this shape at all counts as malformed. A zero-priced
//! bid is still a bid and can win its tile.

use serde::{Deserialize, Serialize};

use crate::placement::Context;

// =============================================================================
// Outbound: bid request
// =============================================================================

/// The bid request POSTed to every configured upstream.
///
/// Built once per placement request and shared read-only across all
/// concurrent upstream calls.
#[derive(Debug, Clone, Serialize)]
pub struct AdRequest {
    /// The originating placement request id
    pub id: String,

    /// One imp per requested tile, carrying its minimum dimensions
    pub imp: Vec<AdImp>,

    /// End-user context, forwarded verbatim
    pub context: Context,
}

/// Size constraints for one tile, as sent upstream.
#[derive(Debug, Clone, Serialize)]
pub struct AdImp {
    /// Tile id
    pub id: u64,

    /// Minimum creative width in pixels
    pub minwidth: u32,

    /// Minimum creative height in pixels
    pub minheight: u32,
}

// =============================================================================
// Inbound: bid response
// =============================================================================

/// One upstream bidder's reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdResponse {
    /// Echoed request id; informational only
    pub id: String,

    /// Zero or more bid candidates
    pub imp: Vec<AdResponseImp>,
}

/// A single bid candidate for a tile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdResponseImp {
    /// Tile id this bid targets
    pub id: u64,

    /// Creative width in pixels
    pub width: u32,

    /// Creative height in pixels
    pub height: u32,

    /// Ad title
    pub title: String,

    /// Click-through URL
    pub url: String,

    /// Bid price; compared across upstreams, never exposed to the caller
    pub price: f64,
}

// =============================================================================
// Tests
// =============================================================================
