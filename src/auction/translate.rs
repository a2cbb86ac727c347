//! Placement-to-bid-request translation.

use crate::exchange::{AdImp, AdRequest};
use crate::placement::PlacementRequest;

/// Build the upstream bid request for a validated placement request.
///
/// Each tile becomes one imp: the tile width is the minimum width, and the
/// minimum height is derived from the aspect ratio. The context is forwarded
/// verbatim and the request id is kept so bidders can echo it back.
///
/// Pure function; callers are responsible for validating the placement
/// first, this does not re-check it.
pub fn translate(placement: &PlacementRequest) -> AdRequest {
    let imp = placement
        .tiles
        .iter()
        .map(|tile| AdImp {
            id: tile.id,
            minwidth: tile.width,
            minheight: min_height(tile.width, tile.ratio),
        })
        .collect();

    AdRequest {
        id: placement.id.clone(),
        imp,
        context: placement.context.clone(),
    }
}

/// Minimum creative height for a tile: floor(width * ratio).
///
/// Truncates, never rounds. A 99px tile at ratio 0.333 asks for a 32px
/// minimum height, not 33.
fn min_height(width: u32, ratio: f64) -> u32 {
    (f64::from(width) * ratio).floor() as u32
}
