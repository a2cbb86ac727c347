//! Winner selection and response assembly.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::exchange::AdResponseImp;
use crate::placement::{PlacementImp, PlacementRequest, PlacementResponse};

/// Reduce collected bid candidates to one winner per tile id.
///
/// Single pass over the input: a candidate replaces the current winner for
/// its tile only when its price is strictly greater. On an equal price the
/// earlier candidate stays, so for a fixed input order the outcome is fully
/// deterministic. The input order is bid arrival order, so the equal-price
/// tie-break follows arrival order.
///
/// A price of zero is a bid like any other and can win a tile.
pub fn select_winners(imps: Vec<AdResponseImp>) -> HashMap<u64, AdResponseImp> {
    imps.into_iter().fold(HashMap::new(), |mut winners, imp| {
        match winners.entry(imp.id) {
            Entry::Vacant(slot) => {
                slot.insert(imp);
            }
            Entry::Occupied(mut current) => {
                // Strictly greater replaces; equal keeps the first seen
                if imp.price > current.get().price {
                    current.insert(imp);
                }
            }
        }
        winners
    })
}

/// Build the final response from the winners map.
///
/// Walks the original tile list in the caller's order and emits one imp per
/// tile that has a winner; tiles without one are omitted entirely. The bid
/// price is dropped here and never serialized. The response id is the
/// original request id, unchanged.
pub fn assemble(
    winners: &HashMap<u64, AdResponseImp>,
    placement: &PlacementRequest,
) -> PlacementResponse {
    let imp = placement
        .tiles
        .iter()
        .filter_map(|tile| winners.get(&tile.id))
        .map(|winner| PlacementImp {
            id: winner.id,
            width: winner.width,
            height: winner.height,
            title: winner.title.clone(),
            url: winner.url.clone(),
        })
        .collect();

    PlacementResponse {
        id: placement.id.clone(),
        imp,
    }
}

// =============================================================================
// Tests
// =============================================================================
