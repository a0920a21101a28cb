//! Snapshot lookups for the player's seeker and the building on a tile.
//!
//! Lookups are deterministic for a given snapshot; "first match" ties break
//! by the snapshot's insertion order, which callers must not rely on beyond
//! that tie-break.
use hex_core::{Address, Building, Seeker, TileCoord, WorldState};

use crate::config::OwnershipModel;

/// Resolve the player's seeker under the configured ownership model.
pub fn player_seeker<'a>(
    state: &'a WorldState,
    account: &Address,
    model: OwnershipModel,
) -> Option<&'a Seeker> {
    match model {
        OwnershipModel::DerivedId => seeker_by_derived_id(state, account),
        OwnershipModel::OwnerAddress => seeker_by_owner(state, account),
    }
}

/// Numeric-pool lookup: first seeker whose id equals the low 32 bits of the
/// account address.
pub fn seeker_by_derived_id<'a>(state: &'a WorldState, account: &Address) -> Option<&'a Seeker> {
    let id = account.seeker_id();
    state.seekers.iter().find(|seeker| seeker.id == id)
}

/// Ownership-metadata lookup: first seeker whose canonical owner address
/// equals the account. The null address never owns a seeker.
pub fn seeker_by_owner<'a>(state: &'a WorldState, account: &Address) -> Option<&'a Seeker> {
    state.seekers.iter().find(|seeker| {
        seeker
            .owner
            .as_ref()
            .is_some_and(|owner| !owner.is_null() && owner == account)
    })
}

/// First building whose decoded location equals `coord`.
///
/// Buildings with a missing or malformed location are skipped, not errors.
pub fn building_at(state: &WorldState, coord: TileCoord) -> Option<&Building> {
    state.buildings.iter().find(|building| building.tile() == Some(coord))
}
