//! Builders that turn eligible intent into dispatchable action calls.
//!
//! Check-in is gated: every missing precondition is its own error variant
//! and refuses the call locally, before anything reaches the dispatcher.
//! Movement and spawn commands only need a resolved seeker and tile; the
//! legality of the move itself is judged by the remote processor.
use client_dispatch::{ActionCall, actions};
use hex_core::{Address, Direction, TileCoord, WorldState};
use thiserror::Error;

use crate::checkin::CheckInState;
use crate::config::PluginConfig;
use crate::locator;

/// Locally-refused check-in preconditions.
///
/// Not failures of the system: each names exactly which input was absent so
/// diagnostics can say why no dispatch happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CheckInError {
    #[error("no tile selected")]
    NoSelectedTile,

    #[error("no account")]
    NoAccount,

    #[error("no seeker for the current account")]
    NoPlayerSeeker,

    #[error("no building on the selected tile")]
    NoSelectedBuilding,

    #[error("no resolved extension")]
    NoExtension,

    #[error("selected building is not of the expected kind")]
    WrongBuildingKind,
}

/// Preconditions for movement and spawn commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no account")]
    NoAccount,

    #[error("no world state")]
    NoWorldState,

    #[error("no seeker for the current account")]
    NoPlayerSeeker,
}

/// Node kind for freshly spawned tiles ("discovered").
const SPAWN_TILE_KIND: u32 = 1;

/// Build `CHECK_IN(seeker, building)` from an evaluation, refusing locally
/// when any precondition is missing. Precondition order mirrors the
/// evaluation ladder: tile, account, seeker, building, extension.
pub fn check_in_call(
    eval: &CheckInState<'_>,
    account: Option<&Address>,
) -> Result<ActionCall, CheckInError> {
    if eval.selected_tile.is_none() {
        return Err(CheckInError::NoSelectedTile);
    }
    if account.is_none() {
        return Err(CheckInError::NoAccount);
    }
    let seeker = eval.player_seeker.ok_or(CheckInError::NoPlayerSeeker)?;
    let building = eval.selected_building.ok_or(CheckInError::NoSelectedBuilding)?;
    if matches!(eval.status, crate::checkin::CheckInStatus::NoExtension) {
        return Err(CheckInError::NoExtension);
    }
    if !eval.building_matches_expected_kind {
        return Err(CheckInError::WrongBuildingKind);
    }
    Ok(ActionCall::new(actions::CHECK_IN)
        .arg(seeker.id.0)
        .arg(building.id.0.as_str()))
}

/// Build `MOVE_SEEKER(seeker, q, r, s)` one step in `direction` from the
/// seeker's current tile.
pub fn move_seeker_call(
    state: &WorldState,
    account: &Address,
    direction: Direction,
    config: &PluginConfig,
) -> Result<ActionCall, CommandError> {
    let seeker = locator::player_seeker(state, account, config.ownership)
        .ok_or(CommandError::NoPlayerSeeker)?;
    let dest = seeker.current_tile().apply(direction.delta(config.origin));
    Ok(ActionCall::new(actions::MOVE_SEEKER)
        .arg(seeker.id.0)
        .arg(dest.q)
        .arg(dest.r)
        .arg(dest.s))
}

/// Build `DEV_SPAWN_TILE` one step in `direction` from the seeker's tile.
pub fn spawn_tile_in_direction_call(
    state: &WorldState,
    account: &Address,
    direction: Direction,
    config: &PluginConfig,
) -> Result<ActionCall, CommandError> {
    let seeker = locator::player_seeker(state, account, config.ownership)
        .ok_or(CommandError::NoPlayerSeeker)?;
    let dest = seeker.current_tile().apply(direction.delta(config.origin));
    Ok(spawn_tile_at_call(dest))
}

/// Build `DEV_SPAWN_TILE(kind, q, r, s)` at an explicit coordinate.
pub fn spawn_tile_at_call(coord: TileCoord) -> ActionCall {
    ActionCall::new(actions::DEV_SPAWN_TILE)
        .arg(SPAWN_TILE_KIND)
        .arg(coord.q)
        .arg(coord.r)
        .arg(coord.s)
}

/// Build `DEV_SPAWN_SEEKER(account, id, 0, 0, 0)`: a new seeker at the
/// origin with the account-derived id.
pub fn spawn_seeker_call(account: &Address) -> ActionCall {
    let origin = TileCoord::ORIGIN;
    ActionCall::new(actions::DEV_SPAWN_SEEKER)
        .arg(account.as_str())
        .arg(account.seeker_id().0)
        .arg(origin.q)
        .arg(origin.r)
        .arg(origin.s)
}
