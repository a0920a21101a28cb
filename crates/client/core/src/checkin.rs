//! Check-in eligibility evaluation.
//!
//! [`evaluate`] is a pure function from the current transient inputs to a
//! fresh [`CheckInState`]. It is re-run whole on every update instead of
//! patching prior results, which is what makes racing poll results,
//! subscription pushes, and host messages safe to apply in any order.
use hex_core::{Address, Building, Extension, Seeker, TileCoord, WorldState, distance_or_unknown};

use crate::config::PluginConfig;
use crate::locator;

/// Where the check-in affordance currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckInStatus {
    /// The action-kind registry could not be resolved. Fatal display; the
    /// other states are ordinary guidance.
    NoExtension,
    NoTileSelected,
    NoActiveSeeker,
    /// The selected tile has no building, or its kind is not ours.
    WrongBuildingKind,
    /// Structural preconditions hold; the affordance is shown.
    Ready {
        /// Enables the affordance: the seeker stands on the selected tile.
        seeker_on_tile: bool,
        /// Suppresses the affordance entirely (visit already recorded).
        already_checked_in: bool,
    },
}

impl CheckInStatus {
    /// User-facing guidance for the current state.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::NoExtension => "no deployed extension",
            Self::NoTileSelected => "no tile selected",
            Self::NoActiveSeeker => "no active seeker",
            Self::WrongBuildingKind => "selected tile is not a match",
            Self::Ready { seeker_on_tile: true, .. } => "click check-in to register your visit",
            Self::Ready { seeker_on_tile: false, .. } => "move your seeker onto the tile to enable check-in",
        }
    }

    /// True when the check-in affordance should be rendered at all.
    pub fn shows_affordance(self) -> bool {
        matches!(
            self,
            Self::Ready {
                already_checked_in: false,
                ..
            }
        )
    }
}

/// Derived view of one evaluation cycle.
///
/// Borrows from the snapshot; rebuilt whole each cycle, never persisted.
#[derive(Clone, Debug)]
pub struct CheckInState<'a> {
    pub status: CheckInStatus,
    pub selected_tile: Option<TileCoord>,
    pub player_seeker: Option<&'a Seeker>,
    pub selected_building: Option<&'a Building>,
    pub building_matches_expected_kind: bool,
    pub seeker_is_on_tile: bool,
    pub already_checked_in: bool,
}

/// Evaluate eligibility from scratch against the current inputs.
pub fn evaluate<'a>(
    extension: Option<&'a Extension>,
    state: Option<&'a WorldState>,
    selected_tile: Option<TileCoord>,
    account: Option<&Address>,
    config: &PluginConfig,
) -> CheckInState<'a> {
    let player_seeker = match (state, account) {
        (Some(state), Some(account)) => locator::player_seeker(state, account, config.ownership),
        _ => None,
    };

    let selected_building = state
        .zip(selected_tile)
        .and_then(|(state, tile)| locator::building_at(state, tile));

    let building_matches_expected_kind = match (extension, selected_building) {
        (Some(extension), Some(building)) => building
            .kind
            .as_ref()
            .is_some_and(|kind| kind.addr == extension.id),
        _ => false,
    };

    let seeker_is_on_tile = player_seeker
        .is_some_and(|seeker| distance_or_unknown(selected_tile, Some(seeker.current_tile())) == 0);

    let already_checked_in = match (extension, player_seeker, selected_building) {
        (Some(extension), Some(seeker), Some(building)) => {
            extension.state.has_checked_in(seeker.id, &building.id)
        }
        _ => false,
    };

    let status = if extension.is_none() {
        CheckInStatus::NoExtension
    } else if selected_tile.is_none() {
        CheckInStatus::NoTileSelected
    } else if player_seeker.is_none() {
        CheckInStatus::NoActiveSeeker
    } else if !building_matches_expected_kind {
        CheckInStatus::WrongBuildingKind
    } else {
        CheckInStatus::Ready {
            seeker_on_tile: seeker_is_on_tile,
            already_checked_in,
        }
    };

    CheckInState {
        status,
        selected_tile,
        player_seeker,
        selected_building,
        building_matches_expected_kind,
        seeker_is_on_tile,
        already_checked_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_core::{
        BuildingId, BuildingKind, BuildingRef, CheckInRecord, ExtensionState, LocationEntry,
        RawTile, SeekerId, encode_tile,
    };

    const EXT_ADDR: &str = "0xee";
    const ACCOUNT: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa00000001";

    fn extension() -> Extension {
        Extension {
            id: Address::parse(EXT_ADDR).unwrap(),
            name: "waypoint".into(),
            state: ExtensionState::default(),
        }
    }

    fn seeker_at(id: u32, coord: TileCoord) -> Seeker {
        Seeker {
            id: SeekerId(id),
            owner: None,
            location: vec![LocationEntry {
                sequence_key: 1,
                tile: RawTile {
                    keys: encode_tile(coord, 0x01),
                },
            }],
        }
    }

    fn building_at(id: &str, kind: &str, coord: TileCoord) -> Building {
        Building {
            id: BuildingId(id.into()),
            kind: Some(BuildingKind {
                addr: Address::parse(kind).unwrap(),
            }),
            location: Some(RawTile {
                keys: encode_tile(coord, 0x02),
            }),
        }
    }

    fn world(seekers: Vec<Seeker>, buildings: Vec<Building>) -> WorldState {
        WorldState { seekers, buildings }
    }

    fn account() -> Address {
        Address::parse(ACCOUNT).unwrap()
    }

    #[test]
    fn missing_extension_is_fatal_state() {
        let state = world(vec![seeker_at(1, TileCoord::ORIGIN)], Vec::new());
        let eval = evaluate(
            None,
            Some(&state),
            Some(TileCoord::ORIGIN),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(eval.status, CheckInStatus::NoExtension);
        assert!(!eval.status.shows_affordance());
    }

    #[test]
    fn no_selection_reports_no_tile_selected() {
        let ext = extension();
        let state = world(vec![seeker_at(1, TileCoord::ORIGIN)], Vec::new());
        let eval = evaluate(Some(&ext), Some(&state), None, Some(&account()), &PluginConfig::default());
        assert_eq!(eval.status, CheckInStatus::NoTileSelected);
        assert_eq!(eval.status.guidance(), "no tile selected");
        assert!(eval.selected_building.is_none());
    }

    #[test]
    fn unknown_account_reports_no_active_seeker() {
        let ext = extension();
        let state = world(vec![seeker_at(99, TileCoord::ORIGIN)], Vec::new());
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(TileCoord::ORIGIN),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(eval.status, CheckInStatus::NoActiveSeeker);
    }

    #[test]
    fn kind_mismatch_wins_over_distance() {
        let ext = extension();
        let tile = TileCoord::ORIGIN;
        let state = world(
            vec![seeker_at(1, tile)],
            vec![building_at("0xb1", "0xdd", tile)],
        );
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(tile),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(eval.status, CheckInStatus::WrongBuildingKind);
        assert!(eval.seeker_is_on_tile, "distance does not rescue a kind mismatch");
        assert!(!eval.building_matches_expected_kind);
    }

    #[test]
    fn empty_tile_reports_wrong_building_kind() {
        let ext = extension();
        let state = world(vec![seeker_at(1, TileCoord::ORIGIN)], Vec::new());
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(TileCoord { q: 1, r: 0, s: -1 }),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(eval.status, CheckInStatus::WrongBuildingKind);
    }

    #[test]
    fn ready_and_enabled_when_seeker_stands_on_tile() {
        let ext = extension();
        let tile = TileCoord::ORIGIN;
        let state = world(
            vec![seeker_at(1, tile)],
            vec![building_at("0xb1", EXT_ADDR, tile)],
        );
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(tile),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(
            eval.status,
            CheckInStatus::Ready {
                seeker_on_tile: true,
                already_checked_in: false,
            }
        );
        assert!(eval.status.shows_affordance());
    }

    #[test]
    fn ready_but_disabled_when_seeker_is_elsewhere() {
        let ext = extension();
        let tile = TileCoord::ORIGIN;
        let state = world(
            vec![seeker_at(1, TileCoord { q: 2, r: -2, s: 0 })],
            vec![building_at("0xb1", EXT_ADDR, tile)],
        );
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(tile),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(
            eval.status,
            CheckInStatus::Ready {
                seeker_on_tile: false,
                already_checked_in: false,
            }
        );
        assert_eq!(
            eval.status.guidance(),
            "move your seeker onto the tile to enable check-in"
        );
    }

    #[test]
    fn seeker_without_next_slot_counts_as_standing_at_origin() {
        let ext = extension();
        let tile = TileCoord::ORIGIN;
        let mut wanderer = seeker_at(1, tile);
        wanderer.location.clear();
        let state = world(vec![wanderer], vec![building_at("0xb1", EXT_ADDR, tile)]);
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(tile),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert!(eval.seeker_is_on_tile);
    }

    #[test]
    fn prior_record_suppresses_the_affordance() {
        let mut ext = extension();
        ext.state.check_ins.push(CheckInRecord {
            seeker_id: SeekerId(1),
            building: Some(BuildingRef {
                id: BuildingId("0xb1".into()),
            }),
        });
        let tile = TileCoord::ORIGIN;
        let state = world(
            vec![seeker_at(1, tile)],
            vec![building_at("0xb1", EXT_ADDR, tile)],
        );
        let eval = evaluate(
            Some(&ext),
            Some(&state),
            Some(tile),
            Some(&account()),
            &PluginConfig::default(),
        );
        assert_eq!(
            eval.status,
            CheckInStatus::Ready {
                seeker_on_tile: true,
                already_checked_in: true,
            }
        );
        assert!(!eval.status.shows_affordance());
    }

    #[test]
    fn reevaluation_converges_on_latest_inputs() {
        let ext = extension();
        let tile = TileCoord::ORIGIN;
        let stale = world(vec![], vec![]);
        let fresh = world(
            vec![seeker_at(1, tile)],
            vec![building_at("0xb1", EXT_ADDR, tile)],
        );
        let config = PluginConfig::default();

        // Stale-then-fresh and fresh-then-stale-then-fresh agree; no state
        // survives between evaluations.
        let _ = evaluate(Some(&ext), Some(&stale), Some(tile), Some(&account()), &config);
        let second = evaluate(Some(&ext), Some(&fresh), Some(tile), Some(&account()), &config);
        assert_eq!(
            second.status,
            CheckInStatus::Ready {
                seeker_on_tile: true,
                already_checked_in: false,
            }
        );
    }
}
