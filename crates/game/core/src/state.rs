//! Read-only world-state snapshot model.
//!
//! These types mirror the minimal shape the core reads from the query and
//! subscription APIs. A snapshot is immutable once delivered; lookups
//! iterate in the snapshot's insertion order, which is the documented
//! tie-break for first-match queries and nothing more.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::address::Address;
use crate::codec::MalformedLocationKey;
use crate::tile::TileCoord;

/// Numeric seeker identifier (the low 32 bits of the owning account).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeekerId(pub u32);

impl fmt::Display for SeekerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle for a stationary entity (bytes24 hex on the wire).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub String);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw on-chain tile reference exactly as it appears in a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTile {
    pub keys: Vec<String>,
}

impl RawTile {
    /// Decode the key list into a coordinate.
    pub fn decode(&self) -> Result<TileCoord, MalformedLocationKey> {
        crate::codec::decode_tile(&self.keys)
    }
}

/// One slot of a seeker's ordered location history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Slot tag within the history; `1` marks the "next"/current slot.
    #[serde(rename = "key")]
    pub sequence_key: u8,
    pub tile: RawTile,
}

/// Mobile player entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeker {
    #[serde(alias = "seekerID")]
    pub id: SeekerId,
    #[serde(default)]
    pub owner: Option<Address>,
    #[serde(default)]
    pub location: Vec<LocationEntry>,
}

impl Seeker {
    /// The slot the seeker occupies "now": tagged `sequence_key == 1`, not
    /// the first or last element of the history.
    pub fn next_location(&self) -> Option<&LocationEntry> {
        self.location.iter().find(|entry| entry.sequence_key == 1)
    }

    /// Decoded current tile.
    ///
    /// Falls back to the origin when the history has no next slot or the
    /// slot's key is unreadable; a defined degenerate case, not an error.
    pub fn current_tile(&self) -> TileCoord {
        let Some(entry) = self.next_location() else {
            warn!(seeker = %self.id, "no next location found for seeker, assuming origin");
            return TileCoord::ORIGIN;
        };
        match entry.tile.decode() {
            Ok(coord) => coord,
            Err(err) => {
                warn!(seeker = %self.id, %err, "unreadable seeker location, assuming origin");
                TileCoord::ORIGIN
            }
        }
    }
}

/// Kind reference gating which actions apply to a building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingKind {
    pub addr: Address,
}

/// Stationary entity occupying at most one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    #[serde(default)]
    pub kind: Option<BuildingKind>,
    #[serde(default)]
    pub location: Option<RawTile>,
}

impl Building {
    /// Decoded tile, or `None` when the building has no readable location.
    /// A malformed key excludes the building from matching rather than
    /// surfacing an error.
    pub fn tile(&self) -> Option<TileCoord> {
        self.location.as_ref().and_then(|raw| raw.decode().ok())
    }
}

/// One immutable world snapshot as delivered by the query layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    #[serde(default)]
    pub seekers: Vec<Seeker>,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

/// Reference from a check-in record back to the visited building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRef {
    pub id: BuildingId,
}

/// Recorded participation of one seeker at one building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    #[serde(rename = "seekerID")]
    pub seeker_id: SeekerId,
    #[serde(default)]
    pub building: Option<BuildingRef>,
}

/// Extension-scoped state: the participant history for the gated action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionState {
    #[serde(rename = "seekers", default)]
    pub check_ins: Vec<CheckInRecord>,
}

impl ExtensionState {
    /// True when the seeker already has a record at this building.
    pub fn has_checked_in(&self, seeker: SeekerId, building: &BuildingId) -> bool {
        self.check_ins.iter().any(|record| {
            record.seeker_id == seeker
                && record.building.as_ref().is_some_and(|b| &b.id == building)
        })
    }

    /// Seekers with a record at this building, in snapshot order.
    pub fn participants_at<'a>(
        &'a self,
        building: &'a BuildingId,
    ) -> impl Iterator<Item = SeekerId> + 'a {
        self.check_ins
            .iter()
            .filter(move |record| record.building.as_ref().is_some_and(|b| &b.id == building))
            .map(|record| record.seeker_id)
    }
}

/// Deployed extension: the action-kind registry for one building kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Contract address of the extension; buildings of the expected kind
    /// carry this address as their kind reference.
    pub id: Address,
    pub name: String,
    #[serde(default)]
    pub state: ExtensionState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_tile;

    fn entry(sequence_key: u8, q: i32, r: i32, s: i32) -> LocationEntry {
        LocationEntry {
            sequence_key,
            tile: RawTile {
                keys: encode_tile(TileCoord { q, r, s }, 0x01),
            },
        }
    }

    #[test]
    fn current_tile_reads_the_next_slot_not_the_first() {
        let seeker = Seeker {
            id: SeekerId(1),
            owner: None,
            location: vec![entry(0, 9, -9, 0), entry(1, 2, -1, -1)],
        };
        assert_eq!(seeker.current_tile(), TileCoord { q: 2, r: -1, s: -1 });
    }

    #[test]
    fn current_tile_defaults_to_origin_without_next_slot() {
        let seeker = Seeker {
            id: SeekerId(1),
            owner: None,
            location: vec![entry(0, 9, -9, 0), entry(2, 3, -3, 0)],
        };
        assert_eq!(seeker.current_tile(), TileCoord::ORIGIN);

        let empty = Seeker {
            id: SeekerId(2),
            owner: None,
            location: Vec::new(),
        };
        assert_eq!(empty.current_tile(), TileCoord::ORIGIN);
    }

    #[test]
    fn malformed_building_location_is_excluded_not_an_error() {
        let building = Building {
            id: BuildingId("0xb1".into()),
            kind: None,
            location: Some(RawTile {
                keys: vec!["0x01".into(), "bogus".into(), "0x00".into(), "0x00".into()],
            }),
        };
        assert_eq!(building.tile(), None);
    }

    #[test]
    fn extension_state_scans_participants_per_building() {
        let visited = BuildingId("0xb1".into());
        let other = BuildingId("0xb2".into());
        let state = ExtensionState {
            check_ins: vec![
                CheckInRecord {
                    seeker_id: SeekerId(1),
                    building: Some(BuildingRef { id: visited.clone() }),
                },
                CheckInRecord {
                    seeker_id: SeekerId(2),
                    building: Some(BuildingRef { id: other.clone() }),
                },
                CheckInRecord {
                    seeker_id: SeekerId(3),
                    building: None,
                },
            ],
        };
        assert!(state.has_checked_in(SeekerId(1), &visited));
        assert!(!state.has_checked_in(SeekerId(1), &other));
        assert!(!state.has_checked_in(SeekerId(3), &visited));
        let at_visited: Vec<_> = state.participants_at(&visited).collect();
        assert_eq!(at_visited, vec![SeekerId(1)]);
    }

    #[test]
    fn snapshot_deserializes_from_query_payload() {
        let payload = r#"{
            "seekers": [
                {
                    "seekerID": 1,
                    "owner": "0xAA01",
                    "location": [
                        { "key": 0, "tile": { "keys": ["0x01", "0x00", "0x00", "0x00"] } },
                        { "key": 1, "tile": { "keys": ["0x01", "0x01", "0xffff", "0x00"] } }
                    ]
                }
            ],
            "buildings": [
                {
                    "id": "0xb1",
                    "kind": { "addr": "0xEE" },
                    "location": { "keys": ["0x02", "0x01", "0xffff", "0x00"] }
                }
            ]
        }"#;
        let state: WorldState = serde_json::from_str(payload).unwrap();
        assert_eq!(state.seekers[0].current_tile(), TileCoord { q: 1, r: -1, s: 0 });
        assert_eq!(state.buildings[0].tile(), Some(TileCoord { q: 1, r: -1, s: 0 }));
        assert_eq!(
            state.buildings[0].kind.as_ref().unwrap().addr,
            Address::parse("0xee").unwrap()
        );
    }
}
