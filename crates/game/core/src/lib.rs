//! Hex-grid model shared by the client plugin crates.
//!
//! `hex-core` owns the cube-coordinate system, the direction algebra, the
//! on-chain location-key codec, and the read-only snapshot types the client
//! evaluates against. Everything here is pure and synchronous; snapshots are
//! immutable views produced by the query layer and are never mutated, only
//! read to derive coordinates and booleans.
pub mod address;
pub mod codec;
pub mod direction;
pub mod state;
pub mod tile;

pub use address::{Address, AddressError};
pub use codec::{MalformedLocationKey, decode_tile, encode_tile};
pub use direction::{Direction, OriginConvention, TileDelta};
pub use state::{
    Building, BuildingId, BuildingKind, BuildingRef, CheckInRecord, Extension, ExtensionState,
    LocationEntry, RawTile, Seeker, SeekerId, WorldState,
};
pub use tile::{DISTANCE_UNKNOWN, TileCoord, distance_or_unknown};
