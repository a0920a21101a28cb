use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::TileDelta;

/// Sentinel returned by [`distance_or_unknown`] when either tile is absent.
///
/// Callers must treat this as "distance unknown", never as a real distance.
pub const DISTANCE_UNKNOWN: i32 = -1;

/// Cube coordinate of a single hex tile.
///
/// Valid tiles satisfy `q + r + s == 0`. Coordinates are produced by the
/// location-key codec or by stepping an existing coordinate with a
/// [`TileDelta`]; both paths preserve the invariant for valid input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl TileCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Checked constructor; rejects triples off the `q + r + s == 0` plane.
    pub fn new(q: i32, r: i32, s: i32) -> Option<Self> {
        (q + r + s == 0).then_some(Self { q, r, s })
    }

    /// Step one tile. Delta triples sum to zero, so the invariant holds
    /// whenever `self` holds it.
    pub fn apply(self, delta: TileDelta) -> Self {
        Self {
            q: self.q + delta.dq,
            r: self.r + delta.dr,
            s: self.s + delta.ds,
        }
    }

    /// Standard cube distance: half the component-wise absolute difference.
    pub fn distance(self, other: Self) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s - other.s).abs()) / 2
    }
}

impl Default for TileCoord {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Distance between two optionally-known tiles.
///
/// Returns [`DISTANCE_UNKNOWN`] when either side is absent rather than
/// erroring; selection and seeker position are both allowed to be unset.
pub fn distance_or_unknown(a: Option<TileCoord>, b: Option<TileCoord>) -> i32 {
    match (a, b) {
        (Some(a), Some(b)) => a.distance(b),
        _ => DISTANCE_UNKNOWN,
    }
}
