//! Direction labels and their cube-coordinate deltas.
//!
//! Two screen-axis conventions exist for the same six labels; which one is
//! in force is decided once per running instance and injected wherever
//! geometry is computed, never read from a global.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Compass label for one of the six hex neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    NW,
    NE,
    E,
    SE,
    SW,
    W,
}

/// Screen-axis convention mapping compass labels onto cube deltas.
///
/// The two tables are point reflections of each other: NW and SW swap,
/// NE and SE swap, E and W are fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OriginConvention {
    /// Bottom-left origin with y increasing upwards (engine/world style).
    #[default]
    BottomLeft,
    /// Top-left origin with y increasing downwards (screen style).
    TopLeft,
}

/// Coordinate-wise offset produced by stepping one tile in some direction.
///
/// Always sums to zero, so applying a delta keeps a coordinate on the
/// `q + r + s == 0` plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDelta {
    pub dq: i32,
    pub dr: i32,
    pub ds: i32,
}

impl Direction {
    /// The point-reflected label: this direction's delta under one
    /// convention equals the mirrored label's delta under the other.
    pub fn mirrored(self) -> Self {
        match self {
            Self::NW => Self::SW,
            Self::SW => Self::NW,
            Self::NE => Self::SE,
            Self::SE => Self::NE,
            Self::E => Self::E,
            Self::W => Self::W,
        }
    }

    /// Delta for one step in this direction under the given convention.
    pub fn delta(self, origin: OriginConvention) -> TileDelta {
        match origin {
            OriginConvention::BottomLeft => self.delta_bottom_left(),
            OriginConvention::TopLeft => self.mirrored().delta_bottom_left(),
        }
    }

    fn delta_bottom_left(self) -> TileDelta {
        let (dq, dr, ds) = match self {
            Self::SW => (0, -1, 1),
            Self::SE => (1, -1, 0),
            Self::E => (1, 0, -1),
            Self::NE => (0, 1, -1),
            Self::NW => (-1, 1, 0),
            Self::W => (-1, 0, 1),
        };
        TileDelta { dq, dr, ds }
    }
}
