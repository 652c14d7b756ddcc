use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generation::vocabulary::{self, RegionalVocabulary};

/// Coarse geographic bucket used to pick a vocabulary table.
///
/// The thresholds are flavour-text approximations, not state boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    /// Classifies a coordinate, first match wins:
    /// latitude > 26 is north, latitude < 15 is south,
    /// longitude < 77 is west, everything else is east.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Region {
        if latitude > 26.0 {
            Region::North
        } else if latitude < 15.0 {
            Region::South
        } else if longitude < 77.0 {
            Region::West
        } else {
            Region::East
        }
    }

    pub fn vocabulary(self) -> &'static RegionalVocabulary {
        match self {
            Region::North => &vocabulary::NORTH,
            Region::South => &vocabulary::SOUTH,
            Region::East => &vocabulary::EAST,
            Region::West => &vocabulary::WEST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
