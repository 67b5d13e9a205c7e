//! Compass headings and the turn transition table.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// One of the four compass directions a rover can face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// A 90° rotation relative to the current heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Left,
    Right,
}

impl Heading {
    /// Parse a single direction character, case-insensitively.
    pub fn from_char(ch: char) -> CoreResult<Heading> {
        match ch.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(CoreError::InvalidHeading(ch)),
        }
    }

    /// The uppercase compass letter for this heading.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Apply a turn via the explicit compass table.
    ///
    /// The cyclic order is North → East → South → West → North; `Right` is
    /// the next entry in the cycle, `Left` the previous.  Total over every
    /// (heading, turn) pair — no error case.  Kept as a literal table rather
    /// than derived from movement deltas so turn semantics stay independent
    /// of stepping.
    #[inline]
    pub fn turned(self, turn: Turn) -> Heading {
        match (self, turn) {
            (Heading::North, Turn::Left) => Heading::West,
            (Heading::North, Turn::Right) => Heading::East,
            (Heading::East, Turn::Left) => Heading::North,
            (Heading::East, Turn::Right) => Heading::South,
            (Heading::South, Turn::Left) => Heading::East,
            (Heading::South, Turn::Right) => Heading::West,
            (Heading::West, Turn::Left) => Heading::South,
            (Heading::West, Turn::Right) => Heading::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
