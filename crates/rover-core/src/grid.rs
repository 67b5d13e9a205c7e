//! Grid bounds and integer cell coordinates.

use crate::error::{Axis, CoreError, CoreResult};
use crate::heading::Heading;

/// A single integer coordinate pair on the plateau.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `heading`.
    ///
    /// Movement deltas live here, deliberately apart from the compass turn
    /// table in [`heading`](crate::heading): turning and stepping are
    /// independent halves of the movement algebra.
    #[inline]
    pub fn step(self, heading: Heading) -> Cell {
        match heading {
            Heading::North => Cell { x: self.x, y: self.y + 1 },
            Heading::South => Cell { x: self.x, y: self.y - 1 },
            Heading::East => Cell { x: self.x + 1, y: self.y },
            Heading::West => Cell { x: self.x - 1, y: self.y },
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The immutable bounding rectangle `[0..max_x] × [0..max_y]`.
///
/// Constructed once per session from two strictly positive extents and never
/// mutated.  The grid owns no rovers; those are tracked by the roster in
/// `rover-sim`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    max_x: i32,
    max_y: i32,
}

impl Grid {
    /// Build a grid with upper-right corner `(max_x, max_y)`.
    ///
    /// Both extents must be strictly positive: a grid of zero extent admits
    /// no valid starting position.
    pub fn new(max_x: i32, max_y: i32) -> CoreResult<Grid> {
        if max_x <= 0 {
            return Err(CoreError::NonPositiveExtent { axis: Axis::X, value: max_x });
        }
        if max_y <= 0 {
            return Err(CoreError::NonPositiveExtent { axis: Axis::Y, value: max_y });
        }
        Ok(Grid { max_x, max_y })
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// `true` if `(x, y)` lies on the grid — 0-indexed, inclusive bounds.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }

    /// [`contains`](Grid::contains) for a [`Cell`].
    #[inline]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.contains(cell.x, cell.y)
    }
}
