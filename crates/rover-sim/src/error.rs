//! Simulation error type.
//!
//! Every variant that reports bad user data carries the [`RoverId`] it was
//! raised for, so messages can name the rover by its 1-based ordinal without
//! consulting any shared state.  Errors here are reported, never recovered:
//! retry (re-prompting) is entirely the caller's concern.

use rover_core::{Axis, RoverId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("rover {n}'s {axis} coordinate is not a positive numeric value (got {value})", n = .rover.ordinal())]
    NonPositiveCoordinate {
        rover: RoverId,
        axis:  Axis,
        value: i32,
    },

    #[error("rover {n}'s {axis} coordinate {value} is not within the grid's max {axis} coordinate {max}", n = .rover.ordinal())]
    OutOfBounds {
        rover: RoverId,
        axis:  Axis,
        value: i32,
        max:   i32,
    },

    #[error("rover {n}'s heading '{ch}' is not valid: it has to be either N, E, S or W", n = .rover.ordinal())]
    InvalidHeading { rover: RoverId, ch: char },

    #[error("another rover already exists at coordinate ({x}, {y})")]
    Occupied { rover: RoverId, x: i32, y: i32 },

    #[error("rover {n}'s movement plan is not valid: it has to consist of L, R and M characters (found '{ch}')", n = .rover.ordinal())]
    InvalidPlan { rover: RoverId, ch: char },

    #[error("rover {0} not found")]
    UnknownRover(RoverId),
}

/// Shorthand result type for `rover-sim`.
pub type SimResult<T> = Result<T, SimError>;
