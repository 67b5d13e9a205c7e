//! Core error type.
//!
//! `rover-sim` defines its own error enum for failures that must carry a
//! rover ordinal (placement, plan assignment); the variants here cover the
//! value types that exist before any rover does.

use std::fmt;

use thiserror::Error;

/// Which coordinate axis a validation failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// The top-level error type for `rover-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{axis} max coordinate is not a positive numeric value (got {value})")]
    NonPositiveExtent { axis: Axis, value: i32 },

    #[error("'{0}' is not a valid heading character")]
    InvalidHeading(char),

    #[error("'{0}' is not a valid plan character")]
    InvalidInstruction(char),
}

/// Shorthand result type for `rover-core`.
pub type CoreResult<T> = Result<T, CoreError>;
