//! `rover-core` — foundational types for the rover plateau simulation.
//!
//! This crate is a dependency of every other `rover-*` crate.  It
//! intentionally has no `rover-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`ids`]         | `RoverId`                                           |
//! | [`grid`]        | `Grid` bounding rectangle, `Cell` coordinate pair   |
//! | [`heading`]     | `Heading`, `Turn`, the compass transition table     |
//! | [`instruction`] | `Instruction` movement-plan alphabet                |
//! | [`error`]       | `CoreError`, `CoreResult`, `Axis`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod heading;
pub mod ids;
pub mod instruction;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{Axis, CoreError, CoreResult};
pub use grid::{Cell, Grid};
pub use heading::{Heading, Turn};
pub use ids::RoverId;
pub use instruction::Instruction;
