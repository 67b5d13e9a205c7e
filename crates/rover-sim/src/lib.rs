//! `rover-sim` — the movement and placement engine.
//!
//! Rovers are admitted onto a [`Grid`](rover_core::Grid) one at a time,
//! given a movement plan, and then driven to completion before the next
//! rover is even placed.  The [`Roster`] is the sole occupancy authority:
//! placement and every committed move consult it, so two rovers can never
//! share a cell.
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`rover`]   | `Rover` — position, heading, pending plan              |
//! | [`roster`]  | `Roster` — admission validation, occupancy index, plan |
//! |             | assignment and execution                               |
//! | [`session`] | `Session` — owns one grid + roster pair                |
//! | [`error`]   | `SimError`, `SimResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to rover state types.       |

pub mod error;
pub mod roster;
pub mod rover;
pub mod session;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use roster::Roster;
pub use rover::Rover;
pub use session::Session;
