//! One simulation session: a grid plus the roster it owns.

use rover_core::{Grid, RoverId};

use crate::{Roster, Rover, SimResult};

/// Owns the [`Grid`] and [`Roster`] for the lifetime of one session and
/// exposes the operations the I/O layer drives: placement, plan assignment,
/// execution, and state readback.
///
/// Rovers are processed strictly one at a time in admission order — the
/// I/O layer does not even request the next placement until the previous
/// rover's plan has executed and been reported.  All state lives in memory
/// for the session's duration and is discarded on exit.
pub struct Session {
    grid:   Grid,
    roster: Roster,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            roster: Roster::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// 1-based number the next placed rover will be reported as.
    pub fn next_ordinal(&self) -> u32 {
        self.roster.next_id().ordinal()
    }

    /// Validate and admit a rover at `(x, y)` facing the (case-insensitive)
    /// heading character.
    pub fn place_rover(&mut self, x: i32, y: i32, heading: char) -> SimResult<RoverId> {
        self.roster.admit(&self.grid, x, y, heading)
    }

    /// Attach a movement plan to `id`, replacing any prior plan.
    pub fn assign_plan(&mut self, id: RoverId, raw: &str) -> SimResult<()> {
        self.roster.assign_plan(id, raw)
    }

    /// Execute `id`'s pending plan and return its final state.
    ///
    /// Individually illegal moves are skipped, never reported; the only
    /// error is an unknown `id`.
    pub fn execute_plan(&mut self, id: RoverId) -> SimResult<&Rover> {
        self.roster.execute_plan(id, &self.grid)
    }

    pub fn rover(&self, id: RoverId) -> Option<&Rover> {
        self.roster.get(id)
    }
}
