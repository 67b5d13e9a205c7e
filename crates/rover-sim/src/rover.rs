//! Per-rover state.

use std::fmt;

use rover_core::{Cell, Heading, Instruction, RoverId};

/// One rover: admission identity, position, heading, and pending plan.
///
/// Position and heading are mutated in place as the plan executes; the
/// rover itself lives in its [`Roster`](crate::Roster) for the whole
/// session (no mid-session removal).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rover {
    /// Admission index within the roster.  `id.ordinal()` is the 1-based
    /// number used in prompts and error messages.
    pub id: RoverId,

    /// Current cell.  Always within the owning grid's bounds.
    pub pos: Cell,

    /// Current compass heading.
    pub heading: Heading,

    /// Instructions awaiting execution.  Drained by
    /// [`Roster::execute_plan`](crate::Roster::execute_plan).
    pub(crate) plan: Vec<Instruction>,
}

impl Rover {
    /// Construct a newly admitted rover with an empty plan.
    ///
    /// Only the roster creates rovers — placement validation happens in
    /// [`Roster::admit`](crate::Roster::admit), which is the one gate onto
    /// the grid.
    pub(crate) fn new(id: RoverId, pos: Cell, heading: Heading) -> Self {
        Self {
            id,
            pos,
            heading,
            plan: Vec::new(),
        }
    }

    /// Instructions not yet executed.
    pub fn plan(&self) -> &[Instruction] {
        &self.plan
    }
}

impl fmt::Display for Rover {
    /// The canonical report triple: `x y H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.pos.x, self.pos.y, self.heading.as_char())
    }
}
