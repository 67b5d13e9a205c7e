//! The roster: admission-ordered rover storage plus the occupancy index.
//!
//! # Why an index
//!
//! Collision checks happen on every placement and every attempted move.  A
//! value-equality scan over all rovers would be O(n) per check; keeping an
//! `FxHashSet` of occupied coordinate pairs in lock-step with rover
//! positions makes each check O(1) while the roster `Vec` stays the single
//! admission-ordered record.

use rustc_hash::FxHashSet;

use rover_core::{Axis, Cell, Grid, Heading, Instruction, RoverId, Turn};

use crate::{Rover, SimError, SimResult};

/// All rovers admitted to a grid so far, insertion order = admission order
/// = reporting order, together with the occupancy index over their current
/// cells.
///
/// The index is maintained, never rebuilt: [`admit`](Roster::admit) inserts
/// the starting cell and [`execute_plan`](Roster::execute_plan) moves the
/// entry whenever an `Advance` commits.
#[derive(Default)]
pub struct Roster {
    rovers:   Vec<Rover>,
    occupied: FxHashSet<(i32, i32)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }

    /// The ID the next admitted rover will receive.
    pub fn next_id(&self) -> RoverId {
        RoverId(self.rovers.len() as u32)
    }

    pub fn get(&self, id: RoverId) -> Option<&Rover> {
        self.rovers.get(id.index())
    }

    /// Iterator over all rovers in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &Rover> {
        self.rovers.iter()
    }

    /// `true` if some rover currently occupies `cell`.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(&(cell.x, cell.y))
    }

    // ── Placement validation ──────────────────────────────────────────────

    /// Admit a new rover at `(x, y)` facing `heading`.
    ///
    /// Checks run in the session protocol's prompt order: strictly positive
    /// x, strictly positive y, valid heading character (case-insensitive),
    /// x within bounds, y within bounds, cell unoccupied.  The first failed
    /// check wins; nothing is admitted on failure.
    ///
    /// Starting coordinates must be strictly positive even though `(0, y)`
    /// and `(x, 0)` are valid grid cells: edge cells are reachable by
    /// movement but not usable as starting positions.
    pub fn admit(&mut self, grid: &Grid, x: i32, y: i32, heading: char) -> SimResult<RoverId> {
        let id = self.next_id();

        if x <= 0 {
            return Err(SimError::NonPositiveCoordinate { rover: id, axis: Axis::X, value: x });
        }
        if y <= 0 {
            return Err(SimError::NonPositiveCoordinate { rover: id, axis: Axis::Y, value: y });
        }
        let heading = Heading::from_char(heading)
            .map_err(|_| SimError::InvalidHeading { rover: id, ch: heading })?;
        if x > grid.max_x() {
            return Err(SimError::OutOfBounds { rover: id, axis: Axis::X, value: x, max: grid.max_x() });
        }
        if y > grid.max_y() {
            return Err(SimError::OutOfBounds { rover: id, axis: Axis::Y, value: y, max: grid.max_y() });
        }
        if self.occupied.contains(&(x, y)) {
            return Err(SimError::Occupied { rover: id, x, y });
        }

        self.insert(Rover::new(id, Cell::new(x, y), heading));
        Ok(id)
    }

    /// Insert a pre-validated rover and register its cell in the index.
    pub(crate) fn insert(&mut self, rover: Rover) {
        self.occupied.insert((rover.pos.x, rover.pos.y));
        self.rovers.push(rover);
    }

    // ── Plan assignment ───────────────────────────────────────────────────

    /// Replace `id`'s pending plan with the parsed form of `raw`.
    ///
    /// Accepts `L`, `R` and `M` case-insensitively; the empty string is a
    /// valid no-op plan.  The whole string is validated before anything is
    /// stored, so on failure the previous plan is untouched.
    pub fn assign_plan(&mut self, id: RoverId, raw: &str) -> SimResult<()> {
        let mut plan = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            match Instruction::from_char(ch) {
                Ok(instruction) => plan.push(instruction),
                Err(_) => return Err(SimError::InvalidPlan { rover: id, ch }),
            }
        }

        let rover = self
            .rovers
            .get_mut(id.index())
            .ok_or(SimError::UnknownRover(id))?;
        rover.plan = plan;
        Ok(())
    }

    // ── Plan execution ────────────────────────────────────────────────────

    /// Execute `id`'s pending plan to completion, strictly left to right.
    ///
    /// Turns always apply.  An `Advance` commits only if the stepped cell is
    /// on the grid and no other rover occupies it; otherwise that single
    /// instruction is silently discarded and execution continues with the
    /// next one.  A blocked step is a defined no-op, not an error — the only
    /// failure here is an unknown `id`.
    ///
    /// The plan is consumed: the rover needs a fresh
    /// [`assign_plan`](Roster::assign_plan) before it can move again.
    /// Returns the rover's final state for reporting.
    pub fn execute_plan(&mut self, id: RoverId, grid: &Grid) -> SimResult<&Rover> {
        // Split borrow: the moving rover and the occupancy index are
        // disjoint fields.
        let Self { rovers, occupied } = self;
        let rover = rovers.get_mut(id.index()).ok_or(SimError::UnknownRover(id))?;

        let plan = std::mem::take(&mut rover.plan);
        for instruction in plan {
            match instruction {
                Instruction::TurnLeft => rover.heading = rover.heading.turned(Turn::Left),
                Instruction::TurnRight => rover.heading = rover.heading.turned(Turn::Right),
                Instruction::Advance => {
                    let next = rover.pos.step(rover.heading);
                    // The rover's own cell is in the index, but `next` is
                    // always one step away, so it never blocks itself.
                    if grid.contains_cell(next) && !occupied.contains(&(next.x, next.y)) {
                        occupied.remove(&(rover.pos.x, rover.pos.y));
                        occupied.insert((next.x, next.y));
                        rover.pos = next;
                    }
                }
            }
        }

        Ok(&*rover)
    }
}
