//! Strongly typed rover identifier.
//!
//! `RoverId` is `Copy + Ord + Hash` so it can be used as a map key and
//! sorted without ceremony.  The inner integer is `pub` to allow direct
//! indexing into the roster's `Vec` via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Zero-based admission index of a rover within a roster.
///
/// Admission order is reporting order, so the ID doubles as the rover's
/// position in every session transcript.  User-facing text uses the
/// 1-based [`ordinal`](RoverId::ordinal) instead.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoverId(pub u32);

impl RoverId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: RoverId = RoverId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based rover number used in prompts and error messages
    /// ("Rover 1", "Rover 2", …).
    #[inline(always)]
    pub fn ordinal(self) -> u32 {
        self.0 + 1
    }
}

impl Default for RoverId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoverId({})", self.0)
    }
}

impl From<RoverId> for usize {
    #[inline(always)]
    fn from(id: RoverId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for RoverId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RoverId, Self::Error> {
        u32::try_from(n).map(RoverId)
    }
}
