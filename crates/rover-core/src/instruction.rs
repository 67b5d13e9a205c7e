//! The movement-plan instruction alphabet.

use crate::error::{CoreError, CoreResult};

/// A single movement-plan instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Rotate 90° counter-clockwise (`L`).  Position is unchanged.
    TurnLeft,
    /// Rotate 90° clockwise (`R`).  Position is unchanged.
    TurnRight,
    /// Advance one cell in the current heading (`M`), if the target cell is
    /// on the grid and unoccupied.
    Advance,
}

impl Instruction {
    /// Parse a single plan character, case-insensitively.
    pub fn from_char(ch: char) -> CoreResult<Instruction> {
        match ch.to_ascii_uppercase() {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            'M' => Ok(Instruction::Advance),
            _ => Err(CoreError::InvalidInstruction(ch)),
        }
    }

    /// The uppercase plan letter for this instruction.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
            Instruction::Advance => 'M',
        }
    }
}
