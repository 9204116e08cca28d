use super::Error;
use crate::error;
use std::convert::TryFrom;

/// ## Tape instruction set
///
/// Every opcode carries one integer operand. `move`, `sleep` and `use` are
/// the blocking opcodes: they spend one unit of their countdown per tick.
/// The rest resolve instantly, so any number of them can run in one tick.
///
/// For example, walking a square:
/// `[Noop, Move(3), Turn(right), Loop(4)]`

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push this address on the jump stack as a loop anchor.
    Noop,
    /// Step forward one cell per tick, operand times.
    Move,
    /// Face a direction. Absolute or relative to the current heading.
    Turn,
    /// Do nothing for operand ticks.
    Sleep,
    /// Apply the held item once per tick, operand times.
    Use,
    /// Pick up the top item at a direction.
    Get,
    /// Drop one held item at a direction.
    Drop,
    /// Hold inventory slot operand, or nothing for zero.
    Wield,
    /// Jump back to the last anchor until the countdown runs out.
    Loop,
    Explode,
}

impl Opcode {
    pub fn is_blocking(self) -> bool {
        use Opcode::*;
        matches!(self, Move | Sleep | Use)
    }

    pub fn mnemonic(self) -> char {
        use Opcode::*;
        match self {
            Noop => 'N',
            Move => 'M',
            Turn => 'T',
            Sleep => 'Z',
            Use => 'U',
            Get => 'G',
            Drop => 'D',
            Wield => 'W',
            Loop => 'L',
            Explode => 'X',
        }
    }
}

impl TryFrom<char> for Opcode {
    type Error = Error;

    fn try_from(ch: char) -> Result<Opcode, Error> {
        use Opcode::*;
        match ch.to_ascii_uppercase() {
            'N' => Ok(Noop),
            'M' => Ok(Move),
            'T' => Ok(Turn),
            'Z' => Ok(Sleep),
            'U' => Ok(Use),
            'G' => Ok(Get),
            'D' => Ok(Drop),
            'W' => Ok(Wield),
            'L' => Ok(Loop),
            'X' => Ok(Explode),
            _ => Err(error!(UnknownOpcode)),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Noop => write!(f, "noop"),
            Move => write!(f, "move"),
            Turn => write!(f, "turn"),
            Sleep => write!(f, "sleep"),
            Use => write!(f, "use"),
            Get => write!(f, "get"),
            Drop => write!(f, "drop"),
            Wield => write!(f, "wield"),
            Loop => write!(f, "loop"),
            Explode => write!(f, "explode"),
        }
    }
}
