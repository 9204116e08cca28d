use super::{Address, Direction, Error, Opcode, Slot, Stack, World, SLOTS};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Lifecycle of one tape entry.
///
/// An `Idle` instruction has finished its current visit. Loading it seeds a
/// fresh countdown from the operand. Loading an `Active` instruction resumes
/// where the last tick left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active { countdown: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    operand: i32,
    phase: Phase,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: i32) -> Instruction {
        Instruction {
            opcode,
            operand,
            phase: Phase::Idle,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn operand(&self) -> i32 {
        self.operand
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn countdown(&self) -> Option<i32> {
        match self.phase {
            Phase::Active { countdown } => Some(countdown),
            Phase::Idle => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn load(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active {
                countdown: self.operand,
            };
        }
    }

    pub fn unload(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Performs one unit of work for the instruction at `address`.
    ///
    /// Returns the branch target when a `loop` jumps back to its anchor.
    pub fn execute(
        &mut self,
        address: Address,
        jumps: &mut Stack<Address>,
        world: &mut World,
    ) -> Result<Option<Address>> {
        use Opcode::*;
        let countdown = match self.phase {
            Phase::Active { countdown } => countdown,
            Phase::Idle => self.operand,
        };
        match self.opcode {
            Noop => {
                jumps.push(address)?;
                self.unload();
            }
            Move => {
                self.require_positive("MOVE")?;
                world.advance();
                self.count_down(countdown);
            }
            Turn => {
                let direction =
                    Direction::try_from(self.operand).map_err(|_| error!(InvalidOperand; "TURN"))?;
                match direction.resolve(world.heading()) {
                    Some(heading) => world.turn(heading),
                    None => return Err(error!(InvalidOperand; "TURN")),
                }
                self.unload();
            }
            Sleep => {
                self.require_positive("SLEEP")?;
                self.count_down(countdown);
            }
            Use => {
                self.require_positive("USE")?;
                world.use_held();
                self.count_down(countdown);
            }
            Get => {
                let direction =
                    Direction::try_from(self.operand).map_err(|_| error!(InvalidOperand; "GET"))?;
                let cell = world.target(direction);
                world.pick_up(cell);
                self.unload();
            }
            Drop => {
                let direction =
                    Direction::try_from(self.operand).map_err(|_| error!(InvalidOperand; "DROP"))?;
                let cell = world.target(direction);
                world.put_down(cell);
                self.unload();
            }
            Wield => {
                world.wield(self.slot()?);
                self.unload();
            }
            Loop => {
                self.require_positive("LOOP")?;
                let remaining = countdown - 1;
                if remaining > 0 {
                    let anchor = jumps.pop()?;
                    self.phase = Phase::Active {
                        countdown: remaining,
                    };
                    return Ok(Some(anchor));
                }
                self.unload();
            }
            Explode => {
                let countdown = countdown.max(0);
                world.explode(countdown);
                self.count_down(countdown);
            }
        }
        Ok(None)
    }

    fn count_down(&mut self, countdown: i32) {
        let remaining = countdown - 1;
        if remaining > 0 {
            self.phase = Phase::Active {
                countdown: remaining,
            };
        } else {
            self.unload();
        }
    }

    fn require_positive(&self, message: &'static str) -> Result<()> {
        if self.operand <= 0 {
            Err(error!(InvalidOperand; message))
        } else {
            Ok(())
        }
    }

    fn slot(&self) -> Result<Option<Slot>> {
        match self.operand {
            0 => Ok(None),
            n if n > 0 && n as usize <= SLOTS => Ok(Some(n as Slot)),
            _ => Err(error!(InvalidOperand; "WIELD")),
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}
