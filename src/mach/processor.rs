use super::{Address, Error, Instruction, Opcode, Stack, World};
use crate::{debug, error, info, warn};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Why a tick ended

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A blocking instruction spent its unit for this tick.
    Blocked,
    /// The head ran off the end of the tape during this tick.
    Halted,
    /// Nothing ran; the processor was already halted.
    Idle,
}

/// ## Tape processor
///
/// Owns the tape, the jump stack and the agent's `World`. Build the tape
/// with `push`, call `reset`, then call `tick` once per frame.
///
/// ```
/// use dwarf::mach::{Opcode, Processor, World};
///
/// let mut p = Processor::new(World::new(15, 10));
/// p.push(Opcode::Move, 2).unwrap();
/// p.reset();
/// while p.running() {
///     p.tick().unwrap();
/// }
/// assert_eq!(p.world().position().y, 0);
/// ```

pub struct Processor {
    tape: Vec<Instruction>,
    jumps: Stack<Address>,
    head: Option<Address>,
    blocked: bool,
    cycle_limit: Option<usize>,
    world: World,
}

impl Processor {
    pub fn new(world: World) -> Processor {
        Processor {
            tape: vec![],
            jumps: Stack::new("JUMP STACK"),
            head: None,
            blocked: false,
            cycle_limit: None,
            world,
        }
    }

    /// Appends an instruction. The tape is frozen while running.
    pub fn push(&mut self, opcode: Opcode, operand: i32) -> Result<()> {
        if self.running() {
            return Err(error!(TapeFrozen, self.tape.len()));
        }
        self.tape.push(Instruction::new(opcode, operand));
        Ok(())
    }

    /// Appends an instruction given by its mnemonic letter.
    pub fn push_code(&mut self, code: char, operand: i32) -> Result<()> {
        let opcode = Opcode::try_from(code).map_err(|e| e.in_address(self.tape.len()))?;
        self.push(opcode, operand)
    }

    pub fn reset(&mut self) {
        self.jumps.clear();
        for instruction in self.tape.iter_mut() {
            instruction.unload();
        }
        self.blocked = false;
        self.enter(0);
        info!("reset with {} instructions", self.tape.len());
    }

    pub fn tick(&mut self) -> Result<Tick> {
        self.blocked = false;
        if self.head.is_none() {
            return Ok(Tick::Idle);
        }
        let mut cycles: usize = 0;
        while let Some(address) = self.head {
            if self.blocked {
                return Ok(Tick::Blocked);
            }
            if let Some(limit) = self.cycle_limit {
                if cycles >= limit {
                    warn!("cycle limit {} reached at {}", limit, address);
                    return Err(error!(CyclesExceeded, address));
                }
            }
            cycles += 1;
            let instruction = &mut self.tape[address];
            debug!("{:>4} {} {:?}", address, instruction, instruction.phase());
            let jump = match instruction.execute(address, &mut self.jumps, &mut self.world) {
                Ok(jump) => jump,
                Err(error) => {
                    let error = error.in_address(address);
                    warn!("{}", error);
                    return Err(error);
                }
            };
            let opcode = instruction.opcode();
            let completed = instruction.is_completed();
            if let Some(anchor) = jump {
                self.enter(anchor);
            } else if completed {
                self.enter(address + 1);
            }
            if opcode.is_blocking() {
                self.blocked = true;
            }
        }
        info!("halted after {} cycles", cycles);
        Ok(Tick::Halted)
    }

    pub fn running(&self) -> bool {
        self.head.is_some()
    }

    pub fn head(&self) -> Option<Address> {
        self.head
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Caps the executions one tick may spend. Unbounded by default.
    pub fn set_cycle_limit(&mut self, cycle_limit: Option<usize>) {
        self.cycle_limit = cycle_limit.map(|limit| limit.max(1));
    }

    pub fn len(&self) -> usize {
        self.tape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tape.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.tape
    }

    pub fn jumps(&self) -> &Stack<Address> {
        &self.jumps
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }

    /// Hands the effect log to the caller, leaving the rest of the world intact.
    pub fn take_effects(&mut self) -> Vec<super::Effect> {
        self.world.take_effects()
    }

    pub fn dump(&self) -> String {
        self.tape
            .iter()
            .map(|instruction| instruction.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn enter(&mut self, address: Address) {
        match self.tape.get_mut(address) {
            Some(instruction) => {
                instruction.load();
                self.head = Some(address);
            }
            None => self.head = None,
        }
    }
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("head", &self.head)
            .field("blocked", &self.blocked)
            .field("jumps", &self.jumps)
            .field("tape", &self.tape.len())
            .finish()
    }
}
