//! # Dwarf Squad
//!
//! A dwarf on a grid, driven by a tape of instructions.
//!
//! The tape machine in [`mach`] runs one frame at a time. Build a tape by
//! pushing instructions, reset the processor, then call `tick` once per
//! frame and read the world to draw the dwarf.
//!
//! ```
//! use dwarf::mach::{Cell, Heading, Opcode, Processor, World};
//!
//! let mut p = Processor::new(World::new(15, 10).with_position(7, 5));
//! p.push(Opcode::Noop, 0).unwrap();
//! p.push(Opcode::Move, 2).unwrap();
//! p.push(Opcode::Loop, 2).unwrap();
//! p.push(Opcode::Turn, 8).unwrap();
//! p.reset();
//! while p.running() {
//!     p.tick().unwrap();
//! }
//! assert_eq!(p.world().position(), Cell::new(7, 1));
//! assert_eq!(p.world().heading(), Heading::West);
//! ```
//!
//! The `dwarf` binary plays the built-in demo tapes in a terminal.
//! Run `dwarf --help` for its options, or `dwarf --step` to single-step
//! from a prompt.

pub mod log;
pub mod mach;
pub mod term;
