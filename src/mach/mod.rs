/*!
## Rust Machine Module

This Rust module is the tape machine that drives a dwarf around the grid.

*/

pub type Address = usize;

mod error;
mod heading;
mod instruction;
mod opcode;
mod processor;
mod stack;
mod world;

pub use error::Error;
pub use error::ErrorCode;
pub use heading::Direction;
pub use heading::Heading;
pub use instruction::Instruction;
pub use instruction::Phase;
pub use opcode::Opcode;
pub use processor::Processor;
pub use processor::Tick;
pub use stack::Stack;
pub use world::Boundary;
pub use world::Cell;
pub use world::Effect;
pub use world::Slot;
pub use world::World;
pub use world::SLOTS;

#[cfg(test)]
mod tests;
