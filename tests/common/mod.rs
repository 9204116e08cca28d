#![allow(dead_code)]

use dwarf::mach::{Opcode, Processor, Tick, World};

pub fn processor(world: World, tape: &[(Opcode, i32)]) -> Processor {
    let mut p = Processor::new(world);
    for &(opcode, operand) in tape {
        p.push(opcode, operand).unwrap();
    }
    p.reset();
    p
}

pub fn exec(p: &mut Processor) -> usize {
    exec_n(p, 5000)
}

/// Ticks until halted, panicking after `limit` ticks.
pub fn exec_n(p: &mut Processor, limit: usize) -> usize {
    let mut ticks = 0;
    while p.running() {
        if ticks == limit {
            panic!("{} ticks exceeded", limit);
        }
        match p.tick() {
            Ok(Tick::Idle) => panic!("idle tick while running"),
            Ok(_) => ticks += 1,
            Err(error) => panic!("{}", error),
        }
    }
    ticks
}

pub fn grid() -> World {
    World::new(15, 10).with_position(7, 5)
}
