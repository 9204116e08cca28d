use crate::mach::{Opcode, Processor, Tick, World};

mod loop_test;

fn load(world: World, tape: &[(Opcode, i32)]) -> Processor {
    let mut p = Processor::new(world);
    for &(opcode, operand) in tape {
        p.push(opcode, operand).unwrap();
    }
    p.reset();
    p
}

/// Ticks until halted and returns how many ticks it took.
fn run(p: &mut Processor) -> usize {
    run_ticks(p, 5000)
}

fn run_ticks(p: &mut Processor, limit: usize) -> usize {
    let mut ticks = 0;
    while p.running() {
        assert!(ticks < limit, "{} ticks exceeded", limit);
        let tick = p.tick().unwrap();
        ticks += 1;
        assert_ne!(tick, Tick::Idle);
    }
    ticks
}
