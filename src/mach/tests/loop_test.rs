use super::*;
use crate::mach::{Cell, ErrorCode, Heading};

#[test]
fn test_loop_repeats_block() {
    let mut p = load(
        World::new(15, 10).with_position(0, 0).with_heading(Heading::East),
        &[(Opcode::Noop, 0), (Opcode::Move, 1), (Opcode::Loop, 3)],
    );
    assert_eq!(run(&mut p), 4);
    assert_eq!(p.world().position(), Cell::new(3, 0));
}

#[test]
fn test_loop_without_anchor_underflows() {
    let mut p = load(World::new(15, 10), &[(Opcode::Turn, 6), (Opcode::Loop, 2)]);
    let e = p.tick().unwrap_err();
    assert_eq!(e.code(), ErrorCode::JumpStackUnderflow);
    assert_eq!(e.address(), Some(1));
}

#[test]
fn test_loop_one_never_jumps() {
    let mut p = load(World::new(15, 10), &[(Opcode::Loop, 1)]);
    assert_eq!(p.tick().unwrap(), Tick::Halted);
}

#[test]
fn test_nested_loops() {
    // Inner block runs 2 times per outer pass, outer runs 3 times.
    let mut p = load(
        World::new(15, 10).with_position(0, 0).with_heading(Heading::South),
        &[
            (Opcode::Noop, 0),
            (Opcode::Noop, 0),
            (Opcode::Move, 1),
            (Opcode::Loop, 2),
            (Opcode::Loop, 3),
        ],
    );
    run(&mut p);
    assert_eq!(p.world().position(), Cell::new(0, 6));
}

#[test]
fn test_two_passes_then_turn_and_halt() {
    let mut p = load(
        World::new(15, 10).with_position(7, 5),
        &[
            (Opcode::Noop, 0),
            (Opcode::Move, 2),
            (Opcode::Loop, 2),
            (Opcode::Turn, 8),
            (Opcode::Loop, 1),
        ],
    );
    assert_eq!(run(&mut p), 5);
    assert_eq!(p.world().position(), Cell::new(7, 1));
    assert_eq!(p.world().heading(), Heading::West);
    assert_eq!(p.jumps().len(), 1);
}

#[test]
fn test_explode_repeats_within_tick() {
    let mut world = World::new(15, 10).with_position(5, 5);
    world.place(Cell::new(7, 7), 1);
    let mut p = load(world, &[(Opcode::Explode, 2)]);
    assert_eq!(p.tick().unwrap(), Tick::Halted);
    assert!(p.world().is_destroyed());
    assert!(p.world().items_at(Cell::new(7, 7)).is_empty());
    assert_eq!(p.take_effects().len(), 2);
}

#[test]
fn test_long_loop_halts_in_one_tick() {
    let mut p = load(World::new(15, 10), &[(Opcode::Noop, 0), (Opcode::Loop, 40000)]);
    assert_eq!(p.tick().unwrap(), Tick::Halted);
    assert!(!p.running());
    assert_eq!(p.jumps().len(), 1);
}

#[test]
fn test_large_explode_halts_in_one_tick() {
    let mut p = load(World::new(15, 10), &[(Opcode::Explode, 70000)]);
    assert_eq!(p.tick().unwrap(), Tick::Halted);
    assert_eq!(p.take_effects().len(), 70000);
}
