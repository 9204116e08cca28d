mod common;
use common::*;
use dwarf::mach::{Boundary, Cell, Effect, Heading, Opcode, Tick, World};

#[test]
fn test_get_picks_up_from_own_cell() {
    let mut world = grid();
    world.place(Cell::new(7, 5), 3);
    let mut p = processor(world, &[(Opcode::Get, 0), (Opcode::Get, 0)]);
    exec(&mut p);
    assert_eq!(p.world().count(3), 1);
    assert!(p.world().items_at(Cell::new(7, 5)).is_empty());
}

#[test]
fn test_get_from_relative_direction() {
    let mut world = grid().with_heading(Heading::East);
    world.place(Cell::new(7, 6), 2);
    world.place(Cell::new(8, 5), 4);
    let mut p = processor(world, &[(Opcode::Get, 6), (Opcode::Get, 5)]);
    exec(&mut p);
    assert_eq!(p.world().count(2), 1);
    assert_eq!(p.world().count(4), 1);
    assert_eq!(p.world().ground().count(), 0);
}

#[test]
fn test_carry_item_and_drop_it_elsewhere() {
    let mut world = grid();
    world.place(Cell::new(7, 5), 1);
    let mut p = processor(
        world,
        &[
            (Opcode::Get, 0),
            (Opcode::Wield, 1),
            (Opcode::Move, 2),
            (Opcode::Drop, 7),
        ],
    );
    exec(&mut p);
    assert_eq!(p.world().position(), Cell::new(7, 3));
    assert_eq!(p.world().count(1), 0);
    assert_eq!(p.world().items_at(Cell::new(7, 4)), &[1]);
    assert_eq!(p.world().held(), Some(1));
}

#[test]
fn test_drop_with_empty_hands_does_nothing() {
    let mut p = processor(grid(), &[(Opcode::Wield, 2), (Opcode::Drop, 0)]);
    exec(&mut p);
    assert_eq!(p.world().ground().count(), 0);
}

#[test]
fn test_use_applies_held_item_each_tick() {
    let mut world = grid().with_heading(Heading::West);
    world.give(5, 1);
    let mut p = processor(world, &[(Opcode::Wield, 5), (Opcode::Use, 3)]);
    assert_eq!(exec(&mut p), 3);
    let used = Effect::Used {
        slot: 5,
        cell: Cell::new(6, 5),
    };
    assert_eq!(p.take_effects(), vec![used.clone(), used.clone(), used]);
    assert_eq!(p.world().count(5), 1);
}

#[test]
fn test_use_without_item_still_blocks() {
    let mut p = processor(grid(), &[(Opcode::Use, 2)]);
    assert_eq!(exec(&mut p), 2);
    assert!(p.world().effects().is_empty());
}

#[test]
fn test_explode_clears_neighbourhood() {
    let mut world = grid();
    world.place(Cell::new(8, 6), 1);
    world.place(Cell::new(7, 5), 2);
    world.place(Cell::new(9, 5), 3);
    let mut p = processor(world, &[(Opcode::Explode, 0)]);
    exec(&mut p);
    assert!(p.world().is_destroyed());
    assert_eq!(p.world().items_at(Cell::new(8, 6)), &[1]);
    assert!(p.world().items_at(Cell::new(7, 5)).is_empty());
    assert_eq!(
        p.world().effects(),
        &[Effect::Exploded {
            cell: Cell::new(7, 5),
            radius: 0
        }]
    );
}

#[test]
fn test_negative_explode_fires_once() {
    for &operand in [-3, i32::min_value()].iter() {
        let mut p = processor(grid(), &[(Opcode::Explode, operand)]);
        assert_eq!(p.tick().unwrap(), Tick::Halted);
        assert!(p.world().is_destroyed());
        assert_eq!(
            p.take_effects(),
            vec![Effect::Exploded {
                cell: Cell::new(7, 5),
                radius: 0
            }]
        );
    }
}

#[test]
fn test_wrap_boundary() {
    let world = World::new(15, 10)
        .with_boundary(Boundary::Wrap)
        .with_position(13, 1)
        .with_heading(Heading::East);
    let mut p = processor(
        world,
        &[(Opcode::Move, 3), (Opcode::Turn, 1), (Opcode::Move, 2)],
    );
    exec(&mut p);
    assert_eq!(p.world().position(), Cell::new(1, 9));
}

#[test]
fn test_world_survives_processor() {
    let mut p = processor(grid(), &[(Opcode::Turn, 4), (Opcode::Move, 1)]);
    exec(&mut p);
    let world = p.into_world();
    assert_eq!(world.position(), Cell::new(6, 5));
    assert_eq!(world.heading(), Heading::West);
}
