use dwarf::mach::{Direction, Heading, Opcode, Processor, World};
use proptest::prelude::*;
use std::convert::TryFrom;

fn heading() -> impl Strategy<Value = Heading> {
    (1..=4i32).prop_map(|i| Heading::from_index(i).unwrap())
}

fn turns(start: Heading, operand: i32, times: usize) -> Heading {
    let mut p = Processor::new(World::new(3, 3).with_heading(start));
    for _ in 0..times {
        p.push(Opcode::Turn, operand).unwrap();
    }
    p.reset();
    p.tick().unwrap();
    p.world().heading()
}

proptest! {
    #[test]
    fn right_four_times_is_identity(start in heading()) {
        prop_assert_eq!(turns(start, 6, 4), start);
    }

    #[test]
    fn behind_twice_is_identity(start in heading()) {
        prop_assert_eq!(turns(start, 7, 2), start);
    }

    #[test]
    fn left_undoes_right(start in heading()) {
        prop_assert_eq!(start.right().left(), start);
        prop_assert_eq!(start.left().right(), start);
    }

    #[test]
    fn front_keeps_heading(start in heading()) {
        prop_assert_eq!(turns(start, 5, 3), start);
    }

    #[test]
    fn absolute_turns_ignore_start(start in heading(), target in 1..=4i32) {
        prop_assert_eq!(turns(start, target, 1).index(), target);
    }

    #[test]
    fn relative_matches_modular_table(start in heading()) {
        let h = start.index();
        prop_assert_eq!(start.right().index(), h % 4 + 1);
        prop_assert_eq!(start.behind().index(), (h + 1) % 4 + 1);
        prop_assert_eq!(start.left().index(), (h + 2) % 4 + 1);
    }
}

#[test]
fn test_direction_resolves_relative_to_heading() {
    let east = Heading::East;
    assert_eq!(Direction::try_from(6).unwrap().resolve(east), Some(Heading::South));
    assert_eq!(Direction::try_from(8).unwrap().resolve(east), Some(Heading::North));
    assert_eq!(Direction::try_from(1).unwrap().resolve(east), Some(Heading::North));
}
