use crate::mach::{Cell, Effect, Heading, Processor, World};
use ansi_term::{Colour, Style};

pub const CLEAR: &str = "\x1b[2J\x1b[H";

fn arrow(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

fn in_blast(cell: Cell, effects: &[Effect]) -> bool {
    effects.iter().any(|effect| match effect {
        Effect::Exploded { cell: center, radius } => {
            (cell.x - center.x).abs() <= *radius && (cell.y - center.y).abs() <= *radius
        }
        Effect::Used { .. } => false,
    })
}

fn used_on(cell: Cell, effects: &[Effect]) -> bool {
    effects.iter().any(|effect| match effect {
        Effect::Used { cell: target, .. } => *target == cell,
        Effect::Exploded { .. } => false,
    })
}

/// Draws the grid with the agent, ground items and this frame's effects.
pub fn grid(world: &World, effects: &[Effect], color: bool) -> String {
    let mut out = String::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            let cell = Cell::new(x, y);
            let (ch, style) = if cell == world.position() {
                (arrow(world.heading()), Colour::Yellow.bold())
            } else if in_blast(cell, effects) {
                ('*', Colour::Red.bold())
            } else if let Some(slot) = world.items_at(cell).last() {
                let digit = std::char::from_digit(*slot as u32, 10).unwrap_or('?');
                let style = if used_on(cell, effects) {
                    Colour::Cyan.bold()
                } else {
                    Colour::Green.normal()
                };
                (digit, style)
            } else if used_on(cell, effects) {
                ('+', Colour::Cyan.bold())
            } else {
                ('.', Style::new().dimmed())
            };
            if x > 0 {
                out.push(' ');
            }
            if color {
                out.push_str(&style.paint(ch.to_string()).to_string());
            } else {
                out.push(ch);
            }
        }
        out.push('\n');
    }
    out
}

/// One line describing the processor and the agent.
pub fn status(processor: &Processor, frame: u64) -> String {
    let world = processor.world();
    let head = match processor.head() {
        Some(address) => format!("{}", address),
        None => "HALT".to_string(),
    };
    let current = processor
        .head()
        .and_then(|address| processor.instructions().get(address))
        .map(|instruction| instruction.to_string())
        .unwrap_or_default();
    let held = match world.held() {
        Some(slot) => slot.to_string(),
        None => "-".to_string(),
    };
    let inventory: Vec<String> = world.inventory().iter().map(|n| n.to_string()).collect();
    format!(
        "tick {:<4} head {:<4} {:<10} facing {:<5} at {} held {} inv [{}]",
        frame,
        head,
        current,
        world.heading(),
        world.position(),
        held,
        inventory.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Opcode;

    #[test]
    fn test_plain_grid() {
        let mut world = World::new(3, 2).with_position(1, 0).with_heading(Heading::East);
        world.place(Cell::new(2, 1), 4);
        assert_eq!(grid(&world, &[], false), ". > .\n. . 4\n");
    }

    #[test]
    fn test_blast_marks_cells() {
        let world = World::new(3, 1);
        let effects = [Effect::Exploded {
            cell: Cell::new(0, 0),
            radius: 1,
        }];
        assert_eq!(grid(&world, &effects, false), "^ * .\n");
    }

    #[test]
    fn test_status_line() {
        let mut p = Processor::new(World::new(15, 10).with_position(7, 5));
        p.push(Opcode::Move, 2).unwrap();
        p.reset();
        let s = status(&p, 0);
        assert!(s.starts_with("tick 0    head 0    move 2"));
        assert!(s.contains("at (7, 5)"));
        assert!(s.ends_with("held - inv [0 0 0 0 0 0 0 0]"));
    }
}
