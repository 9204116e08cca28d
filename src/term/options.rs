use super::Demo;
use crate::log::Level;
use crate::mach::{Boundary, Heading, World};
use clap::Parser;

/// Plays a dwarf's instruction tape on a grid in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "dwarf", version, about, long_about = None)]
pub struct Options {
    /// Built-in tape to play.
    #[arg(long, value_enum, default_value_t = Demo::Patrol)]
    pub demo: Demo,

    /// Grid width in cells.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i32).range(1..=200))]
    pub width: i32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(1..=200))]
    pub height: i32,

    /// Starting column.
    #[arg(long, default_value_t = 7)]
    pub x: i32,

    /// Starting row.
    #[arg(long, default_value_t = 5)]
    pub y: i32,

    /// Starting heading: 1 north, 2 east, 3 south, 4 west.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..=4))]
    pub heading: i32,

    /// Wrap around grid edges instead of stopping at them.
    #[arg(long, default_value_t = false)]
    pub wrap: bool,

    /// Frames per second when playing.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub fps: u64,

    /// Number of items to scatter on the grid.
    #[arg(long, default_value_t = 0)]
    pub items: usize,

    /// Seed for scattering items.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step through the tape from a prompt instead of playing it.
    #[arg(long, default_value_t = false)]
    pub step: bool,

    /// Log level: debug, info, warn, error or off.
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,
}

impl Options {
    /// Empty world laid out as the options describe.
    pub fn world(&self) -> World {
        let boundary = if self.wrap {
            Boundary::Wrap
        } else {
            Boundary::Clamp
        };
        World::new(self.width, self.height)
            .with_boundary(boundary)
            .with_position(self.x, self.y)
            .with_heading(Heading::from_index(self.heading).unwrap_or_default())
    }
}
