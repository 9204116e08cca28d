use crate::mach::{Error, Processor};

/// Built-in tapes. Each is appended with direct `push_code` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Demo {
    /// Step out, then circle three sides of a block and blow up.
    Patrol,
    /// Walk to the wall, zig-zag twice, grab what is north and use it.
    Forage,
    /// Walk a three-cell square.
    Square,
}

const PATROL: &[(char, i32)] = &[
    ('M', 2),
    ('T', 8),
    ('N', 0),
    ('M', 3),
    ('T', 6),
    ('L', 3),
    ('Z', 3),
    ('X', 0),
];

const FORAGE: &[(char, i32)] = &[
    ('M', 7),
    ('N', 0),
    ('T', 8),
    ('M', 3),
    ('L', 2),
    ('G', 1),
    ('W', 1),
    ('U', 2),
];

const SQUARE: &[(char, i32)] = &[('N', 0), ('M', 3), ('T', 6), ('L', 4)];

impl Demo {
    pub fn tape(self) -> &'static [(char, i32)] {
        match self {
            Demo::Patrol => PATROL,
            Demo::Forage => FORAGE,
            Demo::Square => SQUARE,
        }
    }

    pub fn load(self, processor: &mut Processor) -> Result<(), Error> {
        for &(code, operand) in self.tape() {
            processor.push_code(code, operand)?;
        }
        Ok(())
    }
}
