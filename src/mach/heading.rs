use crate::error;
use super::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Cardinal heading
///
/// Encoded `1..=4` clockwise from north, matching the `turn` operand.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl Heading {
    pub fn from_index(index: i32) -> Option<Heading> {
        use Heading::*;
        match index {
            1 => Some(North),
            2 => Some(East),
            3 => Some(South),
            4 => Some(West),
            _ => None,
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn right(self) -> Heading {
        use Heading::*;
        match self {
            North => East,
            East => South,
            South => West,
            West => North,
        }
    }

    pub fn behind(self) -> Heading {
        use Heading::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    pub fn left(self) -> Heading {
        use Heading::*;
        match self {
            North => West,
            East => North,
            South => East,
            West => South,
        }
    }

    /// Unit step on the grid. North is toward row zero.
    pub fn delta(self) -> (i32, i32) {
        use Heading::*;
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }
}

impl Default for Heading {
    fn default() -> Heading {
        Heading::North
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Heading::*;
        match self {
            North => write!(f, "north"),
            East => write!(f, "east"),
            South => write!(f, "south"),
            West => write!(f, "west"),
        }
    }
}

/// ## Direction operand
///
/// `turn`, `get` and `drop` share one operand encoding:
/// `0` here, `1..=4` absolute headings, `5..=8` relative to the current heading.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Here,
    Absolute(Heading),
    Front,
    Right,
    Behind,
    Left,
}

impl Direction {
    /// Heading this direction points to from `current`, or `None` for `Here`.
    pub fn resolve(self, current: Heading) -> Option<Heading> {
        use Direction::*;
        match self {
            Here => None,
            Absolute(heading) => Some(heading),
            Front => Some(current),
            Right => Some(current.right()),
            Behind => Some(current.behind()),
            Left => Some(current.left()),
        }
    }

    pub fn operand(self) -> i32 {
        use Direction::*;
        match self {
            Here => 0,
            Absolute(heading) => heading.index(),
            Front => 5,
            Right => 6,
            Behind => 7,
            Left => 8,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(operand: i32) -> Result<Direction> {
        use Direction::*;
        match operand {
            0 => Ok(Here),
            1..=4 => match Heading::from_index(operand) {
                Some(heading) => Ok(Absolute(heading)),
                None => Err(error!(InvalidOperand; "DIRECTION")),
            },
            5 => Ok(Front),
            6 => Ok(Right),
            7 => Ok(Behind),
            8 => Ok(Left),
            _ => Err(error!(InvalidOperand; "DIRECTION")),
        }
    }
}
