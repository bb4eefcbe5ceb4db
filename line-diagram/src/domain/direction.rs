//! Direction of travel along identifier order.

use std::fmt;

/// Error returned when converting a step that is neither `+1` nor `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction step {0}: must be 1 or -1")]
pub struct InvalidDirection(pub i8);

/// Which way a walk moves through station identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing identifier order.
    Forward,
    /// Decreasing identifier order.
    Backward,
}

impl Direction {
    /// Both directions, in the order the path finder tries them.
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// The identifier step for this direction.
    pub fn step(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = InvalidDirection;

    fn try_from(step: i8) -> Result<Self, Self::Error> {
        match step {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}
