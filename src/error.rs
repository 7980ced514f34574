use std::fmt;

use thiserror::Error;

/// Which operand of a comparison a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    #[error("malformed UTF-8 in {side} operand at byte {offset}")]
    MalformedUtf8 { side: Side, offset: usize },
}
