//! Direction selector
//!
//! Identifies the coordinate component a one-dimensional field varies along.
//! Codes are one-based, matching the degree-of-freedom numbering used by the
//! structural solver (X = 1, Y = 2, Z = 3).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    /// One-based solver code.
    pub fn code(self) -> usize {
        match self {
            Direction::X => 1,
            Direction::Y => 2,
            Direction::Z => 3,
        }
    }

    /// Zero-based offset into a coordinate vector.
    pub fn offset(self) -> usize {
        self.code() - 1
    }

    pub fn from_code(code: usize) -> Option<Self> {
        match code {
            1 => Some(Direction::X),
            2 => Some(Direction::Y),
            3 => Some(Direction::Z),
            _ => None,
        }
    }
}
