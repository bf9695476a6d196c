use std::fmt;

use super::cell::{Cell, Wall};

/// One turn: either move the pawn or place a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Cell),
    PlaceWall(Wall),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(c) => write!(f, "move to {c}"),
            Action::PlaceWall(w) => write!(f, "place {w}"),
        }
    }
}
