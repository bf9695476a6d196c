use std::fmt;

use super::cell::{Cell, BOARD_SIZE};
use super::graph::Node;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Parse a 1-based player number.
    pub fn from_number(n: u8) -> Result<Player, GameError> {
        match n {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Position in per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn start(self) -> Cell {
        match self {
            Player::One => Cell::new(5, 1),
            Player::Two => Cell::new(5, BOARD_SIZE),
        }
    }

    /// Row this player must reach to win.
    pub fn goal_row(self) -> i32 {
        match self {
            Player::One => BOARD_SIZE,
            Player::Two => 1,
        }
    }

    /// Goal sentinel of the movement graph for this player.
    pub fn goal(self) -> Node {
        match self {
            Player::One => Node::GoalRow9,
            Player::Two => Node::GoalRow1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Player::from_number(1).unwrap(), Player::One);
        assert_eq!(Player::from_number(2).unwrap(), Player::Two);
        assert_eq!(Player::from_number(3), Err(GameError::InvalidPlayer(3)));
        assert_eq!(Player::from_number(0), Err(GameError::InvalidPlayer(0)));
    }

    #[test]
    fn test_goals_face_each_other() {
        assert_eq!(Player::One.start().y, Player::Two.goal_row());
        assert_eq!(Player::Two.start().y, Player::One.goal_row());
        assert_eq!(Player::One.goal(), Node::GoalRow9);
    }
}
