use std::path::PathBuf;

use crate::game::{Action, Cell, Player, Wall};

/// Rejected game requests. None of these leave the game state modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player number must be 1 or 2, got {0}")]
    InvalidPlayer(u8),

    #[error("player position invalid: {0}")]
    InvalidPosition(Cell),

    #[error("both players cannot stand on {0}")]
    SharedPosition(Cell),

    #[error("{player} cannot move from {from} to {to}")]
    IllegalMove { player: Player, from: Cell, to: Cell },

    #[error("wall position invalid: {0}")]
    InvalidWallPosition(Wall),

    #[error("a wall already occupies that position: {0}")]
    WallOccupied(Wall),

    #[error("{0} has no walls left")]
    NoWallsLeft(Player),

    #[error("{wall} would cut {player} off from its goal row")]
    WallBlocksPath { wall: Wall, player: Player },

    #[error("{0} has no path to its goal row")]
    SealedIn(Player),

    #[error("{player} cannot hold {walls} walls (at most 10)")]
    InvalidWallBudget { player: Player, walls: u32 },

    #[error("placed and remaining walls must total 20, got {0}")]
    InvalidWallTotal(u32),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while running a match between agents.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("agent '{agent}' chose an illegal action ({action}): {source}")]
    IllegalAction {
        agent: String,
        action: Action,
        source: GameError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::IllegalMove {
            player: Player::One,
            from: Cell::new(5, 1),
            to: Cell::new(5, 3),
        };
        assert_eq!(err.to_string(), "player 1 cannot move from (5, 1) to (5, 3)");

        let err = GameError::InvalidWallPosition(Wall::horizontal(9, 1));
        assert_eq!(err.to_string(), "wall position invalid: horizontal wall at (9, 1)");

        let err = GameError::SealedIn(Player::Two);
        assert_eq!(err.to_string(), "player 2 has no path to its goal row");
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::IllegalAction {
            agent: "Random".to_string(),
            action: Action::Move(Cell::new(1, 1)),
            source: GameError::GameOver,
        };
        assert_eq!(
            err.to_string(),
            "agent 'Random' chose an illegal action (move to (1, 1)): the game is already over"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("session.max_turns must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: session.max_turns must be > 0"
        );
    }
}
