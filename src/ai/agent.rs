use crate::game::{Action, GameState, Player};

/// Universal interface for automated players.
pub trait Agent {
    /// Choose the turn for `player`. The game must not be over.
    fn select_action(&mut self, state: &GameState, player: Player) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
