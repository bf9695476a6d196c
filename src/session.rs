//! Running a match between two agents.

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{Action, GameState, Player};

/// Outcome of a match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// `None` when the turn cap was hit first.
    pub winner: Option<Player>,
    pub actions: Vec<(Player, Action)>,
    pub final_state: GameState,
}

impl MatchResult {
    pub fn turns(&self) -> usize {
        self.actions.len()
    }
}

/// Alternate turns between `agents` (indexed by player) starting with
/// `first`, until someone wins or `max_turns` actions have been played.
pub fn play_match(
    mut state: GameState,
    mut agents: [&mut dyn Agent; 2],
    first: Player,
    max_turns: usize,
) -> Result<MatchResult, SessionError> {
    let mut actions: Vec<(Player, Action)> = Vec::new();
    let mut player = first;

    while !state.is_over() && actions.len() < max_turns {
        let agent = &mut agents[player.index()];
        let action = agent.select_action(&state, player);
        state
            .apply(player, action)
            .map_err(|source| SessionError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                source,
            })?;

        tracing::info!(turn = actions.len() + 1, %player, %action, "played");
        actions.push((player, action));
        player = player.other();
    }

    let winner = state.winner();
    match winner {
        Some(p) => tracing::info!(winner = %p, name = state.name(p), turns = actions.len(), "match over"),
        None => tracing::info!(turns = actions.len(), "turn limit reached"),
    }

    Ok(MatchResult {
        winner,
        actions,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ShortestPathAgent;
    use crate::game::Cell;
    use crate::error::GameError;

    /// Plays a fixed list of pawn moves.
    struct Scripted {
        moves: Vec<Cell>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: &[(i32, i32)]) -> Self {
            Scripted {
                moves: moves.iter().map(|&c| c.into()).collect(),
                next: 0,
            }
        }
    }

    impl Agent for Scripted {
        fn select_action(&mut self, _state: &GameState, _player: Player) -> Action {
            let to = self.moves[self.next % self.moves.len()];
            self.next += 1;
            Action::Move(to)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_shortest_path_agent_wins_race() {
        let mut runner = ShortestPathAgent::new();
        let mut wanderer = Scripted::new(&[(6, 9), (7, 9), (8, 9), (9, 9), (8, 9), (7, 9), (6, 9)]);
        let state = GameState::new("runner", "wanderer");

        let result = play_match(state, [&mut runner, &mut wanderer], Player::One, 100).unwrap();
        assert_eq!(result.winner, Some(Player::One));
        assert_eq!(result.turns(), 15);
        assert_eq!(result.final_state.position(Player::One), Cell::new(5, 9));
        assert_eq!(result.actions[0], (Player::One, Action::Move(Cell::new(5, 2))));
        assert_eq!(result.actions[1], (Player::Two, Action::Move(Cell::new(6, 9))));
    }

    #[test]
    fn test_turn_limit() {
        let mut a = Scripted::new(&[(4, 1), (5, 1)]);
        let mut b = Scripted::new(&[(4, 9), (5, 9)]);
        let state = GameState::new("a", "b");

        let result = play_match(state, [&mut a, &mut b], Player::Two, 4).unwrap();
        assert_eq!(result.winner, None);
        assert_eq!(result.turns(), 4);
        assert_eq!(result.actions[0].0, Player::Two);
        assert_eq!(result.final_state.position(Player::One), Cell::new(5, 1));
    }

    #[test]
    fn test_illegal_action_is_reported() {
        let mut a = Scripted::new(&[(5, 3)]);
        let mut b = Scripted::new(&[(5, 8)]);
        let state = GameState::new("a", "b");

        let err = play_match(state, [&mut a, &mut b], Player::One, 10).unwrap_err();
        match err {
            SessionError::IllegalAction { agent, action, source } => {
                assert_eq!(agent, "Scripted");
                assert_eq!(action, Action::Move(Cell::new(5, 3)));
                assert!(matches!(source, GameError::IllegalMove { .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
