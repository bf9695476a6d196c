use crate::game::{Action, GameState, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that plays uniformly at random among legal actions.
///
/// On each turn it first decides whether to try a wall (with probability
/// `wall_probability`, and only while it has walls left), then picks
/// uniformly among the legal walls or the legal pawn moves.
pub struct RandomAgent {
    rng: StdRng,
    wall_probability: f64,
}

impl RandomAgent {
    pub const DEFAULT_WALL_PROBABILITY: f64 = 0.2;

    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            wall_probability: Self::DEFAULT_WALL_PROBABILITY,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            wall_probability: Self::DEFAULT_WALL_PROBABILITY,
        }
    }

    /// Set the chance of placing a wall; must lie in [0, 1].
    pub fn wall_probability(mut self, p: f64) -> Self {
        self.wall_probability = p;
        self
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState, player: Player) -> Action {
        if state.walls_left(player) > 0 && self.rng.random_bool(self.wall_probability) {
            let walls = state.legal_walls(player);
            if !walls.is_empty() {
                let idx = self.rng.random_range(0..walls.len());
                return Action::PlaceWall(walls[idx]);
            }
        }

        let moves = state.legal_moves(player);
        assert!(!moves.is_empty(), "No legal moves available");
        let idx = self.rng.random_range(0..moves.len());
        Action::Move(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
