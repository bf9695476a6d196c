//! Automated players.

mod agent;
mod random;
mod shortest_path;

pub use agent::Agent;
pub use random::RandomAgent;
pub use shortest_path::ShortestPathAgent;

use crate::config::{AutomatonConfig, Strategy};

/// Build the automated player described by `config`.
pub fn agent_from_config(config: &AutomatonConfig) -> Box<dyn Agent> {
    match config.strategy {
        Strategy::ShortestPath => Box::new(ShortestPathAgent::new()),
        Strategy::Random => {
            let agent = match config.seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            };
            Box::new(agent.wall_probability(config.wall_probability))
        }
    }
}
