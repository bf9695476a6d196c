use crate::game::{Action, Cell, GameState, MovementGraph, Node, Player, Wall};

use super::agent::Agent;

/// Walks the shortest path to its goal row.
///
/// When the next hop on that path is an ordinary step the agent takes it.
/// When it is a jump, the agent first tries to slow the opponent down with a
/// wall across the opponent's own shortest path, and only jumps when no such
/// wall can be placed.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathAgent;

impl ShortestPathAgent {
    pub fn new() -> Self {
        ShortestPathAgent
    }

    /// First legal wall cutting an ordinary step of the opponent's shortest path.
    fn blocking_wall(state: &GameState, graph: &MovementGraph, player: Player) -> Option<Wall> {
        if state.walls_left(player) == 0 {
            return None;
        }

        let opponent = player.other();
        let path = graph.shortest_path(state.position(opponent).into(), opponent.goal())?;
        let cells: Vec<Cell> = path.into_iter().filter_map(Node::cell).collect();

        cells
            .windows(2)
            .filter(|step| step[0].is_adjacent(step[1]))
            .flat_map(|step| Wall::blocking(step[0], step[1]))
            .find(|&wall| state.check_wall(player, wall).is_ok())
    }
}

impl Agent for ShortestPathAgent {
    fn select_action(&mut self, state: &GameState, player: Player) -> Action {
        let graph = state.graph();
        let here = state.position(player);

        let next = graph
            .shortest_path(here.into(), player.goal())
            .and_then(|path| path.get(1).and_then(|n| n.cell()));

        match next {
            Some(step) if step.is_adjacent(here) => Action::Move(step),
            Some(jump) => match Self::blocking_wall(state, &graph, player) {
                Some(wall) => Action::PlaceWall(wall),
                None => Action::Move(jump),
            },
            None => {
                let moves: Vec<Cell> = graph.cell_successors(here).collect();
                assert!(!moves.is_empty(), "No legal moves available from {here}");
                Action::Move(moves[0])
            }
        }
    }

    fn name(&self) -> &str {
        "Shortest path"
    }
}
