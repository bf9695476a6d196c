use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Serializable view of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    /// Walls the player may still place.
    pub walls: u32,
    pub pos: Cell,
}

/// Placed walls by orientation, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallsSnapshot {
    pub horizontal: Vec<Cell>,
    pub vertical: Vec<Cell>,
}

/// Full game state as plain data, suitable for JSON.
///
/// ```json
/// {
///   "players": [
///     {"name": "alice", "walls": 10, "pos": [5, 1]},
///     {"name": "automaton", "walls": 10, "pos": [5, 9]}
///   ],
///   "walls": {"horizontal": [], "vertical": []}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: [PlayerSnapshot; 2],
    #[serde(default)]
    pub walls: WallsSnapshot,
}
