//! Core Quoridor logic: board geometry, the movement graph, players and the
//! game state that owns pawns and walls.

mod action;
mod cell;
pub mod graph;
mod player;
pub mod render;
mod snapshot;
mod state;

pub use action::Action;
pub use cell::{Cell, Orientation, Wall, BOARD_SIZE};
pub use graph::{MovementGraph, Node};
pub use player::Player;
pub use snapshot::{GameSnapshot, PlayerSnapshot, WallsSnapshot};
pub use state::{GameState, TOTAL_WALLS, WALLS_PER_PLAYER};
