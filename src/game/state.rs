use crate::ai::Agent;
use crate::error::GameError;

use super::action::Action;
use super::cell::{Cell, Orientation, Wall, BOARD_SIZE};
use super::graph::{split_walls, MovementGraph};
use super::player::Player;
use super::snapshot::{GameSnapshot, PlayerSnapshot, WallsSnapshot};

/// Walls each player holds at the start of a game.
pub const WALLS_PER_PLAYER: u32 = 10;

/// Walls placed plus walls remaining, across both players.
pub const TOTAL_WALLS: u32 = 2 * WALLS_PER_PLAYER;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlayerState {
    name: String,
    walls_left: u32,
    position: Cell,
}

/// Owner of a game: pawns, wall budgets and placed walls.
///
/// Every legality question is answered by building a fresh
/// [`MovementGraph`] from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    players: [PlayerState; 2],
    walls: Vec<Wall>,
}

impl GameState {
    /// Opening position: player 1 on (5, 1), player 2 on (5, 9), ten walls each.
    pub fn new(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        let player = |p: Player, name: String| PlayerState {
            name,
            walls_left: WALLS_PER_PLAYER,
            position: p.start(),
        };
        GameState {
            players: [
                player(Player::One, name1.into()),
                player(Player::Two, name2.into()),
            ],
            walls: Vec::new(),
        }
    }

    /// Restore a game from a snapshot, validating every field.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, GameError> {
        let [s1, s2] = snapshot.players;

        for (player, s) in Player::ALL.into_iter().zip([&s1, &s2]) {
            if s.walls > WALLS_PER_PLAYER {
                return Err(GameError::InvalidWallBudget {
                    player,
                    walls: s.walls,
                });
            }
            if !s.pos.is_on_board() {
                return Err(GameError::InvalidPosition(s.pos));
            }
        }
        if s1.pos == s2.pos {
            return Err(GameError::SharedPosition(s1.pos));
        }

        let walls: Vec<Wall> = snapshot
            .walls
            .horizontal
            .iter()
            .map(|&a| Wall::new(Orientation::Horizontal, a))
            .chain(snapshot.walls.vertical.iter().map(|&a| Wall::new(Orientation::Vertical, a)))
            .collect();

        for (i, &wall) in walls.iter().enumerate() {
            if !wall.is_in_range() {
                return Err(GameError::InvalidWallPosition(wall));
            }
            if walls[..i].iter().any(|w| w.conflicts_with(wall)) {
                return Err(GameError::WallOccupied(wall));
            }
        }

        let total = s1.walls + s2.walls + walls.len() as u32;
        if total != TOTAL_WALLS {
            return Err(GameError::InvalidWallTotal(total));
        }

        let graph = MovementGraph::build_with_walls([s1.pos, s2.pos], &walls);
        for (player, pos) in Player::ALL.into_iter().zip([s1.pos, s2.pos]) {
            if !graph.has_path(pos.into(), player.goal()) {
                return Err(GameError::SealedIn(player));
            }
        }

        let restore = |s: PlayerSnapshot| PlayerState {
            name: s.name,
            walls_left: s.walls,
            position: s.pos,
        };
        Ok(GameState {
            players: [restore(s1), restore(s2)],
            walls,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (horizontal, vertical) = split_walls(&self.walls);
        let player = |s: &PlayerState| PlayerSnapshot {
            name: s.name.clone(),
            walls: s.walls_left,
            pos: s.position,
        };
        GameSnapshot {
            players: [player(&self.players[0]), player(&self.players[1])],
            walls: WallsSnapshot {
                horizontal,
                vertical,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    pub fn name(&self, player: Player) -> &str {
        &self.players[player.index()].name
    }

    pub fn position(&self, player: Player) -> Cell {
        self.players[player.index()].position
    }

    pub fn walls_left(&self, player: Player) -> u32 {
        self.players[player.index()].walls_left
    }

    /// Placed walls in placement order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn pawns(&self) -> [Cell; 2] {
        [self.players[0].position, self.players[1].position]
    }

    /// Movement graph for the current position.
    pub fn graph(&self) -> MovementGraph {
        MovementGraph::build_with_walls(self.pawns(), &self.walls)
    }

    /// The player whose pawn stands on its goal row, if any.
    pub fn winner(&self) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.position(p).y == p.goal_row())
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Cells the player's pawn can reach this turn.
    pub fn legal_moves(&self, player: Player) -> Vec<Cell> {
        self.graph().cell_successors(self.position(player)).collect()
    }

    /// Moves needed to reach the goal row, ignoring the opponent's future play.
    pub fn distance_to_goal(&self, player: Player) -> Option<usize> {
        self.graph()
            .distance(self.position(player).into(), player.goal())
            .map(|d| d - 1)
    }

    pub fn move_pawn(&mut self, player: Player, to: Cell) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !to.is_on_board() {
            return Err(GameError::InvalidPosition(to));
        }

        let from = self.position(player);
        if to == from || !self.graph().has_edge(from.into(), to.into()) {
            tracing::debug!(%player, %from, %to, "rejected pawn move");
            return Err(GameError::IllegalMove { player, from, to });
        }

        self.players[player.index()].position = to;
        Ok(())
    }

    /// Check whether `player` may place `wall` now, without placing it.
    pub fn check_wall(&self, player: Player, wall: Wall) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !wall.is_in_range() {
            return Err(GameError::InvalidWallPosition(wall));
        }
        if self.walls.iter().any(|w| w.conflicts_with(wall)) {
            return Err(GameError::WallOccupied(wall));
        }
        if self.walls_left(player) == 0 {
            return Err(GameError::NoWallsLeft(player));
        }

        let mut walls = self.walls.clone();
        walls.push(wall);
        let graph = MovementGraph::build_with_walls(self.pawns(), &walls);
        if let Some(blocked) = Player::ALL
            .into_iter()
            .find(|&p| !graph.has_path(self.position(p).into(), p.goal()))
        {
            tracing::debug!(%wall, player = %blocked, "wall would seal off a goal row");
            return Err(GameError::WallBlocksPath {
                wall,
                player: blocked,
            });
        }

        Ok(())
    }

    pub fn place_wall(&mut self, player: Player, wall: Wall) -> Result<(), GameError> {
        self.check_wall(player, wall)?;
        self.walls.push(wall);
        self.players[player.index()].walls_left -= 1;
        Ok(())
    }

    /// Every wall `player` could legally place now.
    pub fn legal_walls(&self, player: Player) -> Vec<Wall> {
        if self.walls_left(player) == 0 || self.is_over() {
            return Vec::new();
        }

        let anchors = (1..=BOARD_SIZE).flat_map(|x| (1..=BOARD_SIZE).map(move |y| Cell::new(x, y)));
        anchors
            .flat_map(|a| [Wall::new(Orientation::Horizontal, a), Wall::new(Orientation::Vertical, a)])
            .filter(|&w| self.check_wall(player, w).is_ok())
            .collect()
    }

    pub fn apply(&mut self, player: Player, action: Action) -> Result<(), GameError> {
        match action {
            Action::Move(to) => self.move_pawn(player, to),
            Action::PlaceWall(wall) => self.place_wall(player, wall),
        }
    }

    /// Let `agent` choose and play the turn for `player`.
    pub fn play_automated(&mut self, player: Player, agent: &mut dyn Agent) -> Result<Action, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let action = agent.select_action(self, player);
        self.apply(player, action)?;
        Ok(action)
    }
}
