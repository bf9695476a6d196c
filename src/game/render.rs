//! ASCII rendering of a game.
//!
//! Each cell sits at column `4 * x` of its row line; rows are separated by a
//! spacer line where horizontal walls are drawn.

use std::fmt;

use super::cell::{Orientation, BOARD_SIZE};
use super::player::Player;
use super::state::GameState;

const WIDTH: usize = 39;

fn row_line(y: i32) -> Vec<char> {
    let mut line = format!("{y} | ");
    for x in 1..=BOARD_SIZE {
        line.push('.');
        line.push_str(if x < BOARD_SIZE { "   " } else { " |" });
    }
    line.chars().collect()
}

fn spacer_line() -> Vec<char> {
    let mut line = vec![' '; WIDTH];
    line[2] = '|';
    line[WIDTH - 1] = '|';
    line
}

/// Line index of row `y` in the board grid.
fn row_index(y: i32) -> usize {
    (2 * (BOARD_SIZE - y)) as usize
}

/// The board grid without legend and footer, one `String` per line.
pub fn board_lines(state: &GameState) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = Vec::new();
    for y in (1..=BOARD_SIZE).rev() {
        grid.push(row_line(y));
        if y > 1 {
            grid.push(spacer_line());
        }
    }

    for wall in state.walls() {
        let (x, y) = (wall.anchor.x as usize, wall.anchor.y);
        match wall.orientation {
            Orientation::Horizontal => {
                let line = &mut grid[row_index(y) + 1];
                for col in 4 * x - 1..=4 * x + 5 {
                    line[col] = '-';
                }
            }
            Orientation::Vertical => {
                let top = row_index(y) - 2;
                for line in &mut grid[top..=top + 2] {
                    line[4 * x - 2] = '|';
                }
            }
        }
    }

    for player in Player::ALL {
        let pos = state.position(player);
        let digit = char::from(b'0' + player.number());
        grid[row_index(pos.y)][4 * pos.x as usize] = digit;
    }

    grid.into_iter().map(|l| l.into_iter().collect()).collect()
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Legend: 1={} 2={}",
            self.name(Player::One),
            self.name(Player::Two)
        )?;
        writeln!(f, "   {}", "-".repeat(WIDTH - 4))?;
        for line in board_lines(self) {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "--|{}", "-".repeat(WIDTH - 4))?;
        let labels: Vec<String> = (1..=BOARD_SIZE).map(|x| x.to_string()).collect();
        write!(f, "  | {}", labels.join("   "))
    }
}
