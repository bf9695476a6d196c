use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 9;

/// A board square. Coordinates are 1-based; `x` is the column, `y` the row.
///
/// Coordinates are signed so that squares just past the edge (the landing
/// square of a jump at the border, for instance) can be formed and then
/// rejected with [`Cell::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    /// Orthogonal neighbours that lie on the board, in left, right, down, up order.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        [
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x, self.y - 1),
            Cell::new(self.x, self.y + 1),
        ]
        .into_iter()
        .filter(|c| c.is_on_board())
    }

    /// True when `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// The cell directly behind `self` as seen from `from`.
    #[inline]
    pub fn mirror_of(self, from: Cell) -> Cell {
        Cell::new(2 * self.x - from.x, 2 * self.y - from.y)
    }

    /// Every on-board cell, column by column.
    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=BOARD_SIZE).flat_map(|x| (1..=BOARD_SIZE).map(move |y| Cell::new(x, y)))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            other => Err(format!("unknown wall orientation '{other}'")),
        }
    }
}

/// A two-unit wall anchored at its lower-left corner.
///
/// A horizontal wall at (x, y) lies between rows y-1 and y and covers columns
/// x and x+1. A vertical wall at (x, y) lies between columns x-1 and x and
/// covers rows y and y+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    pub orientation: Orientation,
    pub anchor: Cell,
}

impl Wall {
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Wall {
            orientation: Orientation::Horizontal,
            anchor: Cell::new(x, y),
        }
    }

    pub const fn vertical(x: i32, y: i32) -> Self {
        Wall {
            orientation: Orientation::Vertical,
            anchor: Cell::new(x, y),
        }
    }

    pub fn new(orientation: Orientation, anchor: Cell) -> Self {
        Wall {
            orientation,
            anchor,
        }
    }

    /// Whether the anchor is within the range allowed for this orientation.
    pub fn is_in_range(self) -> bool {
        let Cell { x, y } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => (1..BOARD_SIZE).contains(&x) && (2..=BOARD_SIZE).contains(&y),
            Orientation::Vertical => (2..=BOARD_SIZE).contains(&x) && (1..BOARD_SIZE).contains(&y),
        }
    }

    /// The two cell pairs whose connection this wall cuts. Each pair is
    /// blocked in both directions.
    pub fn blocked_pairs(self) -> [(Cell, Cell); 2] {
        let Cell { x, y } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => [
                (Cell::new(x, y - 1), Cell::new(x, y)),
                (Cell::new(x + 1, y - 1), Cell::new(x + 1, y)),
            ],
            Orientation::Vertical => [
                (Cell::new(x - 1, y), Cell::new(x, y)),
                (Cell::new(x - 1, y + 1), Cell::new(x, y + 1)),
            ],
        }
    }

    /// Whether the wall cuts the step between `a` and `b` (either direction).
    pub fn blocks(self, a: Cell, b: Cell) -> bool {
        self.blocked_pairs()
            .iter()
            .any(|&(p, q)| (p == a && q == b) || (p == b && q == a))
    }

    /// The two walls (possibly out of range) that would cut the step
    /// between adjacent cells `a` and `b`.
    pub fn blocking(a: Cell, b: Cell) -> [Wall; 2] {
        if a.x == b.x {
            let top = a.y.max(b.y);
            [Wall::horizontal(a.x, top), Wall::horizontal(a.x - 1, top)]
        } else {
            let right = a.x.max(b.x);
            [Wall::vertical(right, a.y), Wall::vertical(right, a.y - 1)]
        }
    }

    /// Whether two walls share a segment or cross at their midpoint.
    pub fn conflicts_with(self, other: Wall) -> bool {
        let (a, b) = (self.anchor, other.anchor);
        match (self.orientation, other.orientation) {
            (Orientation::Horizontal, Orientation::Horizontal) => a.y == b.y && (a.x - b.x).abs() <= 1,
            (Orientation::Vertical, Orientation::Vertical) => a.x == b.x && (a.y - b.y).abs() <= 1,
            (Orientation::Horizontal, Orientation::Vertical) => b.x == a.x + 1 && b.y == a.y - 1,
            (Orientation::Vertical, Orientation::Horizontal) => a.x == b.x + 1 && a.y == b.y - 1,
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wall at {}", self.orientation, self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_counts() {
        assert_eq!(Cell::new(5, 5).neighbors().count(), 4);
        assert_eq!(Cell::new(1, 5).neighbors().count(), 3);
        assert_eq!(Cell::new(9, 9).neighbors().count(), 2);
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 81);
        assert!(cells.iter().all(|c| c.is_on_board()));
    }

    #[test]
    fn test_mirror_of() {
        let p = Cell::new(5, 6);
        assert_eq!(p.mirror_of(Cell::new(5, 5)), Cell::new(5, 7));
        assert_eq!(Cell::new(9, 3).mirror_of(Cell::new(8, 3)), Cell::new(10, 3));
        assert!(!Cell::new(10, 3).is_on_board());
    }

    #[test]
    fn test_wall_ranges() {
        assert!(Wall::horizontal(1, 2).is_in_range());
        assert!(Wall::horizontal(8, 9).is_in_range());
        assert!(!Wall::horizontal(9, 5).is_in_range());
        assert!(!Wall::horizontal(4, 1).is_in_range());
        assert!(Wall::vertical(2, 1).is_in_range());
        assert!(Wall::vertical(9, 8).is_in_range());
        assert!(!Wall::vertical(1, 4).is_in_range());
        assert!(!Wall::vertical(4, 9).is_in_range());
    }

    #[test]
    fn test_blocked_pairs() {
        let h = Wall::horizontal(4, 7);
        assert!(h.blocks(Cell::new(4, 6), Cell::new(4, 7)));
        assert!(h.blocks(Cell::new(5, 7), Cell::new(5, 6)));
        assert!(!h.blocks(Cell::new(6, 6), Cell::new(6, 7)));

        let v = Wall::vertical(5, 5);
        assert!(v.blocks(Cell::new(4, 5), Cell::new(5, 5)));
        assert!(v.blocks(Cell::new(5, 6), Cell::new(4, 6)));
        assert!(!v.blocks(Cell::new(4, 7), Cell::new(5, 7)));
    }

    #[test]
    fn test_blocking_walls_cut_the_step() {
        let steps = [
            (Cell::new(5, 5), Cell::new(5, 6)),
            (Cell::new(3, 8), Cell::new(3, 7)),
            (Cell::new(5, 5), Cell::new(6, 5)),
            (Cell::new(2, 1), Cell::new(1, 1)),
        ];
        for (a, b) in steps {
            for wall in Wall::blocking(a, b) {
                assert!(wall.blocks(a, b), "{wall} does not cut {a} -> {b}");
            }
        }
        assert!(!Wall::blocking(Cell::new(2, 1), Cell::new(1, 1))[1].is_in_range());
    }

    #[test]
    fn test_conflicts() {
        let h = Wall::horizontal(4, 5);
        assert!(h.conflicts_with(Wall::horizontal(4, 5)));
        assert!(h.conflicts_with(Wall::horizontal(5, 5)));
        assert!(h.conflicts_with(Wall::horizontal(3, 5)));
        assert!(!h.conflicts_with(Wall::horizontal(6, 5)));
        assert!(!h.conflicts_with(Wall::horizontal(4, 6)));

        // Crossing at the midpoint between columns 4/5 and rows 4/5.
        assert!(h.conflicts_with(Wall::vertical(5, 4)));
        assert!(Wall::vertical(5, 4).conflicts_with(h));
        assert!(!h.conflicts_with(Wall::vertical(5, 5)));

        let v = Wall::vertical(3, 3);
        assert!(v.conflicts_with(Wall::vertical(3, 4)));
        assert!(v.conflicts_with(Wall::vertical(3, 2)));
        assert!(!v.conflicts_with(Wall::vertical(3, 5)));
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!("V".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_cell_serializes_as_pair() {
        let json = serde_json::to_string(&Cell::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Cell = serde_json::from_str("[3,7]").unwrap();
        assert_eq!(back, Cell::new(3, 7));
    }
}
