//! The movement graph: every move a pawn can make in one turn, derived from
//! the pawn positions and the placed walls.
//!
//! The graph is rebuilt from scratch for every query and never updated in
//! place, so a stale edge can never survive a wall placement or a pawn move.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use super::cell::{Cell, Orientation, Wall, BOARD_SIZE};

/// A vertex of the movement graph: a board cell or one of the two goal
/// sentinels standing for "reached the far row".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Cell(Cell),
    /// Reached from every cell of row 9.
    GoalRow9,
    /// Reached from every cell of row 1.
    GoalRow1,
}

impl Node {
    /// The board cell, or `None` for a goal sentinel.
    pub fn cell(self) -> Option<Cell> {
        match self {
            Node::Cell(c) => Some(c),
            Node::GoalRow9 | Node::GoalRow1 => None,
        }
    }
}

impl From<Cell> for Node {
    fn from(c: Cell) -> Self {
        Node::Cell(c)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Cell(c) => write!(f, "{c}"),
            Node::GoalRow9 => f.write_str("goal row 9"),
            Node::GoalRow1 => f.write_str("goal row 1"),
        }
    }
}

/// Directed graph of legal one-turn transitions.
///
/// Successor and predecessor sets are kept side by side; both are ordered so
/// iteration (and therefore every search over the graph) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementGraph {
    succ: BTreeMap<Node, BTreeSet<Node>>,
    pred: BTreeMap<Node, BTreeSet<Node>>,
}

impl MovementGraph {
    /// Build the movement graph for the given pawns and walls.
    ///
    /// Walls are given by anchor, one iterator per orientation. Anchors and
    /// pawn cells must already be valid; nothing is checked here.
    pub fn build<'a, H, V>(pawns: [Cell; 2], horizontal_walls: H, vertical_walls: V) -> Self
    where
        H: IntoIterator<Item = &'a Cell>,
        V: IntoIterator<Item = &'a Cell>,
    {
        let lattice = Self::lattice(horizontal_walls, vertical_walls);
        let mut graph = lattice.clone();

        // Jump rewriting reads the pruned lattice and writes into `graph`, so
        // the two pawns never see each other's jump edges.
        for &pawn in &pawns {
            let onward: Vec<Cell> = lattice.cell_successors(pawn).collect();

            for from in lattice.cell_predecessors(pawn).collect::<Vec<_>>() {
                graph.remove_edge(from.into(), pawn.into());

                let straight = pawn.mirror_of(from);
                if lattice.has_edge(pawn.into(), straight.into()) && !pawns.contains(&straight) {
                    graph.add_edge(from.into(), straight.into());
                    continue;
                }

                for &landing in &onward {
                    if landing != from && !pawns.contains(&landing) {
                        graph.add_edge(from.into(), landing.into());
                    }
                }
            }
        }

        for x in 1..=BOARD_SIZE {
            graph.add_edge(Cell::new(x, BOARD_SIZE).into(), Node::GoalRow9);
            graph.add_edge(Cell::new(x, 1).into(), Node::GoalRow1);
        }

        tracing::trace!(pawns = ?pawns, edges = graph.edge_count(), "built movement graph");
        graph
    }

    /// Build from a list of [`Wall`]s instead of per-orientation anchors.
    pub fn build_with_walls(pawns: [Cell; 2], walls: &[Wall]) -> Self {
        let (horizontal, vertical) = split_walls(walls);
        Self::build(pawns, &horizontal, &vertical)
    }

    /// Board connectivity ignoring pawns: the orthogonal lattice with every
    /// wall-crossing edge removed, no jumps and no goal sentinels.
    pub fn lattice<'a, H, V>(horizontal_walls: H, vertical_walls: V) -> Self
    where
        H: IntoIterator<Item = &'a Cell>,
        V: IntoIterator<Item = &'a Cell>,
    {
        let mut graph = MovementGraph::default();

        for cell in Cell::all() {
            for next in cell.neighbors() {
                graph.add_edge(cell.into(), next.into());
            }
        }

        let walls = horizontal_walls
            .into_iter()
            .map(|&a| Wall::new(Orientation::Horizontal, a))
            .chain(vertical_walls.into_iter().map(|&a| Wall::new(Orientation::Vertical, a)));
        for wall in walls {
            for (a, b) in wall.blocked_pairs() {
                graph.remove_edge(a.into(), b.into());
                graph.remove_edge(b.into(), a.into());
            }
        }

        graph
    }

    /// All nodes that have at least one incoming or outgoing edge.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        let keys: BTreeSet<Node> = self.succ.keys().chain(self.pred.keys()).copied().collect();
        keys.into_iter()
    }

    /// Nodes reachable from `node` in one move.
    pub fn successors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.succ.get(&node).into_iter().flatten().copied()
    }

    /// Nodes that reach `node` in one move.
    pub fn predecessors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.pred.get(&node).into_iter().flatten().copied()
    }

    /// Successors of a cell that are themselves cells (goal sentinels skipped).
    pub fn cell_successors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.successors(cell.into()).filter_map(Node::cell)
    }

    /// Predecessors of a cell that are themselves cells.
    pub fn cell_predecessors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.predecessors(cell.into()).filter_map(Node::cell)
    }

    /// Whether `to` is a direct successor of `from`.
    pub fn has_edge(&self, from: Node, to: Node) -> bool {
        self.succ.get(&from).is_some_and(|s| s.contains(&to))
    }

    /// Total number of directed edges, goal edges included.
    pub fn edge_count(&self) -> usize {
        self.succ.values().map(BTreeSet::len).sum()
    }

    /// Breadth-first shortest path, both endpoints included. Ties are broken
    /// by node order.
    pub fn shortest_path(&self, from: Node, to: Node) -> Option<Vec<Node>> {
        if from == to {
            return Some(vec![from]);
        }

        let mut parent: BTreeMap<Node, Node> = BTreeMap::new();
        let mut q: VecDeque<Node> = VecDeque::new();
        q.push_back(from);

        while let Some(v) = q.pop_front() {
            for next in self.successors(v) {
                if next == from || parent.contains_key(&next) {
                    continue;
                }
                parent.insert(next, v);
                if next == to {
                    let mut path = vec![to];
                    let mut cur = to;
                    while let Some(&p) = parent.get(&cur) {
                        path.push(p);
                        cur = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                q.push_back(next);
            }
        }

        None
    }

    /// Number of edges on the shortest path, if any.
    pub fn distance(&self, from: Node, to: Node) -> Option<usize> {
        self.shortest_path(from, to).map(|p| p.len() - 1)
    }

    /// Whether `to` is reachable from `from` in any number of moves.
    pub fn has_path(&self, from: Node, to: Node) -> bool {
        self.shortest_path(from, to).is_some()
    }

    fn add_edge(&mut self, from: Node, to: Node) {
        self.succ.entry(from).or_default().insert(to);
        self.pred.entry(to).or_default().insert(from);
    }

    fn remove_edge(&mut self, from: Node, to: Node) {
        if let Some(s) = self.succ.get_mut(&from) {
            s.remove(&to);
        }
        if let Some(p) = self.pred.get_mut(&to) {
            p.remove(&from);
        }
    }
}

/// Split walls into (horizontal anchors, vertical anchors).
pub fn split_walls(walls: &[Wall]) -> (Vec<Cell>, Vec<Cell>) {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    for w in walls {
        match w.orientation {
            Orientation::Horizontal => horizontal.push(w.anchor),
            Orientation::Vertical => vertical.push(w.anchor),
        }
    }
    (horizontal, vertical)
}
