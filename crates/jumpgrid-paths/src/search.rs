//! The search engine: [`PathBuffer::find_path`] and the step-wise
//! [`Search`].
//!
//! Both entry points share one algorithm: A* over the precomputed jump
//! tables, expanding only canonical directions and landing only on jump
//! points, goal-aligned cells, and the goal itself. Nodes are never
//! finalized; a cheaper route re-opens its node and stale heap entries are
//! simply expanded again when popped.

use std::collections::BinaryHeap;

use jumpgrid_core::{Direction, Point};

use crate::buffer::{ListStatus, NodeRef, PathBuffer, PathNode};
use crate::distance::{chebyshev, diagonal_cost, octile};
use crate::grid::JumpGrid;

/// Outcome of one [`Search::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// A node was popped and expanded; the search continues.
    Searching(PathNode),
    /// The goal was reached. Waypoints in start-to-goal order.
    Found(Vec<Point>),
    /// The open list ran dry before the goal was reached.
    NotFound,
}

impl PathBuffer {
    /// Find a waypoint path from `from` to `to` on a built grid.
    ///
    /// Returns `None` when the goal is unreachable and `Some(vec![from])`
    /// when `from == to`. Waypoints are the start, the jump points taken,
    /// and the goal; [`expand_path`] interpolates the full cell-by-cell
    /// route. An obstacle start or goal is treated as unreachable.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of bounds, or if the grid's jump
    /// tables are stale or were never built.
    pub fn find_path(&mut self, grid: &JumpGrid, from: Point, to: Point) -> Option<Vec<Point>> {
        let mut search = self.search(grid, from, to);
        loop {
            match search.step() {
                Some(SearchState::Found(path)) => return Some(path),
                Some(SearchState::NotFound) | None => return None,
                Some(SearchState::Searching(_)) => {}
            }
        }
    }

    /// Begin a step-wise search with the same endpoint rules as
    /// [`find_path`](Self::find_path).
    ///
    /// Each [`Search::step`] runs one pop-and-expand cycle; the caller
    /// decides when (and whether) to resume. Dropping the [`Search`]
    /// abandons the traversal.
    pub fn search<'a>(&'a mut self, grid: &'a JumpGrid, from: Point, to: Point) -> Search<'a> {
        assert!(
            grid.is_built(),
            "jump tables are stale: build() the grid before searching"
        );
        assert!(grid.contains(from), "start {from} out of bounds");
        assert!(grid.contains(to), "goal {to} out of bounds");

        self.fit(grid);
        self.generation = self.generation.wrapping_add(1);

        let mut open = BinaryHeap::new();
        // A blocked endpoint leaves the open list unseeded, so the first
        // step reports NotFound.
        if !grid.is_blocked(from) && !grid.is_blocked(to) {
            let si = grid.idx(from);
            let node = self.touch(si);
            node.status = ListStatus::Open;
            open.push(NodeRef { idx: si, total: 0 });
        }

        Search {
            buf: self,
            grid,
            open,
            to,
            done: false,
        }
    }
}

/// An in-progress, suspendable search over a [`JumpGrid`].
///
/// Yields one [`SearchState`] per step: `Searching` after each expansion,
/// then a single terminal `Found` or `NotFound`, then `None` forever.
/// Also usable as an [`Iterator`] over the same states.
pub struct Search<'a> {
    buf: &'a mut PathBuffer,
    grid: &'a JumpGrid,
    open: BinaryHeap<NodeRef>,
    to: Point,
    done: bool,
}

impl Search<'_> {
    /// Run one pop-and-expand cycle.
    pub fn step(&mut self) -> Option<SearchState> {
        if self.done {
            return None;
        }
        let Some(current) = self.open.pop() else {
            self.done = true;
            return Some(SearchState::NotFound);
        };
        let ci = current.idx;
        let cp = self.grid.point(ci);
        if cp == self.to {
            self.done = true;
            return Some(SearchState::Found(self.reconstruct(ci)));
        }
        self.expand(ci, cp);
        Some(SearchState::Searching(PathNode {
            pos: cp,
            cost: self.buf.nodes[ci].given,
        }))
    }

    /// Produce successors for every canonical direction of the popped
    /// node. Exactly one of three cases applies per direction: straight
    /// goal reach, diagonal goal reach, or a jump to the next jump point.
    fn expand(&mut self, ci: usize, cp: Point) {
        let cur_given = self.buf.nodes[ci].given;
        let cheb = chebyshev(cp, self.to);
        let diag_steps = (cp.x - self.to.x).abs().min((cp.y - self.to.y).abs());
        let dirs = match self.buf.nodes[ci].arrival {
            Some(dir) => dir.canonical(),
            None => &Direction::ALL[..],
        };
        for &dir in dirs {
            let jd = self.grid.jump_distance(cp, dir);
            let (next, cost) = if dir.is_cardinal()
                && dir.exact_toward(cp, self.to)
                && cheb <= jd.abs()
            {
                // The goal sits on this row or column within reach, closer
                // than any jump point or wall.
                (self.to, cheb)
            } else if dir.is_diagonal()
                && dir.general_toward(cp, self.to)
                && diag_steps <= jd.abs()
            {
                // Step diagonally until level with the goal on one axis.
                (cp + dir.delta() * diag_steps, diagonal_cost(diag_steps))
            } else if jd > 0 {
                let steps = jd;
                let cost = if dir.is_diagonal() {
                    diagonal_cost(steps)
                } else {
                    steps
                };
                (cp + dir.delta() * steps, cost)
            } else {
                continue;
            };
            self.relax(ci, next, cur_given + cost, dir);
        }
    }

    /// Record a candidate successor. Nodes already open are only updated
    /// (and re-pushed) on a strictly better given cost; the heap is never
    /// searched, so stale entries linger until popped.
    fn relax(&mut self, parent: usize, next: Point, given: i32, arrival: Direction) {
        let ni = self.grid.idx(next);
        let node = self.buf.touch(ni);
        if node.status == ListStatus::Open && given >= node.given {
            return;
        }
        node.given = given;
        node.total = given + octile(next, self.to);
        node.parent = parent;
        node.arrival = Some(arrival);
        node.status = ListStatus::Open;
        let total = node.total;
        self.open.push(NodeRef { idx: ni, total });
    }

    /// Walk parent links from the goal back to the start and reverse.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.grid.point(ci));
            ci = self.buf.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

impl Iterator for Search<'_> {
    type Item = SearchState;

    fn next(&mut self) -> Option<SearchState> {
        self.step()
    }
}

/// Expand a waypoint path into the full cell-by-cell route.
///
/// Steps from each waypoint toward the next by component signum, which
/// retraces the exact cells of the straight legs the search produces.
/// Paths of zero or one waypoint are returned unchanged.
pub fn expand_path(waypoints: &[Point]) -> Vec<Point> {
    if waypoints.len() <= 1 {
        return waypoints.to_vec();
    }
    let mut route = Vec::new();
    for leg in waypoints.windows(2) {
        let (a, b) = (leg[0], leg[1]);
        let mut c = a;
        while c != b {
            route.push(c);
            c = c + Point::new((b.x - c.x).signum(), (b.y - c.y).signum());
        }
    }
    route.push(waypoints[waypoints.len() - 1]);
    route
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_state_roundtrip() {
        let states = [
            SearchState::Searching(PathNode {
                pos: Point::new(2, 5),
                cost: 7,
            }),
            SearchState::Found(vec![Point::new(0, 0), Point::new(3, 3)]),
            SearchState::NotFound,
        ];
        for state in states {
            let json = serde_json::to_string(&state).unwrap();
            let back: SearchState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, back);
        }
    }
}
