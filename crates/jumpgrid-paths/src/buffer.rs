//! Reusable transient search state: [`PathBuffer`] and its node arena.

use jumpgrid_core::{Direction, Point};

use crate::grid::JumpGrid;

/// A position with its accumulated path cost, snapshotted from a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Open-list membership of a transient search node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ListStatus {
    #[default]
    None,
    Open,
    /// Never assigned: nodes are not finalized, and stay eligible for
    /// re-expansion whenever a cheaper route to them appears.
    #[allow(dead_code)]
    Closed,
}

/// Per-cell transient state, valid only for the generation stamped on it.
#[derive(Clone)]
pub(crate) struct SearchNode {
    /// Accumulated cost from the start.
    pub(crate) given: i32,
    /// Given cost plus the heuristic estimate to the goal.
    pub(crate) total: i32,
    /// Parent cell index in the arena, or `usize::MAX` for the start.
    pub(crate) parent: usize,
    /// Direction traveled from the parent.
    pub(crate) arrival: Option<Direction>,
    pub(crate) status: ListStatus,
    pub(crate) generation: u32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            given: 0,
            total: 0,
            parent: usize::MAX,
            arrival: None,
            status: ListStatus::None,
            generation: 0,
        }
    }
}

/// Reference into the node arena, ordered by `total` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) total: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest total first.
        other.total.cmp(&self.total)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable per-search node arena for queries over a [`JumpGrid`].
///
/// One buffer serves one search at a time (searching borrows it mutably);
/// reuse across searches costs no allocation, and a buffer refits itself
/// when handed a grid with a different cell count. Nodes are invalidated
/// between searches by a generation stamp rather than by clearing memory.
pub struct PathBuffer {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
}

impl PathBuffer {
    /// Create a buffer sized for `grid`.
    pub fn new(grid: &JumpGrid) -> Self {
        Self {
            nodes: vec![SearchNode::default(); grid.len()],
            generation: 0,
        }
    }

    /// Match the arena to the grid's cell count. Shrinking keeps the
    /// allocation; growing reallocates.
    pub(crate) fn fit(&mut self, grid: &JumpGrid) {
        if self.nodes.len() != grid.len() {
            self.nodes.clear();
            self.nodes.resize(grid.len(), SearchNode::default());
            self.generation = 0;
        }
    }

    /// The node at `idx`, reset first if it was last written by an older
    /// search.
    #[inline]
    pub(crate) fn touch(&mut self, idx: usize) -> &mut SearchNode {
        let node = &mut self.nodes[idx];
        if node.generation != self.generation {
            *node = SearchNode {
                generation: self.generation,
                ..SearchNode::default()
            };
        }
        node
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_node_roundtrip() {
        let node = PathNode {
            pos: Point::new(6, 2),
            cost: 11,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
