//! Candidate-cell tracking around placed marks
//!
//! Each player owns a frontier: the empty cells adjacent to that player's
//! marks, kept in discovery order so downstream tie-breaking is stable
//! across runs.

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord, Mark, NEIGHBOR_OFFSETS};

/// Set of candidate cells in discovery order
#[derive(Clone, Debug, Default)]
pub struct FrontierSet {
    order: Vec<Coord>,
    members: FxHashSet<Coord>,
}

impl FrontierSet {
    fn insert(&mut self, at: Coord) {
        if self.members.insert(at) {
            self.order.push(at);
        }
    }

    fn remove(&mut self, at: Coord) {
        if self.members.remove(&at) {
            self.order.retain(|&cell| cell != at);
        }
    }

    /// Candidates in discovery order
    pub fn cells(&self) -> &[Coord] {
        &self.order
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.members.contains(&at)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Per-player frontiers, updated as marks land on the board
#[derive(Clone, Debug, Default)]
pub struct FrontierTracker {
    cross: FrontierSet,
    nought: FrontierSet,
}

impl FrontierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb a freshly placed mark: discover the mover's new empty
    /// neighbors, then evict the taken cell from both frontiers
    pub fn record_mark(&mut self, mover: Mark, at: Coord, board: &Board) {
        let own = self.frontier_mut(mover);
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            if let Some(neighbor) = board.offset(at, dr, dc) {
                if board.get(neighbor).is_none() {
                    own.insert(neighbor);
                }
            }
        }

        self.cross.remove(at);
        self.nought.remove(at);
    }

    /// Current candidates for the given player, in discovery order
    pub fn candidates(&self, mark: Mark) -> &[Coord] {
        self.frontier(mark).cells()
    }

    pub fn frontier(&self, mark: Mark) -> &FrontierSet {
        match mark {
            Mark::Cross => &self.cross,
            Mark::Nought => &self.nought,
        }
    }

    fn frontier_mut(&mut self, mark: Mark) -> &mut FrontierSet {
        match mark {
            Mark::Cross => &mut self.cross,
            Mark::Nought => &mut self.nought,
        }
    }
}
