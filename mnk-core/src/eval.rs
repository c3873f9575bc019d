//! Candidate scoring and move selection
//!
//! Candidates are scored along four line directions. A placement extending
//! the mover's own marks contributes count^2 per direction (attack); a
//! placement cutting the opponent's marks contributes count^3 (defense).
//! A direction whose attack contribution reaches the full-line threshold
//! decides the game outright.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use crate::board::{Board, Coord, Mark, LINE_DIRECTIONS};
use crate::frontier::FrontierTracker;

// ============================================================================
// TIE-BREAKING
// ============================================================================

/// Final selection stage: pick one index among equally scored candidates
pub trait TieBreak {
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded uniform pick
pub struct SeededTieBreak {
    rng: ChaCha8Rng,
}

impl SeededTieBreak {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for SeededTieBreak {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "empty candidate list");
        self.rng.gen_range(0..len)
    }
}

/// Always the first candidate; keeps full runs byte-for-byte reproducible
pub struct FirstTieBreak;

impl TieBreak for FirstTieBreak {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

// ============================================================================
// SCORE TALLY
// ============================================================================

/// Per-turn score accumulator, one entry per scored candidate
///
/// Entries keep first-seen order so that selection walks candidates the
/// same way on every run.
#[derive(Debug, Default)]
pub struct ScoreTally {
    entries: Vec<TallyEntry>,
    index: FxHashMap<Coord, usize>,
}

#[derive(Clone, Copy, Debug)]
struct TallyEntry {
    cell: Coord,
    attack: u64,
    defense: u64,
}

impl TallyEntry {
    fn combined(&self) -> u64 {
        self.attack + self.defense
    }
}

impl ScoreTally {
    fn new() -> Self {
        Self::default()
    }

    fn add_attack(&mut self, cell: Coord, score: u64) {
        self.entry_mut(cell).attack += score;
    }

    fn add_defense(&mut self, cell: Coord, score: u64) {
        self.entry_mut(cell).defense += score;
    }

    fn entry_mut(&mut self, cell: Coord) -> &mut TallyEntry {
        if let Some(&slot) = self.index.get(&cell) {
            return &mut self.entries[slot];
        }
        let slot = self.entries.len();
        self.entries.push(TallyEntry {
            cell,
            attack: 0,
            defense: 0,
        });
        self.index.insert(cell, slot);
        &mut self.entries[slot]
    }

    /// Highest combined score; ties prefer the higher defense total, then
    /// fall through to the tie-break stage
    fn best<T: TieBreak>(&self, tie: &mut T) -> Coord {
        debug_assert!(!self.entries.is_empty(), "no candidates scored");

        let top_combined = self
            .entries
            .iter()
            .map(TallyEntry::combined)
            .max()
            .unwrap_or(0);
        let top_defense = self
            .entries
            .iter()
            .filter(|entry| entry.combined() == top_combined)
            .map(|entry| entry.defense)
            .max()
            .unwrap_or(0);

        let finalists: Vec<Coord> = self
            .entries
            .iter()
            .filter(|entry| entry.combined() == top_combined && entry.defense == top_defense)
            .map(|entry| entry.cell)
            .collect();

        finalists[tie.pick(finalists.len())]
    }
}

// ============================================================================
// DIRECTIONAL COUNTING
// ============================================================================

/// Count `counted` marks around `at` along one direction
///
/// Walks offsets -(win-1)..=win-1 in ascending order, skipping 0 and
/// off-board cells. A blocking mark behind the candidate discards the
/// count gathered so far; a blocking mark ahead ends the walk. Empty
/// cells neither count nor block.
fn directional_count(
    board: &Board,
    at: Coord,
    dir: (isize, isize),
    win: usize,
    counted: Mark,
) -> u64 {
    let blocker = counted.opponent();
    let reach = win as isize - 1;
    let mut count = 0u64;

    for num in -reach..=reach {
        if num == 0 {
            continue;
        }
        let cell = match board.offset(at, dir.0 * num, dir.1 * num) {
            Some(cell) => cell,
            None => continue,
        };
        match board.get(cell) {
            Some(mark) if mark == blocker => {
                if num < 0 {
                    count = 0;
                } else {
                    break;
                }
            }
            Some(_) => count += 1,
            None => {}
        }
    }

    count
}

// ============================================================================
// MOVE SELECTION
// ============================================================================

/// Chosen placement for a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Completes a full line for the mover
    Winning(Coord),
    /// Best-scoring placement with no immediate win available
    Best(Coord),
}

impl Selection {
    pub fn cell(self) -> Coord {
        match self {
            Selection::Winning(cell) | Selection::Best(cell) => cell,
        }
    }
}

/// Score every candidate for the turn and choose a placement
///
/// The mover's frontier is scored in attack mode and the opponent's
/// frontier in defense mode, into one shared tally; a cell on both
/// frontiers receives both components. An attack contribution equal to
/// (win - 1)^2 in a single direction completes a line and short-circuits
/// the turn.
pub fn select_move<T: TieBreak>(
    board: &Board,
    tracker: &FrontierTracker,
    mover: Mark,
    win: usize,
    tie: &mut T,
) -> Selection {
    let enemy = mover.opponent();
    let threshold = ((win - 1) * (win - 1)) as u64;
    let mut tally = ScoreTally::new();

    // Attack pass: extensions of the mover's own lines
    for &cell in tracker.candidates(mover) {
        for &dir in &LINE_DIRECTIONS {
            let count = directional_count(board, cell, dir, win, mover);
            let contribution = count * count;
            if contribution == threshold {
                return Selection::Winning(cell);
            }
            tally.add_attack(cell, contribution);
        }
    }

    // Defense pass: cells the enemy is building toward
    for &cell in tracker.candidates(enemy) {
        for &dir in &LINE_DIRECTIONS {
            let count = directional_count(board, cell, dir, win, enemy);
            tally.add_defense(cell, count * count * count);
        }
    }

    Selection::Best(tally.best(tie))
}

// ============================================================================
// TESTS
// ============================================================================
