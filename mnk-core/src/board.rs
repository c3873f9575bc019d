//! Board grid, player marks, and rendering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative offsets of the 8 surrounding cells (row delta, col delta)
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, -1),  // W
    (0, 1),   // E
    (1, -1),  // SW
    (1, 0),   // S
    (1, 1),   // SE
];

/// Line directions scanned when scoring a candidate (row delta, col delta)
/// Index: 0=vertical, 1=horizontal, 2=down diagonal, 3=up diagonal
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // vertical
    (0, 1),  // horizontal
    (1, 1),  // down diagonal
    (-1, 1), // up diagonal
];

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Nought,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Mark that plays the given move index (crosses move first)
    pub fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Mark::Cross
        } else {
            Mark::Nought
        }
    }

    /// Single-character board glyph
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

/// Grid coordinate, zero-based from the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular board (dense row-major storage)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Mark>>,
    taken: usize,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            taken: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Mark at the given cell (None = empty)
    pub fn get(&self, at: Coord) -> Option<Mark> {
        self.cells[self.index(at)]
    }

    /// Place a mark; the target cell must be empty
    pub fn set(&mut self, at: Coord, mark: Mark) {
        let index = self.index(at);
        debug_assert!(self.cells[index].is_none(), "cell already taken");
        self.cells[index] = Some(mark);
        self.taken += 1;
    }

    /// True once every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.taken == self.cells.len()
    }

    /// Cell at (row + dr, col + dc), or None when it falls off the board
    pub fn offset(&self, at: Coord, dr: isize, dc: isize) -> Option<Coord> {
        let row = at.row as isize + dr;
        let col = at.col as isize + dc;
        if row < 0 || col < 0 || row >= self.rows as isize || col >= self.cols as isize {
            None
        } else {
            Some(Coord::new(row as usize, col as usize))
        }
    }

    fn index(&self, at: Coord) -> usize {
        debug_assert!(
            at.row < self.rows && at.col < self.cols,
            "coordinate off the board"
        );
        at.row * self.cols + at.col
    }

    fn token(&self, at: Coord) -> char {
        match self.get(at) {
            Some(mark) => mark.symbol(),
            None => ' ',
        }
    }

    /// Render the grid as text: every column right-justified to its widest
    /// token, cells joined by " | ", one line per row, empty cells blank
    pub fn render(&self) -> String {
        let mut widths = vec![1usize; self.cols];
        for col in 0..self.cols {
            for row in 0..self.rows {
                let len = self.token(Coord::new(row, col)).len_utf8();
                widths[col] = widths[col].max(len);
            }
        }

        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let cells: Vec<String> = (0..self.cols)
                .map(|col| {
                    let token = self.token(Coord::new(row, col));
                    format!("{:>width$}", token, width = widths[col])
                })
                .collect();
            lines.push(cells.join(" | "));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
