//! Game configuration and the self-play turn loop

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Mark};
use crate::eval::{select_move, FirstTieBreak, SeededTieBreak, Selection, TieBreak};
use crate::frontier::FrontierTracker;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Board dimensions and the line length required to win
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_condition: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_condition: 3,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, win_condition: usize) -> Self {
        Self {
            rows,
            cols,
            win_condition,
        }
    }

    /// A winning line must fit along the longest board axis
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_condition > self.rows.max(self.cols) {
            return Err(ConfigError::WinConditionTooLarge {
                win_condition: self.win_condition,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Rejected game configuration
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("win condition {win_condition} does not fit a {rows}x{cols} board")]
    WinConditionTooLarge {
        win_condition: usize,
        rows: usize,
        cols: usize,
    },
}

// ============================================================================
// RESULTS AND REPORTING
// ============================================================================

/// Current or final state of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    CrossesWon,
    NoughtsWon,
    Draw,
}

impl GameResult {
    /// Winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::CrossesWon => Some(Mark::Cross),
            GameResult::NoughtsWon => Some(Mark::Nought),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Cross => GameResult::CrossesWon,
            Mark::Nought => GameResult::NoughtsWon,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GameResult::Ongoing => "Ongoing",
            GameResult::CrossesWon => "Crosses won",
            GameResult::NoughtsWon => "Noughts won",
            GameResult::Draw => "Draw",
        };
        write!(f, "{}", tag)
    }
}

/// One completed turn in the log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Zero-based move index
    pub index: usize,
    pub mover: Mark,
    pub cell: Coord,
    /// Board rendering after the placement
    pub snapshot: String,
}

/// Full record of a finished game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub result: GameResult,
    pub turns: Vec<TurnRecord>,
}

impl GameReport {
    /// Number of moves played
    pub fn moves(&self) -> usize {
        self.turns.len()
    }
}

// ============================================================================
// TURN CONTROLLER
// ============================================================================

/// Self-play engine for one game
///
/// Crosses open on the near-center cell; after that, marks alternate and
/// every placement is chosen by candidate scoring until a line is
/// completed or the board fills.
pub struct Game<T: TieBreak = SeededTieBreak> {
    config: GameConfig,
    board: Board,
    tracker: FrontierTracker,
    turns: Vec<TurnRecord>,
    result: GameResult,
    tie: T,
}

impl Game<SeededTieBreak> {
    /// Engine with the default tie-break seed
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_tie_break(config, SeededTieBreak::new())
    }

    /// Engine with an explicit tie-break seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_tie_break(config, SeededTieBreak::with_seed(seed))
    }
}

impl Game<FirstTieBreak> {
    /// Engine that always takes the first tied candidate
    pub fn deterministic(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_tie_break(config, FirstTieBreak)
    }
}

impl<T: TieBreak> Game<T> {
    /// Engine with a caller-supplied tie-break stage
    pub fn with_tie_break(config: GameConfig, tie: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.rows, config.cols),
            tracker: FrontierTracker::new(),
            turns: Vec::new(),
            result: GameResult::Ongoing,
            tie,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Opening cell: the center, rounded toward the top-left on even axes
    fn opening_cell(&self) -> Coord {
        Coord::new(
            self.config.rows.div_ceil(2) - 1,
            self.config.cols.div_ceil(2) - 1,
        )
    }

    /// Play the game to completion
    pub fn play(mut self) -> GameReport {
        self.place(Mark::Cross, self.opening_cell());

        while self.result == GameResult::Ongoing && !self.board.is_full() {
            let mover = Mark::for_move(self.turns.len());
            let selection = select_move(
                &self.board,
                &self.tracker,
                mover,
                self.config.win_condition,
                &mut self.tie,
            );
            self.place(mover, selection.cell());
            if let Selection::Winning(_) = selection {
                self.result = GameResult::won_by(mover);
            }
        }

        if self.result == GameResult::Ongoing {
            self.result = GameResult::Draw;
        }

        GameReport {
            result: self.result,
            turns: self.turns,
        }
    }

    fn place(&mut self, mover: Mark, cell: Coord) {
        self.board.set(cell, mover);
        self.tracker.record_mark(mover, cell, &self.board);
        self.turns.push(TurnRecord {
            index: self.turns.len(),
            mover,
            cell,
            snapshot: self.board.render(),
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn report_3x3() -> GameReport {
        Game::deterministic(GameConfig::default())
            .expect("valid config")
            .play()
    }

    #[test]
    fn test_rejects_oversized_win_condition() {
        let config = GameConfig::new(4, 4, 5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WinConditionTooLarge {
                win_condition: 5,
                rows: 4,
                cols: 4,
            })
        );
        assert!(Game::new(config).is_err());

        // The win length only has to fit one axis
        assert!(GameConfig::new(3, 7, 5).validate().is_ok());
    }

    #[test]
    fn test_opening_is_near_center_cross() {
        let report = report_3x3();
        let opening = &report.turns[0];
        assert_eq!(opening.index, 0);
        assert_eq!(opening.mover, Mark::Cross);
        assert_eq!(opening.cell, Coord::new(1, 1));
    }

    #[test]
    fn test_marks_alternate() {
        let report = report_3x3();
        for (i, turn) in report.turns.iter().enumerate() {
            assert_eq!(turn.index, i);
            assert_eq!(turn.mover, Mark::for_move(i));
        }
    }

    #[test]
    fn test_deterministic_3x3_is_a_draw() {
        let report = report_3x3();
        assert_eq!(report.result, GameResult::Draw);
        assert_eq!(report.moves(), 9);

        let last = report.turns.last().expect("nine turns");
        assert_eq!(last.snapshot, "O | X | X\nX | X | O\nO | O | X");
    }

    #[test]
    fn test_short_win_ends_immediately() {
        // With a win length of 2 the third placement always completes a
        // pair for crosses, whatever the seed picked on move 1
        for seed in [0, 1, 42, 1337] {
            let game = Game::with_seed(GameConfig::new(3, 3, 2), seed).expect("valid config");
            let report = game.play();
            assert_eq!(report.result, GameResult::CrossesWon);
            assert_eq!(report.moves(), 3);
        }
    }

    #[test]
    fn test_single_row_board() {
        let report = Game::deterministic(GameConfig::new(1, 5, 2))
            .expect("valid config")
            .play();
        assert_eq!(report.turns[0].cell, Coord::new(0, 2));
        assert_eq!(report.result, GameResult::CrossesWon);
        assert_eq!(report.moves(), 3);
    }

    #[test]
    fn test_result_tags() {
        assert_eq!(GameResult::CrossesWon.to_string(), "Crosses won");
        assert_eq!(GameResult::NoughtsWon.to_string(), "Noughts won");
        assert_eq!(GameResult::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_winner_accessor() {
        assert_eq!(GameResult::CrossesWon.winner(), Some(Mark::Cross));
        assert_eq!(GameResult::NoughtsWon.winner(), Some(Mark::Nought));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = std::env::temp_dir().join("mnk-core-config-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("game.json");

        let config = GameConfig::new(5, 7, 4);
        config.save(&path).expect("save config");
        let loaded = GameConfig::load(&path).expect("load config");
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }
}
