//! Integration tests for the n-in-a-row engine
//!
//! Tests the full stack: board bookkeeping, candidate scoring, the turn
//! loop, and batch aggregation

use mnk_core::{
    select_move, Board, Coord, FirstTieBreak, FrontierTracker, Game, GameConfig, GameReport,
    GameResult, Mark, Selection,
};
use mnk_arena::{run_batch, run_batch_parallel, BatchConfig};
use std::collections::HashSet;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Shorthand for a game configuration
fn config(rows: usize, cols: usize, win: usize) -> GameConfig {
    GameConfig::new(rows, cols, win)
}

/// Play one seeded game to completion
fn play_seeded(config: GameConfig, seed: u64) -> GameReport {
    Game::with_seed(config, seed).expect("valid config").play()
}

/// Count the marks one player placed
fn marks_placed(report: &GameReport, mark: Mark) -> usize {
    report.turns.iter().filter(|t| t.mover == mark).count()
}

/// Place a mark and keep the tracker in sync
fn place(board: &mut Board, tracker: &mut FrontierTracker, mark: Mark, at: Coord) {
    board.set(at, mark);
    tracker.record_mark(mark, at, board);
}

// ============================================================================
// GAME FLOW TESTS
// ============================================================================

#[test]
fn test_game_terminates_within_board_size() {
    let cases = [(3, 3, 3), (4, 4, 3), (5, 5, 4), (3, 7, 3), (6, 4, 4)];

    for (rows, cols, win) in cases {
        let report = play_seeded(config(rows, cols, win), 0);

        assert_ne!(report.result, GameResult::Ongoing, "{}x{} board", rows, cols);
        assert!(report.moves() <= rows * cols);
        if report.result == GameResult::Draw {
            assert_eq!(report.moves(), rows * cols, "a draw fills the board");
        }
    }
}

#[test]
fn test_opening_cell_is_near_center() {
    let cases = [
        (3, 3, Coord::new(1, 1)),
        (4, 4, Coord::new(1, 1)),
        (5, 5, Coord::new(2, 2)),
        (4, 7, Coord::new(1, 3)),
        (1, 5, Coord::new(0, 2)),
    ];

    for (rows, cols, expected) in cases {
        let report = play_seeded(config(rows, cols, 3), 0);
        let opening = &report.turns[0];

        assert_eq!(opening.mover, Mark::Cross);
        assert_eq!(opening.cell, expected, "{}x{} board", rows, cols);
    }
}

#[test]
fn test_marks_alternate_and_cells_are_unique() {
    let report = play_seeded(config(5, 5, 4), 3);

    let mut seen = HashSet::new();
    for (i, turn) in report.turns.iter().enumerate() {
        assert_eq!(turn.index, i);
        assert_eq!(turn.mover, Mark::for_move(i));
        assert!(seen.insert(turn.cell), "cell played twice: {:?}", turn.cell);
    }
}

#[test]
fn test_win_parity_over_seeds() {
    for seed in 0..10 {
        let report = play_seeded(config(4, 4, 3), seed);
        let moves = report.moves();

        // Crosses move on even indices, so they place at most one more mark
        assert_eq!(marks_placed(&report, Mark::Cross), (moves + 1) / 2);
        assert_eq!(marks_placed(&report, Mark::Nought), moves / 2);

        match report.result {
            GameResult::CrossesWon => assert_eq!(moves % 2, 1, "crosses win on odd move counts"),
            GameResult::NoughtsWon => assert_eq!(moves % 2, 0, "noughts win on even move counts"),
            GameResult::Draw => assert_eq!(moves, 16),
            GameResult::Ongoing => panic!("game did not finish"),
        }
    }
}

// ============================================================================
// MOVE SELECTION TESTS
// ============================================================================

#[test]
fn test_forced_pair_completes_immediately() {
    // With a win length of 2, the third placement always completes a
    // cross pair next to the opening cell, whatever move 1 picked
    for seed in 0..5 {
        let report = play_seeded(config(4, 4, 2), seed);

        assert_eq!(report.result, GameResult::CrossesWon);
        assert_eq!(report.result.winner(), Some(Mark::Cross));
        assert_eq!(report.moves(), 3);
    }
}

#[test]
fn test_open_pair_gets_blocked() {
    let mut board = Board::new(3, 3);
    let mut tracker = FrontierTracker::new();
    place(&mut board, &mut tracker, Mark::Cross, Coord::new(0, 0));
    place(&mut board, &mut tracker, Mark::Nought, Coord::new(2, 2));
    place(&mut board, &mut tracker, Mark::Cross, Coord::new(0, 1));

    // The cross pair on the top row outweighs every nought attack
    let selection = select_move(&board, &tracker, Mark::Nought, 3, &mut FirstTieBreak);
    assert_eq!(selection, Selection::Best(Coord::new(0, 2)));
}

// ============================================================================
// DETERMINISM TESTS
// ============================================================================

#[test]
fn test_deterministic_engine_reproducible() {
    let first = Game::deterministic(config(4, 4, 3)).expect("valid config").play();
    let second = Game::deterministic(config(4, 4, 3)).expect("valid config").play();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_games_reproducible() {
    let first = play_seeded(config(5, 5, 4), 7);
    let second = play_seeded(config(5, 5, 4), 7);
    assert_eq!(first, second);
}

// ============================================================================
// CONFIGURATION TESTS
// ============================================================================

#[test]
fn test_oversized_win_condition_rejected() {
    assert!(Game::new(config(4, 4, 5)).is_err());

    // The win length only has to fit the longer axis
    assert!(Game::new(config(3, 7, 5)).is_ok());
}

// ============================================================================
// FULL GAME TEST
// ============================================================================

#[test]
fn test_default_3x3_plays_to_a_draw() {
    let report = Game::deterministic(GameConfig::default())
        .expect("valid config")
        .play();

    assert_eq!(report.result, GameResult::Draw);
    assert_eq!(report.result.to_string(), "Draw");
    assert_eq!(report.moves(), 9);

    let last = report.turns.last().expect("nine turns");
    assert_eq!(last.snapshot, "O | X | X\nX | X | O\nO | O | X");
}

// ============================================================================
// BATCH TESTS
// ============================================================================

#[test]
fn test_batch_accounts_for_every_game() {
    let batch = BatchConfig::new(config(4, 4, 3))
        .with_games(20)
        .with_seed(11);

    let summary = run_batch(&batch).expect("valid config");
    assert_eq!(summary.games_played, 20);
    assert_eq!(summary.outcomes.len(), 20);
    assert_eq!(summary.cross_wins + summary.nought_wins + summary.draws, 20);

    let parallel = run_batch_parallel(&batch).expect("valid config");
    assert_eq!(parallel, summary);
}
