//! Win and tie detection through full played-out rounds: every line
//! orientation, the win-before-tie ordering, and the anti-diagonal
//! regression on a 4x4 board.

use tally_tictactoe::{GameConfig, GameEngine, GameStatus, RoundOutcome};

fn started(config: GameConfig) -> GameEngine {
    let mut engine = GameEngine::new(config).expect("valid config");
    engine.start();
    engine
}

/// Plays the given moves in order, requiring every move before the last
/// to keep the game ongoing, and returns the final outcome.
fn play_script(engine: &mut GameEngine, moves: &[(usize, usize)]) -> RoundOutcome {
    let (last, prefix) = moves.split_last().expect("non-empty script");
    for &(row, col) in prefix {
        let outcome = engine.play_round(row, col).unwrap();
        assert!(
            matches!(outcome, RoundOutcome::Continued { .. }),
            "game ended early at ({row}, {col}): {outcome:?}"
        );
    }
    engine.play_round(last.0, last.1).unwrap()
}

#[test]
fn test_row_win() {
    // Slot 0 takes row 0 on its third mark.
    let mut engine = started(GameConfig::default());
    let outcome = play_script(
        &mut engine,
        &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
    assert_eq!(engine.status(), GameStatus::Win);
    assert_eq!(engine.wins_for(0).unwrap(), 1);
    assert_eq!(engine.wins_for(1).unwrap(), 0);
}

#[test]
fn test_column_win() {
    let mut engine = started(GameConfig::default());
    let outcome = play_script(
        &mut engine,
        &[(0, 1), (0, 0), (1, 1), (0, 2), (2, 1)],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
}

#[test]
fn test_main_diagonal_win() {
    let mut engine = started(GameConfig::default());
    let outcome = play_script(
        &mut engine,
        &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = started(GameConfig::default());
    let outcome = play_script(
        &mut engine,
        &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
}

#[test]
fn test_second_player_can_win() {
    let mut engine = started(GameConfig::default());
    let outcome = play_script(
        &mut engine,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 1 });
    assert_eq!(engine.wins_for(1).unwrap(), 1);
}

#[test]
fn test_anti_diagonal_win_on_four_by_four() {
    let mut engine = started(GameConfig::new(4, 2));
    let outcome = play_script(
        &mut engine,
        &[
            (0, 3),
            (0, 0),
            (1, 2),
            (0, 1),
            (2, 1),
            (0, 2),
            (3, 0),
        ],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
}

#[test]
fn test_four_by_four_needs_four_in_a_line() {
    let mut engine = started(GameConfig::new(4, 2));
    // Three marks in row 0 on a 4x4 board win nothing.
    play_script(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    assert_eq!(engine.status(), GameStatus::Ongoing);
}

#[test]
fn test_tie_on_line_free_full_board() {
    let mut engine = started(GameConfig::default());
    // Final grid, no completed line for either player:
    //   P0 P1 P0
    //   P0 P1 P1
    //   P1 P0 P0
    let outcome = play_script(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(outcome, RoundOutcome::Tie);
    assert_eq!(engine.status(), GameStatus::Tie);
    assert_eq!(engine.wins_for(0).unwrap(), 0);
    assert_eq!(engine.wins_for(1).unwrap(), 0);
    assert_eq!(engine.marked_tiles(), 9);
}

#[test]
fn test_simultaneous_line_and_fill_is_a_win() {
    let mut engine = started(GameConfig::default());
    // Slot 0's ninth move fills the board and completes the main
    // diagonal at once; win must be checked before tie.
    let outcome = play_script(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 1),
            (2, 2),
        ],
    );
    assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
    assert_eq!(engine.status(), GameStatus::Win);
    assert_eq!(engine.marked_tiles(), 9);
    assert_eq!(engine.wins_for(0).unwrap(), 1);
}
