//! Integration tests for the game lifecycle, driven through the facade

use blockfall::core::{
    calculate_level, collides, get_drop_interval_ms, overlaps, Board, GameState, SequenceSource,
    TickOutcome,
};
use blockfall::types::{GameAction, Phase, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameState<SequenceSource> {
    let mut state = GameState::with_source(SequenceSource::new(kinds.iter().copied()));
    state.start();
    state
}

/// Tick in `step_ms` increments until the piece locks; returns the lock time.
fn tick_until_lock<S: blockfall::core::ShapeSource>(
    state: &mut GameState<S>,
    start_ms: u64,
    step_ms: u64,
) -> (u64, TickOutcome) {
    let mut now = start_ms;
    loop {
        let outcome = state.tick(now);
        if let TickOutcome::Locked(_) = outcome {
            return (now, outcome);
        }
        now += step_ms;
        assert!(now < start_ms + 100_000, "piece never locked");
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::NotStarted);
    assert!(state.current().is_none());

    state.start();
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.current().is_some());
    assert!(state.next().is_some());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.drop_interval_ms(), 1000);
}

#[test]
fn test_i_piece_falls_to_floor_and_locks() {
    let mut state = scripted(&[PieceKind::I, PieceKind::O]);
    assert_eq!(state.current().unwrap().col, 3);

    // Reference tick, then 19 drops reach row 19.
    assert_eq!(state.tick(0), TickOutcome::Idle);
    for i in 1..=19u64 {
        assert_eq!(state.tick(i * 1000), TickOutcome::Fell);
    }
    assert_eq!(state.current().unwrap().row, 19);

    match state.tick(20_000) {
        TickOutcome::Locked(ev) => {
            assert_eq!(ev.lines_cleared, 0);
            assert_eq!(ev.score_delta, 0);
            assert!(!ev.game_over);
        }
        other => panic!("expected lock, got {:?}", other),
    }

    for col in 3..7 {
        assert!(state.board().is_occupied(col, 19));
    }
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.current().unwrap().kind, PieceKind::O);
}

#[test]
fn test_completing_a_row_scores_and_empties_top() {
    let mut state = scripted(&[PieceKind::I, PieceKind::T]);
    state.set_board(Board::from_ascii(&["###....###"]));

    state.tick(0);
    let (_, outcome) = tick_until_lock(&mut state, 1000, 1000);
    let TickOutcome::Locked(ev) = outcome else {
        unreachable!()
    };

    assert_eq!(ev.lines_cleared, 1);
    assert_eq!(ev.score_delta, 100);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert!(state.board().rows()[0].iter().all(|c| c.is_none()));
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_double_clear_with_hard_drop() {
    let mut state = scripted(&[PieceKind::O]);
    state.set_board(Board::from_ascii(&["####..####", "####..####"]));

    let ev = state.hard_drop().unwrap();
    assert_eq!(ev.lines_cleared, 2);
    assert_eq!(ev.cleared_rows(), &[19, 18]);
    assert_eq!(state.score(), 300);
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut state = scripted(&[PieceKind::O]);
    let mut board = Board::new();
    for row in 2..20 {
        board.set_cell(5, row, Some(PieceKind::S));
    }
    state.set_board(board);

    let ev = state.hard_drop().unwrap();
    assert!(ev.game_over);
    assert_eq!(state.phase(), Phase::Over);
    assert!(overlaps(&state.current().unwrap(), state.board()));

    let frozen = state.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Pause,
    ] {
        assert!(!state.apply_action(action), "{:?}", action);
    }
    assert_eq!(state.tick(999_999), TickOutcome::Idle);
    assert_eq!(state.snapshot(), frozen);

    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_pause_resume_has_no_catch_up() {
    let mut state = scripted(&[PieceKind::T]);
    state.tick(0);
    state.tick(900);
    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::Paused);

    // Paused for a long time.
    assert_eq!(state.tick(30_000), TickOutcome::Idle);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(state.apply_action(GameAction::Pause));

    let row = state.current().unwrap().row;
    assert_eq!(state.tick(30_000), TickOutcome::Idle);
    assert_eq!(state.tick(30_500), TickOutcome::Idle);
    assert_eq!(state.current().unwrap().row, row);
    assert_eq!(state.tick(31_000), TickOutcome::Fell);
}

#[test]
fn test_pause_is_noop_before_start() {
    let mut state = GameState::new(3);
    assert!(!state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::NotStarted);
}

#[test]
fn test_restart_while_running_resets_everything() {
    let mut state = scripted(&[PieceKind::I, PieceKind::O]);
    state.set_board(Board::from_ascii(&["###....###"]));
    state.hard_drop();
    state.hard_drop();
    assert!(state.score() > 0);

    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.board().filled_count(), 0);
    assert!(state.take_last_event().is_none());
}

#[test]
fn test_moves_match_collision_checks() {
    let mut state = GameState::new(2024);
    state.start();

    for step in 0..200 {
        let action = match step % 5 {
            0 => GameAction::MoveLeft,
            1 => GameAction::Rotate,
            2 => GameAction::MoveRight,
            3 => GameAction::SoftDrop,
            _ => GameAction::MoveRight,
        };
        let Some(before) = state.current() else {
            break;
        };
        let (d_col, d_row) = match action {
            GameAction::MoveLeft => (-1, 0),
            GameAction::MoveRight => (1, 0),
            GameAction::SoftDrop => (0, 1),
            _ => (0, 0),
        };
        let expected = !collides(&before, state.board(), d_col, d_row, None);
        let moved = state.apply_action(action);
        if action != GameAction::Rotate {
            assert_eq!(moved, expected);
            let after = state.current().unwrap();
            if moved {
                assert_eq!((after.col, after.row), (before.col + d_col, before.row + d_row));
            } else {
                assert_eq!(after, before);
            }
        }
        // The live piece never overlaps settled cells while running.
        assert!(!overlaps(&state.current().unwrap(), state.board()));
    }
}

#[test]
fn test_level_and_interval_curve() {
    for lines in 0..200u32 {
        let level = calculate_level(lines);
        assert_eq!(level, lines / 10 + 1);
        let interval = get_drop_interval_ms(level);
        assert!(interval >= 100);
        assert!(interval <= 1000);
        assert_eq!(interval, 1000u32.saturating_sub((level - 1) * 100).max(100));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.start();
    b.start();
    for _ in 0..20 {
        assert_eq!(a.current().map(|p| p.kind), b.current().map(|p| p.kind));
        a.hard_drop();
        b.hard_drop();
        if a.game_over() {
            break;
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
