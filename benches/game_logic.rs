use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, SequenceSource};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if state.game_over() {
                state.start();
            }
            black_box(state.tick(black_box(now)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Board::from_ascii(&["Z.........", "##########", "##########", "##########", "##########"]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut dir = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_move(dir, 0) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::with_source(SequenceSource::new([PieceKind::I]));

    c.bench_function("hard_drop_with_clear", |b| {
        b.iter(|| {
            state.start();
            state.set_board(Board::from_ascii(&["###....###"; 4]));
            black_box(state.hard_drop());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_try_move,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
