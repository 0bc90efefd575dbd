use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockstacker::core::{Board, GameState, Piece, PieceQueue};
use blockstacker::types::{GameAction, MoveDirection, PieceKind, RotationDirection, SPAWN_ANCHOR};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(Duration::from_millis(16)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in -10..-6 {
                board.fill_row(y, PieceKind::I);
            }
            board.set(0, -6, Some(PieceKind::T));
            black_box(board.clear_lines());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.apply_action(black_box(GameAction::HardDrop));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut right = true;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let dir = if right { MoveDirection::Right } else { MoveDirection::Left };
            if !state.try_move(dir) {
                right = !right;
            }
        })
    });
}

fn bench_try_rotate_with_kicks(c: &mut Criterion) {
    let board = Board::new();
    // Against the left wall, so most turns go through the kick table.
    let piece = Piece::new(PieceKind::I, (-4, 0));

    c.bench_function("try_rotate_wall", |b| {
        b.iter(|| {
            let mut p = piece;
            for _ in 0..4 {
                p.try_rotate(&board, black_box(RotationDirection::Clockwise));
            }
            black_box(p)
        })
    });
}

fn bench_queue(c: &mut Criterion) {
    let mut queue = PieceQueue::new(12345);

    c.bench_function("queue_dequeue_refill", |b| {
        b.iter(|| {
            let kind = queue.dequeue();
            queue.refill_if_needed();
            black_box(kind)
        })
    });
}

fn bench_spawn_check(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(board.spawn_piece(black_box(PieceKind::T), SPAWN_ANCHOR)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate_with_kicks,
    bench_queue,
    bench_spawn_check
);
criterion_main!(benches);
