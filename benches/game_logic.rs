use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameConfig, GridEngine, PieceShape, Position};
use tui_blockfall::types::CellKind;

fn bench_collides(c: &mut Criterion) {
    let engine = GridEngine::new(&GameConfig::default(), 12345).unwrap();
    let t = PieceShape::canonical(CellKind::T).unwrap();

    c.bench_function("collides", |b| {
        b.iter(|| engine.collides(black_box(&t), black_box(Position::new(4, 10))))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, CellKind::I);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_drop_step(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut engine = GridEngine::new(&config, 12345).unwrap();

    c.bench_function("move_down_or_lock", |b| {
        b.iter(|| {
            if engine.is_over() {
                engine = GridEngine::new(&config, 12345).unwrap();
            }
            black_box(engine.move_down_or_lock())
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = GridEngine::new(&GameConfig::default(), 12345).unwrap();
    engine.try_move(0, 5);

    c.bench_function("rotate_active", |b| {
        b.iter(|| black_box(engine.rotate_active()))
    });
}

criterion_group!(
    benches,
    bench_collides,
    bench_line_clear,
    bench_drop_step,
    bench_rotate
);
criterion_main!(benches);
