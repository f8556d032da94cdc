use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Grid, World};
use blockfall::session::{Session, SessionConfig};
use blockfall::types::{Action, PieceKind};

fn bench_session_frame(c: &mut Criterion) {
    let config = SessionConfig {
        seed: Some(12345),
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config);
    let frame = config.frame_duration();

    c.bench_function("session_frame_16ms", |b| {
        b.iter(|| {
            session.update(black_box(frame));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                grid.paint((0..10).map(|x| (x, y)), PieceKind::I.color());
            }
            grid.clear_full_rows();
        })
    });
}

fn bench_drop_to_floor(c: &mut Criterion) {
    c.bench_function("drop_piece_to_floor", |b| {
        b.iter(|| {
            let mut world = World::with_seed(black_box(12345));
            for _ in 0..21 {
                world.apply_action_if_legal(Action::Descend);
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut world = World::with_seed(12345);

    c.bench_function("move_right_left", |b| {
        b.iter(|| {
            world.apply_action_if_legal(Action::MoveRight);
            world.apply_action_if_legal(Action::MoveLeft);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut world = World::with_seed(12345);
    world.apply_action_if_legal(Action::Descend);
    world.apply_action_if_legal(Action::Descend);

    c.bench_function("rotate_ccw", |b| {
        b.iter(|| {
            world.apply_action_if_legal(Action::RotateCcw);
        })
    });
}

fn bench_composite(c: &mut Criterion) {
    let world = World::with_seed(12345);

    c.bench_function("composite_board", |b| {
        b.iter(|| black_box(world.composite_board()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_session_frame,
        bench_line_clear,
        bench_drop_to_floor,
        bench_move,
        bench_rotate,
        bench_composite
}
criterion_main!(benches);
