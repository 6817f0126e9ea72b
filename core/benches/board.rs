use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tapsweep_core::*;

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for (name, size, mines) in [
        ("easy", (8, 8), 8),
        ("hard", (15, 8), 23),
        ("dense", (30, 30), 800),
        ("large", (255, 255), 10_000),
    ] {
        let config = GameConfig::new(size, mines).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut board = Board::new(config, seed);
                black_box(board.reveal((size.0 / 2, size.1 / 2)).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    let board = Board::with_layout(layout);

    c.bench_function("cascade_open_board", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(board.reveal((0, 0)).unwrap())
        });
    });
}

criterion_group!(benches, bench_first_reveal, bench_cascade);
criterion_main!(benches);
