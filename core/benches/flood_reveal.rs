use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pymines_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(200, 200, 8_000).unwrap();

    c.bench_function("generate 200x200", |b| {
        b.iter(|| RandomMineGenerator::new(black_box(7)).generate(config).unwrap())
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    // only the far corner is mined, so one reveal floods the whole board
    let config = GameConfig::new(255, 255, 1).unwrap();
    let board = Board::with_generator(config, FixedMineGenerator::new([(254, 254)])).unwrap();

    c.bench_function("flood reveal 255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| board.reveal(black_box((0, 0))).unwrap(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_reveal);
criterion_main!(benches);
