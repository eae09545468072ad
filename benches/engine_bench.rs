//! Benchmarks for dealing and full CPU games.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::{
    deal, Engine, EngineConfig, FlipSource, GameMode, GameRng, Phase, Position, Theme,
};

fn deal_benchmark(c: &mut Criterion) {
    let mut rng = GameRng::new(42);

    c.bench_function("deal_jobs", |b| b.iter(|| black_box(deal(Theme::Jobs, &mut rng))));
}

/// Human always flips the two lowest face-down cards; the CPU answers.
fn play_out(seed: u64) -> u32 {
    let mut engine = Engine::new(EngineConfig::instant().with_seed(seed));
    engine.start(Theme::Animals, GameMode::VsCpu);

    while engine.state().phase() != Phase::Won {
        let picks: Vec<Position> = engine.state().flippable().take(2).collect();
        for pick in picks {
            engine.flip(pick, FlipSource::Human);
        }
        engine.run_until_idle();
    }
    engine.state().move_count()
}

fn cpu_game_benchmark(c: &mut Criterion) {
    c.bench_function("vs_cpu_full_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            play_out(black_box(seed))
        })
    });
}

fn snapshot_benchmark(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::default().with_seed(7));

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, deal_benchmark, cpu_game_benchmark, snapshot_benchmark);
criterion_main!(benches);
