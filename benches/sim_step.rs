//! Benchmarks for the CPU-side per-frame work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use starfield::config::StarfieldConfig;
use starfield::nebula;
use starfield::raster::Raster;
use starfield::render;
use starfield::sim;
use starfield::star;

fn bench_sim_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim_step");
    let config = StarfieldConfig::default();

    for count in [500usize, 2_000, 10_000] {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut stars = Vec::new();
        star::fill_to_target(&mut stars, count, &mut rng, config.star_size);

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                sim::step(
                    black_box(&mut stars),
                    &config,
                    Vec2::new(0.4, 0.6),
                    1920.0,
                    1080.0,
                    count,
                    &mut rng,
                )
            })
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let mut rng = SmallRng::seed_from_u64(2);

    let mut backdrop = Raster::new(1280, 720);
    nebula::paint(&mut backdrop, &config.nebula, &mut rng);

    let mut stars = Vec::new();
    let target = star::target_count(1280, 720, config.density);
    star::fill_to_target(&mut stars, target, &mut rng, config.star_size);

    let mut frame = Raster::new(1280, 720);
    c.bench_function("draw_1280x720", |b| {
        b.iter(|| render::draw(black_box(&mut frame), &backdrop, &stars, &config, false))
    });
}

fn bench_nebula_paint(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut raster = Raster::new(1280, 720);
    c.bench_function("nebula_paint_1280x720", |b| {
        b.iter(|| nebula::paint(black_box(&mut raster), &config.nebula, &mut rng))
    });
}

criterion_group!(benches, bench_sim_step, bench_draw, bench_nebula_paint);
criterion_main!(benches);
