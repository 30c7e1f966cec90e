use criterion::{black_box, criterion_group, criterion_main, Criterion};
use starshift::coordinates::Equatorial;
use starshift::precession::{self, Precessor};
use starshift::proper_motion::space_motion_3d;
use starshift::seasons::{low_precision_estimate, Season};

fn catalogue(n: usize) -> Vec<Equatorial> {
    (0..n)
        .map(|i| {
            let f = i as f64 / n as f64;
            Equatorial::new(f * 6.28, (f - 0.5) * 3.1)
        })
        .collect()
}

fn precession_bench(c: &mut Criterion) {
    let stars = catalogue(1_000);

    let mut group = c.benchmark_group("precession");
    group.bench_function("precessor_reused", |b| {
        let precessor = Precessor::new(2000.0, 2050.0);
        b.iter(|| {
            for star in &stars {
                black_box(precessor.apply(black_box(star), 1e-7, -1e-7));
            }
        })
    });
    group.bench_function("one_shot", |b| {
        b.iter(|| {
            for star in &stars {
                black_box(precession::position(black_box(star), 2000.0, 2050.0, 1e-7, -1e-7));
            }
        })
    });
    group.bench_function("approx_position", |b| {
        b.iter(|| {
            for star in &stars {
                black_box(precession::approx_position(
                    black_box(star),
                    2000.0,
                    2050.0,
                    1e-7,
                    -1e-7,
                ));
            }
        })
    });
    group.finish();
}

fn motion_and_seasons_bench(c: &mut Criterion) {
    let sirius = Equatorial::from_degrees(101.287, -16.716);

    let mut group = c.benchmark_group("motion_and_seasons");
    group.bench_function("space_motion_3d", |b| {
        b.iter(|| space_motion_3d(&sirius, 2000.0, black_box(-2000.0), 2.64, -7.8e-6, -9.3e-6, -5.8e-6))
    });
    group.bench_function("low_precision_season", |b| {
        b.iter(|| low_precision_estimate(Season::June, black_box(1962)))
    });
    group.finish();
}

criterion_group!(benches, precession_bench, motion_and_seasons_bench);
criterion_main!(benches);
