use criterion::{Criterion, criterion_group, criterion_main};
use spherical_nav::{EARTH_RADIUS, Point};
use std::hint::black_box;

fn rhumb_benchmark(c: &mut Criterion) {
    let cambridge = Point::new(52.205, 0.119).unwrap();
    let paris = Point::new(48.857, 2.351).unwrap();

    c.bench_function("rhumb_distance", |b| {
        b.iter(|| black_box(&cambridge).rhumb_distance_to(black_box(&paris), EARTH_RADIUS))
    });

    c.bench_function("rhumb_destination", |b| {
        b.iter(|| black_box(&cambridge).rhumb_destination_point(40_300.0, 116.7, EARTH_RADIUS))
    });

    c.bench_function("rhumb_midpoint", |b| {
        b.iter(|| black_box(&cambridge).rhumb_midpoint_to(black_box(&paris)))
    });
}

criterion_group!(benches, rhumb_benchmark);
criterion_main!(benches);
