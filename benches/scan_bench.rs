use criterion::{black_box, criterion_group, criterion_main, Criterion};
use libcoords::{find_matches, replace, retrieve_lat_long, MapLink};

const SAMPLES: &[&str] = &[
    "N424400 W800557",
    "5335N / 12155W",
    "58147N/07720W",
    "52 degrees, 42 minutes north, 124 degrees, 50 minutes west",
    "45º10'17\"N 076º23'46\"W",
    "N50.26.008 W121.41.470",
    "43° 53' 50.9\"N, 80° 03' 06.9\"W",
    "7°53.220' N, 80°32.900' E",
];

fn document() -> String {
    SAMPLES
        .iter()
        .map(|s| format!("The survey party camped at {} for two nights. ", s))
        .collect()
}

fn retrieve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieve_lat_long");

    group.bench_function("decimal_degrees", |b| {
        b.iter(|| retrieve_lat_long(black_box("43.897481, -80.051911")))
    });
    group.bench_function("degrees_minutes_seconds", |b| {
        b.iter(|| {
            for s in SAMPLES {
                let _ = black_box(retrieve_lat_long(s));
            }
        })
    });

    group.finish();
}

fn scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let text = document();

    group.bench_function("find_matches", |b| {
        b.iter(|| find_matches(black_box(&text)))
    });
    group.bench_function("replace", |b| {
        let renderer = |link: &MapLink| link.coordinates(",");
        b.iter(|| replace(black_box(&text), &renderer))
    });

    // Long digit runs give every optional field a chance to backtrack.
    let digits = "1".repeat(4096);
    group.bench_function("long_digit_run", |b| {
        b.iter(|| find_matches(black_box(&digits)))
    });
    let spaced = "12 ".repeat(1024);
    group.bench_function("spaced_digit_run", |b| {
        b.iter(|| find_matches(black_box(&spaced)))
    });

    group.finish();
}

criterion_group!(benches, retrieve_benchmark, scan_benchmark);
criterion_main!(benches);
