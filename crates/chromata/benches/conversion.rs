use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chromata::{average, mix, Bezier, Color, ColorSpace};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("hex", |b| b.iter(|| Color::new(black_box("#c0ffee"), None)));
    group.bench_function("css", |b| {
        b.iter(|| Color::new(black_box("hsla(120, 50%, 40%, 0.5)"), None))
    });
    group.bench_function("named", |b| b.iter(|| Color::new(black_box("rebeccapurple"), None)));
    group.bench_function("tuple", |b| {
        b.iter(|| Color::new(black_box([12.0, 120.0, 240.0]), None))
    });

    group.finish();

    let color = Color::from_rgba(192.0, 255.0, 238.0, 0.8);
    let mut group = c.benchmark_group("conversion");

    for space in ColorSpace::ALL {
        group.bench_function(space.name(), |b| b.iter(|| black_box(&color).to(space)));
    }

    group.finish();

    let colors = ["darkred", "orange", "snow", "lightgreen", "royalblue"]
        .map(|name| Color::new(name, None).expect("named color"));
    let mut group = c.benchmark_group("mixing");

    for mode in ["rgb", "lrgb", "lab", "hsl", "oklch"] {
        group.bench_function(mode, |b| {
            b.iter(|| mix(&colors[0], &colors[4], black_box(0.3), Some(mode)))
        });
    }

    group.bench_function("average", |b| {
        b.iter(|| average(black_box(&colors), Some("lab"), None))
    });

    let curve = Bezier::new(&colors).expect("enough colors");
    group.bench_function("bezier", |b| b.iter(|| curve.at(black_box(0.42))));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
