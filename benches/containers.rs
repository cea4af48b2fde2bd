use criterion::{black_box, criterion_group, criterion_main,
                BenchmarkId, Criterion};
use unit_steps::{array, steps};

fn f(t: f64) -> f64 { (3. * t).sin() }

/// Fixed-size results built in place vs. through an intermediate vector.
fn bench_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("steps");
    for n in [16, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter(|| steps(black_box(n), f))
        });
        group.bench_with_input(BenchmarkId::new("boxed", n), &n, |b, &n| {
            b.iter(|| array::steps(black_box(n), f))
        });
        group.bench_with_input(BenchmarkId::new("vec_copy", n), &n, |b, &n| {
            b.iter(|| Box::<[f64]>::from(&steps(black_box(n), f)[..]))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_containers);
criterion_main!(benches);
