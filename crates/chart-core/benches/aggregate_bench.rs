use chart_core::aggregate::{histogram, value_counts};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_sizes(n: usize) -> Vec<f64> {
    // skewed positive sizes, a few large outliers
    (0..n).map(|i| 100.0 + ((i * 7919) % 1000) as f64 + if i % 97 == 0 { 5_000.0 } else { 0.0 }).collect()
}

fn gen_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user{}@example.com", (i * 31) % 250)).collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_sizes(n);
        for &bins in &[10usize, 100usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_b{bins}")), &bins, |b, &k| {
                b.iter(|| black_box(histogram(&data, k)));
            });
        }
    }
    group.finish();
}

fn bench_value_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_counts");
    for &n in &[10_000usize, 100_000usize] {
        let labels = gen_labels(n);
        group.bench_function(format!("n{n}"), |b| {
            b.iter_batched(
                || labels.clone(),
                |l| { let _ = black_box(value_counts(&l)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_histogram, bench_value_counts);
criterion_main!(benches);
