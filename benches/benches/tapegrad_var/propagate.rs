use benches::{chain, leaves, squares, SIZES};
use criterion::{black_box, criterion_group, BatchSize, Criterion};
use tapegrad_var::Var;

fn build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("propagate/build");
    group.sample_size(30);

    for &(size, size_name) in &SIZES {
        let xs = leaves(size);
        group.bench_function(format!("chain/{}", size_name), |b| b.iter(|| black_box(chain(&xs))));
        group.bench_function(format!("squares/{}", size_name), |b| b.iter(|| black_box(squares(&xs))));
    }

    group.finish();
}

fn backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("propagate/backward");
    group.sample_size(30);

    for &(size, size_name) in &SIZES {
        let xs = leaves(size);

        group.bench_function(format!("chain/{}", size_name), |b| {
            b.iter_batched(|| chain(&xs), |root: Var| root.propagate(), BatchSize::LargeInput)
        });
        group.bench_function(format!("squares_retained/{}", size_name), |b| {
            let root = squares(&xs);
            b.iter(|| root.propagate_retained())
        });
    }

    group.finish();
}

criterion_group!(benches, build, backward);
