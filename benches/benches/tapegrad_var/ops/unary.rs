use benches::{leaves, SIZES};
use criterion::{black_box, Criterion};
use tapegrad_core::error::Result;
use tapegrad_var::Var;

// Builds one node per leaf, then propagates each of them
fn bench_op<F>(b: &mut criterion::Bencher, size: usize, data_transform: impl Fn(f64) -> f64, op_fn: F)
where
    F: Fn(&Var) -> Result<Var>,
{
    let raw_data: Vec<f64> = leaves(size).iter().map(|x| data_transform(x.raw())).collect();

    b.iter(|| {
        for &value in &raw_data {
            let x = Var::new(value);
            let y = op_fn(&x).unwrap();
            y.propagate();
            black_box(x.grad());
        }
    })
}

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unary/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    #[allow(clippy::type_complexity)]
    let operations: Vec<(&str, Box<dyn Fn(f64) -> f64>, Box<dyn Fn(&Var) -> Result<Var>>)> = vec![
        ("neg", Box::new(|v| v), Box::new(|x| x.try_neg())),
        ("abs", Box::new(|v| v - 0.5), Box::new(|x| x.try_abs())),
        ("sqrt", Box::new(|v| v + 0.01), Box::new(|x| x.try_sqrt())),
        ("exp", Box::new(|v| v), Box::new(|x| x.try_exp())),
        ("log", Box::new(|v| v + 0.01), Box::new(|x| x.try_log())),
        ("sin", Box::new(|v| v), Box::new(|x| x.try_sin())),
        ("asin", Box::new(|v| v - 0.5), Box::new(|x| x.try_asin())),
        ("tanh", Box::new(|v| v * 2.0 - 1.0), Box::new(|x| x.try_tanh())),
    ];

    for (op_name, data_transform, op_fn) in &operations {
        for &(size, size_name) in SIZES.iter().take(2) {
            let bench_name = format!("{}/{}", op_name, size_name);

            group.bench_function(&bench_name, |b| bench_op(b, size, data_transform, op_fn));
        }
    }

    group.finish();
}
