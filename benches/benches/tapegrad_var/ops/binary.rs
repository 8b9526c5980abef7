use benches::{leaves, SIZES};
use criterion::{black_box, Criterion};
use tapegrad_core::error::Result;
use tapegrad_var::Var;

fn bench_binary_op<F>(b: &mut criterion::Bencher, size: usize, op_fn: F)
where
    F: Fn(&Var, &Var) -> Result<Var>,
{
    let xs: Vec<f64> = leaves(size).iter().map(|x| x.raw() + 1.0).collect();
    let ys: Vec<f64> = xs.iter().rev().copied().collect();

    b.iter(|| {
        for (&xv, &yv) in xs.iter().zip(&ys) {
            let x = Var::new(xv);
            let y = Var::new(yv);
            let z = op_fn(&x, &y).unwrap();
            z.propagate();
            black_box((x.grad(), y.grad()));
        }
    })
}

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    #[allow(clippy::type_complexity)]
    let operations: Vec<(&str, Box<dyn Fn(&Var, &Var) -> Result<Var>>)> = vec![
        ("add", Box::new(|x, y| x.try_add(y))),
        ("sub", Box::new(|x, y| x.try_sub(y))),
        ("mul", Box::new(|x, y| x.try_mul(y))),
        ("div", Box::new(|x, y| x.try_div(y))),
        ("pow", Box::new(|x, y| x.try_pow(y))),
    ];

    for (op_name, op_fn) in &operations {
        for &(size, size_name) in SIZES.iter().take(2) {
            let bench_name = format!("{}/{}", op_name, size_name);

            group.bench_function(&bench_name, |b| bench_binary_op(b, size, op_fn));
        }
    }

    group.finish();
}
