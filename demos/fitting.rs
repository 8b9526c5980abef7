use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tapegrad::prelude::*;

const N: usize = 100;
const ITERATIONS: usize = 50;

fn main() -> Result<()> {
    env_logger::init();

    let (k0, b0) = (10.0f64, -5.0f64);
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 1.0).map_err(|e| Error::InvalidArgument(e.to_string()))?;

    let xs: Vec<f64> = (0..N).map(|i| -10.0 + 20.0 * i as f64 / (N - 1) as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| k0 * x + b0 + noise.sample(&mut rng)).collect();

    let k = Var::new(0.0);
    let b = Var::new(0.0);
    let mut optimizer = Adam::new(1.0);

    for iter in 0..ITERATIONS {
        let total: Var = xs.iter().zip(&ys).map(|(&x, &y)| (&k * x + &b - y).square()).sum();
        let loss = total / N as f64;
        let value = loss.try_raw()?;

        loss.try_propagate()?;
        optimizer.step(&[&k, &b])?;

        if iter % 10 == 0 || iter == ITERATIONS - 1 {
            println!("iter {:>2}: loss = {:>10.4}, k = {:.4}, b = {:.4}", iter, value, k, b);
        }
    }

    println!("fit result: (k0, b0) = ({}, {}), (k, b) = ({:.4}, {:.4})", k0, b0, k, b);
    Ok(())
}
