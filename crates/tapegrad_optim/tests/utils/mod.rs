#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

// Helper functions
pub fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` evenly spaced points on `[lo, hi]` with targets `k * x + b` plus unit gaussian noise.
pub fn noisy_line(n: usize, (lo, hi): (f64, f64), k: f64, b: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let xs: Vec<f64> = (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64).collect();
    let ys = xs.iter().map(|x| k * x + b + noise.sample(&mut rng)).collect();
    (xs, ys)
}

pub fn uniform_points(n: usize, (lo, hi): (f64, f64), seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}
