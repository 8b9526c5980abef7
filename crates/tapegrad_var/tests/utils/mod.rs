#![allow(dead_code)]

use tapegrad_core::Float;

// Helper functions
pub fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Comparison tolerance, relative to the expected magnitude.
pub fn tolerance<T: Float>() -> f64 {
    match T::NAME {
        "f64" => 1e-6,
        "f32" => 1e-3,
        _ => 5e-2,
    }
}

pub fn assert_close<T: Float>(actual: T, expected: f64) {
    let actual = actual.to_f64();
    let tol = tolerance::<T>() * (1.0 + expected.abs());
    assert!(
        (actual - expected).abs() <= tol,
        "Expected value close to {} ({}), got {}",
        expected,
        T::NAME,
        actual
    );
}

/// Central difference of `f` at `x`.
pub fn numeric_grad(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-6;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Rounds `value` through `T` so reference values are computed at the point the graph actually sees.
pub fn representable<T: Float>(value: f64) -> f64 {
    T::from_f64(value).to_f64()
}

#[macro_export]
macro_rules! test_ops {
    ([$($op:ident),*]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;

                paste! {
                    #[test]
                    fn bf16() -> Result<()> {
                        test_functions::[<$op _test>]::<half::bf16>()
                    }

                    #[test]
                    fn f16() -> Result<()> {
                        test_functions::[<$op _test>]::<half::f16>()
                    }

                    #[test]
                    fn f32() -> Result<()> {
                        test_functions::[<$op _test>]::<f32>()
                    }

                    #[test]
                    fn f64() -> Result<()> {
                        test_functions::[<$op _test>]::<f64>()
                    }
                }
            }
        )*
    };
}
