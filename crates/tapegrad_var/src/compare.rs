use crate::Var;
use std::cmp::Ordering;
use tapegrad_core::Float;

/// Absolute tolerance used when comparing variables by value.
pub const EQ_TOLERANCE: f64 = 1e-10;

fn values<T: Float>(a: &Var<T>, b: &Var<T>) -> Option<(f64, f64)> {
    Some((a.try_raw().ok()?.to_f64(), b.try_raw().ok()?.to_f64()))
}

// Released variables compare as unordered.
impl<T: Float> PartialEq for Var<T> {
    fn eq(&self, other: &Self) -> bool {
        values(self, other).is_some_and(|(a, b)| (a - b).abs() < EQ_TOLERANCE)
    }
}

impl<T: Float> PartialOrd for Var<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = values(self, other)?;
        if (a - b).abs() < EQ_TOLERANCE {
            return Some(Ordering::Equal);
        }
        a.partial_cmp(&b)
    }
}

/// Returns a handle to whichever operand holds the larger value; gradients flow only into it.
pub fn max<T: Float>(a: &Var<T>, b: &Var<T>) -> Var<T> {
    if a > b {
        a.clone()
    } else {
        b.clone()
    }
}

pub fn min<T: Float>(a: &Var<T>, b: &Var<T>) -> Var<T> {
    if a < b {
        a.clone()
    } else {
        b.clone()
    }
}

/// Resets the gradient of every given variable.
pub fn clear<T: Float>(vars: &[&Var<T>]) {
    for var in vars {
        var.clear();
    }
}
