pub mod optimizer;

pub mod optimizers;

pub use crate::{
    optimizer::Optimizer,
    optimizers::{adam::Adam, gradient_descent::GradientDescent},
};
