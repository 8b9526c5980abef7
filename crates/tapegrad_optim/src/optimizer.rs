use tapegrad_core::{error::Result, Float};
use tapegrad_var::Var;

/// Updates leaf parameters from their accumulated gradients.
///
/// `step` reads each parameter's gradient, writes the new value in place and clears the gradient,
/// so the next propagation starts from zero.
pub trait Optimizer<T: Float> {
    fn step(&mut self, parameters: &[&Var<T>]) -> Result<()>;
    fn zero_grad(&mut self, parameters: &[&Var<T>]) -> Result<()>;
    fn set_learning_rate(&mut self, learning_rate: T);
}
