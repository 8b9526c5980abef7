use crate::optimizer::Optimizer;
use log::trace;
use tapegrad_core::{error::Result, Float};
use tapegrad_var::Var;

/// Plain gradient descent: `value -= learning_rate * grad`.
pub struct GradientDescent<T: Float = f64> {
    learning_rate: T,
}

impl<T: Float> GradientDescent<T> {
    pub fn new(learning_rate: T) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }
}

impl<T: Float> Optimizer<T> for GradientDescent<T> {
    fn step(&mut self, parameters: &[&Var<T>]) -> Result<()> {
        for param in parameters {
            let grad = param.try_grad()?;
            param.try_set_raw(param.try_raw()? - self.learning_rate * grad)?;
            param.try_clear()?;
        }
        trace!("gradient descent: updated {} parameter(s)", parameters.len());
        Ok(())
    }

    fn zero_grad(&mut self, parameters: &[&Var<T>]) -> Result<()> {
        for param in parameters {
            param.try_clear()?;
        }
        Ok(())
    }

    fn set_learning_rate(&mut self, learning_rate: T) {
        self.learning_rate = learning_rate;
    }
}
