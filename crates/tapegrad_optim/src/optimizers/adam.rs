use crate::optimizer::Optimizer;
use log::{debug, trace};
use tapegrad_core::{
    error::{Error, Result},
    Float,
};
use tapegrad_var::Var;

/// Adam with bias-corrected moment estimates.
///
/// Moment state is kept per parameter position, so every `step` must receive the parameters in the
/// same order. The state is sized on the first step after construction or `reset`, even when that
/// step is empty; a later step with a different parameter count fails with `InvalidArgument`.
pub struct Adam<T: Float = f64> {
    learning_rate: T,
    beta1: T,
    beta2: T,
    epsilon: T,
    t: usize,
    m: Vec<T>,
    v: Vec<T>,
}

impl<T: Float> Adam<T> {
    /// Adam with the usual defaults `beta1 = 0.9`, `beta2 = 0.999`, `epsilon = 1e-8`.
    pub fn new(learning_rate: T) -> Self {
        Self::with_betas(learning_rate, T::from_f64(0.9), T::from_f64(0.999), T::from_f64(1e-8))
    }

    pub fn with_betas(learning_rate: T, beta1: T, beta2: T, epsilon: T) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            t: 0,
            m: Vec::new(),
            v: Vec::new(),
        }
    }

    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.t
    }

    /// Forgets the moment estimates and the step count.
    pub fn reset(&mut self) {
        self.t = 0;
        self.m.clear();
        self.v.clear();
    }
}

impl<T: Float> Optimizer<T> for Adam<T> {
    fn step(&mut self, parameters: &[&Var<T>]) -> Result<()> {
        if self.t == 0 {
            self.m = vec![T::ZERO; parameters.len()];
            self.v = vec![T::ZERO; parameters.len()];
            debug!("adam: tracking {} parameter(s)", parameters.len());
        } else if self.m.len() != parameters.len() {
            return Err(Error::InvalidArgument(format!(
                "adam was set up for {} parameter(s), got {}",
                self.m.len(),
                parameters.len()
            )));
        }

        self.t += 1;

        let one = T::ONE;
        let t = T::from_f64(self.t as f64);
        let one_minus_beta1_t = one - self.beta1.powf(t);
        let one_minus_beta2_t = one - self.beta2.powf(t);

        for ((param, m), v) in parameters.iter().zip(self.m.iter_mut()).zip(self.v.iter_mut()) {
            let grad = param.try_grad()?;

            // Biased first and second moment estimates
            *m = self.beta1 * *m + (one - self.beta1) * grad;
            *v = self.beta2 * *v + (one - self.beta2) * grad * grad;

            let m_hat = *m / one_minus_beta1_t;
            let v_hat = *v / one_minus_beta2_t;

            param.try_set_raw(param.try_raw()? - self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon))?;
            param.try_clear()?;
        }
        trace!("adam: step {}", self.t);
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
