use rand::{rngs::StdRng, Rng, SeedableRng};
use tapegrad::prelude::*;

struct Layer {
    weights: Vec<Vec<Var>>,
}

impl Layer {
    /// Xavier/Glorot uniform initialization.
    fn new(input_size: usize, output_size: usize, rng: &mut StdRng) -> Self {
        let limit = (6.0 / (input_size + output_size) as f64).sqrt();
        let weights = (0..output_size)
            .map(|_| (0..input_size).map(|_| Var::new(rng.gen_range(-limit..limit))).collect())
            .collect();
        Self { weights }
    }

    fn forward(&self, input: &[Var]) -> Vec<Var> {
        self.weights
            .iter()
            .map(|row| row.iter().zip(input).map(|(w, x)| w * x).sum::<Var>())
            .collect()
    }

    fn parameters(&self) -> impl Iterator<Item = &Var> {
        self.weights.iter().flatten()
    }
}

fn sigmoid(x: &Var) -> Var {
    1.0 / (1.0 + (-x).exp())
}

struct XorModel {
    layer1: Layer,
    layer2: Layer,
}

impl XorModel {
    fn new(hidden_size: usize, rng: &mut StdRng) -> Self {
        Self {
            layer1: Layer::new(2, hidden_size, rng),
            layer2: Layer::new(hidden_size, 1, rng),
        }
    }

    fn forward(&self, x1: f64, x2: f64) -> Var {
        let hidden: Vec<Var> = self.layer1.forward(&[Var::new(x1), Var::new(x2)]).iter().map(sigmoid).collect();
        let output = self.layer2.forward(&hidden);
        sigmoid(&output[0])
    }

    fn parameters(&self) -> Vec<&Var> {
        self.layer1.parameters().chain(self.layer2.parameters()).collect()
    }

    fn fit(&self, epochs: usize) -> Result<()> {
        let data = [((0.0, 0.0), 0.0), ((0.0, 1.0), 1.0), ((1.0, 0.0), 1.0), ((1.0, 1.0), 0.0)];
        let params = self.parameters();
        let mut optimizer = Adam::new(0.1);

        for epoch in 0..epochs {
            let mut epoch_loss = 0.0;
            for &((x1, x2), y) in &data {
                let output = self.forward(x1, x2);
                let loss = -(y * output.try_log()? + (1.0 - y) * (1.0 - &output).try_log()?);
                epoch_loss += loss.try_raw()?;

                loss.try_propagate()?;
                optimizer.step(&params)?;
            }
            if epoch % 100 == 0 {
                log::info!("epoch {:>4}: loss = {:.6}", epoch, epoch_loss / data.len() as f64);
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0);
    let model = XorModel::new(8, &mut rng);
    model.fit(1000)?;

    let _guard = no_grad_mode();
    for x1 in [0.0, 1.0] {
        for x2 in [0.0, 1.0] {
            println!("XOR({}, {}) = {:.4}", x1, x2, model.forward(x1, x2));
        }
    }
    Ok(())
}
