use tapegrad_var::Var;

/// Graph sizes shared by the benchmarks.
pub const SIZES: [(usize, &str); 3] = [(100, "small"), (5000, "medium"), (50000, "large")];

/// Leaves `0.0, 0.1, ..., 0.9` repeated up to `size`.
pub fn leaves(size: usize) -> Vec<Var> {
    (0..size).map(|i| Var::new((i % 10) as f64 / 10.0)).collect()
}

/// Left-leaning chain `((x0 + x1) + x2) + ...`: depth grows with `size`.
pub fn chain(xs: &[Var]) -> Var {
    xs.iter().fold(Var::new(0.0), |acc, x| &acc + x)
}

/// `sum(x_i * x_i)`, so every leaf is reached through two edges of the same node.
pub fn squares(xs: &[Var]) -> Var {
    xs.iter().map(|x| x * x).sum()
}
