pub use crate::core::{
    error::{Error, Result},
    op::OpKind,
    Float,
};
#[cfg(feature = "optim")]
pub use crate::optim::{Adam, GradientDescent, Optimizer};
pub use crate::var::{live_nodes, max, min, no_grad_mode, retain_graph_mode, Var};
pub use crate::{bf16, f16};
