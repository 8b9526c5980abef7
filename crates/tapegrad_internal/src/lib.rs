pub mod prelude;

pub use tapegrad_core as core;
#[cfg(feature = "optim")]
pub use tapegrad_optim as optim;
pub use tapegrad_var as var;

pub use tapegrad_core::{bf16, f16, half};
