pub mod error;
pub mod float;
pub mod op;

pub use float::Float;
pub use op::{Arity, BinaryOp, Grads, OpKind, Operation, UnaryOp};

pub use half::{self, bf16, f16};
