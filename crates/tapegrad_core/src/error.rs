use crate::op::Arity;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    OperationMismatch {
        op: &'static str,
        expected: Arity,
        got: usize,
    },
    LeafEvaluation,
    UseAfterRelease,
    NodeLocked,
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperationMismatch { op, expected, got } => {
                write!(
                    f,
                    "Operation mismatch: `{}` expects {} operand(s), got {}",
                    op,
                    expected.count(),
                    got
                )
            }
            Self::LeafEvaluation => write!(f, "Leaf evaluation: identity has no forward rule"),
            Self::UseAfterRelease => write!(f, "Use after release: the node was torn down by a previous propagation"),
            Self::NodeLocked => write!(f, "Node is locked"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
