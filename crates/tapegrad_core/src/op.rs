use crate::{
    error::{Error, Result},
    float::Float,
};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
}

impl Arity {
    pub fn count(&self) -> usize {
        match self {
            Self::Nullary => 0,
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Log,
    Exp,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Abs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Identity,
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 14] = [
        Self::Negate,
        Self::Log,
        Self::Exp,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Sqrt,
        Self::Abs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    pub fn forward<T: Float>(&self, a: T) -> T {
        match self {
            Self::Negate => -a,
            Self::Log => a.ln(),
            Self::Exp => a.exp(),
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => a.asin(),
            Self::Acos => a.acos(),
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Sqrt => a.sqrt(),
            Self::Abs => a.abs(),
        }
    }

    /// Local derivative at `a`, scaled by the upstream gradient `u`.
    pub fn backward<T: Float>(&self, u: T, a: T) -> T {
        let one = T::ONE;
        let coef = match self {
            Self::Negate => -one,
            Self::Log => one / a,
            Self::Exp => a.exp(),
            Self::Sin => a.cos(),
            Self::Cos => -a.sin(),
            Self::Tan => one / (a.cos() * a.cos()),
            Self::Asin => one / (one - a * a).sqrt(),
            Self::Acos => -one / (one - a * a).sqrt(),
            Self::Atan => one / (one + a * a),
            Self::Sinh => a.cosh(),
            Self::Cosh => a.sinh(),
            Self::Tanh => one / (a.cosh() * a.cosh()),
            Self::Sqrt => one / (T::two() * a.sqrt()),
            Self::Abs => a.sign(),
        };
        coef * u
    }
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide, Self::Power];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
        }
    }

    pub fn forward<T: Float>(&self, a: T, b: T) -> T {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => a.powf(b),
        }
    }

    pub fn backward<T: Float>(&self, u: T, a: T, b: T) -> (T, T) {
        let (coef_a, coef_b) = match self {
            Self::Add => (T::ONE, T::ONE),
            Self::Subtract => (T::ONE, -T::ONE),
            Self::Multiply => (b, a),
            Self::Divide => (T::ONE / b, -a / (b * b)),
            Self::Power => (b * a.powf(b - T::ONE), a.powf(b) * a.ln()),
        };
        (coef_a * u, coef_b * u)
    }
}

impl OpKind {
    pub const COUNT: usize = 1 + UnaryOp::ALL.len() + BinaryOp::ALL.len();

    pub fn all() -> impl Iterator<Item = OpKind> {
        std::iter::once(Self::Identity)
            .chain(UnaryOp::ALL.into_iter().map(Self::Unary))
            .chain(BinaryOp::ALL.into_iter().map(Self::Binary))
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Identity => Arity::Nullary,
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Unary(op) => op.as_str(),
            Self::Binary(op) => op.as_str(),
        }
    }

    /// Position in [`OpKind::all`], used as the registry slot.
    fn index(&self) -> usize {
        match self {
            Self::Identity => 0,
            Self::Unary(op) => 1 + *op as usize,
            Self::Binary(op) => 1 + UnaryOp::ALL.len() + *op as usize,
        }
    }
}

/// Per-operand gradient contributions returned by [`Operation::backward`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grads<T> {
    Leaf,
    Unary(T),
    Binary(T, T),
}

impl<T: Copy> Grads<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        match (self, index) {
            (Self::Unary(a), 0) | (Self::Binary(a, _), 0) => Some(*a),
            (Self::Binary(_, b), 1) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Unary(_) => 1,
            Self::Binary(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}

impl<T> IntoIterator for Grads<T> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<T>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let slots = match self {
            Self::Leaf => [None, None],
            Self::Unary(a) => [Some(a), None],
            Self::Binary(a, b) => [Some(a), Some(b)],
        };
        slots.into_iter().flatten()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    kind: OpKind,
    name: &'static str,
    arity: Arity,
}

static REGISTRY: LazyLock<Vec<Operation>> = LazyLock::new(|| {
    OpKind::all()
        .map(|kind| Operation {
            kind,
            name: kind.as_str(),
            arity: kind.arity(),
        })
        .collect()
});

impl Operation {
    /// Returns the process-wide descriptor for `kind`.
    pub fn lookup(kind: OpKind) -> &'static Operation {
        &REGISTRY[kind.index()]
    }

    pub fn identity() -> &'static Operation {
        Self::lookup(OpKind::Identity)
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == OpKind::Identity
    }

    fn mismatch(&self, got: usize) -> Error {
        Error::OperationMismatch {
            op: self.name,
            expected: self.arity,
            got,
        }
    }

    pub fn forward<T: Float>(&self, args: &[T]) -> Result<T> {
        match (self.kind, args) {
            (OpKind::Identity, []) => Err(Error::LeafEvaluation),
            (OpKind::Unary(op), &[a]) => Ok(op.forward(a)),
            (OpKind::Binary(op), &[a, b]) => Ok(op.forward(a, b)),
            _ => Err(self.mismatch(args.len())),
        }
    }

    pub fn backward<T: Float>(&self, grad: T, args: &[T]) -> Result<Grads<T>> {
        match (self.kind, args) {
            (OpKind::Identity, []) => Ok(Grads::Leaf),
            (OpKind::Unary(op), &[a]) => Ok(Grads::Unary(op.backward(grad, a))),
            (OpKind::Binary(op), &[a, b]) => {
                let (ga, gb) = op.backward(grad, a, b);
                Ok(Grads::Binary(ga, gb))
            }
            _ => Err(self.mismatch(args.len())),
        }
    }
}
