use crate::Var;
use paste::paste;
use tapegrad_core::{
    error::Result,
    op::{OpKind, Operation, UnaryOp},
    Float,
};

macro_rules! unary_ops {
    ($($name:ident => $op:ident),* $(,)?) => {
        impl<T: Float> Var<T> {
            $(
                paste! {
                    pub fn [<try_ $name>](&self) -> Result<Var<T>> {
                        Var::apply(Operation::lookup(OpKind::Unary(UnaryOp::$op)), &[self])
                    }

                    pub fn $name(&self) -> Var<T> {
                        self.[<try_ $name>]()
                            .unwrap_or_else(|err| panic!("{}: {}", stringify!($name), err))
                    }
                }
            )*
        }
    };
}

unary_ops!(
    neg => Negate,
    log => Log,
    exp => Exp,
    sin => Sin,
    cos => Cos,
    tan => Tan,
    asin => Asin,
    acos => Acos,
    atan => Atan,
    sinh => Sinh,
    cosh => Cosh,
    tanh => Tanh,
    sqrt => Sqrt,
    abs => Abs,
);
