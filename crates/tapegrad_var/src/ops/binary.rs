use crate::Var;
use paste::paste;
use tapegrad_core::{
    error::Result,
    op::{BinaryOp, OpKind, Operation},
    Float,
};

macro_rules! binary_ops {
    ($($name:ident => $op:ident),* $(,)?) => {
        impl<T: Float> Var<T> {
            $(
                paste! {
                    pub fn [<try_ $name>](&self, rhs: &Var<T>) -> Result<Var<T>> {
                        Var::apply(Operation::lookup(OpKind::Binary(BinaryOp::$op)), &[self, rhs])
                    }

                    pub fn $name(&self, rhs: &Var<T>) -> Var<T> {
                        self.[<try_ $name>](rhs)
                            .unwrap_or_else(|err| panic!("{}: {}", stringify!($name), err))
                    }
                }
            )*
        }
    };
}

binary_ops!(
    add => Add,
    sub => Subtract,
    mul => Multiply,
    div => Divide,
    pow => Power,
);

impl<T: Float> Var<T> {
    /// `self ^ exponent` with a constant exponent (recorded as a fresh leaf).
    pub fn try_powf(&self, exponent: T) -> Result<Var<T>> {
        self.try_pow(&Var::new(exponent))
    }

    pub fn powf(&self, exponent: T) -> Var<T> {
        self.try_powf(exponent)
            .unwrap_or_else(|err| panic!("powf: {}", err))
    }

    pub fn try_square(&self) -> Result<Var<T>> {
        self.try_mul(self)
    }

    pub fn square(&self) -> Var<T> {
        self.try_square().unwrap_or_else(|err| panic!("square: {}", err))
    }
}
