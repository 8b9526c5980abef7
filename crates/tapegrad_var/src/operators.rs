use crate::Var;
use half::{bf16, f16};
use paste::paste;
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use tapegrad_core::Float;

macro_rules! var_operators {
    ($($trait:ident),* $(,)?) => {
        $(
            paste! {
                impl<T: Float> $trait<&Var<T>> for &Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: &Var<T>) -> Self::Output {
                        Var::[<$trait:snake>](self, rhs)
                    }
                }

                impl<T: Float> $trait<Var<T>> for &Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: Var<T>) -> Self::Output {
                        Var::[<$trait:snake>](self, &rhs)
                    }
                }

                impl<T: Float> $trait<&Var<T>> for Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: &Var<T>) -> Self::Output {
                        Var::[<$trait:snake>](&self, rhs)
                    }
                }

                impl<T: Float> $trait<Var<T>> for Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: Var<T>) -> Self::Output {
                        Var::[<$trait:snake>](&self, &rhs)
                    }
                }

                impl<T: Float> $trait<T> for &Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: T) -> Self::Output {
                        Var::[<$trait:snake>](self, &Var::new(rhs))
                    }
                }

                impl<T: Float> $trait<T> for Var<T> {
                    type Output = Var<T>;

                    fn [<$trait:snake>](self, rhs: T) -> Self::Output {
                        Var::[<$trait:snake>](&self, &Var::new(rhs))
                    }
                }

                impl<T: Float> [<$trait Assign>]<&Var<T>> for Var<T> {
                    fn [<$trait:snake _assign>](&mut self, rhs: &Var<T>) {
                        let result = Var::[<$trait:snake>](&*self, rhs);
                        *self = result;
                    }
                }

                impl<T: Float> [<$trait Assign>]<Var<T>> for Var<T> {
                    fn [<$trait:snake _assign>](&mut self, rhs: Var<T>) {
                        let result = Var::[<$trait:snake>](&*self, &rhs);
                        *self = result;
                    }
                }

                impl<T: Float> [<$trait Assign>]<T> for Var<T> {
                    fn [<$trait:snake _assign>](&mut self, rhs: T) {
                        let result = Var::[<$trait:snake>](&*self, &Var::new(rhs));
                        *self = result;
                    }
                }
            }
        )*
    };
}

// Scalar on the left: `2.0 * &x`, `1.0 - x`. Coherence needs one impl per concrete type.
macro_rules! scalar_lhs_operators {
    ($($ty:ident),* $(,)?) => {
        $(
            scalar_lhs_operators!(@impl $ty; Add, Sub, Mul, Div);
        )*
    };
    (@impl $ty:ident; $($trait:ident),*) => {
        $(
            paste! {
                impl $trait<&Var<$ty>> for $ty {
                    type Output = Var<$ty>;

                    fn [<$trait:snake>](self, rhs: &Var<$ty>) -> Self::Output {
                        Var::[<$trait:snake>](&Var::new(self), rhs)
                    }
                }

                impl $trait<Var<$ty>> for $ty {
                    type Output = Var<$ty>;

                    fn [<$trait:snake>](self, rhs: Var<$ty>) -> Self::Output {
                        Var::[<$trait:snake>](&Var::new(self), &rhs)
                    }
                }
            }
        )*
    };
}

var_operators!(Add, Sub, Mul, Div);
scalar_lhs_operators!(f32, f64, f16, bf16);

impl<T: Float> Neg for &Var<T> {
    type Output = Var<T>;

    fn neg(self) -> Self::Output {
        Var::neg(self)
    }
}

impl<T: Float> Neg for Var<T> {
    type Output = Var<T>;

    fn neg(self) -> Self::Output {
        Var::neg(&self)
    }
}

impl<T: Float> Sum for Var<T> {
    fn sum<I: Iterator<Item = Var<T>>>(iter: I) -> Self {
        iter.fold(Var::new(T::ZERO), |acc, v| &acc + &v)
    }
}

impl<'a, T: Float> Sum<&'a Var<T>> for Var<T> {
    fn sum<I: Iterator<Item = &'a Var<T>>>(iter: I) -> Self {
        iter.fold(Var::new(T::ZERO), |acc, v| &acc + v)
    }
}
