use half::{bf16, f16};
use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Scalar type a graph can be built over.
///
/// The elementary functions mirror the inherent `f32`/`f64` methods so the operation rules can be
/// written once, generically. `f16` and `bf16` evaluate them through `f32`.
pub trait Float:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn powf(self, exp: Self) -> Self;

    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.to_f64().is_nan()
    }

    /// `1` for non-negative values (including `+0` and `-0`), `-1` otherwise.
    #[inline]
    fn sign(self) -> Self {
        if self >= Self::ZERO {
            Self::ONE
        } else {
            -Self::ONE
        }
    }
}

macro_rules! impl_native_float {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Float for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                impl_native_float!(@unary $ty; abs, sqrt, ln, exp, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh);

                #[inline]
                fn powf(self, exp: Self) -> Self {
                    $ty::powf(self, exp)
                }
            }
        )*
    };
    (@unary $ty:ident; $($method:ident),*) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                $ty::$method(self)
            }
        )*
    };
}

macro_rules! impl_half_float {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Float for $ty {
                const ZERO: Self = $ty::ZERO;
                const ONE: Self = $ty::ONE;
                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn from_f64(value: f64) -> Self {
                    $ty::from_f64(value)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    $ty::to_f64(self)
                }

                impl_half_float!(@unary $ty; abs, sqrt, ln, exp, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh);

                #[inline]
                fn powf(self, exp: Self) -> Self {
                    $ty::from_f32(f32::from(self).powf(f32::from(exp)))
                }
            }
        )*
    };
    (@unary $ty:ident; $($method:ident),*) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                $ty::from_f32(f32::from(self).$method())
            }
        )*
    };
}

impl_native_float!(f32, f64);
impl_half_float!(f16, bf16);
