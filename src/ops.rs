//! Operator surface of [PointND].
//!
//! Every binary operation is element-wise and exists for point ⊕ point,
//! point ⊕ scalar and scalar ⊕ point operands. Division follows the scalar
//! type: IEEE infinities and NaN for floats, a panic for integer division
//! by zero.

use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use num_traits::Zero;

use crate::PointND;

impl<T, const D: usize> Neg for PointND<T, D>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! point_binop {
    ( $op:ident, $method:ident, $op_assign:ident, $method_assign:ident ) => {
        impl<T, const D: usize> $op for PointND<T, D>
        where
            T: $op<Output = T> + Copy,
        {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, T::$method)
            }
        }

        impl<T, const D: usize> $op<T> for PointND<T, D>
        where
            T: $op<Output = T> + Copy,
        {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|component| component.$method(rhs))
            }
        }

        impl<T, const D: usize> $op_assign for PointND<T, D>
        where
            T: $op_assign + Copy,
        {
            fn $method_assign(&mut self, rhs: Self) {
                for (component, r) in self.iter_mut().zip(rhs.0) {
                    component.$method_assign(r);
                }
            }
        }

        impl<T, const D: usize> $op_assign<T> for PointND<T, D>
        where
            T: $op_assign + Copy,
        {
            fn $method_assign(&mut self, rhs: T) {
                for component in self.iter_mut() {
                    component.$method_assign(rhs);
                }
            }
        }
    };
}

point_binop!(Add, add, AddAssign, add_assign);
point_binop!(Sub, sub, SubAssign, sub_assign);
point_binop!(Mul, mul, MulAssign, mul_assign);
point_binop!(Div, div, DivAssign, div_assign);

// Scalar-on-left operands. Addition and multiplication commute with the
// point ⊕ scalar forms; subtraction and division are the reversed
// element-wise operations (s - pᵢ and s / pᵢ).
macro_rules! left_scalar_ops {
    ( $($t:ty,)* ) => { $(
        impl<const D: usize> Add<PointND<$t, D>> for $t {
            type Output = PointND<$t, D>;

            fn add(self, rhs: PointND<$t, D>) -> PointND<$t, D> {
                rhs + self
            }
        }

        impl<const D: usize> Mul<PointND<$t, D>> for $t {
            type Output = PointND<$t, D>;

            fn mul(self, rhs: PointND<$t, D>) -> PointND<$t, D> {
                rhs * self
            }
        }

        impl<const D: usize> Sub<PointND<$t, D>> for $t {
            type Output = PointND<$t, D>;

            fn sub(self, rhs: PointND<$t, D>) -> PointND<$t, D> {
                rhs.map(|component| self - component)
            }
        }

        impl<const D: usize> Div<PointND<$t, D>> for $t {
            type Output = PointND<$t, D>;

            fn div(self, rhs: PointND<$t, D>) -> PointND<$t, D> {
                rhs.map(|component| self / component)
            }
        }
    )*};
}

left_scalar_ops! {
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

impl<T, const D: usize> Sum for PointND<T, D>
where
    T: Zero + Add<Output = T> + Copy,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zeros(), Add::add)
    }
}

impl<'a, T, const D: usize> Sum<&'a PointND<T, D>> for PointND<T, D>
where
    T: Zero + Add<Output = T> + Copy,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a PointND<T, D>>,
    {
        iter.fold(Self::zeros(), |acc, point| acc + *point)
    }
}
