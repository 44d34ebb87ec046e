//! Arithmetic operator overloads producing lazy views.
//!
//! `&a + &b` builds a [`Binary`] view without touching the elements; the
//! sum is computed on access or on [`eval`](crate::Sequence::eval). Two
//! container operands must agree in extent, and unlike the fallible
//! [`zip_with`](crate::lazy::zip_with) constructor the operators **panic**
//! on mismatch.
//!
//! Scalar operands are supported for the primitive numeric types and
//! `Complex<f32>` / `Complex<f64>`, on either side: `&a * 2.0` and
//! `2.0 * &a` both work.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;

use crate::array::Array;
use crate::lazy::map::{map, map_grid, zip_with, zip_with_grid, Binary, BinaryGrid, Map, MapGrid,
                       Scalar};
use crate::matrix::Matrix;
use crate::traits::{Grid, Sequence};

fn add<T: Add<Output = T>>(a: T, b: T) -> T { a + b }
fn sub<T: Sub<Output = T>>(a: T, b: T) -> T { a - b }
fn mul<T: Mul<Output = T>>(a: T, b: T) -> T { a * b }
fn div<T: Div<Output = T>>(a: T, b: T) -> T { a / b }
fn neg<T: Neg<Output = T>>(a: T) -> T { -a }

macro_rules! impl_binary_op {
    ($trait:ident, $mth:ident, $f:ident) => {
        impl<'a, 'b, T, S> $trait<&'b S> for &'a Array<T>
        where
            S: Sequence<Elem = T> + ?Sized,
            T: Clone + $trait<Output = T>,
        {
            type Output = Binary<&'a Array<T>, &'b S, fn(T, T) -> T>;

            fn $mth(self, rhs: &'b S) -> Self::Output
            {
                match zip_with(self, rhs, $f::<T> as fn(T, T) -> T) {
                    Ok(v) => v,
                    Err(e) => panic!("ndlazy: {}", e),
                }
            }
        }

        impl<'a, 'b, T, G> $trait<&'b G> for &'a Matrix<T>
        where
            G: Grid<Elem = T> + ?Sized,
            T: Clone + $trait<Output = T>,
        {
            type Output = BinaryGrid<&'a Matrix<T>, &'b G, fn(T, T) -> T>;

            fn $mth(self, rhs: &'b G) -> Self::Output
            {
                match zip_with_grid(self, rhs, $f::<T> as fn(T, T) -> T) {
                    Ok(v) => v,
                    Err(e) => panic!("ndlazy: {}", e),
                }
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);

impl<'a, T> Neg for &'a Array<T>
where T: Clone + Neg<Output = T>
{
    type Output = Map<'a, Array<T>, fn(T) -> T>;

    fn neg(self) -> Self::Output
    {
        map(self, neg::<T> as fn(T) -> T)
    }
}

impl<'a, T> Neg for &'a Matrix<T>
where T: Clone + Neg<Output = T>
{
    type Output = MapGrid<'a, Matrix<T>, fn(T) -> T>;

    fn neg(self) -> Self::Output
    {
        map_grid(self, neg::<T> as fn(T) -> T)
    }
}

// Scalar operands need concrete types: a blanket `impl Add<T> for &Array<T>`
// would overlap with the container impl above.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl_scalar_op!($t, Add, add, add);
            impl_scalar_op!($t, Sub, sub, sub);
            impl_scalar_op!($t, Mul, mul, mul);
            impl_scalar_op!($t, Div, div, div);
        )*
    };
}

macro_rules! impl_scalar_op {
    ($t:ty, $trait:ident, $mth:ident, $f:ident) => {
        impl<'a> $trait<$t> for &'a Array<$t>
        {
            type Output = Binary<&'a Array<$t>, Scalar<$t>, fn($t, $t) -> $t>;

            fn $mth(self, rhs: $t) -> Self::Output
            {
                // a scalar operand cannot fail the extent check
                zip_with(self, Scalar(rhs), $f::<$t> as fn($t, $t) -> $t).unwrap()
            }
        }

        impl<'a> $trait<&'a Array<$t>> for $t
        {
            type Output = Binary<Scalar<$t>, &'a Array<$t>, fn($t, $t) -> $t>;

            fn $mth(self, rhs: &'a Array<$t>) -> Self::Output
            {
                zip_with(Scalar(self), rhs, $f::<$t> as fn($t, $t) -> $t).unwrap()
            }
        }

        impl<'a> $trait<$t> for &'a Matrix<$t>
        {
            type Output = BinaryGrid<&'a Matrix<$t>, Scalar<$t>, fn($t, $t) -> $t>;

            fn $mth(self, rhs: $t) -> Self::Output
            {
                zip_with_grid(self, Scalar(rhs), $f::<$t> as fn($t, $t) -> $t).unwrap()
            }
        }

        impl<'a> $trait<&'a Matrix<$t>> for $t
        {
            type Output = BinaryGrid<Scalar<$t>, &'a Matrix<$t>, fn($t, $t) -> $t>;

            fn $mth(self, rhs: &'a Matrix<$t>) -> Self::Output
            {
                zip_with_grid(Scalar(self), rhs, $f::<$t> as fn($t, $t) -> $t).unwrap()
            }
        }
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
                 Complex<f32>, Complex<f64>);

#[cfg(test)]
mod tests
{
    use crate::array::Array;
    use crate::matrix::Matrix;
    use crate::traits::{Grid, Sequence};

    #[test]
    fn addition_is_lazy_and_composes()
    {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![10, 20, 30]);
        let sum = &a + &b;
        assert_eq!(sum.len(), 3);
        assert_eq!(sum.get(1), 22);
        assert_eq!(sum.eval(), Array::from_vec(vec![11, 22, 33]));
    }

    #[test]
    fn scalar_on_either_side()
    {
        let a = Array::from_vec(vec![1.0f64, 2.0, 3.0]);
        assert_eq!((&a * 2.0).eval(), Array::from_vec(vec![2.0, 4.0, 6.0]));
        assert_eq!((10.0 - &a).eval(), Array::from_vec(vec![9.0, 8.0, 7.0]));
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic()
    {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![1, 2]);
        let _ = &a + &b;
    }

    #[test]
    fn matrix_ops_keep_shape()
    {
        let a = Matrix::from_vec((2, 2), vec![1i32, 2, 3, 4]).unwrap();
        let neg = -&a;
        assert_eq!(neg.dim(), (2, 2));
        assert_eq!(neg.get(1, 0), -3);
        let scaled = &a * 10;
        assert_eq!(scaled.eval(),
                   Matrix::from_vec((2, 2), vec![10, 20, 30, 40]).unwrap());
    }
}
