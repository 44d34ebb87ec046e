//! Lazy outer and Kronecker products.

use std::ops::Mul;

use crate::traits::{Grid, Sequence};

/// Lazy outer product of two sequences: element `(i, j)` is
/// `f(lhs[i], rhs[j])`, with shape `(lhs.len(), rhs.len())`.
pub struct Outer<'a, A, B, F>
{
    lhs: &'a A,
    rhs: &'a B,
    f: F,
}

/// Create the multiplicative outer product of two sequences.
pub fn outer<'a, A, B, T>(lhs: &'a A, rhs: &'a B) -> Outer<'a, A, B, fn(T, T) -> T>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + Mul<Output = T>,
{
    outer_with(lhs, rhs, |x, y| x * y)
}

/// Create the outer application of an arbitrary binary function.
pub fn outer_with<'a, A, B, F>(lhs: &'a A, rhs: &'a B, f: F) -> Outer<'a, A, B, F>
where
    A: Sequence,
    B: Sequence,
{
    Outer { lhs, rhs, f }
}

impl<'a, A, B, F, O> Grid for Outer<'a, A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Elem, B::Elem) -> O,
    O: Clone,
{
    type Elem = O;

    fn nrows(&self) -> usize
    {
        self.lhs.len()
    }

    fn ncols(&self) -> usize
    {
        self.rhs.len()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> O
    {
        (self.f)(self.lhs.get(row), self.rhs.get(col))
    }
}

/// Lazy Kronecker product of two grids.
///
/// Element `(i, j)` decomposes into a block coordinate into `lhs` and an
/// intra-block coordinate into `rhs` by div/mod against the shape of `rhs`.
pub struct Kron<'a, A, B>
{
    lhs: &'a A,
    rhs: &'a B,
}

/// Create the lazy Kronecker product of `lhs` and `rhs`.
pub fn kron<'a, A, B, T>(lhs: &'a A, rhs: &'a B) -> Kron<'a, A, B>
where
    A: Grid<Elem = T>,
    B: Grid<Elem = T>,
    T: Clone + Mul<Output = T>,
{
    Kron { lhs, rhs }
}

impl<'a, A, B, T> Grid for Kron<'a, A, B>
where
    A: Grid<Elem = T>,
    B: Grid<Elem = T>,
    T: Clone + Mul<Output = T>,
{
    type Elem = T;

    fn nrows(&self) -> usize
    {
        self.lhs.nrows() * self.rhs.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.lhs.ncols() * self.rhs.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T
    {
        let (br, bc) = self.rhs.dim();
        self.lhs.get(row / br, col / bc) * self.rhs.get(row % br, col % bc)
    }
}
