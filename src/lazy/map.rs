//! Lazy elementwise application of a function over one or two operands.
//!
//! Binary views accept any combination of container and bound scalar
//! through the [`SeqOperand`] / [`GridOperand`] traits; a scalar operand is
//! broadcast and exempt from the size check.

use std::fmt;

use crate::error::{invalid_parameter, mismatch_1d, mismatch_2d, ArrayError};
use crate::traits::{Grid, Sequence};

/// A value bound as a broadcast operand of an elementwise view.
#[derive(Copy, Clone, Debug)]
pub struct Scalar<T>(pub T);

/// Operand of a one-dimensional elementwise view: a borrowed container or a
/// bound scalar.
pub trait SeqOperand
{
    /// Element type contributed by this operand.
    type Elem: Clone;

    /// Length, or `None` for a broadcast scalar.
    fn extent(&self) -> Option<usize>;

    /// Element at `index` (a scalar returns its value for every index).
    fn at(&self, index: usize) -> Self::Elem;
}

impl<'a, S> SeqOperand for &'a S
where S: Sequence + ?Sized
{
    type Elem = S::Elem;

    fn extent(&self) -> Option<usize>
    {
        Some(self.len())
    }

    fn at(&self, index: usize) -> S::Elem
    {
        self.get(index)
    }
}

impl<T: Clone> SeqOperand for Scalar<T>
{
    type Elem = T;

    fn extent(&self) -> Option<usize>
    {
        None
    }

    fn at(&self, _index: usize) -> T
    {
        self.0.clone()
    }
}

/// Operand of a two-dimensional elementwise view.
pub trait GridOperand
{
    /// Element type contributed by this operand.
    type Elem: Clone;

    /// Shape, or `None` for a broadcast scalar.
    fn extent(&self) -> Option<(usize, usize)>;

    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> Self::Elem;
}

impl<'a, G> GridOperand for &'a G
where G: Grid + ?Sized
{
    type Elem = G::Elem;

    fn extent(&self) -> Option<(usize, usize)>
    {
        Some(self.dim())
    }

    fn at(&self, row: usize, col: usize) -> G::Elem
    {
        self.get(row, col)
    }
}

impl<T: Clone> GridOperand for Scalar<T>
{
    type Elem = T;

    fn extent(&self) -> Option<(usize, usize)>
    {
        None
    }

    fn at(&self, _row: usize, _col: usize) -> T
    {
        self.0.clone()
    }
}

fn common_len<A, B>(lhs: &A, rhs: &B) -> Result<usize, ArrayError>
where
    A: SeqOperand,
    B: SeqOperand,
{
    match (lhs.extent(), rhs.extent()) {
        (Some(m), Some(n)) if m != n => Err(mismatch_1d(m, n)),
        (Some(m), _) => Ok(m),
        (None, Some(n)) => Ok(n),
        (None, None) => Err(invalid_parameter("at least one operand must be a container")),
    }
}

fn common_dim<A, B>(lhs: &A, rhs: &B) -> Result<(usize, usize), ArrayError>
where
    A: GridOperand,
    B: GridOperand,
{
    match (lhs.extent(), rhs.extent()) {
        (Some(m), Some(n)) if m != n => Err(mismatch_2d(m, n)),
        (Some(m), _) => Ok(m),
        (None, Some(n)) => Ok(n),
        (None, None) => Err(invalid_parameter("at least one operand must be a container")),
    }
}

/// Lazy unary elementwise view: element `i` is `f(base[i])`.
pub struct Map<'a, S, F>
{
    base: &'a S,
    f: F,
}

/// Create a lazy view applying `f` to every element of `base`.
pub fn map<'a, S, F>(base: &'a S, f: F) -> Map<'a, S, F>
where S: Sequence
{
    Map { base, f }
}

impl<'a, S, F, O> Sequence for Map<'a, S, F>
where
    S: Sequence,
    F: Fn(S::Elem) -> O,
    O: Clone,
{
    type Elem = O;

    fn len(&self) -> usize
    {
        self.base.len()
    }

    #[inline]
    fn get(&self, index: usize) -> O
    {
        (self.f)(self.base.get(index))
    }
}

/// Lazy binary elementwise view: element `i` is `f(lhs[i], rhs[i])`.
///
/// The operands are anything implementing [`SeqOperand`]; two containers
/// must agree in length, a bound [`Scalar`] is broadcast.
pub struct Binary<A, B, F>
{
    lhs: A,
    rhs: B,
    f: F,
    len: usize,
}

/// Create a lazy binary elementwise view.
///
/// Returns an error when both operands are containers with different
/// lengths, or when neither operand is a container.
pub fn zip_with<A, B, F>(lhs: A, rhs: B, f: F) -> Result<Binary<A, B, F>, ArrayError>
where
    A: SeqOperand,
    B: SeqOperand,
{
    let len = common_len(&lhs, &rhs)?;
    Ok(Binary { lhs, rhs, f, len })
}

impl<A, B, F, O> Sequence for Binary<A, B, F>
where
    A: SeqOperand,
    B: SeqOperand,
    F: Fn(A::Elem, B::Elem) -> O,
    O: Clone,
{
    type Elem = O;

    fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> O
    {
        (self.f)(self.lhs.at(index), self.rhs.at(index))
    }
}

impl<A, B, F> fmt::Debug for Binary<A, B, F>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Binary")
         .field("len", &self.len)
         .finish_non_exhaustive()
    }
}

/// Lazy unary elementwise view over a grid.
pub struct MapGrid<'a, G, F>
{
    base: &'a G,
    f: F,
}

/// Create a lazy view applying `f` to every element of `base`.
pub fn map_grid<'a, G, F>(base: &'a G, f: F) -> MapGrid<'a, G, F>
where G: Grid
{
    MapGrid { base, f }
}

impl<'a, G, F, O> Grid for MapGrid<'a, G, F>
where
    G: Grid,
    F: Fn(G::Elem) -> O,
    O: Clone,
{
    type Elem = O;

    fn nrows(&self) -> usize
    {
        self.base.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.base.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> O
    {
        (self.f)(self.base.get(row, col))
    }
}

/// Lazy binary elementwise view over two grid operands.
pub struct BinaryGrid<A, B, F>
{
    lhs: A,
    rhs: B,
    f: F,
    dim: (usize, usize),
}

/// Create a lazy binary elementwise grid view.
///
/// Returns an error when both operands are grids with different shapes, or
/// when neither operand is a grid.
pub fn zip_with_grid<A, B, F>(lhs: A, rhs: B, f: F) -> Result<BinaryGrid<A, B, F>, ArrayError>
where
    A: GridOperand,
    B: GridOperand,
{
    let dim = common_dim(&lhs, &rhs)?;
    Ok(BinaryGrid { lhs, rhs, f, dim })
}

impl<A, B, F, O> Grid for BinaryGrid<A, B, F>
where
    A: GridOperand,
    B: GridOperand,
    F: Fn(A::Elem, B::Elem) -> O,
    O: Clone,
{
    type Elem = O;

    fn nrows(&self) -> usize
    {
        self.dim.0
    }

    fn ncols(&self) -> usize
    {
        self.dim.1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> O
    {
        (self.f)(self.lhs.at(row, col), self.rhs.at(row, col))
    }
}

impl<A, B, F> fmt::Debug for BinaryGrid<A, B, F>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("BinaryGrid")
         .field("dim", &self.dim)
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::array::Array;
    use crate::error::ErrorKind;

    #[test]
    fn zip_with_checks_length_at_construction()
    {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![1, 2]);
        let err = zip_with(&a, &b, |x: i32, y: i32| x + y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
    }

    #[test]
    fn scalar_operand_skips_length_check()
    {
        let a = Array::from_vec(vec![1, 2, 3]);
        let v = zip_with(&a, Scalar(10), |x, y| x + y).unwrap();
        assert_eq!(v.eval(), Array::from_vec(vec![11, 12, 13]));
    }

    #[test]
    fn map_composes_without_materializing()
    {
        let a = Array::from_vec(vec![1, 2, 3]);
        let doubled = map(&a, |x| x * 2);
        let plus_one = map(&doubled, |x| x + 1);
        assert_eq!(plus_one.eval(), Array::from_vec(vec![3, 5, 7]));
    }
}
