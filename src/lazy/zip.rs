//! Lazy pairing, component projection and grid flattening.

use crate::error::{mismatch_1d, mismatch_2d, ArrayError};
use crate::order::Order;
use crate::traits::{Grid, Sequence};

/// Lazy elementwise pairing of two sequences into pair-valued elements.
pub struct Zipped<'a, A, B>
{
    lhs: &'a A,
    rhs: &'a B,
}

/// Create a lazy view whose element `i` is `(lhs[i], rhs[i])`.
///
/// Returns an error when the operand lengths differ.
pub fn zip<'a, A, B>(lhs: &'a A, rhs: &'a B) -> Result<Zipped<'a, A, B>, ArrayError>
where
    A: Sequence,
    B: Sequence,
{
    if lhs.len() != rhs.len() {
        return Err(mismatch_1d(lhs.len(), rhs.len()));
    }
    Ok(Zipped { lhs, rhs })
}

impl<'a, A, B> Sequence for Zipped<'a, A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Elem = (A::Elem, B::Elem);

    fn len(&self) -> usize
    {
        self.lhs.len()
    }

    #[inline]
    fn get(&self, index: usize) -> (A::Elem, B::Elem)
    {
        (self.lhs.get(index), self.rhs.get(index))
    }
}

/// Lazy elementwise pairing of two grids.
pub struct ZippedGrid<'a, A, B>
{
    lhs: &'a A,
    rhs: &'a B,
}

/// Create a lazy grid whose element `(i, j)` is `(lhs[(i, j)], rhs[(i, j)])`.
///
/// Returns an error when the operand shapes differ.
pub fn zip_grid<'a, A, B>(lhs: &'a A, rhs: &'a B) -> Result<ZippedGrid<'a, A, B>, ArrayError>
where
    A: Grid,
    B: Grid,
{
    if lhs.dim() != rhs.dim() {
        return Err(mismatch_2d(lhs.dim(), rhs.dim()));
    }
    Ok(ZippedGrid { lhs, rhs })
}

impl<'a, A, B> Grid for ZippedGrid<'a, A, B>
where
    A: Grid,
    B: Grid,
{
    type Elem = (A::Elem, B::Elem);

    fn nrows(&self) -> usize
    {
        self.lhs.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.lhs.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> (A::Elem, B::Elem)
    {
        (self.lhs.get(row, col), self.rhs.get(row, col))
    }
}

/// Lazy projection of the first component of a pair-valued sequence.
pub struct First<'a, S>
{
    base: &'a S,
}

/// Lazy projection of the second component of a pair-valued sequence.
pub struct Second<'a, S>
{
    base: &'a S,
}

/// Split a pair-valued sequence into lazy views of its two components.
pub fn unzip<S, X, Y>(base: &S) -> (First<'_, S>, Second<'_, S>)
where
    S: Sequence<Elem = (X, Y)>,
    X: Clone,
    Y: Clone,
{
    (First { base }, Second { base })
}

impl<'a, S, X, Y> Sequence for First<'a, S>
where
    S: Sequence<Elem = (X, Y)>,
    X: Clone,
    Y: Clone,
{
    type Elem = X;

    fn len(&self) -> usize
    {
        self.base.len()
    }

    #[inline]
    fn get(&self, index: usize) -> X
    {
        self.base.get(index).0
    }
}

impl<'a, S, X, Y> Sequence for Second<'a, S>
where
    S: Sequence<Elem = (X, Y)>,
    X: Clone,
    Y: Clone,
{
    type Elem = Y;

    fn len(&self) -> usize
    {
        self.base.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Y
    {
        self.base.get(index).1
    }
}

/// Lazy reinterpretation of a grid as a sequence in a fixed order.
///
/// No elements are copied; the flat index is converted back into a
/// coordinate on every access.
pub struct Flattened<'a, G>
{
    base: &'a G,
    order: Order,
}

/// View `base` as a one-dimensional sequence in the given order.
pub fn flatten<G: Grid>(base: &G, order: Order) -> Flattened<'_, G>
{
    Flattened { base, order }
}

impl<'a, G: Grid> Sequence for Flattened<'a, G>
{
    type Elem = G::Elem;

    fn len(&self) -> usize
    {
        self.base.size()
    }

    #[inline]
    fn get(&self, index: usize) -> G::Elem
    {
        let (row, col) = match self.order {
            Order::RowMajor => (index / self.base.ncols(), index % self.base.ncols()),
            Order::ColumnMajor => (index % self.base.nrows(), index / self.base.nrows()),
        };
        self.base.get(row, col)
    }
}
