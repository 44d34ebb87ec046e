//! The uniform access contracts shared by owning containers, non-owning
//! views and lazy views.
//!
//! Every one-dimensional container implements [`Sequence`], every
//! two-dimensional container implements [`Grid`]. Element access is
//! value-returning: a lazy view computes the element on demand, an owning
//! container or view clones it out of storage. Containers that are
//! addressable additionally expose reference access through `Index` /
//! `IndexMut`; the absence of those impls is what marks a lazy view as
//! read-only.

use crate::array::Array;
use crate::iterators::{GridIter, SeqIter};
use crate::matrix::Matrix;
use crate::order::Order;

/// A one-dimensional container: a length and value-returning element access.
///
/// The trait is object safe; `&dyn Sequence<Elem = T>` is used by the
/// concatenation view to hold a runtime-sized list of operands.
pub trait Sequence
{
    /// Element type produced by `get`.
    type Elem: Clone;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Compute or fetch the element at `index`.
    ///
    /// **Panics** if `index` is out of bounds for addressable containers;
    /// lazy views computed from already validated operands may skip the
    /// check and produce an unspecified value instead.
    fn get(&self, index: usize) -> Self::Elem;

    /// Return true if the sequence has no elements.
    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Iterate over all elements in order.
    fn iter(&self) -> SeqIter<'_, Self>
    where Self: Sized
    {
        SeqIter::new(self)
    }

    /// Materialize into a fresh owning [`Array`].
    fn eval(&self) -> Array<Self::Elem>
    where Self: Sized
    {
        Array::from_seq(self)
    }
}

/// A two-dimensional container: a shape and value-returning element access.
///
/// Iteration order (row major or column major) is chosen by the caller at
/// `iter` time and is independent of how the elements are stored.
pub trait Grid
{
    /// Element type produced by `get`.
    type Elem: Clone;

    /// Number of rows.
    fn nrows(&self) -> usize;

    /// Number of columns.
    fn ncols(&self) -> usize;

    /// Shape as a `(rows, columns)` pair.
    fn dim(&self) -> (usize, usize)
    {
        (self.nrows(), self.ncols())
    }

    /// Total number of elements.
    fn size(&self) -> usize
    {
        self.nrows() * self.ncols()
    }

    /// Return true if the grid has no elements.
    fn is_empty(&self) -> bool
    {
        self.size() == 0
    }

    /// Compute or fetch the element at `(row, col)`.
    ///
    /// **Panics** if the coordinate is out of bounds for addressable
    /// containers; lazy views may skip the check.
    fn get(&self, row: usize, col: usize) -> Self::Elem;

    /// Iterate over all elements in the given order.
    fn iter(&self, order: Order) -> GridIter<'_, Self>
    where Self: Sized
    {
        GridIter::new(self, order)
    }

    /// Materialize into a fresh owning [`Matrix`] (stored row major).
    fn eval(&self) -> Matrix<Self::Elem>
    where Self: Sized
    {
        Matrix::from_grid(self)
    }
}

impl<T: Clone> Sequence for Vec<T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> T
    {
        self[index].clone()
    }
}

impl<T: Clone> Sequence for [T]
{
    type Elem = T;

    fn len(&self) -> usize
    {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> T
    {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N]
{
    type Elem = T;

    fn len(&self) -> usize
    {
        N
    }

    fn get(&self, index: usize) -> T
    {
        self[index].clone()
    }
}
