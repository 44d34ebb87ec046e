//! Iterators over sequences and grids.
//!
//! Both are cursors over a flat index into the container, so they are cheap
//! to advance by arbitrary offsets (`nth` is O(1)) and can walk any
//! container that satisfies the access contract, lazy or not. The grid
//! iterator carries the traversal order chosen at construction; the
//! (row, column) position is recomputed from the flat index on demand, which
//! is what lets the same container be walked in either order without
//! copying.

use std::iter::FusedIterator;

use crate::order::Order;
use crate::traits::{Grid, Sequence};

/// An iterator over the elements of a one-dimensional container.
///
/// Iterator element type is `S::Elem`.
pub struct SeqIter<'a, S: Sequence>
{
    seq: &'a S,
    index: usize,
    back: usize,
}

impl<'a, S: Sequence> SeqIter<'a, S>
{
    pub(crate) fn new(seq: &'a S) -> Self
    {
        SeqIter {
            seq,
            index: 0,
            back: seq.len(),
        }
    }
}

impl<'a, S: Sequence> Iterator for SeqIter<'a, S>
{
    type Item = S::Elem;

    #[inline]
    fn next(&mut self) -> Option<S::Elem>
    {
        if self.index < self.back {
            let elt = self.seq.get(self.index);
            self.index += 1;
            Some(elt)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let n = self.back - self.index;
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<S::Elem>
    {
        self.index = match self.index.checked_add(n) {
            Some(i) if i < self.back => i,
            _ => self.back,
        };
        self.next()
    }
}

impl<'a, S: Sequence> DoubleEndedIterator for SeqIter<'a, S>
{
    #[inline]
    fn next_back(&mut self) -> Option<S::Elem>
    {
        if self.index < self.back {
            self.back -= 1;
            Some(self.seq.get(self.back))
        } else {
            None
        }
    }
}

impl<'a, S: Sequence> ExactSizeIterator for SeqIter<'a, S> {}
impl<'a, S: Sequence> FusedIterator for SeqIter<'a, S> {}

impl<'a, S: Sequence> Clone for SeqIter<'a, S>
{
    fn clone(&self) -> Self
    {
        SeqIter { ..*self }
    }
}

/// An iterator over the elements of a two-dimensional container in a fixed
/// traversal order.
///
/// Iterator element type is `G::Elem`.
pub struct GridIter<'a, G: Grid>
{
    grid: &'a G,
    order: Order,
    index: usize,
    back: usize,
}

impl<'a, G: Grid> GridIter<'a, G>
{
    pub(crate) fn new(grid: &'a G, order: Order) -> Self
    {
        GridIter {
            grid,
            order,
            index: 0,
            back: grid.size(),
        }
    }

    #[inline]
    fn coords(&self, flat: usize) -> (usize, usize)
    {
        match self.order {
            Order::RowMajor => (flat / self.grid.ncols(), flat % self.grid.ncols()),
            Order::ColumnMajor => (flat % self.grid.nrows(), flat / self.grid.nrows()),
        }
    }

    /// The traversal order fixed at construction.
    #[inline]
    pub fn order(&self) -> Order
    {
        self.order
    }

    /// Row of the element the iterator will yield next.
    ///
    /// **Panics** if the iterator is exhausted or the grid is empty.
    pub fn row(&self) -> usize
    {
        assert!(self.index < self.back, "iterator exhausted");
        self.coords(self.index).0
    }

    /// Column of the element the iterator will yield next.
    ///
    /// **Panics** if the iterator is exhausted or the grid is empty.
    pub fn col(&self) -> usize
    {
        assert!(self.index < self.back, "iterator exhausted");
        self.coords(self.index).1
    }
}

impl<'a, G: Grid> Iterator for GridIter<'a, G>
{
    type Item = G::Elem;

    #[inline]
    fn next(&mut self) -> Option<G::Elem>
    {
        if self.index < self.back {
            let (r, c) = self.coords(self.index);
            self.index += 1;
            Some(self.grid.get(r, c))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let n = self.back - self.index;
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<G::Elem>
    {
        self.index = match self.index.checked_add(n) {
            Some(i) if i < self.back => i,
            _ => self.back,
        };
        self.next()
    }
}

impl<'a, G: Grid> DoubleEndedIterator for GridIter<'a, G>
{
    #[inline]
    fn next_back(&mut self) -> Option<G::Elem>
    {
        if self.index < self.back {
            self.back -= 1;
            let (r, c) = self.coords(self.back);
            Some(self.grid.get(r, c))
        } else {
            None
        }
    }
}

impl<'a, G: Grid> ExactSizeIterator for GridIter<'a, G> {}
impl<'a, G: Grid> FusedIterator for GridIter<'a, G> {}

impl<'a, G: Grid> Clone for GridIter<'a, G>
{
    fn clone(&self) -> Self
    {
        GridIter { ..*self }
    }
}
