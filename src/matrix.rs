//! The owning two-dimensional container.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{mismatch_1d, out_of_bounds, with_detail, ArrayError, ErrorKind};
use crate::index::Ix;
use crate::order::Order;
use crate::traits::{Grid, Sequence};
use crate::views::{ArrayView, MatrixView};

/// A two-dimensional container that owns a contiguous buffer of elements.
///
/// Storage is always row major; iteration order is a separate, per-call
/// choice (see [`Grid::iter`]). `Matrix` is the materialization target of
/// every lazy grid view.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Matrix<T>
{
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T> Matrix<T>
{
    /// Create a matrix of the given shape from a row-major vector.
    ///
    /// Returns an error when `data.len() != nrows * ncols`.
    pub fn from_vec(dim: (Ix, Ix), data: Vec<T>) -> Result<Self, ArrayError>
    {
        let (nrows, ncols) = dim;
        if data.len() != nrows * ncols {
            return Err(with_detail(ErrorKind::IncompatibleShapes,
                                   format!("{} elements for shape ({}, {})", data.len(), nrows, ncols)));
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize
    {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize
    {
        self.ncols
    }

    /// Shape as a `(rows, columns)` pair.
    pub fn dim(&self) -> (Ix, Ix)
    {
        (self.nrows, self.ncols)
    }

    /// Return the elements as a row-major slice.
    pub fn as_slice(&self) -> &[T]
    {
        &self.data
    }

    /// Return the elements as a mutable row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T]
    {
        &mut self.data
    }

    /// Move the elements out as a row-major vector (no copying).
    pub fn into_vec(self) -> Vec<T>
    {
        self.data
    }

    /// Reference to the element at `(row, col)`, or an error when out of
    /// bounds.
    pub fn get_checked(&self, row: usize, col: usize) -> Result<&T, ArrayError>
    {
        if row >= self.nrows || col >= self.ncols {
            return Err(out_of_bounds(format!("index ({}, {}) for shape ({}, {})",
                                             row, col, self.nrows, self.ncols)));
        }
        Ok(&self.data[row * self.ncols + col])
    }

    /// A non-owning view of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row(&self, index: usize) -> ArrayView<'_, T>
    {
        assert!(index < self.nrows,
                "row index {} out of bounds for {} rows", index, self.nrows);
        ArrayView::new(&self.data, index * self.ncols, 1, self.ncols)
            .unwrap_or_else(|e| panic!("ndlazy: internal error: {}", e))
    }

    /// A non-owning view of column `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column(&self, index: usize) -> ArrayView<'_, T>
    {
        assert!(index < self.ncols,
                "column index {} out of bounds for {} columns", index, self.ncols);
        ArrayView::new(&self.data, index, self.ncols, self.nrows)
            .unwrap_or_else(|e| panic!("ndlazy: internal error: {}", e))
    }

    /// A non-owning view of the whole matrix.
    pub fn view(&self) -> MatrixView<'_, T>
    {
        MatrixView::row_major(&self.data, self.dim(), 0, self.ncols)
            .unwrap_or_else(|e| panic!("ndlazy: internal error: {}", e))
    }
}

impl<T: Clone> Matrix<T>
{
    /// Create a matrix of shape `dim` with every element set to `elem`.
    pub fn from_elem(dim: (Ix, Ix), elem: T) -> Self
    {
        let (nrows, ncols) = dim;
        Matrix {
            data: vec![elem; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a list of rows.
    ///
    /// Returns an error when the row lengths differ.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ArrayError>
    {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(mismatch_1d(ncols, row.len()));
            }
            data.extend(row);
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Materialize any grid, lazy or not, into an owning row-major matrix.
    pub fn from_grid<G>(grid: &G) -> Self
    where G: Grid<Elem = T> + ?Sized
    {
        let (nrows, ncols) = (grid.nrows(), grid.ncols());
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(grid.get(i, j));
            }
        }
        Matrix { data, nrows, ncols }
    }

    /// Build a matrix of the given shape by laying out a sequence in the
    /// given order.
    ///
    /// Returns an error when the sequence length does not equal
    /// `nrows * ncols`.
    pub fn from_seq<S>(seq: &S, dim: (Ix, Ix), order: Order) -> Result<Self, ArrayError>
    where S: Sequence<Elem = T>
    {
        let (nrows, ncols) = dim;
        if seq.len() != nrows * ncols {
            return Err(with_detail(ErrorKind::IncompatibleShapes,
                                   format!("{} elements for shape ({}, {})", seq.len(), nrows, ncols)));
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                let flat = match order {
                    Order::RowMajor => i * ncols + j,
                    Order::ColumnMajor => j * nrows + i,
                };
                data.push(seq.get(flat));
            }
        }
        Ok(Matrix { data, nrows, ncols })
    }
}

impl<T: Clone + Zero> Matrix<T>
{
    /// Create a matrix of zeros.
    pub fn zeros(dim: (Ix, Ix)) -> Self
    {
        Self::from_elem(dim, T::zero())
    }
}

impl<T: Clone + One> Matrix<T>
{
    /// Create a matrix of ones.
    pub fn ones(dim: (Ix, Ix)) -> Self
    {
        Self::from_elem(dim, T::one())
    }
}

impl<T: Clone> Grid for Matrix<T>
{
    type Elem = T;

    fn nrows(&self) -> usize
    {
        self.nrows
    }

    fn ncols(&self) -> usize
    {
        self.ncols
    }

    fn get(&self, row: usize, col: usize) -> T
    {
        assert!(row < self.nrows && col < self.ncols,
                "index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.nrows, self.ncols);
        self.data[row * self.ncols + col].clone()
    }
}

impl<T> Index<(Ix, Ix)> for Matrix<T>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (Ix, Ix)) -> &T
    {
        assert!(row < self.nrows && col < self.ncols,
                "index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.nrows, self.ncols);
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(Ix, Ix)> for Matrix<T>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (Ix, Ix)) -> &mut T
    {
        assert!(row < self.nrows && col < self.ncols,
                "index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.nrows, self.ncols);
        &mut self.data[row * self.ncols + col]
    }
}

// Debug prints one list per row, like a nested vector.
impl<T: fmt::Debug> fmt::Debug for Matrix<T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let mut list = f.debug_list();
        for i in 0..self.nrows {
            list.entry(&&self.data[i * self.ncols..(i + 1) * self.ncols]);
        }
        list.finish()
    }
}
