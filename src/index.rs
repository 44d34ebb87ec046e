//! Index types and flat/coordinate index conversion.

use crate::error::{out_of_bounds, ArrayError};
use crate::order::Order;

/// Array index type
pub type Ix = usize;

/// An axis of a two-dimensional container.
///
/// `Axis(0)` is the row axis and `Axis(1)` the column axis. Reducing along
/// `Axis(0)` collapses the rows and produces one value per column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Axis(pub usize);

impl Axis
{
    /// Return the index of the axis.
    #[inline(always)]
    pub fn index(self) -> usize
    {
        self.0
    }
}

/// Convert a (row, column) pair into a flat index for a matrix of the given
/// shape, under the given order convention.
///
/// This is pure arithmetic; no container is involved. Returns an error when
/// the coordinate lies outside the shape.
pub fn ravel_index(index: (Ix, Ix), dim: (Ix, Ix), order: Order) -> Result<Ix, ArrayError>
{
    let (row, col) = index;
    let (nrows, ncols) = dim;
    if row >= nrows || col >= ncols {
        return Err(out_of_bounds(format!("index ({}, {}) for shape ({}, {})", row, col, nrows, ncols)));
    }
    Ok(match order {
        Order::RowMajor => row * ncols + col,
        Order::ColumnMajor => col * nrows + row,
    })
}

/// Convert a flat index back into a (row, column) pair for a matrix of the
/// given shape, under the given order convention.
///
/// Returns an error when the flat index is not smaller than `nrows * ncols`.
pub fn unravel_index(index: Ix, dim: (Ix, Ix), order: Order) -> Result<(Ix, Ix), ArrayError>
{
    let (nrows, ncols) = dim;
    if index >= nrows * ncols {
        return Err(out_of_bounds(format!("flat index {} for shape ({}, {})", index, nrows, ncols)));
    }
    Ok(match order {
        Order::RowMajor => (index / ncols, index % ncols),
        Order::ColumnMajor => (index % nrows, index / nrows),
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ravel_unravel_row_major()
    {
        let dim = (2, 3);
        for flat in 0..6 {
            let rc = unravel_index(flat, dim, Order::RowMajor).unwrap();
            assert_eq!(ravel_index(rc, dim, Order::RowMajor).unwrap(), flat);
        }
        assert_eq!(ravel_index((1, 2), dim, Order::RowMajor).unwrap(), 5);
    }

    #[test]
    fn ravel_unravel_column_major()
    {
        let dim = (2, 3);
        assert_eq!(ravel_index((1, 2), dim, Order::ColumnMajor).unwrap(), 5);
        assert_eq!(unravel_index(1, dim, Order::ColumnMajor).unwrap(), (1, 0));
    }

    #[test]
    fn out_of_range_is_an_error()
    {
        assert!(ravel_index((2, 0), (2, 3), Order::RowMajor).is_err());
        assert!(unravel_index(6, (2, 3), Order::F).is_err());
    }
}
