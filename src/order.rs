/// Iteration and layout order.
///
/// Order refers to how a linear sequence is translated into the two
/// dimensions of a matrix, either when laying it out in memory or when
/// walking it with an iterator.
///
/// - `RowMajor` means that the column index is the most rapidly changing
/// - `ColumnMajor` means that the row index is the most rapidly changing
///
/// Given the sequence 1, 2, 3, 4, 5, 6 and a 2 x 3 matrix, row major
/// ordering fills the rows first:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// ```
///
/// while column major ordering fills the columns first:
///
/// ```text
/// 1  3  5
/// 2  4  6
/// ```
///
/// Row major is also called "C" order and column major "F" (for Fortran)
/// order. Owning matrices are always stored row major; the order parameter
/// of iterators and flattening views is independent of storage order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Order
{
    /// Row major or "C" order
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order
{
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool
    {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// Return true if input is Order::ColumnMajor, false otherwise
    #[inline]
    pub fn is_column_major(self) -> bool
    {
        !self.is_row_major()
    }

    /// Return Order::RowMajor if the input is true, Order::ColumnMajor otherwise
    #[inline]
    pub fn row_major(row_major: bool) -> Order
    {
        if row_major {
            Order::RowMajor
        } else {
            Order::ColumnMajor
        }
    }

    /// Return Order::ColumnMajor if the input is true, Order::RowMajor otherwise
    #[inline]
    pub fn column_major(column_major: bool) -> Order
    {
        Self::row_major(!column_major)
    }

    /// Return the transpose: row major becomes column major and vice versa.
    #[inline]
    pub fn transpose(self) -> Order
    {
        match self {
            Order::RowMajor => Order::ColumnMajor,
            Order::ColumnMajor => Order::RowMajor,
        }
    }
}
