//! Non-owning views over external memory.
//!
//! Views are read-write where the memory they borrow is mutable; unlike the
//! lazy views they are addressable (reference-returning access) because
//! every element exists in storage somewhere.

use std::borrow::Cow;
use std::ops::{Index, IndexMut};

use crate::error::{out_of_bounds, ArrayError};
use crate::index::Ix;
use crate::order::Order;
use crate::traits::{Grid, Sequence};

/// A read-only view of external memory with offset and stride.
#[derive(Copy, Clone, Debug)]
pub struct ArrayView<'a, T>
{
    data: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

fn check_1d_extent<T>(data: &[T], offset: usize, stride: usize, len: usize) -> Result<(), ArrayError>
{
    if len == 0 {
        return Ok(());
    }
    let last = offset + (len - 1) * stride;
    if last >= data.len() {
        return Err(out_of_bounds(format!("view extent {} for buffer length {}", last, data.len())));
    }
    Ok(())
}

impl<'a, T> ArrayView<'a, T>
{
    /// Create a strided view into a slice.
    ///
    /// Element `i` of the view is `data[offset + i * stride]`. Returns an
    /// error when the last element would fall outside the slice.
    pub fn new(data: &'a [T], offset: usize, stride: usize, len: usize) -> Result<Self, ArrayError>
    {
        check_1d_extent(data, offset, stride, len)?;
        Ok(ArrayView { data, offset, stride, len })
    }

    /// View of a whole slice, stride 1.
    pub fn full(data: &'a [T]) -> Self
    {
        ArrayView {
            data,
            offset: 0,
            stride: 1,
            len: data.len(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Return true if the view has no elements.
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// The stride between consecutive view elements.
    pub fn stride(&self) -> usize
    {
        self.stride
    }
}

impl<'a, T: Clone> Sequence for ArrayView<'a, T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.len
    }

    fn get(&self, index: usize) -> T
    {
        assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        self.data[self.offset + index * self.stride].clone()
    }
}

impl<'a, T> Index<usize> for ArrayView<'a, T>
{
    type Output = T;

    fn index(&self, index: usize) -> &T
    {
        assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        &self.data[self.offset + index * self.stride]
    }
}

/// A read-write view of external memory with offset and stride.
#[derive(Debug)]
pub struct ArrayViewMut<'a, T>
{
    data: &'a mut [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> ArrayViewMut<'a, T>
{
    /// Create a mutable strided view into a slice.
    ///
    /// Returns an error when the last element would fall outside the slice.
    pub fn new(data: &'a mut [T], offset: usize, stride: usize, len: usize) -> Result<Self, ArrayError>
    {
        check_1d_extent(data, offset, stride, len)?;
        Ok(ArrayViewMut { data, offset, stride, len })
    }

    /// Mutable view of a whole slice, stride 1.
    pub fn full(data: &'a mut [T]) -> Self
    {
        let len = data.len();
        ArrayViewMut {
            data,
            offset: 0,
            stride: 1,
            len,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Return true if the view has no elements.
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Overwrite the element at `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T)
    {
        self[index] = value;
    }
}

impl<'a, T: Clone> Sequence for ArrayViewMut<'a, T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.len
    }

    fn get(&self, index: usize) -> T
    {
        assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        self.data[self.offset + index * self.stride].clone()
    }
}

impl<'a, T> Index<usize> for ArrayViewMut<'a, T>
{
    type Output = T;

    fn index(&self, index: usize) -> &T
    {
        assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        &self.data[self.offset + index * self.stride]
    }
}

impl<'a, T> IndexMut<usize> for ArrayViewMut<'a, T>
{
    fn index_mut(&mut self, index: usize) -> &mut T
    {
        assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        &mut self.data[self.offset + index * self.stride]
    }
}

/// A read-only two-dimensional view of external memory.
///
/// The external buffer may be laid out row major or column major; the order
/// flag together with the leading dimension determines the per-axis
/// strides.
#[derive(Copy, Clone, Debug)]
pub struct MatrixView<'a, T>
{
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    offset: usize,
    row_stride: usize,
    col_stride: usize,
    order: Order,
}

impl<'a, T> MatrixView<'a, T>
{
    fn checked(data: &'a [T],
               dim: (Ix, Ix),
               offset: usize,
               row_stride: usize,
               col_stride: usize,
               order: Order)
               -> Result<Self, ArrayError>
    {
        let (nrows, ncols) = dim;
        if nrows > 0 && ncols > 0 {
            let last = offset + (nrows - 1) * row_stride + (ncols - 1) * col_stride;
            if last >= data.len() {
                return Err(out_of_bounds(format!("view extent {} for buffer length {}", last, data.len())));
            }
        }
        Ok(MatrixView {
            data,
            nrows,
            ncols,
            offset,
            row_stride,
            col_stride,
            order,
        })
    }

    /// View a row-major buffer with leading dimension `ld` (the distance
    /// between the starts of consecutive rows).
    pub fn row_major(data: &'a [T], dim: (Ix, Ix), offset: usize, ld: usize) -> Result<Self, ArrayError>
    {
        Self::checked(data, dim, offset, ld, 1, Order::RowMajor)
    }

    /// View a column-major buffer with leading dimension `ld` (the distance
    /// between the starts of consecutive columns).
    pub fn column_major(data: &'a [T], dim: (Ix, Ix), offset: usize, ld: usize) -> Result<Self, ArrayError>
    {
        Self::checked(data, dim, offset, 1, ld, Order::ColumnMajor)
    }

    /// The layout order of the underlying buffer.
    pub fn order(&self) -> Order
    {
        self.order
    }
}

impl<'a, T: Clone> Grid for MatrixView<'a, T>
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
        self.data[self.offset + row * self.row_stride + col * self.col_stride].clone()
    }
}

impl<'a, T> Index<(Ix, Ix)> for MatrixView<'a, T>
{
    type Output = T;

    fn index(&self, (row, col): (Ix, Ix)) -> &T
    {
        assert!(row < self.nrows && col < self.ncols,
                "index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.nrows, self.ncols);
        &self.data[self.offset + row * self.row_stride + col * self.col_stride]
    }
}

fn check_indices<T>(data: &[T], indices: &[Ix]) -> Result<(), ArrayError>
{
    for &ix in indices {
        if ix >= data.len() {
            return Err(out_of_bounds(format!("index {} for buffer length {}", ix, data.len())));
        }
    }
    Ok(())
}

/// A view selecting elements of a buffer through an explicit index list.
///
/// The index list is either borrowed or owned (`Cow`); passing an owned
/// vector covers both the copying and the adopting construction, borrowing
/// covers the referencing one.
#[derive(Clone, Debug)]
pub struct IndexView<'a, T>
{
    data: &'a [T],
    indices: Cow<'a, [Ix]>,
}

impl<'a, T> IndexView<'a, T>
{
    /// Create an index view borrowing the index list.
    ///
    /// Returns an error when any index is out of bounds for `data`.
    pub fn borrowed(data: &'a [T], indices: &'a [Ix]) -> Result<Self, ArrayError>
    {
        check_indices(data, indices)?;
        Ok(IndexView { data, indices: Cow::Borrowed(indices) })
    }

    /// Create an index view that owns its index list.
    ///
    /// Returns an error when any index is out of bounds for `data`.
    pub fn owned(data: &'a [T], indices: Vec<Ix>) -> Result<Self, ArrayError>
    {
        check_indices(data, &indices)?;
        Ok(IndexView { data, indices: Cow::Owned(indices) })
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize
    {
        self.indices.len()
    }

    /// Return true if no elements are selected.
    pub fn is_empty(&self) -> bool
    {
        self.indices.is_empty()
    }
}

impl<'a, T: Clone> Sequence for IndexView<'a, T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.indices.len()
    }

    fn get(&self, index: usize) -> T
    {
        self.data[self.indices[index]].clone()
    }
}

impl<'a, T> Index<usize> for IndexView<'a, T>
{
    type Output = T;

    fn index(&self, index: usize) -> &T
    {
        &self.data[self.indices[index]]
    }
}

/// A mutable view selecting elements of a buffer through an explicit index
/// list.
#[derive(Debug)]
pub struct IndexViewMut<'a, T>
{
    data: &'a mut [T],
    indices: Cow<'a, [Ix]>,
}

impl<'a, T> IndexViewMut<'a, T>
{
    /// Create a mutable index view borrowing the index list.
    ///
    /// Returns an error when any index is out of bounds for `data`.
    pub fn borrowed(data: &'a mut [T], indices: &'a [Ix]) -> Result<Self, ArrayError>
    {
        check_indices(data, indices)?;
        Ok(IndexViewMut { data, indices: Cow::Borrowed(indices) })
    }

    /// Create a mutable index view that owns its index list.
    ///
    /// Returns an error when any index is out of bounds for `data`.
    pub fn owned(data: &'a mut [T], indices: Vec<Ix>) -> Result<Self, ArrayError>
    {
        check_indices(data, &indices)?;
        Ok(IndexViewMut { data, indices: Cow::Owned(indices) })
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize
    {
        self.indices.len()
    }

    /// Return true if no elements are selected.
    pub fn is_empty(&self) -> bool
    {
        self.indices.is_empty()
    }

    /// Overwrite the selected element at `index`.
    ///
    /// **Panics** if `index` is out of bounds for the index list.
    pub fn set(&mut self, index: usize, value: T)
    {
        self.data[self.indices[index]] = value;
    }
}

impl<'a, T: Clone> Sequence for IndexViewMut<'a, T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.indices.len()
    }

    fn get(&self, index: usize) -> T
    {
        self.data[self.indices[index]].clone()
    }
}
