//! Lazy concatenation and stacking of a runtime-sized list of operands.
//!
//! The operands are held as trait objects with a prefix sum of their
//! extents along the join axis; element access binary-searches the prefix
//! sum to find the owning operand and its local index.

use std::fmt;

use crate::error::{invalid_parameter, mismatch_2d, ArrayError};
use crate::index::Axis;
use crate::traits::{Grid, Sequence};

/// Lazy concatenation of sequences.
pub struct Concat<'a, T>
{
    parts: Vec<&'a dyn Sequence<Elem = T>>,
    ends: Vec<usize>,
}

/// Create a lazy view of the given sequences joined end to end.
///
/// The total length is the sum of the operand lengths.
pub fn concatenate<'a, T: Clone>(parts: &[&'a dyn Sequence<Elem = T>]) -> Concat<'a, T>
{
    let mut ends = Vec::with_capacity(parts.len());
    let mut total = 0;
    for part in parts {
        total += part.len();
        ends.push(total);
    }
    Concat { parts: parts.to_vec(), ends }
}

impl<'a, T: Clone> Sequence for Concat<'a, T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.ends.last().copied().unwrap_or(0)
    }

    fn get(&self, index: usize) -> T
    {
        let part = self.ends.partition_point(|&end| end <= index);
        assert!(part < self.parts.len(),
                "index {} out of bounds for length {}", index, self.len());
        let start = if part == 0 { 0 } else { self.ends[part - 1] };
        self.parts[part].get(index - start)
    }
}

impl<'a, T> fmt::Debug for Concat<'a, T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Concat")
         .field("parts", &self.parts.len())
         .field("ends", &self.ends)
         .finish_non_exhaustive()
    }
}

/// Lazy stacking of grids along one axis.
pub struct Stacked<'a, T>
{
    parts: Vec<&'a dyn Grid<Elem = T>>,
    axis: Axis,
    ends: Vec<usize>,
    other: usize,
}

/// Create a lazy view of the given grids stacked along `axis`.
///
/// The extents along the join axis are summed; all other extents must
/// agree. Returns an error naming the mismatched shapes otherwise, or when
/// the operand list is empty or the axis is not 0 or 1.
pub fn stack<'a, T: Clone>(parts: &[&'a dyn Grid<Elem = T>], axis: Axis) -> Result<Stacked<'a, T>, ArrayError>
{
    if axis.index() > 1 {
        return Err(invalid_parameter("axis must be 0 or 1 for a grid"));
    }
    let first = match parts.first() {
        Some(first) => first,
        None => return Err(invalid_parameter("need at least one operand to stack")),
    };
    let other = if axis == Axis(0) { first.ncols() } else { first.nrows() };
    let mut ends = Vec::with_capacity(parts.len());
    let mut total = 0;
    for part in parts {
        let (join, off) = if axis == Axis(0) {
            (part.nrows(), part.ncols())
        } else {
            (part.ncols(), part.nrows())
        };
        if off != other {
            return Err(mismatch_2d(first.dim(), part.dim()));
        }
        total += join;
        ends.push(total);
    }
    Ok(Stacked {
        parts: parts.to_vec(),
        axis,
        ends,
        other,
    })
}

/// Stack grids on top of each other (join along the row axis).
pub fn vstack<'a, T: Clone>(parts: &[&'a dyn Grid<Elem = T>]) -> Result<Stacked<'a, T>, ArrayError>
{
    stack(parts, Axis(0))
}

/// Stack grids side by side (join along the column axis).
pub fn hstack<'a, T: Clone>(parts: &[&'a dyn Grid<Elem = T>]) -> Result<Stacked<'a, T>, ArrayError>
{
    stack(parts, Axis(1))
}

impl<'a, T: Clone> Stacked<'a, T>
{
    fn joined(&self) -> usize
    {
        self.ends.last().copied().unwrap_or(0)
    }
}

impl<'a, T> fmt::Debug for Stacked<'a, T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Stacked")
         .field("axis", &self.axis)
         .field("parts", &self.parts.len())
         .field("ends", &self.ends)
         .finish_non_exhaustive()
    }
}

impl<'a, T: Clone> Grid for Stacked<'a, T>
{
    type Elem = T;

    fn nrows(&self) -> usize
    {
        if self.axis == Axis(0) {
            self.joined()
        } else {
            self.other
        }
    }

    fn ncols(&self) -> usize
    {
        if self.axis == Axis(0) {
            self.other
        } else {
            self.joined()
        }
    }

    fn get(&self, row: usize, col: usize) -> T
    {
        let along = if self.axis == Axis(0) { row } else { col };
        let part = self.ends.partition_point(|&end| end <= along);
        assert!(part < self.parts.len(),
                "index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.nrows(), self.ncols());
        let start = if part == 0 { 0 } else { self.ends[part - 1] };
        if self.axis == Axis(0) {
            self.parts[part].get(row - start, col)
        } else {
            self.parts[part].get(row, col - start)
        }
    }
}

/// Adapter presenting a sequence as a grid with a single row, so that a
/// one-dimensional operand can take part in [`vstack`].
pub struct RowGrid<'a, S>
{
    base: &'a S,
}

/// View `base` as a `1 x len` grid.
pub fn row_grid<S: Sequence>(base: &S) -> RowGrid<'_, S>
{
    RowGrid { base }
}

impl<'a, S: Sequence> Grid for RowGrid<'a, S>
{
    type Elem = S::Elem;

    fn nrows(&self) -> usize
    {
        1
    }

    fn ncols(&self) -> usize
    {
        self.base.len()
    }

    #[inline]
    fn get(&self, _row: usize, col: usize) -> S::Elem
    {
        self.base.get(col)
    }
}

/// Adapter presenting a sequence as a grid with a single column, so that a
/// one-dimensional operand can take part in [`hstack`].
pub struct ColGrid<'a, S>
{
    base: &'a S,
}

/// View `base` as a `len x 1` grid.
pub fn col_grid<S: Sequence>(base: &S) -> ColGrid<'_, S>
{
    ColGrid { base }
}

impl<'a, S: Sequence> Grid for ColGrid<'a, S>
{
    type Elem = S::Elem;

    fn nrows(&self) -> usize
    {
        self.base.len()
    }

    fn ncols(&self) -> usize
    {
        1
    }

    #[inline]
    fn get(&self, row: usize, _col: usize) -> S::Elem
    {
        self.base.get(row)
    }
}
