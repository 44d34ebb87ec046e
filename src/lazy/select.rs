//! Lazy elementwise selection between two value sources driven by a
//! boolean condition.

use std::fmt;

use crate::error::{mismatch_1d, mismatch_2d, ArrayError};
use crate::lazy::map::{GridOperand, SeqOperand};
use crate::traits::{Grid, Sequence};

/// Lazy ternary view: element `i` is `when_true[i]` where the condition
/// holds and `when_false[i]` elsewhere.
///
/// Each value source is a [`SeqOperand`], so any combination of container
/// and bound scalar works; only the selected source is evaluated for a
/// given element.
pub struct Select<'a, C, A, B>
{
    cond: &'a C,
    when_true: A,
    when_false: B,
}

/// Create a lazy selection view.
///
/// Returns an error when a container value source does not match the
/// condition in length.
pub fn select<'a, C, A, B>(cond: &'a C, when_true: A, when_false: B) -> Result<Select<'a, C, A, B>, ArrayError>
where
    C: Sequence<Elem = bool>,
    A: SeqOperand,
    B: SeqOperand<Elem = A::Elem>,
{
    for extent in [when_true.extent(), when_false.extent()].into_iter().flatten() {
        if extent != cond.len() {
            return Err(mismatch_1d(cond.len(), extent));
        }
    }
    Ok(Select { cond, when_true, when_false })
}

impl<'a, C, A, B> Sequence for Select<'a, C, A, B>
where
    C: Sequence<Elem = bool>,
    A: SeqOperand,
    B: SeqOperand<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn len(&self) -> usize
    {
        self.cond.len()
    }

    #[inline]
    fn get(&self, index: usize) -> A::Elem
    {
        if self.cond.get(index) {
            self.when_true.at(index)
        } else {
            self.when_false.at(index)
        }
    }
}

impl<'a, C, A, B> fmt::Debug for Select<'a, C, A, B>
where C: Sequence<Elem = bool>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Select")
         .field("len", &self.cond.len())
         .finish_non_exhaustive()
    }
}

/// Lazy ternary view over grids.
pub struct SelectGrid<'a, C, A, B>
{
    cond: &'a C,
    when_true: A,
    when_false: B,
}

/// Create a lazy selection view over grids.
///
/// Returns an error when a grid value source does not match the condition
/// in shape.
pub fn select_grid<'a, C, A, B>(cond: &'a C,
                                when_true: A,
                                when_false: B)
                                -> Result<SelectGrid<'a, C, A, B>, ArrayError>
where
    C: Grid<Elem = bool>,
    A: GridOperand,
    B: GridOperand<Elem = A::Elem>,
{
    for extent in [when_true.extent(), when_false.extent()].into_iter().flatten() {
        if extent != cond.dim() {
            return Err(mismatch_2d(cond.dim(), extent));
        }
    }
    Ok(SelectGrid { cond, when_true, when_false })
}

impl<'a, C, A, B> Grid for SelectGrid<'a, C, A, B>
where
    C: Grid<Elem = bool>,
    A: GridOperand,
    B: GridOperand<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn nrows(&self) -> usize
    {
        self.cond.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.cond.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> A::Elem
    {
        if self.cond.get(row, col) {
            self.when_true.at(row, col)
        } else {
            self.when_false.at(row, col)
        }
    }
}

impl<'a, C, A, B> fmt::Debug for SelectGrid<'a, C, A, B>
where C: Grid<Elem = bool>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("SelectGrid")
         .field("dim", &self.cond.dim())
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::array::Array;
    use crate::lazy::map::Scalar;

    #[test]
    fn container_and_scalar_arms()
    {
        let cond = Array::from_vec(vec![true, false, true]);
        let values = Array::from_vec(vec![1, 2, 3]);
        let clipped = select(&cond, &values, Scalar(0)).unwrap();
        assert_eq!(clipped.eval(), Array::from_vec(vec![1, 0, 3]));
    }

    #[test]
    fn mismatched_arm_fails_at_construction()
    {
        let cond = Array::from_vec(vec![true, false]);
        let values = Array::from_vec(vec![1, 2, 3]);
        assert!(select(&cond, &values, Scalar(0)).is_err());
    }

    #[test]
    fn debug_reports_the_extent()
    {
        let cond = Array::from_vec(vec![true, false]);
        let v = select(&cond, Scalar(1), Scalar(0)).unwrap();
        assert!(format!("{:?}", v).contains("len: 2"));
    }
}
