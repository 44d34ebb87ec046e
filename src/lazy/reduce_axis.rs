//! Lazy reduction of one axis of a grid to a sequence.

use std::fmt;

use crate::error::{empty_input, invalid_parameter, ArrayError};
use crate::index::Axis;
use crate::order::Order;
use crate::reduce::Reduction;
use crate::traits::{Grid, Sequence};

/// Lazy axis reduction: element `i` is the reduction functor applied over
/// lane `i` of the grid.
///
/// Reducing along `Axis(0)` collapses the rows and yields one value per
/// column; `Axis(1)` collapses the columns and yields one value per row.
/// The lane is walked through a grid iterator whose order is fixed so that
/// the reduced axis is contiguous in iteration order, independent of how
/// the operand stores its elements.
pub struct AxisReduced<'a, G, F>
{
    base: &'a G,
    f: F,
    lanes: usize,
    lane_len: usize,
    order: Order,
}

/// Create a lazy reduction of `base` along `axis` with the functor `f`.
///
/// Returns an error for an axis other than 0 or 1, or when the functor has
/// no defined result on empty lanes and the reduced extent is zero.
///
/// Only the empty-lane case is caught here; a functor that fails on the
/// actual lane data (for example [`RangeVar`](crate::reduce::RangeVar)
/// with `ddof >= lane length`) panics at element access.
pub fn reduce_axis<'a, G, F>(base: &'a G, axis: Axis, f: F) -> Result<AxisReduced<'a, G, F>, ArrayError>
where
    G: Grid,
    F: Reduction<G::Elem>,
{
    let (lanes, lane_len, order) = match axis.index() {
        0 => (base.ncols(), base.nrows(), Order::ColumnMajor),
        1 => (base.nrows(), base.ncols(), Order::RowMajor),
        _ => return Err(invalid_parameter("axis must be 0 or 1 for a grid")),
    };
    if F::NEEDS_DATA && lane_len == 0 && lanes > 0 {
        return Err(empty_input());
    }
    Ok(AxisReduced {
        base,
        f,
        lanes,
        lane_len,
        order,
    })
}

impl<'a, G, F> Sequence for AxisReduced<'a, G, F>
where
    G: Grid,
    F: Reduction<G::Elem>,
    F::Output: Clone,
{
    type Elem = F::Output;

    fn len(&self) -> usize
    {
        self.lanes
    }

    /// **Panics** if the functor fails on the lane.
    fn get(&self, index: usize) -> F::Output
    {
        let lane = self.base
                       .iter(self.order)
                       .skip(index * self.lane_len)
                       .take(self.lane_len);
        self.f
            .reduce(lane)
            .unwrap_or_else(|e| panic!("ndlazy: axis reduction failed: {}", e))
    }
}

impl<'a, G, F> fmt::Debug for AxisReduced<'a, G, F>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("AxisReduced")
         .field("lanes", &self.lanes)
         .field("lane_len", &self.lane_len)
         .field("order", &self.order)
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::array::Array;
    use crate::matrix::Matrix;
    use crate::reduce::{RangeMax, RangeSum, RangeVar};

    #[test]
    fn shape_law()
    {
        let m = Matrix::from_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let per_column = reduce_axis(&m, Axis(0), RangeSum).unwrap();
        assert_eq!(per_column.eval(), Array::from_vec(vec![5, 7, 9]));
        let per_row = reduce_axis(&m, Axis(1), RangeSum).unwrap();
        assert_eq!(per_row.eval(), Array::from_vec(vec![6, 15]));
    }

    #[test]
    fn empty_lanes_rejected_for_functors_that_need_data()
    {
        let m: Matrix<i32> = Matrix::from_vec((0, 3), vec![]).unwrap();
        assert!(reduce_axis(&m, Axis(0), RangeMax).is_err());
        // sum has an identity, so empty lanes are fine
        let sums = reduce_axis(&m, Axis(0), RangeSum).unwrap();
        assert_eq!(sums.eval(), Array::from_vec(vec![0, 0, 0]));
    }

    #[test]
    fn debug_shows_lane_bookkeeping()
    {
        let m = Matrix::from_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let per_column = reduce_axis(&m, Axis(0), RangeSum).unwrap();
        let repr = format!("{:?}", per_column);
        assert!(repr.contains("lanes: 3"));
        assert!(repr.contains("lane_len: 2"));
    }

    #[test]
    #[should_panic(expected = "axis reduction failed")]
    fn functor_failure_on_lane_data_panics_at_access()
    {
        let m = Matrix::from_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let v = reduce_axis(&m, Axis(0), RangeVar::new(3)).unwrap();
        v.get(0);
    }
}
