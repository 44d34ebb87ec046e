use ndlazy::reduce::{IsClose, QuantileMethod, RangeAll, RangeCountNonzero, RangeMax, RangeSum,
                     Reduction};
use ndlazy::routines::{all, allclose, amax, amin, any, argmax, argmin, count_nonzero, isclose, mean,
                       median, quantile, reduce, std, sum, var};
use ndlazy::{array, matrix, reduce_axis, Axis, ErrorKind, Matrix, Sequence};

#[test]
fn axis_reduction_shape_law()
{
    let m = matrix![[1, 2, 3], [4, 5, 6]];

    // collapsing the rows leaves one value per column
    let cols = reduce_axis(&m, Axis(0), RangeSum).unwrap();
    assert_eq!(cols.len(), 3);
    assert_eq!(cols.eval(), array![5, 7, 9]);

    // collapsing the columns leaves one value per row
    let rows = reduce_axis(&m, Axis(1), RangeSum).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.eval(), array![6, 15]);

    assert_eq!(reduce_axis(&m, Axis(2), RangeSum).unwrap_err().kind(),
               ErrorKind::InvalidParameter);
}

#[test]
fn axis_reduction_rejects_empty_lanes_for_max()
{
    let empty_rows = Matrix::<i32>::zeros((0, 3));
    let err = reduce_axis(&empty_rows, Axis(0), RangeMax).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);

    // a sum has an identity, so empty lanes are fine
    let sums = reduce_axis(&empty_rows, Axis(0), RangeSum).unwrap();
    assert_eq!(sums.eval(), array![0, 0, 0]);
}

#[test]
fn whole_container_reductions()
{
    let a = array![3, 1, 4, 1, 5];
    assert_eq!(sum(&a), 14);
    assert_eq!(amax(&a).unwrap(), 5);
    assert_eq!(amin(&a).unwrap(), 1);
    assert_eq!(argmax(&a).unwrap(), 4);
    // ties resolve to the first occurrence
    assert_eq!(argmin(&a).unwrap(), 1);
    assert_eq!(count_nonzero(&a), 5);
    assert!(all(&a));
    assert!(any(&array![0, 0, 2]));
    assert!(!any(&array![0, 0]));

    let empty: ndlazy::Array<i32> = array![];
    assert_eq!(sum(&empty), 0);
    assert_eq!(amax(&empty).unwrap_err().kind(), ErrorKind::EmptyInput);
}

#[test]
fn reduce_applies_a_functor_to_any_view()
{
    let a = array![1.0, 2.0, 3.0, 4.0];
    assert_eq!(reduce(&a, RangeSum).unwrap(), 10.0);
}

#[test]
fn mean_median_var_std()
{
    let a = array![1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&a).unwrap(), 2.5);
    assert_eq!(median(&a).unwrap(), 2.5);
    assert_eq!(median(&array![3.0, 1.0, 2.0]).unwrap(), 2.0);

    let b = array![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    assert!((var(&b, 0).unwrap() - 4.0).abs() < 1e-12);
    assert!((std(&b, 0).unwrap() - 2.0).abs() < 1e-12);
    assert!((var(&b, 1).unwrap() - 14.0 / 3.0).abs() < 1e-12);

    assert_eq!(var(&b, 7).unwrap_err().kind(), ErrorKind::InvalidParameter);
    assert_eq!(mean::<_, f64>(&array![]).unwrap_err().kind(), ErrorKind::EmptyInput);
}

#[test]
fn quantile_boundaries_for_every_method()
{
    let a = array![7.0, 1.0, 5.0, 3.0];
    for method in [QuantileMethod::Lower,
                   QuantileMethod::Higher,
                   QuantileMethod::Nearest,
                   QuantileMethod::Midpoint,
                   QuantileMethod::Linear]
    {
        assert_eq!(quantile(&a, 0.0, method).unwrap(), 1.0);
        assert_eq!(quantile(&a, 1.0, method).unwrap(), 7.0);
    }
}

#[test]
fn quantile_methods_interpolate_differently()
{
    let a = array![1.0, 2.0, 3.0, 4.0];
    // rank 0.5 * 3 = 1.5 sits between 2 and 3
    assert_eq!(quantile(&a, 0.5, QuantileMethod::Lower).unwrap(), 2.0);
    assert_eq!(quantile(&a, 0.5, QuantileMethod::Higher).unwrap(), 3.0);
    assert_eq!(quantile(&a, 0.5, QuantileMethod::Midpoint).unwrap(), 2.5);
    assert_eq!(quantile(&a, 0.5, QuantileMethod::Linear).unwrap(), 2.5);

    assert_eq!(quantile(&a, 1.5, QuantileMethod::Linear).unwrap_err().kind(),
               ErrorKind::InvalidParameter);
}

#[test]
fn isclose_is_elementwise_and_allclose_aggregates()
{
    let a = array![1.0, 2.0, f64::NAN];
    let b = array![1.0 + 1e-9, 2.5, f64::NAN];
    let tol = IsClose::default();
    let close = isclose(&a, &b, tol).unwrap();
    assert_eq!(close, array![true, false, false]);
    assert!(!allclose(&a, &b, tol).unwrap());

    let c = array![1.0, 2.0];
    let d = array![1.0, 2.0 + 1e-9];
    assert!(allclose(&c, &d, IsClose::default()).unwrap());

    assert_eq!(isclose(&c, &a, tol).unwrap_err().kind(),
               ErrorKind::IncompatibleShapes);
}

#[test]
fn boolean_functors_reduce_lanes()
{
    let m = matrix![[1, 0, 2], [3, 0, 0]];
    let nonzero = reduce_axis(&m, Axis(0), RangeCountNonzero).unwrap();
    assert_eq!(nonzero.eval(), array![2, 0, 1]);
    let every = reduce_axis(&m, Axis(1), RangeAll).unwrap();
    assert_eq!(every.eval(), array![false, false]);
}

#[test]
fn functors_are_reusable_values()
{
    let f = RangeMax;
    assert_eq!(f.reduce([1, 9, 3].into_iter()).unwrap(), 9);
    assert_eq!(f.reduce([5].into_iter()).unwrap(), 5);
}
