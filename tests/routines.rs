use std::cmp::Ordering;

use ndlazy::routines::{accumulate, apply, argpartition, argpartition_by, argsort, argsort_axis,
                       argsort_by, cumprod, cumsum, extract, includes, partition, partition_by,
                       place, put, put_coords, putmask, set_difference, set_intersection,
                       set_symmetric_difference, set_union, sort, sort_axis, sort_by, take,
                       take_axis, take_coords};
use ndlazy::{array, matrix, Axis, ErrorKind, Matrix};

#[test]
fn take_gathers_and_checks_bounds()
{
    let a = array![10, 20, 30, 40];
    assert_eq!(take(&a, &[3, 0, 0]).unwrap(), array![40, 10, 10]);
    assert_eq!(take(&a, &[4]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn take_axis_picks_rows_or_columns()
{
    let m = matrix![[1, 2, 3], [4, 5, 6]];
    assert_eq!(take_axis(&m, Axis(0), &[1, 0]).unwrap(),
               matrix![[4, 5, 6], [1, 2, 3]]);
    assert_eq!(take_axis(&m, Axis(1), &[2, 0]).unwrap(),
               matrix![[3, 1], [6, 4]]);
    assert_eq!(take_axis(&m, Axis(0), &[2]).unwrap_err().kind(),
               ErrorKind::OutOfBounds);
}

#[test]
fn take_axis_checks_columns_even_without_rows()
{
    let empty = Matrix::<i32>::from_vec((0, 3), vec![]).unwrap();
    assert_eq!(take_axis(&empty, Axis(1), &[3]).unwrap_err().kind(),
               ErrorKind::OutOfBounds);
    assert_eq!(take_axis(&empty, Axis(1), &[2, 0]).unwrap().nrows(), 0);
}

#[test]
fn take_coords_gathers_pairs()
{
    let m = matrix![[1, 2], [3, 4]];
    assert_eq!(take_coords(&m, &[(0, 0), (1, 1), (0, 1)]).unwrap(),
               array![1, 4, 2]);
    assert!(take_coords(&m, &[(2, 0)]).is_err());
}

#[test]
fn put_scatters_with_cycling_values()
{
    let mut a = array![0, 0, 0, 0, 0];
    put(&mut a, &[0, 2, 4], &[7, 8]).unwrap();
    assert_eq!(a, array![7, 0, 8, 0, 7]);

    assert_eq!(put(&mut a, &[9], &[1]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(put(&mut a, &[0], &[]).unwrap_err().kind(), ErrorKind::InvalidParameter);
    // nothing to do is fine even without values
    put(&mut a, &[], &[]).unwrap();
}

#[test]
fn put_coords_scatters_into_a_matrix()
{
    let mut m = matrix![[0, 0], [0, 0]];
    put_coords(&mut m, &[(0, 1), (1, 0)], &[5]).unwrap();
    assert_eq!(m, matrix![[0, 5], [5, 0]]);
}

#[test]
fn putmask_consumes_values_by_position()
{
    let mut a = array![1, 2, 3, 4];
    let mask = array![true, false, true, true];
    putmask(&mut a, &mask, &[10, 20]).unwrap();
    // position i takes values[i % 2], masked or not
    assert_eq!(a, array![10, 2, 10, 20]);

    let short = array![true];
    assert_eq!(putmask(&mut a, &short, &[0]).unwrap_err().kind(),
               ErrorKind::IncompatibleShapes);
}

#[test]
fn place_consumes_values_in_order()
{
    let mut a = array![1, 2, 3, 4];
    let mask = array![true, false, true, true];
    place(&mut a, &mask, &[10, 20]).unwrap();
    assert_eq!(a, array![10, 2, 20, 10]);
}

#[test]
fn extract_keeps_masked_elements()
{
    let a = array![1, 2, 3, 4];
    let mask = array![false, true, false, true];
    assert_eq!(extract(&mask, &a).unwrap(), array![2, 4]);
    let short = array![true];
    assert_eq!(extract(&short, &a).unwrap_err().kind(),
               ErrorKind::IncompatibleShapes);
}

#[test]
fn apply_and_accumulate()
{
    let a = array![1, 2, 3];
    assert_eq!(apply(&a, |x| x * x), array![1, 4, 9]);
    assert_eq!(accumulate(&a, |x, y| x + y), array![1, 3, 6]);
    assert_eq!(cumsum(&a), array![1, 3, 6]);
    assert_eq!(cumprod(&a), array![1, 2, 6]);
    let empty: ndlazy::Array<i32> = array![];
    assert!(cumsum(&empty).is_empty());
}

#[test]
fn sorting_family()
{
    let a = array![3.0, 1.0, 2.0];
    assert_eq!(sort(&a), array![1.0, 2.0, 3.0]);
    assert_eq!(argsort(&a, false), array![1, 2, 0]);

    let desc = sort_by(&a, |x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal), false);
    assert_eq!(desc, array![3.0, 2.0, 1.0]);
}

#[test]
fn stable_argsort_keeps_tied_order()
{
    let a = array![(1, 'b'), (0, 'x'), (1, 'a')];
    let order = argsort_by(&a, |x, y| x.0.cmp(&y.0), true);
    assert_eq!(order, array![1, 0, 2]);
}

#[test]
fn partition_splits_around_a_rank()
{
    let a = array![5, 1, 4, 2, 3];
    let p = partition(&a, 2).unwrap();
    assert_eq!(p[2], 3);
    assert!(p.as_slice()[..2].iter().all(|&x| x <= 3));
    assert!(p.as_slice()[3..].iter().all(|&x| x >= 3));

    let idx = argpartition(&a, 2).unwrap();
    assert_eq!(a[idx[2]], 3);

    assert_eq!(partition(&a, 5).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn partition_with_a_custom_comparator()
{
    let a = array![5, 1, 4, 2, 3];
    let descending = |x: &i32, y: &i32| y.cmp(x);

    let p = partition_by(&a, 1, descending).unwrap();
    assert_eq!(p[1], 4);
    assert!(p.as_slice()[..1].iter().all(|&x| x >= 4));
    assert!(p.as_slice()[2..].iter().all(|&x| x <= 4));

    let idx = argpartition_by(&a, 1, descending).unwrap();
    assert_eq!(a[idx[1]], 4);

    assert_eq!(partition_by(&a, 9, descending).unwrap_err().kind(),
               ErrorKind::OutOfBounds);
    assert_eq!(argpartition_by(&a, 9, descending).unwrap_err().kind(),
               ErrorKind::OutOfBounds);
}

#[test]
fn axis_sorting()
{
    let m = matrix![[3, 1], [2, 4]];
    assert_eq!(sort_axis(&m, Axis(0)).unwrap(), matrix![[2, 1], [3, 4]]);
    assert_eq!(sort_axis(&m, Axis(1)).unwrap(), matrix![[1, 3], [2, 4]]);
    assert_eq!(argsort_axis(&m, Axis(1)).unwrap(), matrix![[1, 0], [0, 1]]);
    assert!(sort_axis(&m, Axis(2)).is_err());
}

#[test]
fn set_operations_on_sorted_inputs()
{
    let a = array![1, 2, 2, 4, 6];
    let b = array![2, 3, 4, 4, 7];
    assert_eq!(set_union(&a, &b), array![1, 2, 3, 4, 6, 7]);
    assert_eq!(set_intersection(&a, &b), array![2, 4]);
    assert_eq!(set_difference(&a, &b), array![1, 6]);
    assert_eq!(set_symmetric_difference(&a, &b), array![1, 3, 6, 7]);

    assert!(includes(&a, &array![2, 4, 6]));
    assert!(!includes(&a, &array![2, 5]));
    assert!(includes(&a, &array![]));
}
