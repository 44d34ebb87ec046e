use ndlazy::lazy::{col_grid, row_grid};
use ndlazy::{array, concatenate, hstack, matrix, stack, vstack, Axis, ErrorKind, Grid, Matrix,
             Sequence};

#[test]
fn concat_length_is_the_sum_of_parts()
{
    let a = array![1, 2];
    let b = array![3];
    let c = array![4, 5, 6];
    let v = concatenate(&[&a, &b, &c]);
    assert_eq!(v.len(), a.len() + b.len() + c.len());
    assert_eq!(v.eval(), array![1, 2, 3, 4, 5, 6]);
}

#[test]
fn concat_of_nothing_is_empty()
{
    let v = concatenate::<i32>(&[]);
    assert!(v.is_empty());
    assert_eq!(v.eval(), array![]);
}

#[test]
fn concat_mixes_view_kinds()
{
    let a = array![1, 2];
    let s = [3, 4];
    let v = concatenate(&[&a as &dyn Sequence<Elem = i32>, &s]);
    assert_eq!(v.eval(), array![1, 2, 3, 4]);
}

#[test]
fn vstack_joins_rows()
{
    let a = matrix![[1, 2, 3], [4, 5, 6]];
    let b = matrix![[7, 8, 9]];
    let v = vstack(&[&a, &b]).unwrap();
    assert_eq!(v.dim(), (3, 3));
    assert_eq!(v.eval(), matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
}

#[test]
fn vstack_rejects_column_mismatch()
{
    let a = Matrix::<i32>::zeros((2, 3));
    let b = Matrix::<i32>::zeros((2, 4));
    let err = vstack(&[&a, &b]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn hstack_joins_columns()
{
    let a = matrix![[1, 2], [3, 4]];
    let b = matrix![[5], [6]];
    let v = hstack(&[&a, &b]).unwrap();
    assert_eq!(v.dim(), (2, 3));
    assert_eq!(v.eval(), matrix![[1, 2, 5], [3, 4, 6]]);

    let tall = Matrix::<i32>::zeros((3, 1));
    assert!(hstack(&[&a, &tall]).is_err());
}

#[test]
fn stacked_views_report_their_layout_in_debug()
{
    let a = matrix![[1, 2], [3, 4]];
    let b = matrix![[5, 6]];
    let v = vstack(&[&a, &b]).unwrap();
    let repr = format!("{:?}", v);
    assert!(repr.contains("axis: Axis(0)"));
    assert!(repr.contains("ends: [2, 3]"));
}

#[test]
fn stack_validates_axis_and_operands()
{
    let a = matrix![[1, 2]];
    assert_eq!(stack(&[&a], Axis(2)).unwrap_err().kind(),
               ErrorKind::InvalidParameter);
    assert_eq!(stack::<i32>(&[], Axis(0)).unwrap_err().kind(),
               ErrorKind::InvalidParameter);
}

#[test]
fn sequences_lift_to_rows_and_columns()
{
    let a = array![1, 2, 3];
    let r = row_grid(&a);
    assert_eq!(r.dim(), (1, 3));
    assert_eq!(r.get(0, 2), 3);

    let c = col_grid(&a);
    assert_eq!(c.dim(), (3, 1));
    assert_eq!(c.get(2, 0), 3);

    let b = array![4, 5, 6];
    let top = row_grid(&a);
    let bottom = row_grid(&b);
    let stacked = vstack(&[&top as &dyn Grid<Elem = i32>, &bottom]).unwrap();
    assert_eq!(stacked.eval(), matrix![[1, 2, 3], [4, 5, 6]]);
}
