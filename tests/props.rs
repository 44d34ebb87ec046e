use ndlazy::routines::{set_difference, set_intersection, set_union, sort};
use ndlazy::{concatenate, reverse, rot90, transpose, Array, Grid, Matrix, Sequence};
use quickcheck::quickcheck;

fn to_matrix(data: &[i32], rows: u8) -> Option<Matrix<i32>>
{
    let rows = (rows as usize % 4) + 1;
    let cols = data.len() / rows;
    if cols == 0 {
        return None;
    }
    Matrix::from_vec((rows, cols), data[..rows * cols].to_vec()).ok()
}

quickcheck! {
    fn reversing_twice_is_identity(data: Vec<i32>) -> bool {
        let a = Array::from_vec(data);
        let r = reverse(&a);
        reverse(&r).eval() == a
    }

    fn four_quarter_turns_are_identity(data: Vec<i32>, rows: u8) -> bool {
        match to_matrix(&data, rows) {
            Some(m) => rot90(&m, 4).eval() == m && rot90(&m, -3).eval() == rot90(&m, 1).eval(),
            None => true,
        }
    }

    fn transposing_twice_is_identity(data: Vec<i32>, rows: u8) -> bool {
        match to_matrix(&data, rows) {
            Some(m) => {
                let t = transpose(&m);
                t.dim() == (m.ncols(), m.nrows()) && transpose(&t).eval() == m
            }
            None => true,
        }
    }

    fn sorting_is_a_sorted_permutation(data: Vec<i32>) -> bool {
        let a = Array::from_vec(data.clone());
        let s = sort(&a);
        let mut expected = data;
        expected.sort_unstable();
        s.as_slice() == expected.as_slice()
    }

    fn concat_length_is_additive(left: Vec<i32>, right: Vec<i32>) -> bool {
        let a = Array::from_vec(left);
        let b = Array::from_vec(right);
        let joined = concatenate(&[&a, &b]);
        joined.len() == a.len() + b.len()
            && joined.eval().as_slice()
               == [a.as_slice(), b.as_slice()].concat().as_slice()
    }

    fn set_identities_hold(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
        let mut ys: Vec<i32> = ys.into_iter().map(i32::from).collect();
        xs.sort_unstable();
        ys.sort_unstable();
        let a = Array::from_vec(xs);
        let b = Array::from_vec(ys);

        let union = set_union(&a, &b);
        let inter = set_intersection(&a, &b);
        let a_only = set_difference(&a, &b);
        let b_only = set_difference(&b, &a);

        // the union splits into the two exclusive parts and the intersection
        let mut rebuilt: Vec<i32> = a_only.iter()
                                          .chain(inter.iter())
                                          .chain(b_only.iter())
                                          .collect();
        rebuilt.sort_unstable();
        rebuilt.as_slice() == union.as_slice()
    }
}
