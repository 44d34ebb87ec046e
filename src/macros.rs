/// Create an [`Array`](crate::Array) from a list of elements.
///
/// ```
/// use ndlazy::array;
///
/// let a = array![1., 2., 3.];
/// let b = array![0; 4];
/// ```
#[macro_export]
macro_rules! array {
    ($elem:expr; $n:expr) => {
        $crate::Array::from_elem($n, $elem)
    };
    ($($x:expr),* $(,)?) => {
        $crate::Array::from_vec(vec![$($x),*])
    };
}

/// Create a [`Matrix`](crate::Matrix) from rows of elements.
///
/// All rows must have the same number of elements; the macro panics
/// otherwise.
///
/// ```
/// use ndlazy::matrix;
///
/// let m = matrix![[1, 2, 3],
///                 [4, 5, 6]];
/// assert_eq!(m.dim(), (2, 3));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        match $crate::Matrix::from_rows(vec![$(vec![$($x),*]),+]) {
            Ok(m) => m,
            Err(e) => panic!("ndlazy: {}", e),
        }
    };
}

#[cfg(test)]
mod tests
{
    #[test]
    fn array_literal_and_repeat()
    {
        let a = array![1, 2, 3];
        assert_eq!(a.len(), 3);
        assert_eq!(a[2], 3);
        let b = array![7; 4];
        assert_eq!(b.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn matrix_literal()
    {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[(1, 2)], 6);
    }

    #[test]
    #[should_panic]
    fn ragged_rows_panic()
    {
        let _ = matrix![[1, 2], [3]];
    }
}
