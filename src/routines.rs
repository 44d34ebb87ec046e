//! Free-function routines that materialize or mutate concrete storage.
//!
//! The lazy constructors live next to their view types in [`crate::lazy`];
//! everything here produces or updates an owning container: fancy indexing
//! (`take`/`put`/`extract`/`place`/`putmask`), the sorting family, set
//! operations over sorted inputs, and the statistics wrappers built on the
//! reduction functors.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use num_traits::{Float, One, Zero};

use crate::array::Array;
use crate::error::{invalid_parameter, mismatch_1d, out_of_bounds, ArrayError};
use crate::index::{Axis, Ix};
use crate::matrix::Matrix;
use crate::reduce::{IsClose, QuantileMethod, RangeArgMax, RangeArgMin, RangeMax, RangeMean, RangeMedian,
                    RangeMin, RangeQuantile, RangeStd, RangeVar, Reduction};
use crate::traits::{Grid, Sequence};

fn partial_ord<T: PartialOrd>(a: &T, b: &T) -> Ordering
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Materialize `f` applied to every element of `a`.
pub fn apply<S, F, O>(a: &S, f: F) -> Array<O>
where
    S: Sequence,
    F: Fn(S::Elem) -> O,
    O: Clone,
{
    a.iter().map(f).collect()
}

/// Apply a reduction functor over all elements of `a`.
pub fn reduce<S, F>(a: &S, f: F) -> Result<F::Output, ArrayError>
where
    S: Sequence,
    F: Reduction<S::Elem>,
{
    f.reduce(a.iter())
}

/// Materialize the running accumulation of `f` over `a`.
///
/// Element `i` of the result is `f(..f(f(a[0], a[1]), a[2]).., a[i])`; the
/// result has the same length as `a`.
pub fn accumulate<S, F>(a: &S, f: F) -> Array<S::Elem>
where
    S: Sequence,
    F: Fn(S::Elem, S::Elem) -> S::Elem,
{
    let mut out = Vec::with_capacity(a.len());
    let mut iter = a.iter();
    if let Some(first) = iter.next() {
        let mut acc = first;
        out.push(acc.clone());
        for x in iter {
            acc = f(acc, x);
            out.push(acc.clone());
        }
    }
    Array::from_vec(out)
}

/// Running sum of `a`.
pub fn cumsum<S, T>(a: &S) -> Array<T>
where
    S: Sequence<Elem = T>,
    T: Clone + Add<Output = T>,
{
    accumulate(a, |acc, x| acc + x)
}

/// Running product of `a`.
pub fn cumprod<S, T>(a: &S) -> Array<T>
where
    S: Sequence<Elem = T>,
    T: Clone + Mul<Output = T>,
{
    accumulate(a, |acc, x| acc * x)
}

/// Materialize the elements of `a` at the given indices.
///
/// Returns an error when an index is out of bounds.
pub fn take<S>(a: &S, indices: &[Ix]) -> Result<Array<S::Elem>, ArrayError>
where S: Sequence
{
    let mut out = Vec::with_capacity(indices.len());
    for &ix in indices {
        if ix >= a.len() {
            return Err(out_of_bounds(format!("index {} for length {}", ix, a.len())));
        }
        out.push(a.get(ix));
    }
    Ok(Array::from_vec(out))
}

/// Materialize whole rows (`Axis(0)`) or columns (`Axis(1)`) of a grid by
/// index.
pub fn take_axis<G>(g: &G, axis: Axis, indices: &[Ix]) -> Result<Matrix<G::Elem>, ArrayError>
where G: Grid
{
    match axis.index() {
        0 => {
            let mut rows = Vec::with_capacity(indices.len());
            for &ix in indices {
                if ix >= g.nrows() {
                    return Err(out_of_bounds(format!("row index {} for {} rows", ix, g.nrows())));
                }
                rows.push((0..g.ncols()).map(|j| g.get(ix, j)).collect());
            }
            Matrix::from_rows(rows)
        }
        1 => {
            // checked up front so a grid with no rows still rejects bad indices
            for &ix in indices {
                if ix >= g.ncols() {
                    return Err(out_of_bounds(format!("column index {} for {} columns", ix, g.ncols())));
                }
            }
            let mut rows = Vec::with_capacity(g.nrows());
            for i in 0..g.nrows() {
                rows.push(indices.iter().map(|&ix| g.get(i, ix)).collect());
            }
            Matrix::from_rows(rows)
        }
        _ => Err(invalid_parameter("axis must be 0 or 1 for a grid")),
    }
}

/// Materialize the elements of a grid at the given coordinates.
pub fn take_coords<G>(g: &G, coords: &[(Ix, Ix)]) -> Result<Array<G::Elem>, ArrayError>
where G: Grid
{
    let mut out = Vec::with_capacity(coords.len());
    for &(r, c) in coords {
        if r >= g.nrows() || c >= g.ncols() {
            return Err(out_of_bounds(format!("index ({}, {}) for shape ({}, {})",
                                             r, c, g.nrows(), g.ncols())));
        }
        out.push(g.get(r, c));
    }
    Ok(Array::from_vec(out))
}

/// Overwrite the elements of `a` at the given indices with `values`,
/// cycling through `values` when there are more indices.
///
/// Returns an error when an index is out of bounds or `values` is empty
/// while `indices` is not.
pub fn put<T: Clone>(a: &mut Array<T>, indices: &[Ix], values: &[T]) -> Result<(), ArrayError>
{
    if indices.is_empty() {
        return Ok(());
    }
    if values.is_empty() {
        return Err(invalid_parameter("cannot put from an empty value list"));
    }
    for &ix in indices {
        if ix >= a.len() {
            return Err(out_of_bounds(format!("index {} for length {}", ix, a.len())));
        }
    }
    for (k, &ix) in indices.iter().enumerate() {
        a[ix] = values[k % values.len()].clone();
    }
    Ok(())
}

/// Overwrite the elements of a matrix at the given coordinates with
/// `values`, cycling through `values`.
pub fn put_coords<T: Clone>(m: &mut Matrix<T>, coords: &[(Ix, Ix)], values: &[T]) -> Result<(), ArrayError>
{
    if coords.is_empty() {
        return Ok(());
    }
    if values.is_empty() {
        return Err(invalid_parameter("cannot put from an empty value list"));
    }
    for &(r, c) in coords {
        if r >= m.nrows() || c >= m.ncols() {
            return Err(out_of_bounds(format!("index ({}, {}) for shape ({}, {})",
                                             r, c, m.nrows(), m.ncols())));
        }
    }
    for (k, &(r, c)) in coords.iter().enumerate() {
        m[(r, c)] = values[k % values.len()].clone();
    }
    Ok(())
}

/// Overwrite the elements of `a` where `mask` is true, cycling through
/// `values` over the *whole* length of `a` (masked-off positions consume a
/// value too, as NumPy's putmask does).
///
/// Returns an error when the mask length differs from `a` or `values` is
/// empty while the mask selects anything.
pub fn putmask<T, M>(a: &mut Array<T>, mask: &M, values: &[T]) -> Result<(), ArrayError>
where
    T: Clone,
    M: Sequence<Elem = bool>,
{
    if mask.len() != a.len() {
        return Err(mismatch_1d(a.len(), mask.len()));
    }
    if values.is_empty() {
        if (0..mask.len()).any(|i| mask.get(i)) {
            return Err(invalid_parameter("cannot put from an empty value list"));
        }
        return Ok(());
    }
    for i in 0..a.len() {
        if mask.get(i) {
            a[i] = values[i % values.len()].clone();
        }
    }
    Ok(())
}

/// Materialize the elements of `a` where `mask` is true.
///
/// Returns an error when the mask length differs from `a`.
pub fn extract<S, M>(mask: &M, a: &S) -> Result<Array<S::Elem>, ArrayError>
where
    S: Sequence,
    M: Sequence<Elem = bool>,
{
    if mask.len() != a.len() {
        return Err(mismatch_1d(a.len(), mask.len()));
    }
    let mut out = Vec::new();
    for i in 0..a.len() {
        if mask.get(i) {
            out.push(a.get(i));
        }
    }
    Ok(Array::from_vec(out))
}

/// Overwrite the masked positions of `a` with consecutive elements of
/// `values`, cycling when the mask selects more positions than there are
/// values (as NumPy's place does).
pub fn place<T, M>(a: &mut Array<T>, mask: &M, values: &[T]) -> Result<(), ArrayError>
where
    T: Clone,
    M: Sequence<Elem = bool>,
{
    if mask.len() != a.len() {
        return Err(mismatch_1d(a.len(), mask.len()));
    }
    let mut next = 0;
    for i in 0..a.len() {
        if mask.get(i) {
            if values.is_empty() {
                return Err(invalid_parameter("cannot place from an empty value list"));
            }
            a[i] = values[next % values.len()].clone();
            next += 1;
        }
    }
    Ok(())
}

/// Materialize `a` in increasing order (unstable sort).
pub fn sort<S>(a: &S) -> Array<S::Elem>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    let mut out = a.eval();
    out.as_mut_slice().sort_unstable_by(partial_ord);
    out
}

/// Materialize `a` sorted by a custom comparator, stable or not.
pub fn sort_by<S, F>(a: &S, mut cmp: F, stable: bool) -> Array<S::Elem>
where
    S: Sequence,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut out = a.eval();
    if stable {
        out.as_mut_slice().sort_by(&mut cmp);
    } else {
        out.as_mut_slice().sort_unstable_by(&mut cmp);
    }
    out
}

/// Indices that would sort `a`.
///
/// With `stable` set, equal elements keep their original relative order.
pub fn argsort<S>(a: &S, stable: bool) -> Array<usize>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    argsort_by(a, partial_ord, stable)
}

/// Indices that would sort `a` by a custom comparator.
pub fn argsort_by<S, F>(a: &S, mut cmp: F, stable: bool) -> Array<usize>
where
    S: Sequence,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let keys: Vec<S::Elem> = a.iter().collect();
    let mut order: Vec<usize> = (0..keys.len()).collect();
    if stable {
        order.sort_by(|&i, &j| cmp(&keys[i], &keys[j]));
    } else {
        order.sort_unstable_by(|&i, &j| cmp(&keys[i], &keys[j]));
    }
    Array::from_vec(order)
}

/// Materialize `a` partitioned around the element that would be at `kth`
/// in sorted order: everything before it is not greater, everything after
/// not smaller.
///
/// Returns an error when `kth` is out of bounds.
pub fn partition<S>(a: &S, kth: usize) -> Result<Array<S::Elem>, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    partition_by(a, kth, partial_ord)
}

/// Materialize `a` partitioned around rank `kth` by a custom comparator.
pub fn partition_by<S, F>(a: &S, kth: usize, mut cmp: F) -> Result<Array<S::Elem>, ArrayError>
where
    S: Sequence,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    if kth >= a.len() {
        return Err(out_of_bounds(format!("kth {} for length {}", kth, a.len())));
    }
    let mut out = a.eval();
    out.as_mut_slice().select_nth_unstable_by(kth, &mut cmp);
    Ok(out)
}

/// Indices of a partition of `a` around rank `kth`.
pub fn argpartition<S>(a: &S, kth: usize) -> Result<Array<usize>, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    argpartition_by(a, kth, partial_ord)
}

/// Indices of a partition of `a` around rank `kth` by a custom comparator.
pub fn argpartition_by<S, F>(a: &S, kth: usize, mut cmp: F) -> Result<Array<usize>, ArrayError>
where
    S: Sequence,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    if kth >= a.len() {
        return Err(out_of_bounds(format!("kth {} for length {}", kth, a.len())));
    }
    let keys: Vec<S::Elem> = a.iter().collect();
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.select_nth_unstable_by(kth, |&i, &j| cmp(&keys[i], &keys[j]));
    Ok(Array::from_vec(order))
}

/// Materialize a grid with every lane along `axis` sorted independently.
///
/// `Axis(0)` sorts each column, `Axis(1)` sorts each row.
pub fn sort_axis<G>(g: &G, axis: Axis) -> Result<Matrix<G::Elem>, ArrayError>
where
    G: Grid,
    G::Elem: PartialOrd,
{
    let mut out = g.eval();
    let (nrows, ncols) = out.dim();
    match axis.index() {
        0 => {
            for j in 0..ncols {
                let mut lane: Vec<G::Elem> = (0..nrows).map(|i| out[(i, j)].clone()).collect();
                lane.sort_unstable_by(partial_ord);
                for (i, v) in lane.into_iter().enumerate() {
                    out[(i, j)] = v;
                }
            }
        }
        1 => {
            for i in 0..nrows {
                let mut lane: Vec<G::Elem> = (0..ncols).map(|j| out[(i, j)].clone()).collect();
                lane.sort_unstable_by(partial_ord);
                for (j, v) in lane.into_iter().enumerate() {
                    out[(i, j)] = v;
                }
            }
        }
        _ => return Err(invalid_parameter("axis must be 0 or 1 for a grid")),
    }
    Ok(out)
}

/// Per-lane sorting indices of a grid along `axis`.
pub fn argsort_axis<G>(g: &G, axis: Axis) -> Result<Matrix<usize>, ArrayError>
where
    G: Grid,
    G::Elem: PartialOrd,
{
    let (nrows, ncols) = g.dim();
    let mut out = Matrix::zeros((nrows, ncols));
    match axis.index() {
        0 => {
            for j in 0..ncols {
                let keys: Vec<G::Elem> = (0..nrows).map(|i| g.get(i, j)).collect();
                let mut order: Vec<usize> = (0..nrows).collect();
                order.sort_by(|&i, &k| partial_ord(&keys[i], &keys[k]));
                for (i, v) in order.into_iter().enumerate() {
                    out[(i, j)] = v;
                }
            }
        }
        1 => {
            for i in 0..nrows {
                let keys: Vec<G::Elem> = (0..ncols).map(|j| g.get(i, j)).collect();
                let mut order: Vec<usize> = (0..ncols).collect();
                order.sort_by(|&j, &k| partial_ord(&keys[j], &keys[k]));
                for (j, v) in order.into_iter().enumerate() {
                    out[(i, j)] = v;
                }
            }
        }
        _ => return Err(invalid_parameter("axis must be 0 or 1 for a grid")),
    }
    Ok(out)
}

// Set operations. Inputs must already be sorted; results are sorted and
// unique.

fn push_unique<T: Clone + PartialOrd>(out: &mut Vec<T>, value: T)
{
    if out.last().map_or(true, |last| *last != value) {
        out.push(value);
    }
}

/// Elements present in `a`, `b` or both.
pub fn set_union<A, B, T>(a: &A, b: &B) -> Array<T>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + PartialOrd,
{
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (x, y) = (a.get(i), b.get(j));
        if x < y {
            push_unique(&mut out, x);
            i += 1;
        } else if y < x {
            push_unique(&mut out, y);
            j += 1;
        } else {
            push_unique(&mut out, x);
            i += 1;
            j += 1;
        }
    }
    while i < a.len() {
        push_unique(&mut out, a.get(i));
        i += 1;
    }
    while j < b.len() {
        push_unique(&mut out, b.get(j));
        j += 1;
    }
    Array::from_vec(out)
}

/// Elements present in both `a` and `b`.
pub fn set_intersection<A, B, T>(a: &A, b: &B) -> Array<T>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + PartialOrd,
{
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (x, y) = (a.get(i), b.get(j));
        if x < y {
            i += 1;
        } else if y < x {
            j += 1;
        } else {
            push_unique(&mut out, x);
            i += 1;
            j += 1;
        }
    }
    Array::from_vec(out)
}

/// Elements present in `a` but not in `b`.
pub fn set_difference<A, B, T>(a: &A, b: &B) -> Array<T>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + PartialOrd,
{
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        let x = a.get(i);
        while j < b.len() && b.get(j) < x {
            j += 1;
        }
        if j >= b.len() || b.get(j) != x {
            push_unique(&mut out, x);
        }
        i += 1;
    }
    Array::from_vec(out)
}

/// Elements present in exactly one of `a` and `b`.
pub fn set_symmetric_difference<A, B, T>(a: &A, b: &B) -> Array<T>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + PartialOrd,
{
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (x, y) = (a.get(i), b.get(j));
        if x < y {
            push_unique(&mut out, x);
            i += 1;
        } else if y < x {
            push_unique(&mut out, y);
            j += 1;
        } else {
            // skip the whole run of equal values on both sides
            while i < a.len() && a.get(i) == x {
                i += 1;
            }
            while j < b.len() && b.get(j) == y {
                j += 1;
            }
        }
    }
    while i < a.len() {
        push_unique(&mut out, a.get(i));
        i += 1;
    }
    while j < b.len() {
        push_unique(&mut out, b.get(j));
        j += 1;
    }
    Array::from_vec(out)
}

/// True when every element of sorted `b` is contained in sorted `a`.
pub fn includes<A, B, T>(a: &A, b: &B) -> bool
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Clone + PartialOrd,
{
    let mut i = 0;
    for k in 0..b.len() {
        let y = b.get(k);
        while i < a.len() && a.get(i) < y {
            i += 1;
        }
        if i >= a.len() || a.get(i) != y {
            return false;
        }
    }
    true
}

// Statistics wrappers over the reduction functors.

/// Sum of all elements; 0 for an empty sequence.
pub fn sum<S, T>(a: &S) -> T
where
    S: Sequence<Elem = T>,
    T: Clone + Zero,
{
    a.iter().fold(T::zero(), |acc, x| acc + x)
}

/// Product of all elements; 1 for an empty sequence.
pub fn prod<S, T>(a: &S) -> T
where
    S: Sequence<Elem = T>,
    T: Clone + One,
{
    a.iter().fold(T::one(), |acc, x| acc * x)
}

/// Largest element; fails on an empty sequence.
pub fn amax<S>(a: &S) -> Result<S::Elem, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    RangeMax.reduce(a.iter())
}

/// Smallest element; fails on an empty sequence.
pub fn amin<S>(a: &S) -> Result<S::Elem, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    RangeMin.reduce(a.iter())
}

/// Position of the largest element (first occurrence); fails on an empty
/// sequence.
pub fn argmax<S>(a: &S) -> Result<usize, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    RangeArgMax.reduce(a.iter())
}

/// Position of the smallest element (first occurrence); fails on an empty
/// sequence.
pub fn argmin<S>(a: &S) -> Result<usize, ArrayError>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    RangeArgMin.reduce(a.iter())
}

/// Arithmetic mean; fails on an empty sequence.
pub fn mean<S, T>(a: &S) -> Result<T, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Float,
{
    RangeMean.reduce(a.iter())
}

/// Median; fails on an empty sequence.
pub fn median<S, T>(a: &S) -> Result<T, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Float,
{
    RangeMedian.reduce(a.iter())
}

/// Variance with the given delta degrees of freedom.
pub fn var<S, T>(a: &S, ddof: usize) -> Result<T, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Float,
{
    RangeVar::new(ddof).reduce(a.iter())
}

/// Standard deviation with the given delta degrees of freedom.
pub fn std<S, T>(a: &S, ddof: usize) -> Result<T, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Float,
{
    RangeStd::new(ddof).reduce(a.iter())
}

/// The `q`th quantile of `a`.
pub fn quantile<S, T>(a: &S, q: T, method: QuantileMethod) -> Result<T, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Float,
{
    RangeQuantile::new(q, method)?.reduce(a.iter())
}

/// True when every element is nonzero; true for an empty sequence.
pub fn all<S, T>(a: &S) -> bool
where
    S: Sequence<Elem = T>,
    T: Clone + Zero + PartialEq,
{
    a.iter().all(|x| x != T::zero())
}

/// True when any element is nonzero; false for an empty sequence.
pub fn any<S, T>(a: &S) -> bool
where
    S: Sequence<Elem = T>,
    T: Clone + Zero + PartialEq,
{
    a.iter().any(|x| x != T::zero())
}

/// Number of nonzero elements.
pub fn count_nonzero<S, T>(a: &S) -> usize
where
    S: Sequence<Elem = T>,
    T: Clone + Zero + PartialEq,
{
    a.iter().filter(|x| *x != T::zero()).count()
}

/// Elementwise tolerance comparison of two sequences.
///
/// Returns an error when the lengths differ.
pub fn isclose<A, B, T>(a: &A, b: &B, tol: IsClose<T>) -> Result<Array<bool>, ArrayError>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Float,
{
    if a.len() != b.len() {
        return Err(mismatch_1d(a.len(), b.len()));
    }
    Ok((0..a.len()).map(|i| tol.close(a.get(i), b.get(i))).collect())
}

/// True when every pair of elements is within tolerance.
pub fn allclose<A, B, T>(a: &A, b: &B, tol: IsClose<T>) -> Result<bool, ArrayError>
where
    A: Sequence<Elem = T>,
    B: Sequence<Elem = T>,
    T: Float,
{
    if a.len() != b.len() {
        return Err(mismatch_1d(a.len(), b.len()));
    }
    Ok((0..a.len()).all(|i| tol.close(a.get(i), b.get(i))))
}
