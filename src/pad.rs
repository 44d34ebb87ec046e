//! Padding of sequences and grids.
//!
//! [`pad`] extends a sequence by `before` and `after` elements filled
//! according to a [`PadMode`]; [`pad_grid`] pads a grid one axis at a time,
//! rows first, so ramp and wrap corners come out the way sequential
//! per-axis padding produces them.

use std::str::FromStr;

use num_traits::{FromPrimitive, Num};

use crate::array::Array;
use crate::error::{empty_input, invalid_parameter, ArrayError};
use crate::matrix::Matrix;
use crate::traits::{Grid, Sequence};

/// How padded positions are filled.
///
/// The two-value variants carry a value for the leading side and one for
/// the trailing side.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PadMode<T>
{
    /// Leave padded positions at the element type's default value.
    Empty,
    /// Fill with the given values (before side, after side).
    Constant(T, T),
    /// Repeat the edge element.
    Edge,
    /// Ramp linearly from the given end values down to the edge elements.
    LinearRamp(T, T),
    /// Mirror about the edge element without repeating it.
    Reflect,
    /// Mirror about the edge, repeating the edge element.
    Symmetric,
    /// Tile the sequence periodically.
    Wrap,
}

impl<T: Clone> PadMode<T>
{
    /// Constant fill with the same value on both sides.
    pub fn constant(value: T) -> Self
    {
        PadMode::Constant(value.clone(), value)
    }

    /// Linear ramp towards the same end value on both sides.
    pub fn linear_ramp(end_value: T) -> Self
    {
        PadMode::LinearRamp(end_value.clone(), end_value)
    }
}

impl<T> FromStr for PadMode<T>
{
    type Err = ArrayError;

    /// Parse one of the value-free mode names; `constant` and
    /// `linear_ramp` need values and cannot be parsed.
    fn from_str(s: &str) -> Result<Self, ArrayError>
    {
        match s {
            "empty" => Ok(PadMode::Empty),
            "edge" => Ok(PadMode::Edge),
            "reflect" => Ok(PadMode::Reflect),
            "symmetric" => Ok(PadMode::Symmetric),
            "wrap" => Ok(PadMode::Wrap),
            _ => Err(invalid_parameter("unknown pad mode")),
        }
    }
}

fn wrap_index(pos: isize, len: usize) -> usize
{
    let n = len as isize;
    (((pos % n) + n) % n) as usize
}

// mirror with period 2(len-1); the edge element is not repeated
fn reflect_index(pos: isize, len: usize) -> usize
{
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut p = ((pos % period) + period) % period;
    if p >= len as isize {
        p = period - p;
    }
    p as usize
}

// mirror with period 2 len; the edge element is repeated
fn symmetric_index(pos: isize, len: usize) -> usize
{
    let period = 2 * len as isize;
    let mut p = ((pos % period) + period) % period;
    if p >= len as isize {
        p = period - 1 - p;
    }
    p as usize
}

/// Materialize `a` extended by `width.0` elements before and `width.1`
/// after, filled per `mode`.
///
/// Returns an error when the mode needs data to extend from and `a` is
/// empty while the width is nonzero.
pub fn pad<S, T>(a: &S, width: (usize, usize), mode: PadMode<T>) -> Result<Array<T>, ArrayError>
where
    S: Sequence<Elem = T>,
    T: Clone + Default + Num + FromPrimitive,
{
    let (before, after) = width;
    let len = a.len();
    if len == 0 && before + after > 0 {
        match mode {
            PadMode::Empty | PadMode::Constant(..) => {}
            _ => return Err(empty_input()),
        }
    }

    let mut out = Vec::with_capacity(before + len + after);
    for k in 0..before + len + after {
        let pos = k as isize - before as isize;
        if pos >= 0 && (pos as usize) < len {
            out.push(a.get(pos as usize));
            continue;
        }
        let value = match &mode {
            PadMode::Empty => T::default(),
            PadMode::Constant(b, e) => {
                if pos < 0 { b.clone() } else { e.clone() }
            }
            PadMode::Edge => {
                if pos < 0 { a.get(0) } else { a.get(len - 1) }
            }
            PadMode::LinearRamp(b, e) => {
                if pos < 0 {
                    // k = 0 is the outermost position and carries the end
                    // value exactly
                    let edge = a.get(0);
                    let step = (edge - b.clone()) * T::from_usize(k).unwrap()
                        / T::from_usize(before).unwrap();
                    b.clone() + step
                } else {
                    let from_edge = pos as usize - len;
                    let edge = a.get(len - 1);
                    let step = (edge - e.clone()) * T::from_usize(after - 1 - from_edge).unwrap()
                        / T::from_usize(after).unwrap();
                    e.clone() + step
                }
            }
            PadMode::Reflect => a.get(reflect_index(pos, len)),
            PadMode::Symmetric => a.get(symmetric_index(pos, len)),
            PadMode::Wrap => a.get(wrap_index(pos, len)),
        };
        out.push(value);
    }
    Ok(Array::from_vec(out))
}

/// Materialize a grid padded by `rows.0`/`rows.1` rows and
/// `cols.0`/`cols.1` columns.
///
/// Each row is padded first, then the widened rows are padded vertically,
/// both with the same mode.
pub fn pad_grid<G, T>(g: &G,
                      rows: (usize, usize),
                      cols: (usize, usize),
                      mode: PadMode<T>)
                      -> Result<Matrix<T>, ArrayError>
where
    G: Grid<Elem = T>,
    T: Clone + Default + Num + FromPrimitive,
{
    let (nrows, ncols) = g.dim();
    let wide = ncols + cols.0 + cols.1;

    let mut padded_rows: Vec<Array<T>> = Vec::with_capacity(nrows);
    for i in 0..nrows {
        let row: Vec<T> = (0..ncols).map(|j| g.get(i, j)).collect();
        padded_rows.push(pad(&row, cols, mode.clone())?);
    }

    let mut columns: Vec<Array<T>> = Vec::with_capacity(wide);
    for j in 0..wide {
        let col: Vec<T> = padded_rows.iter().map(|r| r[j].clone()).collect();
        columns.push(pad(&col, rows, mode.clone())?);
    }

    let tall = nrows + rows.0 + rows.1;
    let mut data = Vec::with_capacity(tall * wide);
    for i in 0..tall {
        for col in &columns {
            data.push(col[i].clone());
        }
    }
    Matrix::from_vec((tall, wide), data)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn constant_and_empty()
    {
        let a = vec![1, 2, 3];
        assert_eq!(pad(&a, (2, 1), PadMode::Constant(9, 7)).unwrap(),
                   Array::from_vec(vec![9, 9, 1, 2, 3, 7]));
        assert_eq!(pad(&a, (1, 1), PadMode::Empty).unwrap(),
                   Array::from_vec(vec![0, 1, 2, 3, 0]));
        assert_eq!(pad(&a, (1, 1), PadMode::constant(5)).unwrap(),
                   Array::from_vec(vec![5, 1, 2, 3, 5]));
    }

    #[test]
    fn edge_reflect_symmetric_wrap()
    {
        let a = vec![1, 2, 3, 4];
        assert_eq!(pad(&a, (2, 2), PadMode::Edge).unwrap(),
                   Array::from_vec(vec![1, 1, 1, 2, 3, 4, 4, 4]));
        assert_eq!(pad(&a, (2, 2), PadMode::Reflect).unwrap(),
                   Array::from_vec(vec![3, 2, 1, 2, 3, 4, 3, 2]));
        assert_eq!(pad(&a, (2, 2), PadMode::Symmetric).unwrap(),
                   Array::from_vec(vec![2, 1, 1, 2, 3, 4, 4, 3]));
        assert_eq!(pad(&a, (2, 2), PadMode::Wrap).unwrap(),
                   Array::from_vec(vec![3, 4, 1, 2, 3, 4, 1, 2]));
    }

    #[test]
    fn linear_ramp_hits_end_values()
    {
        let a = vec![4.0, 8.0];
        let p = pad(&a, (2, 2), PadMode::LinearRamp(0.0, 0.0)).unwrap();
        assert_eq!(p, Array::from_vec(vec![0.0, 2.0, 4.0, 8.0, 4.0, 0.0]));
    }

    #[test]
    fn data_modes_reject_empty_input()
    {
        let a: Vec<i32> = vec![];
        assert!(pad(&a, (1, 0), PadMode::Edge).is_err());
        assert!(pad(&a, (1, 0), PadMode::Constant(0, 0)).is_ok());
        assert!(pad(&a, (0, 0), PadMode::Wrap).is_ok());
    }

    #[test]
    fn mode_names_parse()
    {
        assert_eq!("wrap".parse::<PadMode<i32>>().unwrap(), PadMode::Wrap);
        assert!("constant".parse::<PadMode<i32>>().is_err());
    }

    #[test]
    fn grid_padding_pads_both_axes()
    {
        let m = Matrix::from_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        let p = pad_grid(&m, (1, 1), (1, 1), PadMode::Constant(0, 0)).unwrap();
        assert_eq!(p.dim(), (4, 4));
        assert_eq!(p[(1, 1)], 1);
        assert_eq!(p[(2, 2)], 4);
        assert_eq!(p[(0, 0)], 0);
        assert_eq!(p[(3, 3)], 0);
    }
}
