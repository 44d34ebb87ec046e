//! Structural lazy views: index remapping over a single operand.

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::error::{invalid_parameter, ArrayError};
use crate::index::{Axis, Ix};
use crate::traits::{Grid, Sequence};

/// Lazy reversed sequence: element `i` is `base[len - 1 - i]`.
pub struct Reversed<'a, S>
{
    base: &'a S,
}

/// Create a lazy view of `base` in reverse order.
pub fn reverse<S: Sequence>(base: &S) -> Reversed<'_, S>
{
    Reversed { base }
}

impl<'a, S: Sequence> Sequence for Reversed<'a, S>
{
    type Elem = S::Elem;

    fn len(&self) -> usize
    {
        self.base.len()
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem
    {
        self.base.get(self.base.len() - 1 - index)
    }
}

/// Lazy grid with one axis reversed.
pub struct ReversedGrid<'a, G>
{
    base: &'a G,
    axis: Axis,
}

/// Create a lazy view of `base` reversed along `axis`.
///
/// `Axis(0)` reverses the row order, `Axis(1)` reverses every row. Returns
/// an error for an axis other than 0 or 1.
pub fn reverse_grid<G: Grid>(base: &G, axis: Axis) -> Result<ReversedGrid<'_, G>, ArrayError>
{
    if axis.index() > 1 {
        return Err(invalid_parameter("axis must be 0 or 1 for a grid"));
    }
    Ok(ReversedGrid { base, axis })
}

impl<'a, G: Grid> Grid for ReversedGrid<'a, G>
{
    type Elem = G::Elem;

    fn nrows(&self) -> usize
    {
        self.base.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.base.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> G::Elem
    {
        match self.axis {
            Axis(0) => self.base.get(self.base.nrows() - 1 - row, col),
            _ => self.base.get(row, self.base.ncols() - 1 - col),
        }
    }
}

/// Lazy rotation of a grid by a multiple of 90 degrees.
///
/// The rotation count is normalized into `[0, 4)` at construction; the
/// shape is swapped when the effective rotation is odd.
pub struct Rotated<'a, G>
{
    base: &'a G,
    times: u8,
}

/// Create a lazy view of `base` rotated counterclockwise by `times * 90`
/// degrees.
pub fn rot90<G: Grid>(base: &G, times: i32) -> Rotated<'_, G>
{
    Rotated {
        base,
        times: times.rem_euclid(4) as u8,
    }
}

impl<'a, G: Grid> Grid for Rotated<'a, G>
{
    type Elem = G::Elem;

    fn nrows(&self) -> usize
    {
        if self.times % 2 == 0 {
            self.base.nrows()
        } else {
            self.base.ncols()
        }
    }

    fn ncols(&self) -> usize
    {
        if self.times % 2 == 0 {
            self.base.ncols()
        } else {
            self.base.nrows()
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> G::Elem
    {
        let (m, n) = self.base.dim();
        match self.times {
            0 => self.base.get(row, col),
            1 => self.base.get(col, n - 1 - row),
            2 => self.base.get(m - 1 - row, n - 1 - col),
            _ => self.base.get(m - 1 - col, row),
        }
    }
}

/// Lazy transpose: element `(i, j)` is `base[(j, i)]`.
pub struct Transposed<'a, G>
{
    base: &'a G,
}

/// Create a lazy transposed view of `base`.
pub fn transpose<G: Grid>(base: &G) -> Transposed<'_, G>
{
    Transposed { base }
}

impl<'a, G: Grid> Grid for Transposed<'a, G>
{
    type Elem = G::Elem;

    fn nrows(&self) -> usize
    {
        self.base.ncols()
    }

    fn ncols(&self) -> usize
    {
        self.base.nrows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> G::Elem
    {
        self.base.get(col, row)
    }
}

/// Elementwise complex conjugation; the identity for real element types.
pub trait Conjugate: Clone
{
    /// The conjugated value.
    fn conjugate(self) -> Self;
}

macro_rules! real_conjugate {
    ($($t:ty)*) => {
        $(
            impl Conjugate for $t
            {
                #[inline]
                fn conjugate(self) -> Self
                {
                    self
                }
            }
        )*
    };
}

real_conjugate!(f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl<T> Conjugate for Complex<T>
where T: Clone + num_traits::Num + std::ops::Neg<Output = T>
{
    #[inline]
    fn conjugate(self) -> Self
    {
        self.conj()
    }
}

/// Lazy conjugate transpose: element `(i, j)` is `conj(base[(j, i)])`.
pub struct ConjTransposed<'a, G>
{
    base: &'a G,
}

/// Create a lazy conjugate-transposed view of `base`.
///
/// Equals [`transpose`] for real element types.
pub fn conj_transpose<G>(base: &G) -> ConjTransposed<'_, G>
where
    G: Grid,
    G::Elem: Conjugate,
{
    ConjTransposed { base }
}

impl<'a, G> Grid for ConjTransposed<'a, G>
where
    G: Grid,
    G::Elem: Conjugate,
{
    type Elem = G::Elem;

    fn nrows(&self) -> usize
    {
        self.base.ncols()
    }

    fn ncols(&self) -> usize
    {
        self.base.nrows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> G::Elem
    {
        self.base.get(col, row).conjugate()
    }
}

/// Lazy triangular extraction: elements on the kept side of the diagonal
/// pass through, everything else reads as zero.
pub struct Triangular<'a, G>
{
    base: &'a G,
    lower: bool,
    offset: isize,
}

/// Create a lazy lower-triangular view of `base`.
///
/// Elements at `(i, j)` with `i + offset >= j` are kept.
pub fn tril<G>(base: &G, offset: isize) -> Triangular<'_, G>
where
    G: Grid,
    G::Elem: Zero,
{
    Triangular { base, lower: true, offset }
}

/// Create a lazy upper-triangular view of `base`.
///
/// Elements at `(i, j)` with `i + offset <= j` are kept.
pub fn triu<G>(base: &G, offset: isize) -> Triangular<'_, G>
where
    G: Grid,
    G::Elem: Zero,
{
    Triangular { base, lower: false, offset }
}

impl<'a, G> Grid for Triangular<'a, G>
where
    G: Grid,
    G::Elem: Zero,
{
    type Elem = G::Elem;

    fn nrows(&self) -> usize
    {
        self.base.nrows()
    }

    fn ncols(&self) -> usize
    {
        self.base.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> G::Elem
    {
        let kept = if self.lower {
            row as isize + self.offset >= col as isize
        } else {
            row as isize + self.offset <= col as isize
        };
        if kept {
            self.base.get(row, col)
        } else {
            G::Elem::zero()
        }
    }
}

/// Lazy extraction of a diagonal of a grid as a sequence.
///
/// A non-negative offset selects an upper diagonal (starting in row 0), a
/// negative offset a lower diagonal (starting in column 0). The length is
/// derived from the grid shape and clamped to zero when the offset places
/// the diagonal entirely outside the grid.
pub struct DiagonalOf<'a, G>
{
    base: &'a G,
    offset: isize,
    len: usize,
}

/// Create a lazy view of the `offset` diagonal of `base`.
pub fn diagonal<G: Grid>(base: &G, offset: isize) -> DiagonalOf<'_, G>
{
    let (m, n) = base.dim();
    let len = if offset >= 0 {
        Ord::min(m, n.saturating_sub(offset as usize))
    } else {
        Ord::min(m.saturating_sub((-offset) as usize), n)
    };
    DiagonalOf { base, offset, len }
}

impl<'a, G: Grid> Sequence for DiagonalOf<'a, G>
{
    type Elem = G::Elem;

    fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> G::Elem
    {
        if self.offset >= 0 {
            self.base.get(index, index + self.offset as usize)
        } else {
            self.base.get(index + (-self.offset) as usize, index)
        }
    }
}

/// Lazy square grid with a sequence on one diagonal and zeros elsewhere.
pub struct DiagonalMatrix<'a, S>
{
    base: &'a S,
    offset: isize,
}

/// Create a lazy square grid with `base` on the `offset` diagonal.
///
/// The shape is `base.len() + |offset|` on both axes.
pub fn diag<S>(base: &S, offset: isize) -> DiagonalMatrix<'_, S>
where
    S: Sequence,
    S::Elem: Zero,
{
    DiagonalMatrix { base, offset }
}

impl<'a, S> Grid for DiagonalMatrix<'a, S>
where
    S: Sequence,
    S::Elem: Zero,
{
    type Elem = S::Elem;

    fn nrows(&self) -> usize
    {
        self.base.len() + self.offset.unsigned_abs()
    }

    fn ncols(&self) -> usize
    {
        self.nrows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> S::Elem
    {
        if col as isize - row as isize == self.offset {
            let index = if self.offset >= 0 { row } else { col };
            self.base.get(index)
        } else {
            S::Elem::zero()
        }
    }
}

/// Lazy identity-like grid: ones on the `offset` diagonal, zeros elsewhere.
///
/// No storage at all; both values are produced on demand.
pub struct Eye<T>
{
    nrows: usize,
    ncols: usize,
    offset: isize,
    marker: std::marker::PhantomData<T>,
}

/// Create a lazy `n` by `n` identity grid.
pub fn eye<T>(n: usize) -> Eye<T>
where T: Clone + Zero + One
{
    eye_with((n, n), 0)
}

/// Create a lazy grid of the given shape with ones on the `offset`
/// diagonal.
pub fn eye_with<T>(dim: (Ix, Ix), offset: isize) -> Eye<T>
where T: Clone + Zero + One
{
    Eye {
        nrows: dim.0,
        ncols: dim.1,
        offset,
        marker: std::marker::PhantomData,
    }
}

impl<T> Grid for Eye<T>
where T: Clone + Zero + One
{
    type Elem = T;

    fn nrows(&self) -> usize
    {
        self.nrows
    }

    fn ncols(&self) -> usize
    {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T
    {
        if col as isize - row as isize == self.offset {
            T::one()
        } else {
            T::zero()
        }
    }
}
