//! The `ndlazy` crate provides lazy one- and two-dimensional arrays for
//! general elements and for numerics.
//!
//! - The owning containers [`Array`] (1-D) and [`Matrix`] (2-D, row-major)
//!   store their elements contiguously.
//! - The [`Sequence`] and [`Grid`] traits describe read access by position;
//!   both the owning containers and every lazy view implement them, so
//!   views compose freely over other views.
//! - The [`lazy`] module holds the view family: elementwise maps and
//!   arithmetic, structural rearrangements (reverse, rotate, transpose,
//!   triangles, diagonals), generated ranges, stacking, outer products,
//!   zipping and axis reductions. A view borrows its operands, computes
//!   elements on access, and validates all shape relationships at
//!   construction time.
//! - The [`routines`] module materializes: fancy indexing, sorting,
//!   set operations over sorted data, and statistics built on the
//!   [`reduce`] functors. [`pad`](crate::pad()) extends containers by a
//!   choice of [`PadMode`].
//!
//! ## Highlights
//!
//! - Arithmetic operators on `&Array` / `&Matrix` build lazy views; nothing
//!   is computed until [`eval`](Sequence::eval).
//! - Construction-time shape checking: a mismatched binary view or stack is
//!   an [`ArrayError`], never a deferred panic at access time.
//! - Iteration in row-major or column-major [`Order`] over any grid.
//!
//! ## Crate feature flags
//!
//! - `approx`: implementations of the `approx` comparison traits for the
//!   owning containers.
//! - `serde`: serialization support for [`Array`] and [`Matrix`].

#[macro_use]
mod macros;

mod array;
#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod error;
mod index;
mod iterators;
pub mod lazy;
mod matrix;
mod ops;
mod order;
mod pad;
pub mod reduce;
pub mod routines;
mod traits;
mod views;

pub use crate::array::Array;
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::index::{ravel_index, unravel_index, Axis, Ix};
pub use crate::iterators::{GridIter, SeqIter};
pub use crate::matrix::Matrix;
pub use crate::order::Order;
pub use crate::pad::{pad, pad_grid, PadMode};
pub use crate::traits::{Grid, Sequence};
pub use crate::views::{ArrayView, ArrayViewMut, IndexView, IndexViewMut, MatrixView};

pub use crate::lazy::{arange, concatenate, conj_transpose, diag, diagonal, eye, flatten, geomspace,
                      hstack, kron, linspace, logspace, map, map_grid, outer, reduce_axis, reverse,
                      reverse_grid, rot90, select, select_grid, stack, transpose, tril, triu, unzip,
                      vstack, zip, zip_grid, zip_with, zip_with_grid, Scalar};
