//! The lazy view family.
//!
//! Every type in this module is a read-only container that represents a
//! computation over one or more operand containers instead of stored data.
//! A view holds borrowed operands and small parameters only; the element is
//! computed fresh on every access, and nothing is materialized until the
//! view is evaluated into an owning container. Shape relationships between
//! operands are validated when the view is constructed, not when elements
//! are accessed.

pub mod concat;
pub mod generate;
pub mod map;
pub mod outer;
pub mod reduce_axis;
pub mod select;
pub mod structural;
pub mod zip;

pub use self::concat::{col_grid, concatenate, hstack, row_grid, stack, vstack, ColGrid, Concat, RowGrid, Stacked};
pub use self::generate::{arange, geomspace, linspace, logspace, GeomSteps, LogSteps, Steps};
pub use self::map::{map, map_grid, zip_with, zip_with_grid, Binary, BinaryGrid, GridOperand, Map, MapGrid,
                    Scalar, SeqOperand};
pub use self::outer::{kron, outer, outer_with, Kron, Outer};
pub use self::reduce_axis::{reduce_axis, AxisReduced};
pub use self::select::{select, select_grid, Select, SelectGrid};
pub use self::structural::{conj_transpose, diag, diagonal, eye, eye_with, reverse, reverse_grid, rot90,
                           transpose, tril, triu, ConjTransposed, Conjugate, DiagonalMatrix, DiagonalOf,
                           Eye, Reversed, ReversedGrid, Rotated, Transposed, Triangular};
pub use self::zip::{flatten, unzip, zip, zip_grid, Flattened, First, Second, Zipped, ZippedGrid};
