use std::error::Error;
use std::fmt;

/// An error related to array shape, bounds or parameters.
#[derive(Clone, Debug)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: Option<String>,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error related to array shape, bounds or parameters.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// incompatible shapes
    IncompatibleShapes,
    /// index out of bounds
    OutOfBounds,
    /// reduction over an empty range that has no defined result
    EmptyInput,
    /// invalid parameter, rejected before any data is touched
    InvalidParameter,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError {
        repr: k,
        detail: None,
    }
}

pub(crate) fn with_detail(k: ErrorKind, detail: String) -> ArrayError
{
    ArrayError {
        repr: k,
        detail: Some(detail),
    }
}

/// Two one-dimensional operands whose lengths were required to agree.
pub(crate) fn mismatch_1d(a: usize, b: usize) -> ArrayError
{
    with_detail(ErrorKind::IncompatibleShapes, format!("lengths {} and {}", a, b))
}

/// Two two-dimensional operands whose shapes were required to agree.
pub(crate) fn mismatch_2d(a: (usize, usize), b: (usize, usize)) -> ArrayError
{
    with_detail(ErrorKind::IncompatibleShapes,
                format!("shapes ({}, {}) and ({}, {})", a.0, a.1, b.0, b.1))
}

pub(crate) fn out_of_bounds(detail: String) -> ArrayError
{
    with_detail(ErrorKind::OutOfBounds, detail)
}

pub(crate) fn empty_input() -> ArrayError
{
    from_kind(ErrorKind::EmptyInput)
}

pub(crate) fn invalid_parameter(detail: &str) -> ArrayError
{
    with_detail(ErrorKind::InvalidParameter, detail.to_owned())
}

impl PartialEq for ErrorKind
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        *self as u8 == *rhs as u8
    }
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::EmptyInput => "empty input to a reduction without an identity",
            ErrorKind::InvalidParameter => "invalid parameter",
        };
        match self.detail {
            Some(ref detail) => write!(f, "{}: {}", description, detail),
            None => f.write_str(description),
        }
    }
}
