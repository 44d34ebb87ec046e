//! Reduction function objects applied over iterator ranges.
//!
//! Each functor is a small value object; parameters that can be invalid
//! (quantile fraction, tolerances, degrees of freedom) are validated when
//! the functor is constructed, before any data is touched. The functors are
//! used directly by the statistics routines and as the engine behind the
//! lazy axis-reduction view.

use std::cmp::Ordering;
use std::str::FromStr;

use num_traits::{Float, One, Zero};

use crate::error::{empty_input, invalid_parameter, ArrayError};

/// A reduction of an iterator range to a single value.
pub trait Reduction<T>
{
    /// Result type of the reduction.
    type Output;

    /// True when the reduction has no defined result on an empty range.
    const NEEDS_DATA: bool = false;

    /// Apply the reduction over the range.
    fn reduce<I>(&self, iter: I) -> Result<Self::Output, ArrayError>
    where I: Iterator<Item = T>;
}

fn partial_ord<T: PartialOrd>(a: &T, b: &T) -> Ordering
{
    // NaN ordering is unspecified
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sum of a range; 0 on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeSum;

impl<T: Zero> Reduction<T> for RangeSum
{
    type Output = T;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        Ok(iter.fold(T::zero(), |acc, x| acc + x))
    }
}

/// Product of a range; 1 on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeProd;

impl<T: One> Reduction<T> for RangeProd
{
    type Output = T;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        Ok(iter.fold(T::one(), |acc, x| acc * x))
    }
}

/// Largest element of a range; fails on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeMax;

impl<T: PartialOrd> Reduction<T> for RangeMax
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, mut iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let first = iter.next().ok_or_else(empty_input)?;
        Ok(iter.fold(first, |best, x| if x > best { x } else { best }))
    }
}

/// Smallest element of a range; fails on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeMin;

impl<T: PartialOrd> Reduction<T> for RangeMin
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, mut iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let first = iter.next().ok_or_else(empty_input)?;
        Ok(iter.fold(first, |best, x| if x < best { x } else { best }))
    }
}

/// Position of the largest element; the first occurrence wins ties.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeArgMax;

impl<T: PartialOrd> Reduction<T> for RangeArgMax
{
    type Output = usize;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, mut iter: I) -> Result<usize, ArrayError>
    where I: Iterator<Item = T>
    {
        let mut best = iter.next().ok_or_else(empty_input)?;
        let mut best_at = 0;
        for (i, x) in iter.enumerate() {
            if x > best {
                best = x;
                best_at = i + 1;
            }
        }
        Ok(best_at)
    }
}

/// Position of the smallest element; the first occurrence wins ties.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeArgMin;

impl<T: PartialOrd> Reduction<T> for RangeArgMin
{
    type Output = usize;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, mut iter: I) -> Result<usize, ArrayError>
    where I: Iterator<Item = T>
    {
        let mut best = iter.next().ok_or_else(empty_input)?;
        let mut best_at = 0;
        for (i, x) in iter.enumerate() {
            if x < best {
                best = x;
                best_at = i + 1;
            }
        }
        Ok(best_at)
    }
}

/// Arithmetic mean of a range; fails on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeMean;

impl<T: Float> Reduction<T> for RangeMean
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let (sum, count) = iter.fold((T::zero(), 0usize), |(s, n), x| (s + x, n + 1));
        if count == 0 {
            return Err(empty_input());
        }
        Ok(sum / T::from(count).unwrap())
    }
}

/// Median of a range; fails on an empty range.
///
/// Copies the range and selects the middle element(s) by partial ordering;
/// the two middle elements are averaged when the count is even.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeMedian;

impl<T: Float> Reduction<T> for RangeMedian
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let mut buf: Vec<T> = iter.collect();
        let n = buf.len();
        if n == 0 {
            return Err(empty_input());
        }
        let (low, mid, _) = buf.select_nth_unstable_by(n / 2, partial_ord);
        let upper = *mid;
        if n % 2 == 1 {
            Ok(upper)
        } else {
            let lower = low.iter()
                           .cloned()
                           .fold(None::<T>, |best, x| match best {
                               Some(b) if b >= x => Some(b),
                               _ => Some(x),
                           })
                           .unwrap_or(upper);
            Ok((lower + upper) / (T::one() + T::one()))
        }
    }
}

/// Variance of a range with the given delta degrees of freedom.
///
/// The mean of squared deviations from the mean, divided by
/// `count - ddof`. Fails on an empty range or when `count <= ddof`.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeVar
{
    /// Delta degrees of freedom subtracted from the sample count.
    pub ddof: usize,
}

impl RangeVar
{
    /// Variance with the given delta degrees of freedom.
    pub fn new(ddof: usize) -> Self
    {
        RangeVar { ddof }
    }
}

impl<T: Float> Reduction<T> for RangeVar
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let buf: Vec<T> = iter.collect();
        let n = buf.len();
        if n == 0 {
            return Err(empty_input());
        }
        if n <= self.ddof {
            return Err(invalid_parameter("ddof must be smaller than the sample count"));
        }
        let count = T::from(n).unwrap();
        let mean = buf.iter().fold(T::zero(), |s, &x| s + x) / count;
        let sq_dev = buf.iter().fold(T::zero(), |s, &x| {
            let d = x - mean;
            s + d * d
        });
        Ok(sq_dev / T::from(n - self.ddof).unwrap())
    }
}

/// Standard deviation: the square root of [`RangeVar`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeStd
{
    /// Delta degrees of freedom subtracted from the sample count.
    pub ddof: usize,
}

impl RangeStd
{
    /// Standard deviation with the given delta degrees of freedom.
    pub fn new(ddof: usize) -> Self
    {
        RangeStd { ddof }
    }
}

impl<T: Float> Reduction<T> for RangeStd
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        RangeVar { ddof: self.ddof }.reduce(iter).map(T::sqrt)
    }
}

/// How a quantile between two data points is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuantileMethod
{
    /// The lower of the two neighboring ranks.
    Lower,
    /// The higher of the two neighboring ranks.
    Higher,
    /// Whichever neighboring rank is nearest.
    Nearest,
    /// The midpoint of the two neighboring values.
    Midpoint,
    /// Linear interpolation between the two neighboring values.
    Linear,
}

impl FromStr for QuantileMethod
{
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, ArrayError>
    {
        match s {
            "lower" => Ok(QuantileMethod::Lower),
            "higher" => Ok(QuantileMethod::Higher),
            "nearest" => Ok(QuantileMethod::Nearest),
            "midpoint" => Ok(QuantileMethod::Midpoint),
            "linear" => Ok(QuantileMethod::Linear),
            _ => Err(invalid_parameter("unknown quantile method")),
        }
    }
}

/// The `q`th quantile of a range.
///
/// The neighbor ranks are `floor((n - 1) * q)` and `ceil((n - 1) * q)`,
/// both found by partial ordering on a copy of the range, then combined
/// according to the method. Fails on an empty range; `q` outside `[0, 1]`
/// is rejected at construction.
#[derive(Copy, Clone, Debug)]
pub struct RangeQuantile<T>
{
    q: T,
    method: QuantileMethod,
}

impl<T: Float> RangeQuantile<T>
{
    /// Create a quantile functor; `q` must lie in `[0, 1]`.
    pub fn new(q: T, method: QuantileMethod) -> Result<Self, ArrayError>
    {
        if q < T::zero() || q > T::one() || q.is_nan() {
            return Err(invalid_parameter("quantile fraction must lie in [0, 1]"));
        }
        Ok(RangeQuantile { q, method })
    }
}

impl<T: Float> Reduction<T> for RangeQuantile<T>
{
    type Output = T;

    const NEEDS_DATA: bool = true;

    fn reduce<I>(&self, iter: I) -> Result<T, ArrayError>
    where I: Iterator<Item = T>
    {
        let mut buf: Vec<T> = iter.collect();
        let n = buf.len();
        if n == 0 {
            return Err(empty_input());
        }
        let rank = self.q * T::from(n - 1).unwrap();
        let lower = rank.floor().to_usize().unwrap();
        let upper = rank.ceil().to_usize().unwrap();
        let frac = rank - rank.floor();
        let lo = *buf.select_nth_unstable_by(lower, partial_ord).1;
        let hi = if upper == lower {
            lo
        } else {
            *buf.select_nth_unstable_by(upper, partial_ord).1
        };
        Ok(match self.method {
            QuantileMethod::Lower => lo,
            QuantileMethod::Higher => hi,
            QuantileMethod::Nearest => {
                if frac < T::from(0.5).unwrap() {
                    lo
                } else {
                    hi
                }
            }
            QuantileMethod::Midpoint => (lo + hi) / (T::one() + T::one()),
            QuantileMethod::Linear => lo + (hi - lo) * frac,
        })
    }
}

/// True when every element is nonzero; true on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeAll;

impl<T: Zero + PartialEq> Reduction<T> for RangeAll
{
    type Output = bool;

    fn reduce<I>(&self, mut iter: I) -> Result<bool, ArrayError>
    where I: Iterator<Item = T>
    {
        Ok(iter.all(|x| x != T::zero()))
    }
}

/// True when any element is nonzero; false on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeAny;

impl<T: Zero + PartialEq> Reduction<T> for RangeAny
{
    type Output = bool;

    fn reduce<I>(&self, mut iter: I) -> Result<bool, ArrayError>
    where I: Iterator<Item = T>
    {
        Ok(iter.any(|x| x != T::zero()))
    }
}

/// Number of nonzero elements; 0 on an empty range.
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeCountNonzero;

impl<T: Zero + PartialEq> Reduction<T> for RangeCountNonzero
{
    type Output = usize;

    fn reduce<I>(&self, iter: I) -> Result<usize, ArrayError>
    where I: Iterator<Item = T>
    {
        Ok(iter.filter(|x| *x != T::zero()).count())
    }
}

/// Tolerance-based equality of two values.
///
/// For finite values, `a` and `b` are close when
/// `|a - b| <= max(rtol * max(|a|, |b|), atol)`. NaN is never close to
/// anything and infinities are close only to an infinity of the same sign.
#[derive(Copy, Clone, Debug)]
pub struct IsClose<T>
{
    rtol: T,
    atol: T,
}

impl<T: Float> IsClose<T>
{
    /// Create a tolerance object; both tolerances must be non-negative.
    pub fn new(rtol: T, atol: T) -> Result<Self, ArrayError>
    {
        if rtol < T::zero() || atol < T::zero() {
            return Err(invalid_parameter("tolerances must be non-negative"));
        }
        Ok(IsClose { rtol, atol })
    }

    /// Test two values for closeness.
    #[inline]
    pub fn close(&self, a: T, b: T) -> bool
    {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        let scale = Float::max(a.abs(), b.abs());
        (a - b).abs() <= Float::max(self.rtol * scale, self.atol)
    }
}

impl<T: Float> Default for IsClose<T>
{
    /// NumPy's default tolerances: `rtol = 1e-5`, `atol = 1e-8`.
    fn default() -> Self
    {
        IsClose {
            rtol: T::from(1e-5).unwrap(),
            atol: T::from(1e-8).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sum_and_prod_identities()
    {
        let empty = std::iter::empty::<f64>();
        assert_eq!(RangeSum.reduce(empty).unwrap(), 0.0);
        assert_eq!(RangeProd.reduce(std::iter::empty::<f64>()).unwrap(), 1.0);
    }

    #[test]
    fn argmax_first_occurrence()
    {
        let v = [3, 5, 5, 1];
        assert_eq!(RangeArgMax.reduce(v.iter().copied()).unwrap(), 1);
        assert_eq!(RangeArgMin.reduce(v.iter().copied()).unwrap(), 3);
    }

    #[test]
    fn median_even_and_odd()
    {
        let odd = [3.0f64, 1.0, 2.0];
        assert_eq!(RangeMedian.reduce(odd.iter().copied()).unwrap(), 2.0);
        let even = [4.0f64, 1.0, 3.0, 2.0];
        assert_eq!(RangeMedian.reduce(even.iter().copied()).unwrap(), 2.5);
    }

    #[test]
    fn sample_variance_classic_dataset()
    {
        let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let var = RangeVar::new(1).reduce(v.iter().copied()).unwrap();
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
        let pop = RangeVar::new(0).reduce(v.iter().copied()).unwrap();
        assert!((pop - 4.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_validation()
    {
        assert!(RangeQuantile::new(1.5f64, QuantileMethod::Linear).is_err());
        assert!(RangeQuantile::new(-0.1f64, QuantileMethod::Linear).is_err());
        assert!("weighted".parse::<QuantileMethod>().is_err());
        assert_eq!("midpoint".parse::<QuantileMethod>().unwrap(), QuantileMethod::Midpoint);
    }

    #[test]
    fn quantile_methods()
    {
        let v = [1.0f64, 2.0, 3.0, 4.0];
        // rank for q = 0.5 is 1.5
        let q = |m| RangeQuantile::new(0.5f64, m).unwrap().reduce(v.iter().copied()).unwrap();
        assert_eq!(q(QuantileMethod::Lower), 2.0);
        assert_eq!(q(QuantileMethod::Higher), 3.0);
        assert_eq!(q(QuantileMethod::Nearest), 3.0);
        assert_eq!(q(QuantileMethod::Midpoint), 2.5);
        assert_eq!(q(QuantileMethod::Linear), 2.5);
    }

    #[test]
    fn isclose_edge_cases()
    {
        let tol = IsClose::<f64>::default();
        assert!(!tol.close(f64::NAN, f64::NAN));
        assert!(tol.close(f64::INFINITY, f64::INFINITY));
        assert!(!tol.close(f64::INFINITY, f64::NEG_INFINITY));
        assert!(tol.close(1.0, 1.0 + 1e-10));
        assert!(!tol.close(1.0, 1.1));
        assert!(IsClose::new(-1.0f64, 0.0).is_err());
    }
}
