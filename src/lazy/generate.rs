//! Generated sequences: no operand, the element is a pure function of the
//! index.

use num_traits::Float;

use crate::error::{invalid_parameter, ArrayError};
use crate::traits::Sequence;

/// A lazy sequence of evenly spaced values.
///
/// Element `i` is `start + step * i`; nothing is stored.
#[derive(Copy, Clone, Debug)]
pub struct Steps<F>
{
    start: F,
    step: F,
    len: usize,
}

impl<F: Float> Sequence for Steps<F>
{
    type Elem = F;

    fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> F
    {
        // Calculate the value just like numpy.linspace does
        self.start + self.step * F::from(index).unwrap()
    }
}

/// Return a lazy sequence of `n` evenly spaced values, where the first
/// element is `a` and the last element is `b`.
///
/// Element type is `F`, where `F` must be either `f32` or `f64`.
#[inline]
pub fn linspace<F>(a: F, b: F, n: usize) -> Steps<F>
where F: Float
{
    let step = if n > 1 {
        let nf: F = F::from(n).unwrap();
        (b - a) / (nf - F::one())
    } else {
        F::zero()
    };
    Steps {
        start: a,
        step,
        len: n,
    }
}

/// Return a lazy sequence of values spaced by `step`, starting at `a` and
/// excluding `b`.
///
/// Numerical reasons can result in `b` being included in the result. The
/// sequence is empty when the step does not point from `a` towards `b`.
#[inline]
pub fn arange<F>(a: F, b: F, step: F) -> Steps<F>
where F: Float
{
    let steps = F::ceil((b - a) / step);
    Steps {
        start: a,
        step,
        len: steps.to_usize().unwrap_or(0),
    }
}

/// A lazy sequence of logarithmically spaced values.
///
/// Element `i` is `sign * base^(start + step * i)`.
#[derive(Copy, Clone, Debug)]
pub struct LogSteps<F>
{
    sign: F,
    base: F,
    start: F,
    step: F,
    len: usize,
}

impl<F: Float> Sequence for LogSteps<F>
{
    type Elem = F;

    fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> F
    {
        let exponent = self.start + self.step * F::from(index).unwrap();
        self.sign * self.base.powf(exponent)
    }
}

/// Return a lazy sequence of `n` logarithmically spaced values, where the
/// first element is `base.powf(a)` and the last is `base.powf(b)`.
///
/// If `base` is negative, all returned values are negative.
#[inline]
pub fn logspace<F>(base: F, a: F, b: F, n: usize) -> LogSteps<F>
where F: Float
{
    let step = if n > 1 {
        let nf: F = F::from(n).unwrap();
        (b - a) / (nf - F::one())
    } else {
        F::zero()
    };
    LogSteps {
        sign: base.signum(),
        base: base.abs(),
        start: a,
        step,
        len: n,
    }
}

/// A lazy sequence of geometrically spaced values.
///
/// Element `i` is `sign * exp(start + step * i)`, with `start` and `step`
/// precomputed in log space.
#[derive(Copy, Clone, Debug)]
pub struct GeomSteps<F>
{
    sign: F,
    start: F,
    step: F,
    len: usize,
}

impl<F: Float> Sequence for GeomSteps<F>
{
    type Elem = F;

    fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> F
    {
        let exponent = self.start + self.step * F::from(index).unwrap();
        self.sign * exponent.exp()
    }
}

/// Return a lazy sequence of `n` geometrically spaced values, where the
/// first element is `a` and the last element is `b`.
///
/// Returns an error when `a` or `b` is zero or when their signs differ.
#[inline]
pub fn geomspace<F>(a: F, b: F, n: usize) -> Result<GeomSteps<F>, ArrayError>
where F: Float
{
    if a == F::zero() || b == F::zero() {
        return Err(invalid_parameter("geometric sequence cannot include zero"));
    }
    if (a < F::zero()) != (b < F::zero()) {
        return Err(invalid_parameter("geometric sequence endpoints must have the same sign"));
    }
    let log_a = a.abs().ln();
    let log_b = b.abs().ln();
    let step = if n > 1 {
        let nf: F = F::from(n).unwrap();
        (log_b - log_a) / (nf - F::one())
    } else {
        F::zero()
    };
    Ok(GeomSteps {
        sign: a.signum(),
        start: log_a,
        step,
        len: n,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::traits::Sequence;

    #[test]
    fn linspace_endpoints()
    {
        let s = linspace(0.0f64, 1.0, 5);
        assert_eq!(s.len(), 5);
        assert_eq!(s.get(0), 0.0);
        assert_eq!(s.get(4), 1.0);
        assert_eq!(s.get(2), 0.5);
    }

    #[test]
    fn arange_excludes_stop()
    {
        let s = arange(0.0f64, 1.0, 0.25);
        assert_eq!(s.len(), 4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(arange(1.0f64, 0.0, 0.5).len(), 0);
    }

    #[test]
    fn arange_negative_step()
    {
        let s = arange(1.0f64, 0.0, -0.5);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1.0, 0.5]);
    }

    #[test]
    fn logspace_negative_base()
    {
        let s = logspace(-10.0f64, 0.0, 2.0, 3);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![-1.0, -10.0, -100.0]);
    }

    #[test]
    fn geomspace_rejects_mixed_signs()
    {
        assert!(geomspace(-1.0f64, 8.0, 4).is_err());
        assert!(geomspace(0.0f64, 8.0, 4).is_err());
        let s = geomspace(1.0f64, 8.0, 4).unwrap();
        let v = s.iter().collect::<Vec<_>>();
        assert!((v[1] - 2.0).abs() < 1e-12);
        assert!((v[3] - 8.0).abs() < 1e-12);
    }
}
