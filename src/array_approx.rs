//! Tolerance comparisons for the owning containers, behind the `approx`
//! feature.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array::Array;
use crate::matrix::Matrix;

impl<T> AbsDiffEq for Array<T>
where
    T: AbsDiffEq + Clone,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon
    {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool
    {
        self.len() == other.len()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T> RelativeEq for Array<T>
where
    T: RelativeEq + Clone,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> T::Epsilon
    {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool
    {
        self.len() == other.len()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T> UlpsEq for Array<T>
where
    T: UlpsEq + Clone,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32
    {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool
    {
        self.len() == other.len()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: AbsDiffEq + Clone,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon
    {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool
    {
        self.dim() == other.dim()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: RelativeEq + Clone,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> T::Epsilon
    {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool
    {
        self.dim() == other.dim()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T> UlpsEq for Matrix<T>
where
    T: UlpsEq + Clone,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32
    {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool
    {
        self.dim() == other.dim()
            && self.as_slice()
                   .iter()
                   .zip(other.as_slice())
                   .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests
{
    use approx::assert_abs_diff_eq;

    use crate::array::Array;

    #[test]
    fn arrays_compare_within_tolerance()
    {
        let a = Array::from_vec(vec![1.0, 2.0]);
        let b = Array::from_vec(vec![1.0 + 1e-12, 2.0]);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}
