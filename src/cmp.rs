//! Tolerant comparisons, component-wise through the [approx] traits.
//!
//! `PartialEq` stays exact; these impls are what make
//! `assert_ulps_eq!`/`assert_relative_eq!` work on points.

use approx::AbsDiffEq;
use approx::RelativeEq;
use approx::UlpsEq;

use crate::PointND;

impl<T, const D: usize> AbsDiffEq for PointND<T, D>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const D: usize> RelativeEq for PointND<T, D>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T, const D: usize> UlpsEq for PointND<T, D>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}
