//! Element-wise free functions over point pairs.

use num_traits::Float;

use crate::PointND;

/// Element-wise minimum of two points.
pub fn min<T, const D: usize>(a: PointND<T, D>, b: PointND<T, D>) -> PointND<T, D>
where
    T: PartialOrd + Copy,
{
    a.zip_with(b, |a, b| if b < a { b } else { a })
}

/// Element-wise maximum of two points.
pub fn max<T, const D: usize>(a: PointND<T, D>, b: PointND<T, D>) -> PointND<T, D>
where
    T: PartialOrd + Copy,
{
    a.zip_with(b, |a, b| if b > a { b } else { a })
}

/// Clamps each component of `point` to `[low, high]` of the matching axis.
pub fn clamp<T, const D: usize>(
    point: PointND<T, D>,
    low: PointND<T, D>,
    high: PointND<T, D>,
) -> PointND<T, D>
where
    T: PartialOrd + Copy,
{
    PointND(std::array::from_fn(|i| {
        num_traits::clamp(point.0[i], low.0[i], high.0[i])
    }))
}

/// Rounds each component up to the nearest integral value.
pub fn ceil<T, const D: usize>(point: PointND<T, D>) -> PointND<T, D>
where
    T: Float,
{
    point.map(Float::ceil)
}

/// Rounds each component down to the nearest integral value.
pub fn floor<T, const D: usize>(point: PointND<T, D>) -> PointND<T, D>
where
    T: Float,
{
    point.map(Float::floor)
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;
    use proptest::prelude::*;

    use crate::Point2D;
    use crate::Point2I;
    use crate::Point3I;
    use crate::PointND;

    #[test]
    fn min_max_are_elementwise() {
        let a = Point3I::new(1, 5, -2);
        let b = Point3I::new(4, 0, -2);

        assert_eq!(super::min(a, b), Point3I::new(1, 0, -2));
        assert_eq!(super::max(a, b), Point3I::new(4, 5, -2));
    }

    #[test]
    fn clamp_is_elementwise() {
        let clamped = super::clamp(
            Point2I::new(5, -5),
            Point2I::new(0, 0),
            Point2I::new(3, 3),
        );
        assert_eq!(clamped, Point2I::new(3, 0));
    }

    #[test]
    fn ceil_floor() {
        let p = Point2D::new(1.2, -1.2);
        assert_ulps_eq!(super::ceil(p), Point2D::new(2.0, -1.0));
        assert_ulps_eq!(super::floor(p), Point2D::new(1.0, -2.0));
    }

    proptest!(
        #[test]
        fn clamped_components_stay_within_bounds(
            components in prop::array::uniform3(-100..100_i32),
            low in prop::array::uniform3(-50..0_i32),
            span in prop::array::uniform3(0..50_i32),
        ) {
            let low = PointND(low);
            let high = low + PointND(span);
            let clamped = super::clamp(PointND(components), low, high);
            for i in 0..3 {
                prop_assert!(low[i] <= clamped[i] && clamped[i] <= high[i]);
            }
        }
    );
}
