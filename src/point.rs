use std::array;
use std::slice;

use num_traits::NumCast;
use num_traits::ToPrimitive;
use num_traits::Zero;

/// A fixed-dimension point with value semantics.
///
/// Components are stored contiguously in a `[T; D]`, so indexed access and
/// the named accessors of [Point2]/[Point3] always observe the same storage.
///
/// # Example
///
/// ```
/// use pointnd::Point3D;
///
/// let p = Point3D::new(1.0, -5.0, 2.0);
/// assert_eq!(p.x(), p[0]);
/// assert_eq!(p.dominant_axis(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PointND<T, const D: usize>(pub [T; D]);

pub type Point2<T> = PointND<T, 2>;
pub type Point3<T> = PointND<T, 3>;

impl<T, const D: usize> PointND<T, D> {
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Checked component access, the non-panicking counterpart of indexing.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.0.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.0.get_mut(i)
    }
}

impl<T, const D: usize> PointND<T, D>
where
    T: Zero + Copy,
{
    /// The all-zero point.
    pub fn zeros() -> Self {
        Self([T::zero(); D])
    }

    /// Sets every component to zero.
    pub fn set_zero(&mut self) {
        self.0 = [T::zero(); D];
    }
}

impl<T, const D: usize> PointND<T, D>
where
    T: Copy,
{
    /// A point with every component equal to `element`.
    pub fn from_element(element: T) -> Self {
        Self([element; D])
    }

    /// Builds a point from the first `D` elements of `components`.
    ///
    /// Extra elements are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `components` holds fewer than `D` elements.
    pub fn from_slice(components: &[T]) -> Self {
        assert!(
            components.len() >= D,
            "PointND::<_, {}>::from_slice() called with a slice of {} elements",
            D,
            components.len(),
        );
        Self(array::from_fn(|i| components[i]))
    }

    /// Overwrites the components with the first `D` elements of `components`.
    ///
    /// Extra elements are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `components` holds fewer than `D` elements.
    pub fn set_from_slice(&mut self, components: &[T]) {
        assert!(
            components.len() >= D,
            "PointND::<_, {}>::set_from_slice() called with a slice of {} elements",
            D,
            components.len(),
        );
        self.0.copy_from_slice(&components[..D]);
    }

    /// Sets every component to `value`.
    pub fn fill(&mut self, value: T) {
        self.0 = [value; D];
    }

    /// Applies `f` to every component.
    pub fn map<U, F>(self, f: F) -> PointND<U, D>
    where
        F: FnMut(T) -> U,
    {
        PointND(self.0.map(f))
    }

    /// Combines matching components of `self` and `other` with `f`.
    pub fn zip_with<U, V, F>(self, other: PointND<U, D>, mut f: F) -> PointND<V, D>
    where
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        PointND(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<T, const D: usize> PointND<T, D>
where
    T: ToPrimitive + Copy,
{
    /// Converts every component to `U`.
    ///
    /// Float-to-integer casts truncate, as the primitive casts do.
    ///
    /// # Panics
    ///
    /// Panics when a component is not representable in `U`, e.g. when
    /// casting a NaN to an integer type.
    pub fn cast<U: NumCast>(self) -> PointND<U, D> {
        self.map(|component| {
            U::from(component).expect("component is not representable in the target type")
        })
    }
}

impl<T: Copy> PointND<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    /// Appends a third component.
    pub fn extend(self, z: T) -> PointND<T, 3> {
        PointND([self.0[0], self.0[1], z])
    }
}

impl<T: Copy> PointND<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    pub fn z_mut(&mut self) -> &mut T {
        &mut self.0[2]
    }

    /// Drops the third component.
    pub fn truncate(self) -> PointND<T, 2> {
        PointND([self.0[0], self.0[1]])
    }
}

impl<T, const D: usize> Default for PointND<T, D>
where
    T: Zero + Copy,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const D: usize> std::ops::Index<usize> for PointND<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize> std::ops::IndexMut<usize> for PointND<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const D: usize> IntoIterator for PointND<T, D> {
    type Item = T;
    type IntoIter = array::IntoIter<T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a PointND<T, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const D: usize> FromIterator<T> for PointND<T, D> {
    /// Builds a point from the first `D` items; extra items are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields fewer than `D` items.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        PointND(array::from_fn(|count| {
            iter.next().unwrap_or_else(|| {
                panic!(
                    "PointND::<_, {}>::from_iter() called with an iterator of {} elements",
                    D, count,
                )
            })
        }))
    }
}

impl<T, const D: usize> From<[T; D]> for PointND<T, D> {
    fn from(components: [T; D]) -> Self {
        Self(components)
    }
}

impl<T, const D: usize> From<PointND<T, D>> for [T; D] {
    fn from(point: PointND<T, D>) -> Self {
        point.0
    }
}

impl<T: Copy> From<(Point2<T>, T)> for Point3<T> {
    /// Composes a 3-D point from a 2-D point and a third component.
    fn from((xy, z): (Point2<T>, T)) -> Self {
        xy.extend(z)
    }
}

#[cfg(test)]
mod tests {
    use crate::Point2;
    use crate::Point2I;
    use crate::Point3;
    use crate::Point3I;
    use crate::PointND;

    #[test]
    fn zeros() {
        let p = PointND::<f64, 4>::zeros();
        assert!(p.iter().all(|c| *c == 0.0));
        assert_eq!(Point2I::default(), Point2I::new(0, 0));
    }

    #[test]
    fn from_element() {
        assert_eq!(PointND::<i32, 3>::from_element(7), PointND([7, 7, 7]));
    }

    #[test]
    fn from_slice_ignores_extra_elements() {
        let p = PointND::<i32, 2>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(p, PointND([1, 2]));
    }

    #[test]
    #[should_panic]
    fn from_slice_rejects_short_slice() {
        let _ = PointND::<i32, 3>::from_slice(&[1, 2]);
    }

    #[test]
    fn from_iter_takes_first_d_items() {
        let p: PointND<i32, 3> = (0..10).collect();
        assert_eq!(p, PointND([0, 1, 2]));
    }

    #[test]
    #[should_panic]
    fn from_iter_rejects_short_iterator() {
        let _: PointND<i32, 3> = (0..2).collect();
    }

    #[test]
    fn named_and_indexed_access_alias() {
        let mut p = Point3I::new(1, 2, 3);
        assert_eq!((p.x(), p.y(), p.z()), (1, 2, 3));

        *p.x_mut() = 7;
        p[2] = 9;
        assert_eq!(p[0], 7);
        assert_eq!(p.z(), 9);
        assert_eq!(p, Point3I::new(7, 2, 9));
    }

    #[test]
    fn extend_and_truncate() {
        let p = Point2I::new(1, 2).extend(3);
        assert_eq!(p, Point3I::new(1, 2, 3));
        assert_eq!(Point3::from((Point2::new(1, 2), 3)), p);
        assert_eq!(p.truncate(), Point2I::new(1, 2));
    }

    #[test]
    fn setters() {
        let mut p = Point3I::new(1, 2, 3);
        p.fill(5);
        assert_eq!(p, Point3I::new(5, 5, 5));
        p.set_from_slice(&[1, 2, 3, 4]);
        assert_eq!(p, Point3I::new(1, 2, 3));
        p.set_zero();
        assert_eq!(p, Point3I::default());
    }

    #[test]
    fn cast_truncates_floats() {
        let p = Point2::new(1.9_f64, -1.9).cast::<i64>();
        assert_eq!(p, Point2::new(1, -1));
        assert_eq!(Point2I::new(1, 2).cast::<f64>(), Point2::new(1.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn cast_rejects_unrepresentable_components() {
        let _ = Point2::new(f64::NAN, 0.0).cast::<i32>();
    }

    #[test]
    fn checked_access() {
        let p = Point2I::new(1, 2);
        assert_eq!(p.get(1), Some(&2));
        assert_eq!(p.get(2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let p = Point2I::new(1, 2);
        let _ = p[2];
    }
}
