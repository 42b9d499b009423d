//! Component reductions.
//!
//! The absolute-value selections (`absmin_component`, `dominant_axis`, ...)
//! compare components pairwise in storage order; ties resolve to the later
//! component.

use std::ops::Add;

use itertools::Itertools;
use itertools::MinMaxResult;
use num_traits::Zero;

use crate::num::Abs;
use crate::PointND;

impl<T, const D: usize> PointND<T, D>
where
    T: Copy,
{
    const DIM_IS_NONZERO: () = assert!(D > 0, "reductions require at least one component");

    /// Sum of all components.
    pub fn sum(self) -> T
    where
        T: Zero + Add<Output = T>,
    {
        self.0.into_iter().fold(T::zero(), Add::add)
    }

    /// Smallest component.
    pub fn min_component(self) -> T
    where
        T: PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut min = self.0[0];
        for component in self.0[1..].iter().copied() {
            if component < min {
                min = component;
            }
        }
        min
    }

    /// Largest component.
    pub fn max_component(self) -> T
    where
        T: PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut max = self.0[0];
        for component in self.0[1..].iter().copied() {
            if component > max {
                max = component;
            }
        }
        max
    }

    /// Smallest and largest component in a single pass.
    pub fn minmax_component(self) -> (T, T)
    where
        T: PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        match self.0.into_iter().minmax() {
            MinMaxResult::NoElements => unreachable!(),
            MinMaxResult::OneElement(only) => (only, only),
            MinMaxResult::MinMax(min, max) => (min, max),
        }
    }

    /// The signed component with the smallest absolute value.
    pub fn absmin_component(self) -> T
    where
        T: Abs + PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut best = self.0[0];
        for component in self.0[1..].iter().copied() {
            if component.abs() <= best.abs() {
                best = component;
            }
        }
        best
    }

    /// The signed component with the largest absolute value.
    pub fn absmax_component(self) -> T
    where
        T: Abs + PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut best = self.0[0];
        for component in self.0[1..].iter().copied() {
            if component.abs() >= best.abs() {
                best = component;
            }
        }
        best
    }

    /// Index of the component with the largest absolute value.
    pub fn dominant_axis(self) -> usize
    where
        T: Abs + PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut axis = 0;
        let mut best = self.0[0].abs();
        for (i, component) in self.0.into_iter().enumerate().skip(1) {
            let magnitude = component.abs();
            if magnitude >= best {
                axis = i;
                best = magnitude;
            }
        }
        axis
    }

    /// Index of the component with the smallest absolute value.
    pub fn subminant_axis(self) -> usize
    where
        T: Abs + PartialOrd,
    {
        let _: () = Self::DIM_IS_NONZERO;
        let mut axis = 0;
        let mut best = self.0[0].abs();
        for (i, component) in self.0.into_iter().enumerate().skip(1) {
            let magnitude = component.abs();
            if magnitude <= best {
                axis = i;
                best = magnitude;
            }
        }
        axis
    }
}
