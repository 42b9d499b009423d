//! Fixed-dimension point value types.
//!
//! [PointND] is a stack-allocated numeric tuple of compile-time dimension
//! `D`, with element-wise arithmetic, component reductions and clamping
//! helpers. [Point2] and [Point3] add named accessors and arity-specific
//! constructors over the same storage.
//!
//! # Example
//!
//! ```
//! use pointnd::{clamp, Point2D};
//!
//! let a = Point2D::new(1.0, 2.0);
//! let b = Point2D::new(3.0, 5.0);
//! assert_eq!(a + b, Point2D::new(4.0, 7.0));
//! assert_eq!((a * 2.0).sum(), 6.0);
//!
//! let bounded = clamp(b, Point2D::zeros(), Point2D::new(2.0, 2.0));
//! assert_eq!(bounded, Point2D::new(2.0, 2.0));
//! ```
//!
//! There is no recoverable error path: contract violations (short input
//! slices, out-of-range indexing, unrepresentable casts) panic, and checked
//! alternatives ([PointND::get], [PointND::get_mut]) return [Option].

mod cmp;
mod elementwise;
mod num;
mod ops;
mod point;
mod reduce;

pub use crate::elementwise::ceil;
pub use crate::elementwise::clamp;
pub use crate::elementwise::floor;
pub use crate::elementwise::max;
pub use crate::elementwise::min;
pub use crate::num::Abs;
pub use crate::point::Point2;
pub use crate::point::Point3;
pub use crate::point::PointND;

/// Float-type 2-D point.
pub type Point2F = Point2<f32>;
/// Double-type 2-D point.
pub type Point2D = Point2<f64>;
/// Signed integer-type 2-D point.
pub type Point2I = Point2<isize>;
/// Unsigned integer-type 2-D point.
pub type Point2UI = Point2<usize>;

/// Float-type 3-D point.
pub type Point3F = Point3<f32>;
/// Double-type 3-D point.
pub type Point3D = Point3<f64>;
/// Signed integer-type 3-D point.
pub type Point3I = Point3<isize>;
/// Unsigned integer-type 3-D point.
pub type Point3UI = Point3<usize>;
