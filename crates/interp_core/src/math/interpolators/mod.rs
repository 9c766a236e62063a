//! One-dimensional interpolation kernels.
//!
//! Every kernel is a free function generic over `T: num_traits::Float` and over
//! the [`Samples`](crate::traits::Samples) sources holding the x and y values,
//! so slices, arrays, vectors, strided views and uniform axes all plug in
//! without copying.
//!
//! ## Available Kernels
//!
//! - [`step`]: Sample-and-hold with a switching threshold
//! - [`linear`]: Piecewise linear interpolation
//! - [`smooth_step`]: Smoothstep easing between adjacent samples
//! - [`catmull_spline`]: Catmull-Rom cubic Hermite spline
//! - [`constrained_spline`]: Constrained cubic spline, never overshoots
//!
//! Each kernel has a `_uniform` variant taking `(min_x, max_x)` in place of an
//! x array; [`step_indexed`] and [`linear_indexed`] use the axis `1, 2, ..., n`.
//!
//! ## Boundary Policy
//!
//! With `trim = true`, queries outside `[x[0], x[n-1]]` return the boundary
//! sample values. With `trim = false`, the boundary segment's model is
//! extrapolated. The step kernel always holds the boundary values.
//!
//! ## Reusable Evaluator
//!
//! [`Curve`] binds a sample set to a [`CurveConfig`], validates it once and
//! implements [`Interpolator`].
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{constrained_spline, linear};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 0.0, 1.0, 1.0];
//!
//! assert_eq!(linear(&xs, &ys, 1.5, true).unwrap(), 0.5);
//!
//! // Flat runs stay flat
//! assert_eq!(constrained_spline(&xs, &ys, 0.5, true).unwrap(), 0.0);
//! ```

mod bracket;
mod catmull;
mod constrained;
mod curve;
mod linear;
mod smooth_step;
mod step;

// Re-export public items at module level
pub use crate::traits::Interpolator;
pub use bracket::locate_bracket;
pub use catmull::{catmull_spline, catmull_spline_uniform};
pub use constrained::{constrained_spline, constrained_spline_uniform};
pub use curve::{Curve, CurveConfig, Kernel};
pub use linear::{linear, linear_indexed, linear_uniform};
pub use smooth_step::{smooth_step, smooth_step_uniform};
pub use step::{step, step_indexed, step_uniform};
