//! # interp_core: One-Dimensional Interpolation Kernels
//!
//! interp_core evaluates a curve through a finite set of `(x, y)` samples at an
//! arbitrary query point, providing:
//! - Interpolation kernels: step, linear, smoothstep, Catmull-Rom spline and
//!   constrained spline (`math::interpolators`)
//! - A reusable evaluator with kernel selection: `Curve`, `CurveConfig`, `Kernel`
//! - Evenly spaced axis generation (`math::range`)
//! - Linear range remapping for integers and floats (`math::remap`)
//! - Sample source abstractions: `Samples`, `Strided`, `Cast`, `UniformAxis` (`traits`)
//! - Error types: `InterpolationError`, `ErrorKind` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error type derivation
//! - tracing: Diagnostic events on rejected inputs (no subscriber installed)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::{
//!     catmull_spline, linear, step_uniform, Curve, CurveConfig, Kernel,
//! };
//! use interp_core::math::remap::map;
//! use interp_core::traits::Interpolator;
//!
//! let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 2.0, 4.0, 6.0];
//!
//! // Free-function kernels
//! assert_eq!(linear(&xs, &ys, 1.5, true).unwrap(), 3.0);
//! # assert!((catmull_spline(&xs, &ys, 1.5, true).unwrap() - 3.0).abs() < 1e-12);
//!
//! // Step over an implicit uniform axis, switching half way
//! assert_eq!(step_uniform(0.0, 10.0, &[0.0, 1.0], 6.0, 0.5).unwrap(), 1.0);
//!
//! // Reusable evaluator
//! let curve = Curve::new(&xs, &ys, CurveConfig::new(Kernel::ConstrainedSpline)).unwrap();
//! assert_eq!(curve.domain(), (0.0, 3.0));
//!
//! // Remapping
//! assert_eq!(map(5, 0, 10, 0, 100).unwrap(), 50);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `CurveConfig`, `Kernel` and
//!   `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
