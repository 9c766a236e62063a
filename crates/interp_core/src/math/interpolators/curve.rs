//! Kernel selection, evaluation settings and the reusable [`Curve`] evaluator.
//!
//! This module provides:
//! - [`Kernel`]: Enumeration of the available interpolation kernels
//! - [`CurveConfig`]: Kernel plus boundary policy and step threshold
//! - [`Curve`]: Static dispatch evaluator binding samples to a configuration

use super::bracket::{interval_width, validate_samples};
use super::{catmull_spline, constrained_spline, linear, smooth_step, step};
use crate::traits::{Interpolator, Samples};
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::trace;

/// Interpolation kernel.
///
/// # Variants
///
/// - `Step`: Sample-and-hold with a switching threshold
/// - `Linear`: Piecewise linear
/// - `SmoothStep`: Ease-in/ease-out blend, zero slope at samples
/// - `CatmullSpline`: Catmull-Rom cubic Hermite spline
/// - `ConstrainedSpline`: Overshoot-free constrained cubic spline
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::Kernel;
///
/// assert_eq!(Kernel::CatmullSpline.as_str(), "catmull_spline");
/// assert_eq!(Kernel::default(), Kernel::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kernel {
    /// Sample-and-hold
    Step,
    /// Piecewise linear
    #[default]
    Linear,
    /// Smoothstep blend
    SmoothStep,
    /// Catmull-Rom spline
    CatmullSpline,
    /// Constrained cubic spline
    ConstrainedSpline,
}

impl Kernel {
    /// Return the kernel's snake_case name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kernel::Step => "step",
            Kernel::Linear => "linear",
            Kernel::SmoothStep => "smooth_step",
            Kernel::CatmullSpline => "catmull_spline",
            Kernel::ConstrainedSpline => "constrained_spline",
        }
    }
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluation settings for a [`Curve`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type of the step threshold
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{CurveConfig, Kernel};
///
/// // Linear, trimmed, threshold 1
/// let config: CurveConfig<f64> = CurveConfig::default();
/// assert_eq!(config.kernel, Kernel::Linear);
/// assert!(config.trim);
///
/// let spline = CurveConfig::<f64>::new(Kernel::ConstrainedSpline).with_trim(false);
/// assert!(!spline.trim);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveConfig<T: Float> {
    /// Interpolation kernel.
    pub kernel: Kernel,

    /// Clamp out-of-domain queries to the boundary values.
    ///
    /// When `false`, the boundary segment's model is extrapolated.
    /// Ignored by [`Kernel::Step`], which always holds the boundary values.
    pub trim: bool,

    /// Fractional bracket position at which [`Kernel::Step`] switches to the
    /// upper sample. Ignored by the other kernels.
    pub threshold: T,
}

impl<T: Float> Default for CurveConfig<T> {
    /// Default values:
    /// - `kernel`: `Kernel::Linear`
    /// - `trim`: `true`
    /// - `threshold`: 1
    fn default() -> Self {
        Self {
            kernel: Kernel::default(),
            trim: true,
            threshold: T::one(),
        }
    }
}

impl<T: Float> CurveConfig<T> {
    /// Configuration for `kernel` with the default trim and threshold.
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            ..Self::default()
        }
    }

    /// Step configuration switching at `threshold`.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::{CurveConfig, Kernel};
    ///
    /// let nearest = CurveConfig::step(0.5);
    /// assert_eq!(nearest.kernel, Kernel::Step);
    /// assert_eq!(nearest.threshold, 0.5);
    /// ```
    pub fn step(threshold: T) -> Self {
        Self {
            kernel: Kernel::Step,
            threshold,
            ..Self::default()
        }
    }

    /// Smoothest overshoot-free configuration: trimmed constrained spline.
    pub fn smooth() -> Self {
        Self::new(Kernel::ConstrainedSpline)
    }

    /// Replace the trim policy.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Replace the step threshold.
    pub fn with_threshold(mut self, threshold: T) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A sample set bound to a [`CurveConfig`].
///
/// Validation happens once at construction: the sources must pair up, hold at
/// least two samples and have a strictly increasing x-axis. Evaluation then
/// dispatches statically on [`Kernel`].
///
/// Sources are any [`Samples`] implementors, typically borrowed slices or a
/// [`UniformAxis`](crate::traits::UniformAxis).
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Curve, CurveConfig, Kernel};
/// use interp_core::traits::{Interpolator, UniformAxis};
///
/// let ys = [0.0, 1.0, 0.0, 1.0];
/// let axis = UniformAxis::new(0.0, 3.0, ys.len()).unwrap();
/// let curve = Curve::new(axis, &ys, CurveConfig::new(Kernel::SmoothStep)).unwrap();
///
/// assert_eq!(curve.interpolate(0.5).unwrap(), 0.5);
/// assert_eq!(curve.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Curve<T: Float, X, Y> {
    xs: X,
    ys: Y,
    config: CurveConfig<T>,
}

impl<T, X, Y> Curve<T, X, Y>
where
    T: Float,
    X: Samples<T>,
    Y: Samples<T>,
{
    /// Bind `xs` and `ys` to `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(Curve)` - Successfully constructed curve
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
    /// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
    /// * `Err(InterpolationError::DegenerateInterval)` - x-axis not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - NaN step threshold
    pub fn new(xs: X, ys: Y, config: CurveConfig<T>) -> Result<Self, InterpolationError> {
        let n = validate_samples(&xs, &ys)?;
        for i in 0..n - 1 {
            interval_width(&xs, i)?;
        }
        if config.threshold.is_nan() {
            return Err(InterpolationError::InvalidInput(
                "step threshold must not be NaN".to_string(),
            ));
        }

        trace!(
            kernel = config.kernel.as_str(),
            samples = n,
            trim = config.trim,
            "curve constructed"
        );

        Ok(Self { xs, ys, config })
    }

    /// The evaluation settings.
    #[inline]
    pub fn config(&self) -> &CurveConfig<T> {
        &self.config
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the curve has no samples.
    /// Note: This is never true for a successfully constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Evaluate the configured kernel at `x`.
    pub fn eval(&self, x: T) -> Result<T, InterpolationError> {
        let CurveConfig {
            kernel,
            trim,
            threshold,
        } = self.config;

        match kernel {
            Kernel::Step => step(&self.xs, &self.ys, x, threshold),
            Kernel::Linear => linear(&self.xs, &self.ys, x, trim),
            Kernel::SmoothStep => smooth_step(&self.xs, &self.ys, x, trim),
            Kernel::CatmullSpline => catmull_spline(&self.xs, &self.ys, x, trim),
            Kernel::ConstrainedSpline => constrained_spline(&self.xs, &self.ys, x, trim),
        }
    }

    /// Evaluate at each point of `xs`, stopping at the first error.
    pub fn eval_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl<T, X, Y> Interpolator<T> for Curve<T, X, Y>
where
    T: Float,
    X: Samples<T>,
    Y: Samples<T>,
{
    #[inline]
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.eval(x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs.first(), self.xs.last())
    }
}
