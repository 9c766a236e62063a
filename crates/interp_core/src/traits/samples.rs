//! Read-only sample sequences.
//!
//! Kernels never copy or retain caller buffers. Anything that can report its
//! length and produce the value at an index can act as an x- or y-source:
//! slices, arrays, vectors, strided views into interleaved buffers, integer
//! buffers read through [`Cast`], and implicit uniform axes ([`UniformAxis`]).

use crate::types::InterpolationError;
use num_traits::{Float, ToPrimitive};

/// Indexable read-only sequence of scalars with a known length.
///
/// Implementors must return a value for every `index < len()`; kernels never
/// call [`Samples::at`] outside that range.
///
/// # Example
///
/// ```
/// use interp_core::traits::Samples;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(Samples::<f64>::len(&xs), 4);
/// assert_eq!(xs.at(2), 2.0);
///
/// // Bracket lookup: x[1] <= 1.5 < x[2]
/// assert_eq!(xs.locate(1.5), 1);
/// ```
pub trait Samples<T: Float> {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Sample value at `index`.
    fn at(&self, index: usize) -> T;

    /// Returns true if the sequence holds no samples.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First sample. Callers must ensure the sequence is non-empty.
    #[inline]
    fn first(&self) -> T {
        self.at(0)
    }

    /// Last sample. Callers must ensure the sequence is non-empty.
    #[inline]
    fn last(&self) -> T {
        self.at(self.len() - 1)
    }

    /// Lower index `i` of the bracket `(i, i + 1)` for query `x`.
    ///
    /// Returns the index such that `at(i) <= x < at(i + 1)`, clamped to the
    /// valid segment range `[0, len - 2]`: queries below the first sample map
    /// to `0`, queries at or above the last sample map to `len - 2`.
    ///
    /// The default is a linear scan, which is adequate for the small sample
    /// sets this crate targets.
    fn locate(&self, x: T) -> usize {
        let last_segment = self.len().saturating_sub(2);
        (0..last_segment)
            .find(|&i| x < self.at(i + 1))
            .unwrap_or(last_segment)
    }
}

impl<T: Float> Samples<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Float, const N: usize> Samples<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Float> Samples<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Float, S: Samples<T> + ?Sized> Samples<T> for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        (**self).at(index)
    }

    #[inline]
    fn locate(&self, x: T) -> usize {
        (**self).locate(x)
    }
}

/// Convert a sample index to the scalar type.
#[inline]
pub(crate) fn index_to_float<T: Float>(index: usize) -> T {
    T::from(index).unwrap_or_else(T::nan)
}

/// Every `stride`-th element of a buffer, starting at `offset`.
///
/// Lets interleaved `[x0, y0, x1, y1, ...]` buffers feed both axes without
/// copying.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear;
/// use interp_core::traits::Strided;
///
/// let interleaved: [f64; 4] = [0.0, 0.0, 10.0, 100.0];
/// let xs = Strided::new(&interleaved, 0, 2).unwrap();
/// let ys = Strided::new(&interleaved, 1, 2).unwrap();
///
/// let y = linear(&xs, &ys, 5.0, true).unwrap();
/// assert!((y - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Float> Strided<'a, T> {
    /// Create a view over `data[offset]`, `data[offset + stride]`, ...
    ///
    /// # Returns
    ///
    /// * `Ok(Strided)` - The view; empty when `offset` is past the end
    /// * `Err(InterpolationError::InvalidInput)` - `stride` is zero
    pub fn new(data: &'a [T], offset: usize, stride: usize) -> Result<Self, InterpolationError> {
        if stride == 0 {
            return Err(InterpolationError::InvalidInput(
                "stride must be at least 1".to_string(),
            ));
        }

        let len = if offset >= data.len() {
            0
        } else {
            (data.len() - offset - 1) / stride + 1
        };

        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }
}

impl<T: Float> Samples<T> for Strided<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self.data[self.offset + index * self.stride]
    }
}

/// Numeric-cast view over a buffer of another primitive type.
///
/// Reads integer (or other `ToPrimitive`) samples as `T`, so ADC readings or
/// fixed-point lookup tables can be interpolated in place. Values that cannot
/// be represented in `T` read as NaN.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear;
/// use interp_core::traits::Cast;
///
/// let raw_x: [u16; 3] = [0, 512, 1024];
/// let raw_y: [i16; 3] = [-100, 0, 300];
///
/// let y: f64 = linear(&Cast::new(&raw_x), &Cast::new(&raw_y), 768.0, true).unwrap();
/// assert!((y - 150.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cast<'a, S> {
    data: &'a [S],
}

impl<'a, S: ToPrimitive + Copy> Cast<'a, S> {
    /// Wrap `data` for reading as floating-point samples.
    #[inline]
    pub fn new(data: &'a [S]) -> Self {
        Self { data }
    }
}

impl<T: Float, S: ToPrimitive + Copy> Samples<T> for Cast<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        T::from(self.data[index]).unwrap_or_else(T::nan)
    }
}

/// Implicit, evenly spaced x-axis from `min` to `max` with `len` samples.
///
/// Sample `i` is `min + (max - min) / (len - 1) * i`; the last sample is
/// exactly `max`. Bracket lookup is O(1).
///
/// # Example
///
/// ```
/// use interp_core::traits::{Samples, UniformAxis};
///
/// let axis = UniformAxis::new(0.0, 10.0, 5).unwrap();
/// assert_eq!(axis.at(1), 2.5);
/// assert_eq!(axis.last(), 10.0);
/// assert_eq!(axis.locate(6.0), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformAxis<T: Float> {
    min: T,
    max: T,
    len: usize,
    step: T,
}

impl<T: Float> UniformAxis<T> {
    /// Create a uniform axis of `len` points spanning `[min, max]`.
    ///
    /// # Returns
    ///
    /// * `Ok(UniformAxis)` - Successfully constructed axis
    /// * `Err(InterpolationError::InsufficientData)` - `len < 2`
    /// * `Err(InterpolationError::InvalidInput)` - Non-finite bound
    /// * `Err(InterpolationError::DegenerateInterval)` - `max <= min`
    pub fn new(min: T, max: T, len: usize) -> Result<Self, InterpolationError> {
        if len < 2 {
            return Err(InterpolationError::InsufficientData { got: len, need: 2 });
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(InterpolationError::InvalidInput(format!(
                "axis bounds must be finite: got [{}, {}]",
                min.to_f64().unwrap_or(f64::NAN),
                max.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if max <= min {
            return Err(InterpolationError::DegenerateInterval {
                index: 0,
                lower: min.to_f64().unwrap_or(f64::NAN),
                upper: max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let step = (max - min) / index_to_float(len - 1);
        Ok(Self {
            min,
            max,
            len,
            step,
        })
    }

    /// The implicit axis `1, 2, ..., len`.
    ///
    /// Used by the y-only kernel variants.
    pub fn indexed(len: usize) -> Result<Self, InterpolationError> {
        Self::new(T::one(), index_to_float(len), len)
    }

    /// Distance between adjacent samples.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Float> Samples<T> for UniformAxis<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        if index + 1 == self.len {
            self.max
        } else {
            self.min + self.step * index_to_float(index)
        }
    }

    fn locate(&self, x: T) -> usize {
        let last_segment = self.len - 2;
        if x <= self.min {
            return 0;
        }

        let i = ((x - self.min) / self.step)
            .floor()
            .to_usize()
            .map_or(last_segment, |i| i.min(last_segment));

        // the division can round across a knot in either direction
        if i > 0 && x < self.at(i) {
            i - 1
        } else if i < last_segment && x >= self.at(i + 1) {
            i + 1
        } else {
            i
        }
    }
}
