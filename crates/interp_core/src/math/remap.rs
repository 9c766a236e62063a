//! Linear remapping between numeric ranges.

use crate::types::InterpolationError;
use num_traits::Num;

/// Map `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// # Formula
///
/// ```text
/// (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
/// ```
///
/// Works for integers and floats alike. With integers the division truncates
/// after the multiplication, and intermediate results must fit the type.
/// Inputs outside `[in_min, in_max]` are extrapolated, not clamped.
///
/// # Returns
///
/// * `Ok(value)` - The remapped value
/// * `Err(InterpolationError::InvalidInput)` - `in_min == in_max`
///
/// # Example
///
/// ```
/// use interp_core::math::remap::map;
///
/// assert_eq!(map(5, 0, 10, 0, 100).unwrap(), 50);
/// assert_eq!(map(0.25, 0.0, 1.0, -1.0, 1.0).unwrap(), -0.5);
/// ```
pub fn map<T>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> Result<T, InterpolationError>
where
    T: Num + Copy,
{
    if in_min == in_max {
        return Err(InterpolationError::InvalidInput(
            "input range must not be empty".to_string(),
        ));
    }
    Ok((x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min)
}
