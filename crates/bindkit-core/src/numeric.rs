//! Numeric helpers: clamping, interpolation, distance, and range remapping.
//!
//! None of these validate their inputs. Degenerate arguments (inverted clamp
//! bounds, an empty input range) produce whatever the arithmetic yields,
//! including `NaN` and infinities, instead of an error or a panic.
//!
//! The module also hosts the lossy integer-to-float conversions used by the
//! formatters, so the clippy allowances live in one place.

/// Restrict `value` to `[min, max]`.
///
/// Composed as `value.max(min).min(max)`. When `min > max` the result is
/// `max`; unlike [`f64::clamp`] this never panics.
///
/// # Examples
///
/// ```
/// use bindkit_core::numeric::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
/// // Inverted bounds: the upper bound wins
/// assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation between `start` and `end`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use bindkit_core::numeric::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start).mul_add(t, start)
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// # Examples
///
/// ```
/// use bindkit_core::numeric::distance;
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
#[inline]
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Linearly remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// An empty input range (`in_min == in_max`) divides by zero and yields
/// `NaN` or an infinity.
///
/// # Examples
///
/// ```
/// use bindkit_core::numeric::map_range;
///
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_range(0.0, -1.0, 1.0, 0.0, 255.0), 127.5);
/// assert!(map_range(1.0, 2.0, 2.0, 0.0, 1.0).is_infinite());
/// ```
#[inline]
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Convert a `u64` to `f64` with potential precision loss for large values.
///
/// # Precision
///
/// `f64` has 53 bits of mantissa. Values above 2^53 may lose precision,
/// which is acceptable for display formatting.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)] // Documented: acceptable for display
pub const fn u64_to_f64_lossy(n: u64) -> f64 {
    n as f64
}

/// Convert a `usize` to `f64` with potential precision loss for large values.
///
/// # Precision
///
/// On 64-bit platforms, values above 2^53 may lose precision. Only used for
/// collection lengths, which never get near that.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)] // Documented: collection lengths
pub const fn usize_to_f64_lossy(n: usize) -> f64 {
    n as f64
}
