//! Slice aggregation: de-duplication, sums, and averages.

use std::collections::HashSet;
use std::hash::Hash;

use crate::numeric::usize_to_f64_lossy;

/// Remove duplicates, keeping the first occurrence of each value in order.
///
/// # Examples
///
/// ```
/// use bindkit_core::collections::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(unique(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
#[must_use]
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [`unique`] for floats.
///
/// Uses SameValueZero equality: every `NaN` is equal to every other `NaN`,
/// and `0.0` equals `-0.0`. The first occurrence is kept verbatim.
///
/// # Examples
///
/// ```
/// use bindkit_core::collections::unique_f64;
///
/// let out = unique_f64(&[1.5, 0.0, -0.0, 1.5, f64::NAN, f64::NAN]);
/// assert_eq!(out.len(), 3);
/// assert!(out[2].is_nan());
/// ```
#[must_use]
pub fn unique_f64(items: &[f64]) -> Vec<f64> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .copied()
        .filter(|value| seen.insert(same_value_zero_key(*value)))
        .collect()
}

#[allow(clippy::float_cmp)] // -0.0 == 0.0 is the point
fn same_value_zero_key(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Add up all items as `f64`, starting from zero.
///
/// Integer inputs are widened before adding, so large values lose precision
/// instead of overflowing. Float sums past `f64::MAX` become infinite.
///
/// # Examples
///
/// ```
/// use bindkit_core::collections::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6.0);
/// assert_eq!(sum(&[i32::MAX, 1]), 2_147_483_648.0);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
#[must_use]
pub fn sum<T: Copy + Into<f64>>(items: &[T]) -> f64 {
    items.iter().fold(0.0, |acc, &item| acc + item.into())
}

/// Arithmetic mean, or `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use bindkit_core::collections::average;
///
/// assert_eq!(average(&[2.0, 4.0]), 3.0);
/// assert_eq!(average(&[1u32, 2]), 1.5);
/// assert_eq!(average::<f64>(&[]), 0.0);
/// ```
#[must_use]
pub fn average<T: Copy + Into<f64>>(items: &[T]) -> f64 {
    if items.is_empty() {
        0.0
    } else {
        sum(items) / usize_to_f64_lossy(items.len())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)] // Exact comparisons are intended for these values
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unique_preserves_first_occurrence_order() {
        assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert_eq!(unique(&[3, 3, 3]), vec![3]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_strings() {
        let words = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        assert_eq!(unique(&words), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_unique_f64_same_value_zero() {
        let out = unique_f64(&[-0.0, 0.0, f64::NAN, 2.5, f64::NAN, 2.5]);

        assert_eq!(out.len(), 3);
        // First occurrence kept verbatim, including the sign of zero
        assert!(out[0] == 0.0 && out[0].is_sign_negative());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 2.5);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10.0);
        assert_eq!(sum(&[0.5, 0.25]), 0.75);
        assert_eq!(sum::<i32>(&[]), 0.0);
    }

    #[test]
    fn test_sum_integer_overflow_widens_instead_of_panicking() {
        // Given: integers whose sum does not fit the element type
        // When: summing
        // Then: the result is the widened value, no panic
        assert_eq!(sum(&[i32::MAX, 1]), 2_147_483_648.0);
        assert_eq!(sum(&[i32::MIN, -1]), -2_147_483_649.0);
        assert_eq!(sum(&[u32::MAX, u32::MAX]), 8_589_934_590.0);
        assert_eq!(sum(&[u8::MAX, 1]), 256.0);
    }

    #[test]
    fn test_sum_float_overflow_is_infinite() {
        assert_eq!(sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert_eq!(sum(&[f64::MIN, f64::MIN]), f64::NEG_INFINITY);
        assert!(sum(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_average_extreme_values() {
        assert_eq!(average(&[i32::MAX, i32::MAX]), f64::from(i32::MAX));
        assert_eq!(average(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert_eq!(average(&[u32::MAX]), f64::from(u32::MAX));
    }

    #[test]
    fn test_average() {
        assert_eq!(average::<f64>(&[]), 0.0);
        assert_eq!(average(&[2.0, 4.0]), 3.0);
        assert_eq!(average(&[5.0]), 5.0);
        assert_eq!(average(&[-1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_average_propagates_nan() {
        assert!(average(&[1.0, f64::NAN]).is_nan());
    }

    proptest! {
        #[test]
        fn prop_unique_has_no_duplicates(items in prop::collection::vec(0u8..16, 0..64)) {
            let out = unique(&items);
            let as_set: HashSet<_> = out.iter().collect();
            prop_assert_eq!(as_set.len(), out.len());
            prop_assert!(items.iter().all(|item| out.contains(item)));
        }

        #[test]
        fn prop_sum_is_order_independent(mut items in prop::collection::vec(-1000i32..1000, 0..64)) {
            let forward = sum(&items);
            items.reverse();
            prop_assert_eq!(forward, sum(&items));
        }

        #[test]
        fn prop_average_within_bounds(items in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let avg = average(&items);
            let min = items.iter().copied().fold(f64::INFINITY, f64::min);
            let max = items.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(avg >= min - 1e-6 && avg <= max + 1e-6);
        }
    }
}
