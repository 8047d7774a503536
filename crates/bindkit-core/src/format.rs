//! Human-readable formatting for byte counts and durations.

use tracing::debug;

use crate::numeric::u64_to_f64_lossy;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Convert bytes to a human-readable size string.
///
/// The unit is `floor(log_1024(bytes))`, computed exactly from the bit length.
/// The value is rounded to two decimals (half away from zero) and printed
/// without trailing zeros.
///
/// # Precision
///
/// Sizes past the TB range are still expressed in TB rather than indexing
/// past the unit table.
///
/// # Examples
///
/// ```
/// use bindkit_core::format::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1023), "1023 B");
/// assert_eq!(format_file_size(1024), "1 KB");
/// assert_eq!(format_file_size(1500), "1.46 KB");
/// assert_eq!(format_file_size(1_048_576), "1 MB");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // exponent <= 6
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    // floor(log2(bytes)) / 10 == floor(log_1024(bytes))
    let exponent = (u64::BITS - 1 - bytes.leading_zeros()) / 10;
    let max_exponent = (SIZE_UNITS.len() - 1) as u32;
    if exponent > max_exponent {
        debug!(bytes, "file size beyond largest unit; expressing in TB");
    }
    let exponent = exponent.min(max_exponent);

    let scaled = u64_to_f64_lossy(bytes) / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{rounded} {}", SIZE_UNITS[exponent as usize])
}

/// Format a number of seconds as `h:mm:ss`, or `m:ss` below one hour.
///
/// Minutes are only zero-padded when an hour component is shown.
///
/// # Examples
///
/// ```
/// use bindkit_core::format::format_duration;
///
/// assert_eq!(format_duration(5), "0:05");
/// assert_eq!(format_duration(65), "1:05");
/// assert_eq!(format_duration(3661), "1:01:01");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
