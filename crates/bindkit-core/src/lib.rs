//! # bindkit-core
//!
//! Stateless helpers for declarative UI binding layers: the small pieces of
//! math, formatting, validation, and color/array handling that are awkward to
//! express inline in a binding expression.
//!
//! ## Architecture
//!
//! There is no shared state. Each module is a set of free functions grouped
//! by concern:
//!
//! - **Numeric**: clamp, lerp, distance, range remapping
//! - **Formatting**: file sizes and durations
//! - **Dates**: token-based date formatting and "time ago" phrases
//! - **Text**: ellipsis truncation and short random ids
//! - **Validation**: email and URL shape checks
//! - **Color**: hex/RGB conversion
//! - **Collections**: unique, sum, average
//!
//! The ambient inputs (wall clock, randomness) are injectable through
//! [`Clock`] and [`text::generate_id_with`]. [`Toolkit`] bundles a clock
//! with a [`Config`] for callers that want configured defaults.
//!
//! ## Quick Start
//!
//! ```rust
//! use bindkit_core::{clamp, format_file_size, hex_to_rgb, truncate, Rgb};
//!
//! assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
//! assert_eq!(format_file_size(1500), "1.46 KB");
//! assert_eq!(truncate("hello world", 5), "he...");
//! assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
//! ```
//!
//! ## Error Handling
//!
//! The helpers never panic and never return errors: malformed input degrades
//! to `None`, `false`, or a degenerate number. The typed companions
//! ([`parse_url`], [`parse_date`], `str::parse::<Rgb>()`) and configuration
//! I/O return [`Result<T, Error>`]:
//!
//! ```rust
//! use bindkit_core::{Error, parse_url};
//!
//! match parse_url("example.com") {
//!     Ok(url) => println!("host: {:?}", url.host_str()),
//!     Err(Error::InvalidUrl(msg)) => eprintln!("rejected: {msg}"),
//!     Err(e) => eprintln!("unexpected: {e}"),
//! }
//! ```

/// Ambient time source
pub mod clock;
/// Slice aggregation helpers
pub mod collections;
/// Hex/RGB color conversion
pub mod color;
/// Configuration management
pub mod config;
/// Date formatting and relative time
pub mod date;
/// Error types and result aliases
pub mod error;
/// Byte-size and duration formatting
pub mod format;
/// Clamping, interpolation, and remapping
pub mod numeric;
/// Truncation and id generation
pub mod text;
/// Configured helper facade
pub mod toolkit;
/// Email and URL validation
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collections::{average, sum, unique, unique_f64};
pub use color::{Rgb, hex_to_rgb, rgb_to_hex};
pub use config::{Config, FormatConfig};
pub use date::{
    DEFAULT_DATE_FORMAT, format_date, format_date_default, from_millis, parse_date, time_ago,
    time_ago_at, time_ago_with_format,
};
pub use error::{Error, Result};
pub use format::{format_duration, format_file_size};
pub use numeric::{clamp, distance, lerp, map_range};
pub use text::{generate_id, generate_id_with, truncate};
pub use toolkit::Toolkit;
pub use validate::{is_valid_email, is_valid_url, parse_url};
