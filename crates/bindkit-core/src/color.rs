//! Hex/RGB color conversion.
//!
//! Channels are `u8`, so every [`Rgb`] is in range by construction. The hex
//! side accepts `#rrggbb` or `rrggbb` in either case and always produces
//! lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// An 8-bit-per-channel RGB color.
///
/// Serializes as `{"r": .., "g": .., "b": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
        let invalid =
            || Error::InvalidColor(format!("expected 6 hex digits with optional '#', got '{s}'"));

        if digits.len() != 6 {
            return Err(invalid());
        }

        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
            let high = hex_nibble(pair[0]).ok_or_else(invalid)?;
            let low = hex_nibble(pair[1]).ok_or_else(invalid)?;
            *channel = (high << 4) | low;
        }

        let [r, g, b] = channels;
        Ok(Self { r, g, b })
    }
}

/// Value of one ASCII hex digit. Signs and whitespace are rejected.
const fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Parse `#rrggbb` / `rrggbb` (any case) into channels, or `None`.
///
/// # Examples
///
/// ```
/// use bindkit_core::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(hex_to_rgb("00FF7f"), Some(Rgb::new(0, 255, 127)));
/// assert_eq!(hex_to_rgb("zzz"), None);
/// assert_eq!(hex_to_rgb("#fff"), None);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    match hex.parse::<Rgb>() {
        Ok(rgb) => Some(rgb),
        Err(e) => {
            debug!(input = %hex, error = %e, "rejected hex color");
            None
        },
    }
}

/// Pack channels into lowercase `#rrggbb`.
///
/// # Examples
///
/// ```
/// use bindkit_core::color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
/// assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
/// ```
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}
