//! String helpers: ellipsis truncation and short random identifiers.

use rand::Rng;

const ELLIPSIS: &str = "...";
const ID_MAX_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Bits of randomness in the fraction an id is expanded from.
const FRACTION_BITS: u32 = 53;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;

/// Shorten `text` to `max_length` characters, ending in `...`.
///
/// Text that already fits is returned unchanged. Otherwise the first
/// `max_length - 3` characters are kept and `...` appended, so the result is
/// exactly `max_length` characters long. For `max_length < 3` nothing of the
/// original survives and the result is just `...`.
///
/// Lengths count `char`s, so multi-byte text is never cut mid-sequence.
///
/// # Examples
///
/// ```
/// use bindkit_core::text::truncate;
///
/// assert_eq!(truncate("hello world", 5), "he...");
/// assert_eq!(truncate("hi", 5), "hi");
/// assert_eq!(truncate("hello", 2), "...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let end = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(i, _)| i);

    let mut out = String::with_capacity(end + ELLIPSIS.len());
    out.push_str(&text[..end]);
    out.push_str(ELLIPSIS);
    out
}

/// Generate a short random lowercase alphanumeric id using the thread RNG.
///
/// See [`generate_id_with`].
#[must_use]
pub fn generate_id() -> String {
    generate_id_with(&mut rand::rng())
}

/// Generate a short random id from `rng`.
///
/// Draws a random fraction in `[0, 1)` and writes out the first nine digits
/// of its base-36 expansion. The expansion stops early when the fraction is
/// exhausted, so ids can be shorter than nine characters (a zero fraction
/// gives an empty string).
///
/// Not cryptographically secure and not guaranteed unique.
///
/// # Examples
///
/// ```
/// use bindkit_core::text::generate_id_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let id = generate_id_with(&mut rng);
/// assert!(id.len() <= 9);
/// assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
/// ```
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let fraction = rng.random::<u64>() & FRACTION_MASK;
    base36_fraction_digits(fraction, ID_MAX_LEN)
}

/// Base-36 digits of `numerator / 2^53`, up to `max_digits` of them.
#[allow(clippy::cast_possible_truncation)] // digit < 36
fn base36_fraction_digits(mut numerator: u64, max_digits: usize) -> String {
    let mut out = String::with_capacity(max_digits);

    while numerator != 0 && out.len() < max_digits {
        // numerator < 2^53, so numerator * 36 < 2^59
        numerator *= 36;
        let digit = (numerator >> FRACTION_BITS) as usize;
        numerator &= FRACTION_MASK;
        out.push(char::from(ID_ALPHABET[digit]));
    }

    out
}
