//! Best-effort coercion of the text fields a sensor node submits.
//!
//! Nothing in here fails: a value that is missing or does not parse simply
//! becomes `None` and is stored as NULL.

pub mod gps;

use std::borrow::Cow;

pub use gps::{GpsFix, GpsKey};

/// Parses a decimal reading such as an analog value, voltage or TDS value.
pub fn parse_decimal(raw: Option<&str>) -> Option<f64> {
    strip_digit_separators(raw?.trim())?.parse().ok()
}

/// Parses an integer reading (turbidity). Fractions and values outside the
/// `i64` range are rejected.
pub fn parse_integer(raw: Option<&str>) -> Option<i64> {
    strip_digit_separators(raw?.trim())?.parse().ok()
}

/// Removes `_` separators that sit between two digits (`1_000`). Any other
/// underscore makes the input invalid.
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !(before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(|b| b.is_ascii_digit())) {
            return None;
        }
    }
    Some(Cow::Owned(out))
}
