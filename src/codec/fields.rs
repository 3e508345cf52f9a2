//! Canonical fixed-width field formatters and extractors
//!
//! Every field an ACH record renders goes through one of two formatters:
//! [`numeric`] (zero-padded, right-justified) for counts, amounts and
//! identifiers, and [`alpha`] (space-padded, left-justified) for names and
//! descriptions. Both guarantee the rendered field is exactly its target
//! width: short values pad, long values truncate.
//!
//! The decode side mirrors this with [`field`] (checked fixed-column
//! extraction) and [`digits`] (lenient numeric read).
//!
//! All functions are pure for easy testing.

use crate::types::AchError;

/// Render a numeric field zero-padded and right-justified to `width`
///
/// A value wider than the field keeps its least-significant `width` digits,
/// so the result is always exactly `width` characters.
pub fn numeric(value: u64, width: usize) -> String {
    let digits = value.to_string();
    if digits.len() > width {
        digits[digits.len() - width..].to_string()
    } else {
        format!("{:0>width$}", digits)
    }
}

/// Render a text field space-padded and left-justified to `width`
///
/// A value wider than the field is truncated on the right, so the result is
/// always exactly `width` characters.
pub fn alpha(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        text.chars().take(width).collect()
    } else {
        format!("{:<width$}", text)
    }
}

/// Extract the fixed-column field at byte offsets `start..end`
///
/// Returns an error when the slice is unavailable, e.g. a multi-byte
/// character straddling a column boundary. Callers trim where the layout
/// space-pads.
pub fn field(line: &str, start: usize, end: usize) -> Result<&str, AchError> {
    line.get(start..end)
        .ok_or(AchError::FieldOutOfBounds { start, end })
}

/// Lenient numeric read: strip non-digits and parse, empty reads as zero
///
/// Mirrors the tolerant interpretation of zero-padded numeric columns;
/// a column that holds no digits (or overflows u64) contributes 0.
pub fn digits(text: &str) -> u64 {
    let filtered: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    filtered.parse().unwrap_or(0)
}
