// ABOUTME: Record value normalization into comparable numeric magnitudes
// ABOUTME: Weight-to-kilogram conversion and leading-integer rep parsing with explicit degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Record value normalization
//!
//! Maps a record's stored string value to a single comparable number, for
//! ordering purposes only. Normalized magnitudes are never re-persisted.
//!
//! Unparseable values form the bottom of the comparison order: they are
//! kept in ranked output (sequence length is preserved) but rank below
//! every parseable value and are never selected as "best" while a
//! parseable alternative exists. That degradation is modeled as an explicit
//! `Result` here and collapsed only at the comparator boundary, instead of
//! leaking host-language NaN comparison semantics through the engine.

use thiserror::Error;
use tracing::debug;

use wodbook_core::constants::units::LB_TO_KG;
use wodbook_core::models::{RecordType, WeightUnit};

/// A value with no comparable magnitude
///
/// Signals "unorderable - exclude from best selection but keep in sequence
/// length". Never surfaced to users; the comparator collapses it to the
/// bottom rank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value has no comparable magnitude")]
pub struct Unparseable;

/// A normalized comparison magnitude, or the bottom element
pub type Magnitude = Result<f64, Unparseable>;

/// Normalize a stored value into a comparison magnitude for its type
///
/// - `Weight`: magnitude in kilograms (see [`weight_kg`])
/// - `Reps`: the leading integer as a float (see [`reps_count`])
/// - `Time`: time values have no numeric normalization - the fixed-width
///   `HH:MM:SS` grammar makes lexicographic string comparison correct, so
///   this returns `Err(Unparseable)` and callers compare the raw strings
pub fn normalize(value: &str, record_type: RecordType) -> Magnitude {
    match record_type {
        RecordType::Weight => weight_kg(value),
        RecordType::Reps => reps_count(value).map(|n| n as f64),
        RecordType::Time => Err(Unparseable),
    }
}

/// Parse a stored weight value (`"<magnitude> <unit>"`) into kilograms
///
/// Splits on the first space; the magnitude is read with leading-float
/// semantics. A `LB` suffix converts with the fixed factor; any other
/// suffix - including a missing one - is taken as kilograms already, which
/// matches the entry form's composition rule (`"<magnitude> KG"` /
/// `"<magnitude> LB"` are the only values it produces).
pub fn weight_kg(value: &str) -> Magnitude {
    let (magnitude, unit) = match value.split_once(' ') {
        Some((magnitude, unit)) => (magnitude, Some(unit)),
        None => (value, None),
    };
    let Some(parsed) = leading_float(magnitude) else {
        debug!(value, "weight value has no numeric magnitude");
        return Err(Unparseable);
    };
    match unit {
        Some(unit) if unit == WeightUnit::Lb.as_str() => Ok(parsed * LB_TO_KG),
        _ => Ok(parsed),
    }
}

/// Parse a stored rep count with leading-integer semantics
///
/// An optional sign followed by leading decimal digits; anything after the
/// digits is discarded (`"21 unbroken"` parses as 21). No leading digits
/// means no magnitude.
pub fn reps_count(value: &str) -> Result<i64, Unparseable> {
    let trimmed = value.trim_start();
    let (sign, digits_onward) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = digits_onward
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let Ok(count) = digits.parse::<i64>() else {
        debug!(value, "rep value has no leading integer");
        return Err(Unparseable);
    };
    Ok(sign * count)
}

/// Magnitude of a stored weight value as the user entered it
///
/// The part before the first space with leading-float semantics, no unit
/// conversion. The progress timeline plots weights this way - the chart
/// shows what was logged, not the comparison form.
#[must_use]
pub fn leading_magnitude(value: &str) -> Option<f64> {
    value.split(' ').next().and_then(leading_float)
}

/// Leading-float parse: optional sign, digits, optional fractional part
fn leading_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let mut end = 0;
    let bytes = trimmed.as_bytes();
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let int_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        if int_digits > 0 || fraction_end > fraction_start {
            end = fraction_end;
        }
    }
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_weight_kg_passthrough() {
        assert_eq!(weight_kg("100 KG"), Ok(100.0));
    }

    #[test]
    fn test_weight_lb_converted() {
        let kg = weight_kg("150 LB").unwrap();
        assert!((kg - 68.0388).abs() < 1e-4);
    }

    #[test]
    fn test_weight_without_unit_taken_as_kg() {
        assert_eq!(weight_kg("80"), Ok(80.0));
        assert_eq!(weight_kg("80 STONE"), Ok(80.0));
    }

    #[test]
    fn test_weight_fractional_magnitude() {
        assert_eq!(weight_kg("102.5 KG"), Ok(102.5));
    }

    #[test]
    fn test_weight_non_numeric_is_bottom() {
        assert_eq!(weight_kg("heavy KG"), Err(Unparseable));
        assert_eq!(weight_kg(""), Err(Unparseable));
    }

    #[test]
    fn test_reps_leading_integer() {
        assert_eq!(reps_count("25"), Ok(25));
        assert_eq!(reps_count("21 unbroken"), Ok(21));
        assert_eq!(reps_count("  15"), Ok(15));
        assert_eq!(reps_count("-5"), Ok(-5));
    }

    #[test]
    fn test_reps_without_digits_is_bottom() {
        assert_eq!(reps_count("a lot"), Err(Unparseable));
        assert_eq!(reps_count(""), Err(Unparseable));
    }

    #[test]
    fn test_time_has_no_numeric_form() {
        assert_eq!(normalize("01:30:00", RecordType::Time), Err(Unparseable));
    }
}
