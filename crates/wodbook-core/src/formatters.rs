// ABOUTME: Input and display formatting helpers for record values and dates
// ABOUTME: Progressive HH:MM:SS time input formatting and DD/MM/YYYY date rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Formatting helpers shared by the entry form and the record list
//!
//! `format_time_input` defines the only valid TIME value grammar the
//! ranking engine assumes: fixed-width, zero-padded, colon-delimited
//! `HH:MM:SS`. Time values are compared lexicographically, which is correct
//! exactly because every stored value went through this formatter.

use chrono::{DateTime, Utc};

use crate::constants::time_format::{HOURS_DIGITS, HOURS_MINUTES_DIGITS, MAX_DIGITS};

/// Progressively format raw time input as `HH:MM:SS`
///
/// Strips every non-digit character, then re-inserts colon separators after
/// the second and fourth digit. Applied on every keystroke, so partial
/// input stays partial: `"1"` → `"1"`, `"123"` → `"12:3"`, `"12345"` →
/// `"12:34:5"`. Digits past the sixth are discarded, finalizing the value
/// at `"HH:MM:SS"`.
///
/// # Examples
///
/// ```
/// use wodbook_core::formatters::format_time_input;
///
/// assert_eq!(format_time_input("013000"), "01:30:00");
/// assert_eq!(format_time_input("1h 30m"), "13:0");
/// ```
#[must_use]
pub fn format_time_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    if digits.len() <= HOURS_DIGITS {
        return digits;
    }
    if digits.len() <= HOURS_MINUTES_DIGITS {
        return format!("{}:{}", &digits[..HOURS_DIGITS], &digits[HOURS_DIGITS..]);
    }
    format!(
        "{}:{}:{}",
        &digits[..HOURS_DIGITS],
        &digits[HOURS_DIGITS..HOURS_MINUTES_DIGITS],
        &digits[HOURS_MINUTES_DIGITS..]
    )
}

/// Render a record date as `DD/MM/YYYY` for the record list
#[must_use]
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_progressive_formatting_as_typed() {
        assert_eq!(format_time_input(""), "");
        assert_eq!(format_time_input("1"), "1");
        assert_eq!(format_time_input("12"), "12");
        assert_eq!(format_time_input("123"), "12:3");
        assert_eq!(format_time_input("1234"), "12:34");
        assert_eq!(format_time_input("12345"), "12:34:5");
        assert_eq!(format_time_input("123456"), "12:34:56");
    }

    #[test]
    fn test_non_digits_stripped() {
        assert_eq!(format_time_input("01:30:00"), "01:30:00");
        assert_eq!(format_time_input("a1b2c3"), "12:3");
    }

    #[test]
    fn test_excess_digits_discarded() {
        assert_eq!(format_time_input("1234567890"), "12:34:56");
    }

    #[test]
    fn test_display_date() {
        let date: DateTime<Utc> = "2026-03-05T22:15:00Z".parse().unwrap();
        assert_eq!(format_display_date(&date), "05/03/2026");
    }
}
