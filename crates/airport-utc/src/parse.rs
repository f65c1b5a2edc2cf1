//! Strict local-timestamp parsing.
//!
//! Accepts exactly `YYYY-MM-DDTHH:mm` or `YYYY-MM-DDTHH:mm:ss` — anchored, no
//! surrounding whitespace, no timezone offset, no fractional seconds, no
//! date-only form. Calendar validation (field ranges, days-per-month, leap
//! years) is done on the raw fields rather than delegated to a date library,
//! so an out-of-range day like `2025-01-32` is rejected instead of being
//! normalized into February 1.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ConvertError, Result};

/// A calendar-validated local wall-clock reading, without zone or offset.
///
/// Can only be produced by [`parse_local`]; an instance never holds
/// out-of-range fields. The month is stored 0-indexed (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTimeFields {
    year: i32,
    month0: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl LocalDateTimeFields {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-indexed month (0 = January, 11 = December).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// The same reading as a chrono `NaiveDateTime`.
    ///
    /// Returns `None` only if chrono disagrees with our own calendar
    /// validation, which does not happen for fields that passed
    /// [`parse_local`].
    pub(crate) fn to_naive(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
    }
}

/// Parse and calendar-validate a strict local ISO 8601 timestamp.
///
/// # Arguments
///
/// * `input` — `"YYYY-MM-DDTHH:mm"` or `"YYYY-MM-DDTHH:mm:ss"`; when seconds
///   are absent they default to 0
///
/// # Errors
///
/// Returns [`ConvertError::InvalidTimestamp`] for any grammar violation
/// (wrong length, wrong separators, non-digit characters, offset suffix,
/// fractional seconds) or any calendar violation (month outside 1–12, day
/// outside the month's length for that year, hour/minute/second out of
/// range). Leap seconds (second = 60) are rejected.
///
/// # Examples
///
/// ```
/// use airport_utc::parse::parse_local;
///
/// let fields = parse_local("2024-02-29T12:00").unwrap();
/// assert_eq!(fields.month0(), 1); // February, stored 0-indexed
/// assert_eq!(fields.day(), 29); // 2024 is a leap year
/// assert_eq!(fields.second(), 0);
///
/// assert!(parse_local("2025-02-29T12:00").is_err());
/// ```
pub fn parse_local(input: &str) -> Result<LocalDateTimeFields> {
    let invalid = || ConvertError::InvalidTimestamp(input.to_string());
    let b = input.as_bytes();

    // Grammar: fixed-width, anchored. Length alone rules out offsets,
    // fractions, and date-only forms.
    let has_seconds = match b.len() {
        16 => false,
        19 => true,
        _ => return Err(invalid()),
    };
    if b[4] != b'-' || b[7] != b'-' || b[10] != b'T' || b[13] != b':' {
        return Err(invalid());
    }
    if has_seconds && b[16] != b':' {
        return Err(invalid());
    }

    let year = digits(&b[0..4]).ok_or_else(invalid)? as i32;
    let month = digits(&b[5..7]).ok_or_else(invalid)?;
    let day = digits(&b[8..10]).ok_or_else(invalid)?;
    let hour = digits(&b[11..13]).ok_or_else(invalid)?;
    let minute = digits(&b[14..16]).ok_or_else(invalid)?;
    let second = if has_seconds {
        digits(&b[17..19]).ok_or_else(invalid)?
    } else {
        0
    };

    // Calendar validation, in order: month, day, then time-of-day fields.
    let month0 = match month.checked_sub(1) {
        Some(m0) if m0 <= 11 => m0,
        _ => return Err(invalid()),
    };
    if day < 1 || day > days_in_month(year, month0) {
        return Err(invalid());
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(invalid());
    }

    Ok(LocalDateTimeFields {
        year,
        month0,
        day,
        hour,
        minute,
        second,
    })
}

/// Days in the given 0-indexed month, honoring the Gregorian leap-year rule.
pub(crate) fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Divisible by 4 and not by 100, unless also divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parse a fixed run of ASCII digits as a decimal number.
fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &c| {
        if c.is_ascii_digit() {
            Some(acc * 10 + (c - b'0') as u32)
        } else {
            None
        }
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields(input: &str) -> LocalDateTimeFields {
        parse_local(input).unwrap()
    }

    #[test]
    fn test_parse_with_seconds() {
        let f = fields("2025-05-02T14:30:45");
        assert_eq!(f.year(), 2025);
        assert_eq!(f.month0(), 4);
        assert_eq!(f.day(), 2);
        assert_eq!(f.hour(), 14);
        assert_eq!(f.minute(), 30);
        assert_eq!(f.second(), 45);
    }

    #[test]
    fn test_parse_without_seconds_defaults_to_zero() {
        let f = fields("2025-05-02T14:30");
        assert_eq!(f.second(), 0);
        assert_eq!(f.minute(), 30);
    }

    #[test]
    fn test_parse_rejects_date_only() {
        assert!(parse_local("2025-05-02").is_err());
    }

    #[test]
    fn test_parse_rejects_offset_suffix() {
        assert!(parse_local("2025-05-02T14:30:00Z").is_err());
        assert!(parse_local("2025-05-02T14:30:00+02:00").is_err());
    }

    #[test]
    fn test_parse_rejects_fractional_seconds() {
        assert!(parse_local("2025-05-02T14:30:00.123").is_err());
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(parse_local(" 2025-05-02T14:30").is_err());
        assert!(parse_local("2025-05-02T14:30 ").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_separators() {
        assert!(parse_local("2025/05/02T14:30").is_err());
        assert!(parse_local("2025-05-02 14:30").is_err());
        assert!(parse_local("2025-05-02T14.30").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(parse_local("2O25-05-02T14:30").is_err());
        assert!(parse_local("2025-05-02T14:3o").is_err());
    }

    #[test]
    fn test_parse_rejects_month_out_of_range() {
        assert!(parse_local("2025-00-02T14:30").is_err());
        assert!(parse_local("2025-13-02T14:30").is_err());
    }

    #[test]
    fn test_parse_rejects_day_overflow_instead_of_normalizing() {
        // Day 32 must be an error, never January 32 → February 1.
        assert!(parse_local("2025-01-32T00:00").is_err());
        assert!(parse_local("2025-04-31T00:00").is_err());
        assert!(parse_local("2025-06-31T00:00").is_err());
        assert!(parse_local("2025-09-31T00:00").is_err());
        assert!(parse_local("2025-11-31T00:00").is_err());
        assert!(parse_local("2025-02-00T00:00").is_err());
    }

    #[test]
    fn test_parse_leap_year_rules() {
        // Plain leap year
        assert!(parse_local("2024-02-29T12:00").is_ok());
        // Non-leap year
        assert!(parse_local("2025-02-29T12:00").is_err());
        // Century: not a leap year
        assert!(parse_local("1900-02-29T12:00").is_err());
        // Quadricentennial: leap year
        assert!(parse_local("2000-02-29T12:00").is_ok());
    }

    #[test]
    fn test_parse_rejects_time_out_of_range() {
        assert!(parse_local("2025-05-02T24:00").is_err());
        assert!(parse_local("2025-05-02T14:60").is_err());
        assert!(parse_local("2025-05-02T14:30:60").is_err());
    }

    #[test]
    fn test_parse_accepts_extreme_years() {
        // No floor or ceiling on the year itself.
        assert_eq!(fields("0001-01-01T00:00").year(), 1);
        assert_eq!(fields("9999-12-31T23:59:59").year(), 9999);
    }

    #[test]
    fn test_days_in_month_table() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    proptest! {
        /// Every calendar-valid field tuple round-trips through its own
        /// formatted string to the exact same fields.
        #[test]
        fn prop_parse_round_trips_valid_fields(
            year in 1i32..=9999,
            month in 1u32..=12,
            day in 1u32..=31,
            hour in 0u32..=23,
            minute in 0u32..=59,
            second in 0u32..=59,
        ) {
            prop_assume!(day <= days_in_month(year, month - 1));
            let input = format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
            );
            let f = parse_local(&input).unwrap();
            prop_assert_eq!(f.year(), year);
            prop_assert_eq!(f.month0(), month - 1);
            prop_assert_eq!(f.day(), day);
            prop_assert_eq!(f.hour(), hour);
            prop_assert_eq!(f.minute(), minute);
            prop_assert_eq!(f.second(), second);
        }
    }
}
