// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Textual date and date-time shape checks.
//!
//! Two shapes are accepted across the record model: a bare calendar date
//! (`YYYY-MM-DD`) and a full UTC date-time (`YYYY-MM-DDTHH:MM:SSZ`).
//!
//! Calendar validity is checked for the full date-time shape only. The
//! bare-date shape is a pattern check and nothing more: the 0.4 format
//! keeps the lenient behaviour bare dates have always had, so `2026-02-31`
//! passes as a record date. Both behaviours are covered by tests. List
//! filters use the strict [`is_valid_date`] variant instead.

fn digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Shape check for `YYYY-MM-DD`.
pub fn is_date(s: &str) -> bool {
    s.len() == 10
        && digits(&s[0..4])
        && &s[4..5] == "-"
        && digits(&s[5..7])
        && &s[7..8] == "-"
        && digits(&s[8..10])
}

/// Shape check for `YYYY-MM-DDTHH:MM:SSZ`.
pub fn is_datetime(s: &str) -> bool {
    s.len() == 20
        && is_date(&s[0..10])
        && &s[10..11] == "T"
        && digits(&s[11..13])
        && &s[13..14] == ":"
        && digits(&s[14..16])
        && &s[16..17] == ":"
        && digits(&s[17..19])
        && &s[19..20] == "Z"
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn calendar_valid(date: &str) -> bool {
    // Caller guarantees the YYYY-MM-DD shape, so the parses cannot fail.
    let year: u32 = date[0..4].parse().unwrap_or(0);
    let month: u32 = date[5..7].parse().unwrap_or(0);
    let day: u32 = date[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

/// Shape plus calendar check for the full date-time form.
pub fn is_valid_datetime(s: &str) -> bool {
    if !is_datetime(s) {
        return false;
    }
    let hour: u32 = s[11..13].parse().unwrap_or(99);
    let minute: u32 = s[14..16].parse().unwrap_or(99);
    let second: u32 = s[17..19].parse().unwrap_or(99);
    calendar_valid(&s[0..10]) && hour <= 23 && minute <= 59 && second <= 59
}

/// Shape plus calendar check for a bare date. Used by list filters,
/// not by record construction (see the module docs).
pub fn is_valid_date(s: &str) -> bool {
    is_date(s) && calendar_valid(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shapes() {
        assert!(is_date("2026-02-19"));
        assert!(!is_date("2026-2-19"));
        assert!(!is_date("2026-02-19T08:30:00Z"));
        assert!(!is_date("not-a-date!"));
        assert!(!is_date(""));
    }

    #[test]
    fn test_datetime_shapes() {
        assert!(is_datetime("2026-02-19T08:30:00Z"));
        assert!(!is_datetime("2026-02-19"));
        assert!(!is_datetime("2026-02-19T08:30:00"));
        assert!(!is_datetime("2026-02-19 08:30:00Z"));
    }

    #[test]
    fn test_datetime_calendar_check() {
        assert!(is_valid_datetime("2026-02-19T08:30:00Z"));
        assert!(is_valid_datetime("2024-02-29T00:00:00Z")); // leap year
        assert!(!is_valid_datetime("2026-02-29T08:30:00Z"));
        assert!(!is_valid_datetime("2026-13-01T08:30:00Z"));
        assert!(!is_valid_datetime("2026-04-31T08:30:00Z"));
        assert!(!is_valid_datetime("2026-02-19T24:00:00Z"));
        assert!(!is_valid_datetime("2026-02-19T08:61:00Z"));
    }

    #[test]
    fn test_bare_date_is_not_calendar_checked() {
        // Intentional: the bare shape skips the calendar check.
        assert!(is_date("2026-02-31"));
        assert!(!is_valid_date("2026-02-31"));
        assert!(is_valid_date("2026-02-28"));
    }
}
