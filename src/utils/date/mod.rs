// Date utility functions for the roster calendar

use chrono::{Datelike, NaiveDate, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Gregorian leap year: divisible by 4 and not by 100, unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12).
///
/// Panics on a month outside 1-12; callers are expected to pass
/// calendar months, not raw user input.
pub fn days_in_month(year: i32, month: u32) -> u32 {
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
        _ => panic!("invalid month: {} (expected 1-12)", month),
    }
}

/// Whether the given calendar date falls on a Saturday or Sunday.
///
/// Panics on an invalid date (day out of range for the month).
pub fn is_weekend(year: i32, month: u32, day: u32) -> bool {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date: {}-{:02}-{:02}", year, month, day));
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Full English month name for a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => panic!("invalid month: {} (expected 1-12)", month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, 31; "january")]
    #[test_case(3, 31; "march")]
    #[test_case(4, 30; "april")]
    #[test_case(5, 31; "may")]
    #[test_case(6, 30; "june")]
    #[test_case(7, 31; "july")]
    #[test_case(8, 31; "august")]
    #[test_case(9, 30; "september")]
    #[test_case(10, 31; "october")]
    #[test_case(11, 30; "november")]
    #[test_case(12, 31; "december")]
    fn test_days_in_month_non_february(month: u32, expected: u32) {
        assert_eq!(days_in_month(2026, month), expected);
    }

    #[test]
    fn test_february_follows_leap_rule() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2026, 2), 28);
        // Century years are not leap years unless divisible by 400
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_leap_year_predicate() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2026));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_is_weekend_known_dates() {
        // January 2026: the 3rd is a Saturday, the 4th a Sunday
        assert!(is_weekend(2026, 1, 3));
        assert!(is_weekend(2026, 1, 4));
        assert!(!is_weekend(2026, 1, 5));
        assert!(!is_weekend(2026, 1, 1));
    }

    #[test]
    #[should_panic(expected = "invalid month")]
    fn test_days_in_month_rejects_month_zero() {
        days_in_month(2026, 0);
    }

    #[test]
    #[should_panic(expected = "invalid month")]
    fn test_days_in_month_rejects_month_thirteen() {
        days_in_month(2026, 13);
    }

    #[test]
    #[should_panic(expected = "invalid date")]
    fn test_is_weekend_rejects_day_out_of_range() {
        is_weekend(2026, 2, 30);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }

    mod properties {
        use crate::utils::date::{days_in_month, is_weekend};
        use chrono::{Datelike, NaiveDate, Weekday};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn weekend_matches_chrono_weekday(
                year in 1970i32..2100,
                month in 1u32..=12,
                day_seed in 1u32..=31,
            ) {
                let day = day_seed.min(days_in_month(year, month));
                let weekday = NaiveDate::from_ymd_opt(year, month, day)
                    .expect("clamped day is valid")
                    .weekday();
                let expected = weekday == Weekday::Sat || weekday == Weekday::Sun;
                prop_assert_eq!(is_weekend(year, month, day), expected);
            }

            #[test]
            fn month_length_matches_chrono(year in 1970i32..2100, month in 1u32..=12) {
                let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first");
                let (next_year, next_month) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                let first_of_next =
                    NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next");
                let expected = first_of_next.signed_duration_since(first).num_days() as u32;
                prop_assert_eq!(days_in_month(year, month), expected);
            }
        }
    }
}
