use chrono::{Datelike, NaiveDate};

/// number of days in a calendar month
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
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// clamp a day-of-month into the length of the given month
pub fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    day.max(1).min(days_in_month(year, month))
}

/// add calendar months, clamping the day to the target month's length
///
/// Jan 31 + 1 month is Feb 28 (or 29 in a leap year), not an overflow into
/// March. The anchor day is preserved where the target month has it, so
/// Jan 31 + 2 months is Mar 31.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let (year, month) = shift_month(date, months);
    let day = clamp_day(year, month, date.day());
    // clamped day always exists in the target month
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// the date at `day` (clamped) in the month `months` after `date`'s month
pub fn day_in_month_after(date: NaiveDate, months: u32, day: u32) -> NaiveDate {
    let (year, month) = shift_month(date, months);
    let day = clamp_day(year, month, day);
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// year and month of the calendar month `months` after `date`'s month
fn shift_month(date: NaiveDate, months: u32) -> (i32, u32) {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + months as i32;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(date(2024, 1, 15), 1), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 1, 15), 0), date(2024, 1, 15));
    }

    #[test]
    fn test_add_months_clamps_end_of_month() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        // anchor day reappears where the month has it
        assert_eq!(add_months(date(2024, 1, 31), 2), date(2024, 3, 31));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(date(2024, 11, 30), 3), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 12, 5), 1), date(2025, 1, 5));
    }

    #[test]
    fn test_day_in_month_after_clamps() {
        // day 31 in a 30-day month resolves to day 30
        assert_eq!(day_in_month_after(date(2024, 3, 10), 1, 31), date(2024, 4, 30));
        // day 0 clamps up to day 1
        assert_eq!(day_in_month_after(date(2024, 1, 20), 1, 0), date(2024, 2, 1));
        assert_eq!(day_in_month_after(date(2024, 12, 20), 2, 5), date(2025, 2, 5));
    }
}
