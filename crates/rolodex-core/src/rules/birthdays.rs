use crate::error::CoreError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// Date on which to congratulate someone born on `birthday`, if their next
/// birthday falls within `[today, today + window_days]`. Weekend birthdays
/// roll forward to the following Monday.
pub fn next_congratulation(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today);
    let window_end = today + Duration::days(window_days);
    if occurrence < today || occurrence > window_end {
        return None;
    }
    Some(roll_forward_weekend(occurrence))
}

/// First anniversary of `birthday` on or after `today`. February 29 maps to
/// February 28 in non-leap years.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

pub fn roll_forward_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = (birthday.month(), birthday.day());
    let day = if month == 2 && day == 29 && !is_leap_year(year) {
        28
    } else {
        day
    };
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(birthday)
}
