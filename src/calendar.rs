//! Month name resolution and default target-period selection

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Local, NaiveDate};

/// The twelve month display names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
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

/// Resolve a month display name to its 1-12 numeric code
pub fn month_number(name: &str) -> Result<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| ForecastError::UnknownMonth(name.to_string()))
}

/// Resolve a 1-12 numeric code to its month display name
pub fn month_name(number: u32) -> Result<&'static str> {
    if !(1..=12).contains(&number) {
        return Err(ForecastError::UnknownMonth(format!(
            "month number {} out of range",
            number
        )));
    }
    Ok(MONTH_NAMES[number as usize - 1])
}

/// Numeric code (1-12) of the month following the given date's month,
/// wrapping December to January
pub fn next_month(today: NaiveDate) -> u32 {
    (today.month() % 12) + 1
}

/// Default month proposed when no request exists yet: the month after today
pub fn default_month() -> u32 {
    next_month(Local::now().date_naive())
}
