//! Month-name release dates.
//!
//! Release dates arrive as `"Jan 2021"`. They are resolved to the first day of
//! that month at midnight **UTC** and expressed as unix epoch seconds. UTC is
//! used for every date comparison so results do not depend on the host zone.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValueError;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parses `"<Mon> <YYYY>"` (case-insensitive three-letter month) to epoch seconds.
pub fn parse_month_year(raw: &str) -> Result<i64, ValueError> {
    let invalid = || ValueError::InvalidDate(raw.to_string());

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [month, year] = tokens.as_slice() else {
        return Err(invalid());
    };

    let month = MONTHS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(month))
        .ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month as u32 + 1, 1).ok_or_else(invalid)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}
