use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::error::{EphemerisError, Result};

/// Proleptic Gregorian ordinal of 1899-12-31, where 0001-01-01 is 1.
///
/// Subtracting it numbers days the way the NOAA spreadsheet does, with
/// 1900-01-01 as day 1.
pub const SPREADSHEET_EPOCH_ORDINAL: i64 = 734_124 - 40_529;

pub fn day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - SPREADSHEET_EPOCH_ORDINAL
}

/// Time of day as a fraction of 24 hours, ignoring sub-second precision.
pub fn fraction_of_day(time: NaiveTime) -> f64 {
    (time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0) / 24.0
}

/// Wraps a day fraction into `[0, 1)`.
pub fn wrap_day_fraction(fraction: f64) -> f64 {
    let wrapped = fraction.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Splits a day fraction into whole hours, minutes and seconds, truncating each.
pub fn hms_from_day_fraction(fraction: f64) -> Result<(u32, u32, u32)> {
    if !fraction.is_finite() {
        return Err(EphemerisError::NonFinite {
            quantity: "day fraction",
        });
    }
    let hours = 24.0 * wrap_day_fraction(fraction);
    let h = hours.floor();
    let minutes = (hours - h) * 60.0;
    let m = minutes.floor();
    let seconds = (minutes - m) * 60.0;
    let s = seconds.floor();
    Ok(((h as u32).min(23), (m as u32).min(59), (s as u32).min(59)))
}

pub fn time_from_day_fraction(fraction: f64) -> Result<NaiveTime> {
    let (h, m, s) = hms_from_day_fraction(fraction)?;
    NaiveTime::from_hms_opt(h, m, s).ok_or_else(|| {
        EphemerisError::invalid_timestamp(format!("{:02}:{:02}:{:02} out of range", h, m, s))
    })
}
