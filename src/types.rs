use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EphemerisError, Result};

/// Observer position in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl ObserverLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for ObserverLocation {
    /// Sydney, Australia.
    fn default() -> Self {
        Self {
            latitude: -33.8688,
            longitude: 151.2093,
        }
    }
}

/// A civil date and time of day, optionally tagged with its UTC offset.
///
/// A missing offset is read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub utc_offset: Option<FixedOffset>,
}

impl CivilMoment {
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset: Option<FixedOffset>) -> Self {
        Self {
            date,
            time,
            utc_offset,
        }
    }

    /// Builds a moment from calendar fields, rejecting impossible dates and times.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            EphemerisError::invalid_timestamp(format!(
                "{:04}-{:02}-{:02} is not a valid calendar date",
                year, month, day
            ))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            EphemerisError::invalid_timestamp(format!(
                "{:02}:{:02}:{:02} is not a valid time of day",
                hour, minute, second
            ))
        })?;
        Ok(Self::new(date, time, None))
    }

    pub fn with_offset_seconds(self, seconds: i64) -> Result<Self> {
        let offset = i32::try_from(seconds)
            .ok()
            .and_then(FixedOffset::east_opt)
            .ok_or(EphemerisError::InvalidOffset { seconds })?;
        Ok(Self {
            utc_offset: Some(offset),
            ..self
        })
    }

    /// Attaches an offset given in hours east of UTC, e.g. `9.5` for Darwin.
    pub fn with_offset_hours(self, hours: f64) -> Result<Self> {
        if !hours.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: "UTC offset",
            });
        }
        let seconds = (hours * 3600.0).round();
        if seconds.abs() >= 86_400.0 {
            return Err(EphemerisError::InvalidOffset {
                seconds: seconds as i64,
            });
        }
        self.with_offset_seconds(seconds as i64)
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset
            .map_or(0.0, |o| o.local_minus_utc() as f64 / 3600.0)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl From<NaiveDateTime> for CivilMoment {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.date(), dt.time(), None)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for CivilMoment {
    fn from(dt: &DateTime<Tz>) -> Self {
        let local = dt.naive_local();
        Self::new(local.date(), local.time(), Some(dt.offset().fix()))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CivilMoment {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from(&dt)
    }
}

/// Sunrise, solar noon and sunset as bare times of day.
///
/// No date or zone is attached: the times are on the clock of the query's
/// UTC offset, and the caller pairs them with whichever date it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimes {
    pub sunrise: NaiveTime,
    pub solar_noon: NaiveTime,
    pub sunset: NaiveTime,
}

impl SunTimes {
    /// Time from sunrise to sunset, counting across midnight when sunset wraps.
    pub fn daylight(&self) -> TimeDelta {
        let span = self.sunset - self.sunrise;
        if span < TimeDelta::zero() {
            span + TimeDelta::days(1)
        } else {
            span
        }
    }
}

/// Rise, noon and set as fractions of a day, each wrapped into `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayFractions {
    pub sunrise: f64,
    pub solar_noon: f64,
    pub sunset: f64,
}

/// Every intermediate quantity of the solar-position pipeline for one instant.
///
/// Angles are in degrees, `equation_of_time` in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub julian_day: f64,
    pub julian_century: f64,
    pub mean_anomaly: f64,
    pub mean_longitude: f64,
    pub eccentricity: f64,
    pub mean_obliquity: f64,
    pub obliquity: f64,
    pub var_y: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub apparent_longitude: f64,
    pub declination: f64,
    pub equation_of_time: f64,
}
