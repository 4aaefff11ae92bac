//! Sunrise, solar noon and sunset for a fixed observer.
//!
//! A [`SolarEphemeris`] only holds its [`ObserverLocation`]. Every query
//! runs the whole pipeline from the calendar date, so results never depend
//! on earlier calls and instances can be shared freely between threads.

use chrono::NaiveTime;
use log::{debug, trace};

use crate::angles;
use crate::day_fraction::{
    day_number, fraction_of_day, time_from_day_fraction, wrap_day_fraction,
};
use crate::error::{EphemerisError, Result};
use crate::types::{CivilMoment, DayFractions, ObserverLocation, SolarPosition, SunTimes};

/// Minutes of clock time per degree of hour angle or longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;
const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarEphemeris {
    location: ObserverLocation,
}

impl SolarEphemeris {
    /// Latitude and longitude in decimal degrees, north and east positive.
    ///
    /// Coordinates are not range-checked. A latitude too close to a pole
    /// surfaces later as a polar error from the query.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::at(ObserverLocation::new(latitude, longitude))
    }

    pub fn at(location: ObserverLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> ObserverLocation {
        self.location
    }

    /// Solar quantities at the instant named by `moment`.
    pub fn solar_position(&self, moment: &CivilMoment) -> SolarPosition {
        let jd = angles::julian_day(
            day_number(moment.date),
            fraction_of_day(moment.time),
            moment.utc_offset_hours(),
        );
        angles::solar_position(jd)
    }

    /// Rise, noon and set as wrapped day fractions on the clock of `moment`'s offset.
    pub fn day_fractions(&self, moment: &CivilMoment) -> Result<DayFractions> {
        let ObserverLocation {
            latitude,
            longitude,
        } = self.location;
        if !latitude.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: "latitude",
            });
        }
        if !longitude.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: "longitude",
            });
        }

        let pos = self.solar_position(moment);
        trace!(
            "jd={} jc={} M={} L0={} e={} obliq={} C={} app_long={} decl={} eqtime={}",
            pos.julian_day,
            pos.julian_century,
            pos.mean_anomaly,
            pos.mean_longitude,
            pos.eccentricity,
            pos.obliquity,
            pos.equation_of_center,
            pos.apparent_longitude,
            pos.declination,
            pos.equation_of_time
        );

        let ha = angles::hour_angle(latitude, pos.declination).map_err(|e| {
            debug!(
                "no rise/set at lat {} on {}: {}",
                latitude, moment.date, e
            );
            e
        })?;

        let noon = (720.0 - MINUTES_PER_DEGREE * longitude - pos.equation_of_time
            + moment.utc_offset_hours() * 60.0)
            / MINUTES_PER_DAY;
        let half_day = ha * MINUTES_PER_DEGREE / MINUTES_PER_DAY;
        trace!("hour_angle={} noon_frac={} half_day={}", ha, noon, half_day);

        Ok(DayFractions {
            sunrise: wrap_day_fraction(noon - half_day),
            solar_noon: wrap_day_fraction(noon),
            sunset: wrap_day_fraction(noon + half_day),
        })
    }

    /// Sunrise, solar noon and sunset on the day of `moment`.
    ///
    /// The times are read on the clock of `moment`'s UTC offset and carry no
    /// date. Fails with [`EphemerisError::PolarNight`] or
    /// [`EphemerisError::PolarDay`] when the sun does not cross the horizon.
    pub fn compute_for_moment(&self, moment: &CivilMoment) -> Result<SunTimes> {
        let fractions = self.day_fractions(moment)?;
        let times = SunTimes {
            sunrise: time_from_day_fraction(fractions.sunrise)?,
            solar_noon: time_from_day_fraction(fractions.solar_noon)?,
            sunset: time_from_day_fraction(fractions.sunset)?,
        };
        debug!(
            "sun times at ({}, {}) for {}: rise {} noon {} set {}",
            self.location.latitude,
            self.location.longitude,
            moment.naive(),
            times.sunrise,
            times.solar_noon,
            times.sunset
        );
        Ok(times)
    }

    pub fn sunrise(&self, moment: &CivilMoment) -> Result<NaiveTime> {
        Ok(self.compute_for_moment(moment)?.sunrise)
    }

    pub fn solar_noon(&self, moment: &CivilMoment) -> Result<NaiveTime> {
        Ok(self.compute_for_moment(moment)?.solar_noon)
    }

    pub fn sunset(&self, moment: &CivilMoment) -> Result<NaiveTime> {
        Ok(self.compute_for_moment(moment)?.sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sydney_local() -> CivilMoment {
        CivilMoment::from_ymd_hms(2010, 12, 18, 0, 0, 0)
            .unwrap()
            .with_offset_hours(11.0)
            .unwrap()
    }

    #[test]
    fn nan_latitude_is_not_a_polar_error() {
        let err = SolarEphemeris::new(f64::NAN, 0.0)
            .compute_for_moment(&sydney_local())
            .unwrap_err();
        assert_eq!(err, EphemerisError::NonFinite { quantity: "latitude" });
    }

    #[test]
    fn infinite_longitude_is_rejected() {
        let err = SolarEphemeris::new(10.0, f64::INFINITY)
            .day_fractions(&sydney_local())
            .unwrap_err();
        assert_eq!(err.kind(), "non_finite");
    }

    #[test]
    fn default_observer_is_sydney() {
        let eph = SolarEphemeris::default();
        assert_eq!(eph.location(), ObserverLocation::new(-33.8688, 151.2093));
    }
}
