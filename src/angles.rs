//! NOAA solar-calculator equations.
//!
//! Each function is one column of the NOAA sunrise/sunset spreadsheet.
//! Angles go in and come out in degrees; conversion to radians happens at
//! each trigonometric call so that the numbers track the spreadsheet.

use crate::error::{EphemerisError, Result};
use crate::types::SolarPosition;

/// Julian day of spreadsheet day 0 at midnight.
pub const SPREADSHEET_EPOCH_JD: f64 = 2_415_018.5;
pub const J2000_JD: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Zenith distance of the sun's centre at official sunrise and sunset:
/// 90° plus 50′ of refraction and semi-diameter.
pub const SUNRISE_ZENITH: f64 = 90.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn julian_day(day_number: i64, day_fraction: f64, utc_offset_hours: f64) -> f64 {
    day_number as f64 + SPREADSHEET_EPOCH_JD + day_fraction - utc_offset_hours / 24.0
}

pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

pub fn mean_anomaly(jc: f64) -> f64 {
    357.52911 + jc * (35999.05029 - 0.0001537 * jc)
}

/// Geometric mean longitude of the sun.
///
/// Only the century term is reduced modulo 360, so the result lies in
/// `[280.46646, 640.46646)`. The sine and cosine consumers do not care.
pub fn mean_longitude(jc: f64) -> f64 {
    280.46646 + (jc * (36000.76983 + jc * 0.0003032)).rem_euclid(360.0)
}

pub fn eccentricity(jc: f64) -> f64 {
    0.016708634 - jc * (0.000042037 + 0.0001537 * jc)
}

pub fn mean_obliquity(jc: f64) -> f64 {
    23.0 + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0
}

/// Longitude of the moon's ascending node, in degrees.
fn nutation_omega(jc: f64) -> f64 {
    125.04 - 1934.136 * jc
}

pub fn obliquity(jc: f64) -> f64 {
    mean_obliquity(jc) + 0.00256 * deg_to_rad(nutation_omega(jc)).cos()
}

pub fn var_y(obliquity: f64) -> f64 {
    let half = deg_to_rad(obliquity / 2.0).tan();
    half * half
}

pub fn equation_of_center(jc: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    m.sin() * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * jc)
        + (3.0 * m).sin() * 0.000289
}

pub fn apparent_longitude(jc: f64, true_longitude: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * deg_to_rad(nutation_omega(jc)).sin()
}

pub fn solar_declination(obliquity: f64, apparent_longitude: f64) -> f64 {
    rad_to_deg((deg_to_rad(obliquity).sin() * deg_to_rad(apparent_longitude).sin()).asin())
}

/// Equation of time in minutes; positive when the sundial runs ahead of the clock.
pub fn equation_of_time(
    var_y: f64,
    mean_longitude: f64,
    eccentricity: f64,
    mean_anomaly: f64,
) -> f64 {
    let l0 = deg_to_rad(mean_longitude);
    let m = deg_to_rad(mean_anomaly);
    let e = eccentricity;
    4.0 * rad_to_deg(
        var_y * (2.0 * l0).sin() - 2.0 * e * m.sin()
            + 4.0 * e * var_y * m.sin() * (2.0 * l0).cos()
            - 0.5 * var_y * var_y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin(),
    )
}

/// Cosine of the sunrise hour angle, before any domain check.
///
/// Above 1 the sun never climbs to the horizon; below -1 it never sinks to it.
pub fn cos_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    deg_to_rad(SUNRISE_ZENITH).cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan()
}

/// Sunrise hour angle in degrees.
pub fn hour_angle(latitude: f64, declination: f64) -> Result<f64> {
    let cos_h = cos_hour_angle(latitude, declination);
    if cos_h.is_nan() {
        Err(EphemerisError::NonFinite {
            quantity: "hour angle",
        })
    } else if cos_h > 1.0 {
        Err(EphemerisError::PolarNight {
            cos_hour_angle: cos_h,
        })
    } else if cos_h < -1.0 {
        Err(EphemerisError::PolarDay {
            cos_hour_angle: cos_h,
        })
    } else {
        Ok(rad_to_deg(cos_h.acos()))
    }
}

/// Runs the solar-position columns for one Julian day.
pub fn solar_position(julian_day: f64) -> SolarPosition {
    let jc = julian_century(julian_day);
    let m = mean_anomaly(jc);
    let l0 = mean_longitude(jc);
    let e = eccentricity(jc);
    let eps0 = mean_obliquity(jc);
    let eps = obliquity(jc);
    let y = var_y(eps);
    let c = equation_of_center(jc, m);
    let true_long = l0 + c;
    let app_long = apparent_longitude(jc, true_long);
    SolarPosition {
        julian_day,
        julian_century: jc,
        mean_anomaly: m,
        mean_longitude: l0,
        eccentricity: e,
        mean_obliquity: eps0,
        obliquity: eps,
        var_y: y,
        equation_of_center: c,
        true_longitude: true_long,
        apparent_longitude: app_long,
        declination: solar_declination(eps, app_long),
        equation_of_time: equation_of_time(y, l0, e, m),
    }
}
