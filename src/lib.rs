pub mod angles;
pub mod day_fraction;
pub mod ephemeris;
pub mod error;
pub mod types;

pub use angles::{
    apparent_longitude, cos_hour_angle, deg_to_rad, eccentricity, equation_of_center,
    equation_of_time, hour_angle, julian_century, julian_day, mean_anomaly, mean_longitude,
    mean_obliquity, obliquity, rad_to_deg, solar_declination, solar_position, var_y,
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SPREADSHEET_EPOCH_JD, SUNRISE_ZENITH,
};

pub use day_fraction::{
    day_number, fraction_of_day, hms_from_day_fraction, time_from_day_fraction,
    wrap_day_fraction, SPREADSHEET_EPOCH_ORDINAL,
};

pub use ephemeris::SolarEphemeris;

pub use error::{EphemerisError, Result};

pub use types::{CivilMoment, DayFractions, ObserverLocation, SolarPosition, SunTimes};
