use chrono::{NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Australia::Sydney;

use noaa_suntimes::{CivilMoment, EphemerisError, SolarEphemeris};

/// Sunset plus `delay`, kept on the same calendar date: the clock wraps past
/// midnight but the date does not advance.
fn start_after_sunset(sunset: NaiveTime, delay: TimeDelta) -> NaiveTime {
    sunset.overflowing_add_signed(delay).0
}

fn main() -> Result<(), EphemerisError> {
    let latitude = -33.8688;
    let longitude = 151.2093;

    let dt = Sydney.with_ymd_and_hms(2010, 12, 18, 0, 0, 0).unwrap();
    let moment = CivilMoment::from(&dt);

    let eph = SolarEphemeris::new(latitude, longitude);
    let pos = eph.solar_position(&moment);
    let times = eph.compute_for_moment(&moment)?;

    println!("=== Sun Times Calculation Example ===");
    println!(
        "Location: Sydney, NSW ({:.4}°S, {:.4}°E)",
        -latitude, longitude
    );
    println!("Date: {} (UTC{:+})", moment.date, moment.utc_offset_hours());
    println!();
    println!("--- Solar Position at Local Midnight ---");
    println!("Julian day: {:.5}", pos.julian_day);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!();
    println!("--- Sun Times ---");
    println!("Sunrise:    {}", times.sunrise);
    println!("Solar noon: {}", times.solar_noon);
    println!("Sunset:     {}", times.sunset);
    println!("Daylight:   {} minutes", times.daylight().num_minutes());
    println!();

    let start = start_after_sunset(times.sunset, TimeDelta::hours(1));
    println!("--- Filming Start ---");
    println!("{}T{}", moment.date.format("%Y-%m-%d"), start.format("%H:%M:%S"));
    println!();

    let polar = SolarEphemeris::new(75.0, 0.0);
    let winter = CivilMoment::from_ymd_hms(2023, 12, 21, 12, 0, 0)?;
    match polar.compute_for_moment(&winter) {
        Ok(t) => println!("75°N on {}: sunrise {}", winter.date, t.sunrise),
        Err(e) => println!("75°N on {}: {}", winter.date, e),
    }

    Ok(())
}
