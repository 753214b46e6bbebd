//! Equation of time: true solar time minus mean solar time.
//!
//! The Sun's rise and set are located on the zone day of the civil date
//! (midnight to midnight on the reference meridian); their midpoint, moved
//! to local mean time, is the Sun's transit, and `12h − transit` is the
//! equation of time. Where there is no rise/set pair (polar day or night)
//! or the crossings are too asymmetric to trust, the Sun's hour angle at
//! local mean noon is used instead.

use sizhu_time::CalendarMoment;
use tracing::debug;

use crate::celestial::{Body, hour_angle_hours, sin_altitude};
use crate::config::SolarTimeConfig;
use crate::location::GeoLocation;
use crate::transit::find_crossings;

/// How an equation-of-time value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EotMethod {
    /// Midpoint of sunrise and sunset.
    HorizonMidpoint,
    /// Sun's hour angle at local mean noon.
    HourAngle,
}

/// Equation of time for one civil date and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfTime {
    /// Minutes to add to local mean time to get true solar time.
    pub minutes: f64,
    pub method: EotMethod,
}

/// Wrap minutes into [−720, 720).
fn wrap_minutes(m: f64) -> f64 {
    (m + 720.0).rem_euclid(1440.0) - 720.0
}

/// Equation of time on the civil date of `moment` at `location`.
///
/// Only the date of `moment` matters; the time of day is ignored.
pub fn equation_of_time(
    moment: &CalendarMoment,
    location: &GeoLocation,
    config: &SolarTimeConfig,
) -> EquationOfTime {
    let jdn = moment.day_number() as f64;
    // UT Julian Days of zone midnight and of local mean noon on this civil date
    let window_start = jdn - 0.5 - config.reference_longitude_deg / 360.0;
    let mean_noon = jdn - location.longitude_deg() / 360.0;
    let zone_to_mean_hours = config.longitude_offset_minutes(location.longitude_deg()) / 60.0;
    let sin_h0 = config.sun_horizon_deg.to_radians().sin();
    let altitude =
        |hour: f64| sin_altitude(Body::Sun, window_start + hour / 24.0, location) - sin_h0;

    let hour_angle_min = hour_angle_hours(Body::Sun, mean_noon, location) * 60.0;

    match find_crossings(altitude).both() {
        Some((rise, set)) => {
            let set = if set < rise { set + 24.0 } else { set };
            let mut transit = ((rise + set) / 2.0).rem_euclid(24.0);
            if altitude(transit) < 0.0 {
                // midpoint of a set→rise pair is the lower culmination
                transit = (transit + 12.0).rem_euclid(24.0);
            }
            let minutes = wrap_minutes((12.0 - transit - zone_to_mean_hours) * 60.0);
            if (minutes - hour_angle_min).abs() <= config.eot_tolerance_min {
                return EquationOfTime {
                    minutes,
                    method: EotMethod::HorizonMidpoint,
                };
            }
            debug!(
                %moment,
                midpoint = minutes,
                hour_angle = hour_angle_min,
                "rise/set midpoint disagrees with hour angle, using hour angle"
            );
        }
        None => {
            debug!(%moment, "no sunrise/sunset pair, using hour angle");
        }
    }

    EquationOfTime {
        minutes: hour_angle_min,
        method: EotMethod::HourAngle,
    }
}

/// Equation of time in minutes with the default configuration.
pub fn equation_of_time_minutes(moment: &CalendarMoment, location: &GeoLocation) -> f64 {
    equation_of_time(moment, location, &SolarTimeConfig::default()).minutes
}
