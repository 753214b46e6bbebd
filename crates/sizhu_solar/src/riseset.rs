//! Sun/Moon rise and set times, including twilight variants.
//!
//! Uses the same two-hour parabolic scan as the equation of time, over the
//! civil day of the zone whose standard meridian is configured.

use sizhu_time::CalendarMoment;

use crate::celestial::{Body, sin_altitude};
use crate::config::{SUN_HORIZON_DEG, SolarTimeConfig};
use crate::location::GeoLocation;
use crate::transit::find_crossings;

/// Horizon definition for a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Sun's upper limb with standard refraction (−50′).
    Sunrise,
    /// Sun's centre 6° below the horizon.
    CivilTwilight,
    /// Sun's centre 12° below the horizon.
    NauticalTwilight,
    /// Sun's centre 18° below the horizon.
    AstronomicalTwilight,
    /// Moon's centre at +8′ (parallax less refraction and semidiameter).
    Moonrise,
}

impl Horizon {
    pub const fn body(self) -> Body {
        match self {
            Self::Moonrise => Body::Moon,
            _ => Body::Sun,
        }
    }

    /// Altitude of the body's centre at the event, degrees.
    pub const fn altitude_deg(self) -> f64 {
        match self {
            Self::Sunrise => SUN_HORIZON_DEG,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Moonrise => 8.0 / 60.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::CivilTwilight => "civil",
            Self::NauticalTwilight => "nautical",
            Self::AstronomicalTwilight => "astronomical",
            Self::Moonrise => "moonrise",
        }
    }
}

/// Outcome of a rise/set search over one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// At least one crossing happened. Times are zone civil time.
    Events {
        rise: Option<CalendarMoment>,
        set: Option<CalendarMoment>,
    },
    /// Body stayed above the horizon all day.
    AlwaysAbove,
    /// Body stayed below the horizon all day.
    AlwaysBelow,
}

/// Rise and set of `horizon`'s body on the civil date of `date`, in the
/// zone whose standard meridian is `config.reference_longitude_deg`.
pub fn rise_set(
    date: &CalendarMoment,
    location: &GeoLocation,
    horizon: Horizon,
    config: &SolarTimeConfig,
) -> RiseSetResult {
    // zone midnight, as both a civil JD and a UT JD
    let civil_midnight = date.day_number() as f64 - 0.5;
    let ut_midnight = civil_midnight - config.reference_longitude_deg / 360.0;
    let sin_h0 = horizon.altitude_deg().to_radians().sin();
    let body = horizon.body();
    let altitude = |hour: f64| sin_altitude(body, ut_midnight + hour / 24.0, location) - sin_h0;

    let crossings = find_crossings(altitude);
    let to_civil = |hour: f64| CalendarMoment::from_julian_day(civil_midnight + hour / 24.0);

    match (crossings.rise, crossings.set) {
        (None, None) if altitude(12.0) > 0.0 => RiseSetResult::AlwaysAbove,
        (None, None) => RiseSetResult::AlwaysBelow,
        (rise, set) => RiseSetResult::Events {
            rise: rise.map(to_civil),
            set: set.map(to_civil),
        },
    }
}
