//! Civil time foundations for the sizhu engine.
//!
//! This crate provides:
//! - Julian Day ↔ civil calendar conversion across the 1582 reform
//! - `CalendarMoment`, a validated wall-clock reading with JD arithmetic
//! - Low-precision mean sidereal time for horizon work

pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MJD_OFFSET, SECONDS_PER_DAY, calendar_to_jd,
    civil_from_day_number, day_number, days_in_month, is_leap_year, is_valid_date,
    jd_to_calendar,
};
pub use moment::CalendarMoment;
pub use sidereal::{centuries_since_j2000, gmst_hours, local_mean_sidereal_hours};

/// Julian Day of a moment. Free-function form of
/// [`CalendarMoment::to_julian_day`].
pub fn to_julian_day(moment: &CalendarMoment) -> f64 {
    moment.to_julian_day()
}

/// Calendar moment of a Julian Day, seconds rounded to 0.01 s.
pub fn from_julian_day(jd: f64) -> CalendarMoment {
    CalendarMoment::from_julian_day(jd)
}

/// Modified Julian Date of a Julian Day.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}
