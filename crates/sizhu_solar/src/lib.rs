//! Low-precision solar astronomy for civil → true solar time conversion.
//!
//! This crate provides:
//! - Sun and Moon apparent RA/Dec from truncated series
//! - A two-hour parabolic horizon-crossing solver
//! - The equation of time from sunrise/sunset symmetry
//! - `TrueSolarTimeAdjuster` (DST, true solar time, zi-hour rule)
//! - Rise/set and twilight times
//!
//! Everything is pure computation on `f64`; no kernels or files are read.

pub mod adjust;
pub mod celestial;
pub mod config;
pub mod equation_of_time;
pub mod error;
pub mod location;
pub mod riseset;
pub mod transit;

pub use adjust::{AdjustFlags, TrueSolarTimeAdjuster, adjust, apply_zi_rule};
pub use celestial::{
    Body, EquatorialPosition, hour_angle_hours, moon_position, sin_altitude, sun_position,
};
pub use config::{DEFAULT_REFERENCE_LONGITUDE_DEG, SUN_HORIZON_DEG, SolarTimeConfig};
pub use equation_of_time::{EotMethod, EquationOfTime, equation_of_time, equation_of_time_minutes};
pub use error::SolarError;
pub use location::GeoLocation;
pub use riseset::{Horizon, RiseSetResult, rise_set};
pub use transit::{HorizonCrossings, Parabola, find_crossings, quad};
