//! Low-precision mean sidereal time.
//!
//! Enough for horizon crossings at the minute level. Inputs are Modified
//! Julian Dates on the civil (UT) scale; no UT1 or ΔT correction is
//! applied.
//!
//! Source: Montenbruck & Pfleger, *Astronomy on the Personal Computer*,
//! §3.3. Public domain formula.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD, MJD_OFFSET};

/// MJD of the J2000.0 epoch.
pub const MJD_J2000: f64 = J2000_JD - MJD_OFFSET;

/// Julian centuries since J2000.0 for an MJD.
pub fn centuries_since_j2000(mjd: f64) -> f64 {
    (mjd - MJD_J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in hours, not reduced to [0, 24).
///
/// The polynomial is evaluated at the preceding 0h so the UT hour term
/// carries the sidereal rate on its own.
pub fn gmst_hours(mjd: f64) -> f64 {
    let mjd0 = mjd.trunc();
    let ut = (mjd - mjd0) * 24.0;
    let t = centuries_since_j2000(mjd0);
    6.697_374_558
        + 1.002_737_909_3 * ut
        + (8_640_184.812_866 + (0.093_104 - 0.000_006_2 * t) * t) * t / 3600.0
}

/// Local mean sidereal time in hours, in [0, 24).
pub fn local_mean_sidereal_hours(mjd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_hours(mjd) + longitude_east_deg / 15.0).rem_euclid(24.0)
}
