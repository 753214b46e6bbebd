//! Truncated-series apparent positions of the Sun and Moon.
//!
//! Accuracy is about 1′ for the Sun and a few arcminutes for the Moon over
//! 1900–2100, ample for horizon crossings at the minute level. All
//! coefficients are fixed `const` data.
//!
//! Source: Montenbruck & Pfleger, *Astronomy on the Personal Computer*,
//! `MiniSun` / `MiniMoon`. Public domain series.

use std::f64::consts::TAU;

use sizhu_time::{MJD_OFFSET, centuries_since_j2000, local_mean_sidereal_hours};

use crate::location::GeoLocation;

/// cos ε of the mean obliquity, held constant.
pub const COS_OBLIQUITY: f64 = 0.917_48;
/// sin ε of the mean obliquity, held constant.
pub const SIN_OBLIQUITY: f64 = 0.397_78;

/// Arcseconds per radian.
const ARCSEC_PER_RAD: f64 = 206_264.806_2;
/// Arcseconds in a full circle.
const ARCSEC_PER_CIRCLE: f64 = 1_296_000.0;

/// Celestial body for which a low-precision position is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Apparent equatorial position at `t` Julian centuries since J2000.0.
    pub fn position(self, t: f64) -> EquatorialPosition {
        match self {
            Self::Sun => sun_position(t),
            Self::Moon => moon_position(t),
        }
    }
}

/// Right ascension and declination of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in hours, [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Fractional part, always in [0, 1).
fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Ecliptic (longitude, latitude) in radians → RA hours / Dec degrees.
fn ecliptic_to_equatorial(lon: f64, lat: f64) -> EquatorialPosition {
    let cb = lat.cos();
    let x = cb * lon.cos();
    let v = cb * lon.sin();
    let w = lat.sin();
    let y = COS_OBLIQUITY * v - SIN_OBLIQUITY * w;
    let z = SIN_OBLIQUITY * v + COS_OBLIQUITY * w;
    let rho = (1.0 - z * z).sqrt();

    let dec_deg = (z / rho).atan().to_degrees();
    // half-angle form keeps RA continuous through 12h
    let mut ra_hours = (48.0 / TAU) * (y / (x + rho)).atan();
    if ra_hours < 0.0 {
        ra_hours += 24.0;
    }
    EquatorialPosition { ra_hours, dec_deg }
}

/// Apparent position of the Sun: two terms of the equation of centre.
pub fn sun_position(t: f64) -> EquatorialPosition {
    let m = TAU * frac(0.993_133 + 99.997_361 * t);
    let dl = 6893.0 * m.sin() + 72.0 * (2.0 * m).sin();
    let l = TAU * frac(0.785_945_3 + m / TAU + (6191.2 * t + dl) / ARCSEC_PER_CIRCLE);
    ecliptic_to_equatorial(l, 0.0)
}

/// Apparent position of the Moon: 14 longitude and 7 latitude terms.
pub fn moon_position(t: f64) -> EquatorialPosition {
    let l0 = frac(0.606_433 + 1336.855_225 * t);
    let l = TAU * frac(0.374_897 + 1325.552_41 * t);
    let ls = TAU * frac(0.993_133 + 99.997_361 * t);
    let d = TAU * frac(0.827_361 + 1236.853_086 * t);
    let f = TAU * frac(0.259_086 + 1342.227_825 * t);

    let dl = 22640.0 * l.sin() - 4586.0 * (l - 2.0 * d).sin() + 2370.0 * (2.0 * d).sin()
        + 769.0 * (2.0 * l).sin()
        - 668.0 * ls.sin()
        - 412.0 * (2.0 * f).sin()
        - 212.0 * (2.0 * l - 2.0 * d).sin()
        - 206.0 * (l + ls - 2.0 * d).sin()
        + 192.0 * (l + 2.0 * d).sin()
        - 165.0 * (ls - 2.0 * d).sin()
        - 125.0 * d.sin()
        - 110.0 * (l + ls).sin()
        + 148.0 * (l - ls).sin()
        - 55.0 * (2.0 * f - 2.0 * d).sin();

    let s = f + (dl + 412.0 * (2.0 * f).sin() + 541.0 * ls.sin()) / ARCSEC_PER_RAD;
    let h = f - 2.0 * d;
    let n = -526.0 * h.sin() + 44.0 * (l + h).sin() - 31.0 * (h - l).sin() - 23.0 * (ls + h).sin()
        + 11.0 * (h - ls).sin()
        - 25.0 * (f - 2.0 * l).sin()
        + 21.0 * (f - l).sin();

    let lon = TAU * frac(l0 + dl / ARCSEC_PER_CIRCLE);
    let lat = (18520.0 * s.sin() + n) / ARCSEC_PER_RAD;
    ecliptic_to_equatorial(lon, lat)
}

/// Local hour angle of `body` in hours, wrapped to [-12, 12).
pub fn hour_angle_hours(body: Body, jd_ut: f64, location: &GeoLocation) -> f64 {
    let mjd = jd_ut - MJD_OFFSET;
    let pos = body.position(centuries_since_j2000(mjd));
    let lmst = local_mean_sidereal_hours(mjd, location.longitude_deg());
    (lmst - pos.ra_hours + 12.0).rem_euclid(24.0) - 12.0
}

/// Sine of the geocentric altitude of `body` at a UT Julian Day.
pub fn sin_altitude(body: Body, jd_ut: f64, location: &GeoLocation) -> f64 {
    let mjd = jd_ut - MJD_OFFSET;
    let pos = body.position(centuries_since_j2000(mjd));
    let lmst = local_mean_sidereal_hours(mjd, location.longitude_deg());
    let tau = (15.0 * (lmst - pos.ra_hours)).to_radians();
    let phi = location.latitude_rad();
    let dec = pos.dec_deg.to_radians();
    phi.sin() * dec.sin() + phi.cos() * dec.cos() * tau.cos()
}
