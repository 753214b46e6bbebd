//! Julian Day ↔ civil calendar conversion.
//!
//! Dates before 1582-10-15 are proleptic Julian, dates from then on are
//! Gregorian. The ten days 1582-10-05 ..= 1582-10-14 never existed.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7. Public domain.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset between Julian Date and Modified Julian Date.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Julian Day Number of 1582-10-15, the first Gregorian day.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

/// 1582-10-15 packed as `yyyymmdd`.
const GREGORIAN_CUTOVER_YMD: i64 = 15_821_015;

/// Julian Date from a calendar date with fractional day.
///
/// January and February are counted as months 13 and 14 of the previous
/// year. The Gregorian correction `B = 2 − A + ⌊A/4⌋` applies only at or
/// after the cutover.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };

    let day_int = day_frac.floor() as i64;
    let b = if y * 10_000 + m * 100 + day_int >= GREGORIAN_CUTOVER_YMD {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Calendar date with fractional day from a Julian Date.
///
/// Returns `(year, month, day_frac)`; the fraction is the elapsed part of
/// the civil day starting at midnight.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let (year, month, day) = civil_from_day_number(z as i64);
    (year, month, f64::from(day) + f)
}

/// Civil `(year, month, day)` of an integral Julian Day Number.
pub fn civil_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let z = jdn as f64;
    let b = if jdn < GREGORIAN_CUTOVER_JDN {
        z + 1524.0
    } else {
        let a = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + a - (a / 4.0).floor() + 1524.0
    };
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u32;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day)
}

/// Julian Day Number (integral, civil noon) of a calendar date.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    (calendar_to_jd(year, month, f64::from(day)) + 0.5).round() as i64
}

/// Leap year under the calendar in force for `year`.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in a month, or 0 for an out-of-range month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Whether `(year, month, day)` names a day that exists in the civil calendar.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    if day == 0 || day > days_in_month(year, month) {
        return false;
    }
    !(year == 1582 && month == 10 && (5..=14).contains(&day))
}
