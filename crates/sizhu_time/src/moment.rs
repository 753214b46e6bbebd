//! Civil calendar moment with centisecond precision.
//!
//! `CalendarMoment` is the value every layer of the engine passes around:
//! a validated wall-clock reading with no zone attached. Arithmetic goes
//! through the Julian Day so that month, year and reform boundaries roll
//! over correctly.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_to_jd, civil_from_day_number, day_number, days_in_month,
    is_valid_date,
};

/// Centiseconds in one civil day. Seconds are kept to 0.01 s, which is
/// already finer than the astronomy built on top of them.
const CENTISECONDS_PER_DAY: i64 = 8_640_000;

/// A civil date and time of day.
///
/// Fields are ordered most- to least-significant, so the derived
/// `PartialOrd` is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CalendarMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CalendarMoment {
    /// Validate and build a moment.
    ///
    /// `month` ∈ 1..=12, `day` valid for that month (Julian rule before the
    /// 1582 reform), `hour` ∈ 0..=23, `minute` ∈ 0..=59, `second` ∈ [0, 60).
    /// Seconds are rounded to 0.01 s, carrying into the minute, hour and
    /// next day.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMoment(format!("month {month} out of range")));
        }
        if !is_valid_date(year, month, day) {
            return Err(TimeError::InvalidMoment(format!(
                "day {year:04}-{month:02}-{day:02} does not exist"
            )));
        }
        if hour > 23 {
            return Err(TimeError::InvalidMoment(format!("hour {hour} out of range")));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMoment(format!("minute {minute} out of range")));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidMoment(format!("second {second} out of range")));
        }
        let centis = i64::from(hour) * 360_000
            + i64::from(minute) * 6_000
            + (second * 100.0).round() as i64;
        if centis >= CENTISECONDS_PER_DAY {
            let (year, month, day) = civil_from_day_number(day_number(year, month, day) + 1);
            return Ok(Self::at_centisecond(year, month, day, centis - CENTISECONDS_PER_DAY));
        }
        Ok(Self::at_centisecond(year, month, day, centis))
    }

    /// Midnight at the start of a civil date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Fractional day of month (`day + time / 24h`).
    fn day_fraction(&self) -> f64 {
        f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Continuous Julian Day of this wall-clock reading.
    pub fn to_julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Calendar moment of a Julian Day, seconds rounded to 0.01 s.
    ///
    /// Rounding carries into minutes, hours and the next day, so the
    /// result is always a valid moment. `jd` must be finite.
    pub fn from_julian_day(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut jdn = shifted.floor() as i64;
        let mut centis = ((shifted - shifted.floor()) * CENTISECONDS_PER_DAY as f64).round() as i64;
        if centis >= CENTISECONDS_PER_DAY {
            jdn += 1;
            centis -= CENTISECONDS_PER_DAY;
        }
        let (year, month, day) = civil_from_day_number(jdn);
        Self::at_centisecond(year, month, day, centis)
    }

    fn at_centisecond(year: i32, month: u32, day: u32, centis: i64) -> Self {
        let hour = centis / 360_000;
        let minute = (centis % 360_000) / 6_000;
        let second = (centis % 6_000) as f64 / 100.0;
        Self {
            year,
            month,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
        }
    }

    /// Julian Day Number of the civil date (ignores the time of day).
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Same time of day, `days` calendar days later (or earlier if negative).
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day) = civil_from_day_number(self.day_number() + days);
        Self {
            year,
            month,
            day,
            ..*self
        }
    }

    /// Shift by a signed number of hours.
    pub fn add_hours(&self, hours: f64) -> Self {
        Self::from_julian_day(self.to_julian_day() + hours / 24.0)
    }

    /// Shift by a signed number of minutes.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        Self::from_julian_day(self.to_julian_day() + minutes / 1440.0)
    }

    /// Replace the time of day, keeping the date.
    pub fn with_time(&self, hour: u32, minute: u32, second: f64) -> Result<Self, TimeError> {
        Self::new(self.year, self.month, self.day, hour, minute, second)
    }

    /// Signed difference `self − other` in minutes.
    pub fn minutes_since(&self, other: &Self) -> f64 {
        (self.to_julian_day() - other.to_julian_day()) * 1440.0
    }

    /// Last day of this moment's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl Display for CalendarMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.trunc();
        if (self.second - whole).abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole as u32
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:05.2}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for CalendarMoment {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.ss]`.
    /// A space may stand in for the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason| TimeError::Parse {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let date_fields: Vec<&str> = date_part.split('-').collect();
        let (year, month, day) = match date_fields.as_slice() {
            // leading '-' marks a year before 1 CE
            ["", y, m, d] => (
                -y.parse::<i32>().map_err(|_| parse_err("bad year"))?,
                m.parse().map_err(|_| parse_err("bad month"))?,
                d.parse().map_err(|_| parse_err("bad day"))?,
            ),
            [y, m, d] => (
                y.parse().map_err(|_| parse_err("bad year"))?,
                m.parse().map_err(|_| parse_err("bad month"))?,
                d.parse().map_err(|_| parse_err("bad day"))?,
            ),
            _ => return Err(parse_err("expected YYYY-MM-DD")),
        };

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let fields: Vec<&str> = t.split(':').collect();
                match fields.as_slice() {
                    [h, m] => (
                        h.parse().map_err(|_| parse_err("bad hour"))?,
                        m.parse().map_err(|_| parse_err("bad minute"))?,
                        0.0,
                    ),
                    [h, m, sec] => (
                        h.parse().map_err(|_| parse_err("bad hour"))?,
                        m.parse().map_err(|_| parse_err("bad minute"))?,
                        sec.parse().map_err(|_| parse_err("bad second"))?,
                    ),
                    _ => return Err(parse_err("expected hh:mm or hh:mm:ss")),
                }
            }
        };

        Self::new(year, month, day, hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: f64) -> CalendarMoment {
        CalendarMoment::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(CalendarMoment::new(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(CalendarMoment::new(2023, 2, 29, 0, 0, 0.0).is_err());
        assert!(CalendarMoment::new(2024, 2, 29, 24, 0, 0.0).is_err());
        assert!(CalendarMoment::new(2024, 2, 29, 23, 60, 0.0).is_err());
        assert!(CalendarMoment::new(2024, 2, 29, 23, 59, 60.0).is_err());
        assert!(CalendarMoment::new(2024, 2, 29, 23, 59, f64::NAN).is_err());
        assert!(CalendarMoment::new(1582, 10, 10, 12, 0, 0.0).is_err());
    }

    #[test]
    fn seconds_round_to_centiseconds_with_carry() {
        let t = m(2024, 3, 1, 12, 30, 59.996);
        assert_eq!(t, m(2024, 3, 1, 12, 31, 0.0));
        assert_eq!(t.to_string(), "2024-03-01 12:31:00");

        let t = m(2024, 2, 29, 23, 59, 59.999);
        assert_eq!(t, m(2024, 3, 1, 0, 0, 0.0));

        let t = m(2024, 3, 1, 8, 0, 7.254);
        assert_eq!(t.to_string(), "2024-03-01 08:00:07.25");
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CalendarMoment::new(2024, 2, 29, 23, 59, 59.99).is_ok());
    }

    #[test]
    fn julian_day_roundtrip() {
        let t = m(1990, 6, 15, 8, 45, 12.34);
        let back = CalendarMoment::from_julian_day(t.to_julian_day());
        assert_eq!(back, t);
    }

    #[test]
    fn from_julian_day_carries_rounded_seconds() {
        // 23:59:59.999 rounds up into the next day
        let jd = m(2023, 12, 31, 0, 0, 0.0).to_julian_day() + (86_399.999 / SECONDS_PER_DAY);
        let t = CalendarMoment::from_julian_day(jd);
        assert_eq!(t, m(2024, 1, 1, 0, 0, 0.0));
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let t = m(2023, 12, 31, 23, 10, 5.0);
        assert_eq!(t.add_days(1), m(2024, 1, 1, 23, 10, 5.0));
        assert_eq!(t.add_days(-365), m(2022, 12, 31, 23, 10, 5.0));
    }

    #[test]
    fn add_days_skips_reform_gap() {
        let t = m(1582, 10, 4, 12, 0, 0.0);
        assert_eq!(t.add_days(1), m(1582, 10, 15, 12, 0, 0.0));
    }

    #[test]
    fn add_hours_rolls_back_over_midnight() {
        let t = m(2024, 3, 1, 0, 30, 0.0);
        assert_eq!(t.add_hours(-1.0), m(2024, 2, 29, 23, 30, 0.0));
    }

    #[test]
    fn add_minutes_fractional() {
        let t = m(2024, 3, 1, 12, 0, 0.0);
        assert_eq!(t.add_minutes(-26.5), m(2024, 3, 1, 11, 33, 30.0));
    }

    #[test]
    fn chronological_ordering() {
        assert!(m(2024, 1, 1, 0, 0, 0.0) < m(2024, 1, 1, 0, 0, 0.01));
        assert!(m(2023, 12, 31, 23, 59, 59.0) < m(2024, 1, 1, 0, 0, 0.0));
        assert!(m(2024, 2, 1, 0, 0, 0.0) > m(2024, 1, 31, 23, 0, 0.0));
    }

    #[test]
    fn minutes_since() {
        let a = m(2024, 3, 1, 12, 0, 0.0);
        let b = m(2024, 3, 1, 11, 33, 0.0);
        assert!((a.minutes_since(&b) - 27.0).abs() < 1e-4);
    }

    #[test]
    fn display_whole_and_fractional() {
        assert_eq!(m(2024, 1, 5, 3, 4, 5.0).to_string(), "2024-01-05 03:04:05");
        assert_eq!(m(2024, 1, 5, 3, 4, 5.25).to_string(), "2024-01-05 03:04:05.25");
    }

    #[test]
    fn parse_variants() {
        assert_eq!("2024-03-01".parse::<CalendarMoment>().unwrap(), m(2024, 3, 1, 0, 0, 0.0));
        assert_eq!(
            "2024-03-01T08:15".parse::<CalendarMoment>().unwrap(),
            m(2024, 3, 1, 8, 15, 0.0)
        );
        assert_eq!(
            "2024-03-01 08:15:30.5".parse::<CalendarMoment>().unwrap(),
            m(2024, 3, 1, 8, 15, 30.5)
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "2024/03/01".parse::<CalendarMoment>(),
            Err(TimeError::Parse { .. })
        ));
        assert!(matches!(
            "2024-02-30T00:00".parse::<CalendarMoment>(),
            Err(TimeError::InvalidMoment(_))
        ));
    }
}
