//! Forward derivation: civil moment → four pillars.
//!
//! Month and year boundaries come from a [`SolarTermCalendar`]; the
//! sexagenary arithmetic on top of them lives in [`TermBoundaryDeriver`].
//! Anything else that can label a moment with four pillars plugs into the
//! search through [`PillarDeriver`].

use sizhu_cycle::{
    EarthlyBranch, FourPillarSignature, MONTH_BRANCHES, SexagenaryPillar, hour_pillar,
    month_pillar, year_pillar_for,
};
use sizhu_time::{CalendarMoment, day_number};

/// Labels a civil moment with its four pillars.
pub trait PillarDeriver {
    fn derive_pillars(&self, moment: &CalendarMoment) -> FourPillarSignature;

    /// Whether any moment in civil year `year` could carry `signature`.
    ///
    /// Used by the search to skip whole years. The default never skips;
    /// implementations may only return `false` when no moment of `year`
    /// derives to `signature`.
    fn may_match_year(&self, _year: i32, _signature: &FourPillarSignature) -> bool {
        true
    }
}

/// Source of the twelve month-opening solar terms.
pub trait SolarTermCalendar {
    /// Start of solar month `month_index` of sexagenary year `year`.
    ///
    /// `month_index` runs 0..12 from the tiger month (opening near
    /// early February of `year`) to the ox month (opening near early January
    /// of `year + 1`). Boundaries must increase with `month_index`.
    fn solar_term_month_boundary(&self, year: i32, month_index: u8) -> CalendarMoment;
}

impl<T: SolarTermCalendar + ?Sized> SolarTermCalendar for &T {
    fn solar_term_month_boundary(&self, year: i32, month_index: u8) -> CalendarMoment {
        (**self).solar_term_month_boundary(year, month_index)
    }
}

/// Mean civil dates of the twelve month-opening terms, tiger month first:
/// 立春 惊蛰 清明 立夏 芒种 小暑 立秋 白露 寒露 立冬 大雪 小寒.
const MEAN_TERM_DATES: [(u32, u32); 12] = [
    (2, 4),
    (3, 6),
    (4, 5),
    (5, 6),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 7),
    (12, 7),
    (1, 6),
];

/// Fixed mean-date term calendar, each boundary at 00:00.
///
/// Real terms drift by up to a day around these dates from year to year;
/// precise calendars plug in through [`SolarTermCalendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedTermCalendar;

impl SolarTermCalendar for FixedTermCalendar {
    fn solar_term_month_boundary(&self, year: i32, month_index: u8) -> CalendarMoment {
        let k = usize::from(month_index % 12);
        let (month, day) = MEAN_TERM_DATES[k];
        let civil_year = if k == 11 { year + 1 } else { year };
        CalendarMoment::from_julian_day(day_number(civil_year, month, day) as f64 - 0.5)
    }
}

/// Where the day pillar changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayBoundary {
    /// At 23:00, the start of the 子 bracket.
    #[default]
    ZiHour,
    /// At civil midnight.
    Midnight,
}

/// [`PillarDeriver`] built on solar-term month boundaries.
///
/// - year: changes at the tiger-month boundary; CE 4 was 甲子
/// - month: the last boundary at or before the moment, stem by five-tiger
/// - day: sexagenary day count from the Julian Day Number
/// - hour: two-hour bracket, stem by five-rat from the day stem
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TermBoundaryDeriver<C> {
    calendar: C,
    day_boundary: DayBoundary,
}

impl<C: SolarTermCalendar> TermBoundaryDeriver<C> {
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            day_boundary: DayBoundary::default(),
        }
    }

    pub fn with_day_boundary(mut self, day_boundary: DayBoundary) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Sexagenary year number and month index (0 = tiger) of `moment`.
    pub fn solar_month_of(&self, moment: &CalendarMoment) -> (i32, u8) {
        let year = if *moment >= self.calendar.solar_term_month_boundary(moment.year(), 0) {
            moment.year()
        } else {
            moment.year() - 1
        };
        let month_index = (1..12u8)
            .rev()
            .find(|&k| self.calendar.solar_term_month_boundary(year, k) <= *moment)
            .unwrap_or(0);
        (year, month_index)
    }

    /// Day pillar of the civil date, honouring the day boundary.
    pub fn day_pillar(&self, moment: &CalendarMoment) -> SexagenaryPillar {
        let mut jdn = moment.day_number();
        if self.day_boundary == DayBoundary::ZiHour && moment.hour() >= 23 {
            jdn += 1;
        }
        day_pillar_for_day_number(jdn)
    }
}

/// Day pillar of a Julian Day Number. JDN 0 was 癸丑 (cycle index 49).
pub fn day_pillar_for_day_number(jdn: i64) -> SexagenaryPillar {
    SexagenaryPillar::from_cycle_index((jdn + 49).rem_euclid(60) as u8)
}

impl<C: SolarTermCalendar> PillarDeriver for TermBoundaryDeriver<C> {
    fn derive_pillars(&self, moment: &CalendarMoment) -> FourPillarSignature {
        let (sexagenary_year, month_index) = self.solar_month_of(moment);
        let year = year_pillar_for(sexagenary_year);
        let month = month_pillar(year.stem(), MONTH_BRANCHES[usize::from(month_index)]);
        let day = self.day_pillar(moment);
        let hour = hour_pillar(day.stem(), EarthlyBranch::for_hour(moment.hour()));
        FourPillarSignature::new(year, month, day, hour)
    }

    fn may_match_year(&self, year: i32, signature: &FourPillarSignature) -> bool {
        // a civil year spans the tail of one sexagenary year and the head of the next
        year_pillar_for(year - 1) == signature.year || year_pillar_for(year) == signature.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(y: i32, mo: u32, d: u32, h: u32) -> CalendarMoment {
        CalendarMoment::new(y, mo, d, h, 0, 0.0).unwrap()
    }

    fn deriver() -> TermBoundaryDeriver<FixedTermCalendar> {
        TermBoundaryDeriver::new(FixedTermCalendar)
    }

    #[test]
    fn fixed_calendar_boundaries() {
        let cal = FixedTermCalendar;
        assert_eq!(cal.solar_term_month_boundary(2024, 0), m(2024, 2, 4, 0));
        assert_eq!(cal.solar_term_month_boundary(2024, 10), m(2024, 12, 7, 0));
        assert_eq!(cal.solar_term_month_boundary(2024, 11), m(2025, 1, 6, 0));
    }

    #[test]
    fn boundaries_increase() {
        let cal = FixedTermCalendar;
        for k in 1..12u8 {
            assert!(cal.solar_term_month_boundary(2023, k - 1) < cal.solar_term_month_boundary(2023, k));
        }
        assert!(cal.solar_term_month_boundary(2023, 11) < cal.solar_term_month_boundary(2024, 0));
    }

    #[test]
    fn known_day_pillars() {
        assert_eq!(deriver().day_pillar(&m(1949, 10, 1, 12)).name(), "甲子");
        assert_eq!(deriver().day_pillar(&m(2000, 1, 1, 12)).name(), "戊午");
        assert_eq!(deriver().day_pillar(&m(2024, 2, 10, 12)).name(), "甲辰");
    }

    #[test]
    fn lunar_new_year_2024() {
        let sig = deriver().derive_pillars(&m(2024, 2, 10, 12));
        assert_eq!(sig.year.name(), "甲辰");
        assert_eq!(sig.month.name(), "丙寅");
        assert_eq!(sig.day.name(), "甲辰");
        assert_eq!(sig.hour.name(), "庚午");
    }

    #[test]
    fn year_changes_at_tiger_boundary() {
        let before = deriver().derive_pillars(&CalendarMoment::new(2024, 2, 3, 23, 59, 59.0).unwrap());
        let after = deriver().derive_pillars(&m(2024, 2, 4, 0));
        assert_eq!(before.year.name(), "癸卯");
        assert_eq!(before.month.name(), "乙丑");
        assert_eq!(after.year.name(), "甲辰");
        assert_eq!(after.month.name(), "丙寅");
    }

    #[test]
    fn zi_month_spans_new_year() {
        let sig = deriver().derive_pillars(&m(2024, 1, 1, 12));
        assert_eq!(sig.year.name(), "癸卯");
        assert_eq!(sig.month.name(), "甲子");
    }

    #[test]
    fn late_zi_hour_takes_next_day() {
        let d = deriver();
        let at_22 = d.derive_pillars(&m(1949, 9, 30, 22));
        let at_23 = d.derive_pillars(&m(1949, 9, 30, 23));
        assert_eq!(at_22.day.name(), "癸亥");
        assert_eq!(at_23.day.name(), "甲子");
        assert_eq!(at_23.hour.name(), "甲子");

        let midnight = d.with_day_boundary(DayBoundary::Midnight);
        assert_eq!(midnight.derive_pillars(&m(1949, 9, 30, 23)).day.name(), "癸亥");
    }

    #[test]
    fn year_prefilter() {
        let d = deriver();
        let sig = d.derive_pillars(&m(1924, 2, 15, 0));
        assert!(d.may_match_year(1924, &sig));
        assert!(d.may_match_year(1925, &sig));
        assert!(!d.may_match_year(1930, &sig));
    }
}
