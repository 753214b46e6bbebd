//! Civil time → true local solar time, with the daylight-saving and
//! early/late zi-hour calendar conventions.
//!
//! Steps run in a fixed order, each consuming the previous output:
//! 1. daylight saving: subtract one hour
//! 2. true solar time: longitude offset from the standard meridian plus
//!    the equation of time of the step-1 date
//! 3. zi rule: an hour of 23 moves the date forward one day, keeping h/m/s

use sizhu_time::CalendarMoment;
use tracing::trace;

use crate::config::SolarTimeConfig;
use crate::equation_of_time::equation_of_time;
use crate::location::GeoLocation;

/// Which adjustment steps to apply. All off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdjustFlags {
    /// The civil reading was taken under daylight saving time.
    pub apply_dst: bool,
    /// Convert to true local solar time.
    pub apply_true_solar: bool,
    /// Treat 23:00–24:00 as belonging to the next day.
    pub apply_early_late_zi: bool,
}

impl AdjustFlags {
    /// Every step enabled.
    pub const fn all() -> Self {
        Self {
            apply_dst: true,
            apply_true_solar: true,
            apply_early_late_zi: true,
        }
    }
}

/// Applies DST, true-solar and zi-hour adjustments. Stateless apart from
/// its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrueSolarTimeAdjuster {
    config: SolarTimeConfig,
}

impl TrueSolarTimeAdjuster {
    pub fn new(config: SolarTimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolarTimeConfig {
        &self.config
    }

    /// Local mean solar time: the longitude term only.
    pub fn mean_solar_time(&self, moment: &CalendarMoment, location: &GeoLocation) -> CalendarMoment {
        let offset = self.config.longitude_offset_minutes(location.longitude_deg());
        moment.add_minutes(offset)
    }

    /// True local solar time: mean solar time plus the equation of time of
    /// `moment`'s civil date.
    pub fn true_solar_time(&self, moment: &CalendarMoment, location: &GeoLocation) -> CalendarMoment {
        let offset = self.config.longitude_offset_minutes(location.longitude_deg());
        let eot = equation_of_time(moment, location, &self.config);
        trace!(%moment, offset, eot = eot.minutes, method = ?eot.method, "true solar time");
        moment.add_minutes(offset + eot.minutes)
    }

    /// Run the enabled steps in order DST → true solar → zi rule.
    pub fn adjust(
        &self,
        moment: &CalendarMoment,
        location: &GeoLocation,
        flags: AdjustFlags,
    ) -> CalendarMoment {
        let mut t = *moment;
        if flags.apply_dst {
            t = t.add_hours(-1.0);
        }
        if flags.apply_true_solar {
            t = self.true_solar_time(&t, location);
        }
        if flags.apply_early_late_zi {
            t = apply_zi_rule(&t);
        }
        t
    }
}

/// Late zi hour: 23:xx belongs to the next day's date. Other hours pass
/// through unchanged.
pub fn apply_zi_rule(moment: &CalendarMoment) -> CalendarMoment {
    if moment.hour() == 23 {
        moment.add_days(1)
    } else {
        *moment
    }
}

/// [`TrueSolarTimeAdjuster::adjust`] with the default configuration.
pub fn adjust(moment: &CalendarMoment, location: &GeoLocation, flags: AdjustFlags) -> CalendarMoment {
    TrueSolarTimeAdjuster::default().adjust(moment, location, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: f64) -> CalendarMoment {
        CalendarMoment::new(y, mo, d, h, mi, s).unwrap()
    }

    fn assert_close(got: CalendarMoment, want: CalendarMoment) {
        let diff = got.minutes_since(&want).abs();
        assert!(diff < 0.01, "got {got}, want {want}");
    }

    #[test]
    fn no_flags_is_identity() {
        let loc = GeoLocation::new(116.4, 39.9).unwrap();
        let t = m(2024, 3, 1, 12, 0, 0.0);
        assert_eq!(adjust(&t, &loc, AdjustFlags::default()), t);
    }

    #[test]
    fn dst_subtracts_an_hour_across_midnight() {
        let loc = GeoLocation::new(120.0, 35.0).unwrap();
        let flags = AdjustFlags {
            apply_dst: true,
            ..AdjustFlags::default()
        };
        assert_eq!(
            adjust(&m(2024, 3, 1, 0, 30, 0.0), &loc, flags),
            m(2024, 2, 29, 23, 30, 0.0)
        );
    }

    #[test]
    fn mean_solar_time_longitude_term() {
        let adjuster = TrueSolarTimeAdjuster::default();
        let loc = GeoLocation::new(116.4, 39.9).unwrap();
        let t = adjuster.mean_solar_time(&m(2024, 3, 1, 12, 0, 0.0), &loc);
        assert_eq!(t, m(2024, 3, 1, 11, 45, 36.0));
    }

    #[test]
    fn beijing_true_solar_noon() {
        let adjuster = TrueSolarTimeAdjuster::default();
        let loc = GeoLocation::new(116.4, 39.9).unwrap();
        let t = adjuster.true_solar_time(&m(2024, 3, 1, 12, 0, 0.0), &loc);
        // 12:00 − 14.4 min − 12.487 min
        assert_close(t, m(2024, 3, 1, 11, 33, 6.75));
    }

    #[test]
    fn zi_rule_only_touches_hour_23() {
        assert_eq!(
            apply_zi_rule(&m(2024, 2, 29, 23, 5, 0.0)),
            m(2024, 3, 1, 23, 5, 0.0)
        );
        assert_eq!(
            apply_zi_rule(&m(2024, 2, 29, 22, 59, 59.0)),
            m(2024, 2, 29, 22, 59, 59.0)
        );
        assert_eq!(
            apply_zi_rule(&m(2024, 12, 31, 23, 0, 0.0)),
            m(2025, 1, 1, 23, 0, 0.0)
        );
    }

    #[test]
    fn full_composition_by_hand() {
        // 00:30 DST → 2024-02-29 23:30 standard; on the 120°E meridian only
        // the equation of time of Feb 29 (−12.685 min) applies → 23:17:18.92;
        // hour 23 then moves the date to Mar 1.
        let loc = GeoLocation::new(120.0, 35.0).unwrap();
        let got = adjust(&m(2024, 3, 1, 0, 30, 0.0), &loc, AdjustFlags::all());
        assert_close(got, m(2024, 3, 1, 23, 17, 18.92));
    }

    #[test]
    fn swapping_dst_and_true_solar_differs() {
        let loc = GeoLocation::new(120.0, 35.0).unwrap();
        let adjuster = TrueSolarTimeAdjuster::default();
        let t = m(2024, 3, 1, 0, 30, 0.0);

        let ordered = adjuster.adjust(&t, &loc, AdjustFlags::all());

        // true solar first (Mar 1 equation of time), then DST, then zi
        let swapped = apply_zi_rule(&adjuster.true_solar_time(&t, &loc).add_hours(-1.0));
        assert_close(swapped, m(2024, 3, 1, 23, 17, 30.92));

        let gap_sec = swapped.minutes_since(&ordered).abs() * 60.0;
        assert!(gap_sec > 10.0, "gap {gap_sec}s");
    }

    #[test]
    fn reference_meridian_is_configurable() {
        let loc = GeoLocation::new(139.75, 35.7).unwrap();
        let tokyo = TrueSolarTimeAdjuster::new(SolarTimeConfig::with_reference_longitude(135.0));
        let t = tokyo.mean_solar_time(&m(2024, 3, 1, 12, 0, 0.0), &loc);
        assert_eq!(t, m(2024, 3, 1, 12, 19, 0.0));
    }
}
