use proptest::prelude::*;
use sizhu_solar::{
    AdjustFlags, GeoLocation, SolarTimeConfig, TrueSolarTimeAdjuster, equation_of_time,
};
use sizhu_time::CalendarMoment;

fn arb_date() -> impl Strategy<Value = CalendarMoment> {
    (1901i32..=2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| CalendarMoment::date(y, m, d).unwrap())
}

fn arb_location() -> impl Strategy<Value = GeoLocation> {
    (-180.0f64..=180.0, -90.0f64..=90.0).prop_map(|(lng, lat)| GeoLocation::new(lng, lat).unwrap())
}

proptest! {
    #[test]
    fn equation_of_time_is_bounded(date in arb_date(), loc in arb_location()) {
        let e = equation_of_time(&date, &loc, &SolarTimeConfig::default());
        prop_assert!(e.minutes.abs() <= 20.0, "{date} {loc:?}: {}", e.minutes);
    }

    #[test]
    fn true_solar_shift_is_longitude_plus_bounded_eot(
        date in arb_date(),
        loc in arb_location(),
        hour in 0u32..24,
    ) {
        let t = date.with_time(hour, 30, 0.0).unwrap();
        let adjuster = TrueSolarTimeAdjuster::default();
        let flags = AdjustFlags { apply_true_solar: true, ..AdjustFlags::default() };
        let shift = adjuster.adjust(&t, &loc, flags).minutes_since(&t);
        let longitude_term = (loc.longitude_deg() - 120.0) * 4.0;
        prop_assert!((shift - longitude_term).abs() <= 20.01);
    }
}
