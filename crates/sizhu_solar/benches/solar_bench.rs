use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_solar::{
    AdjustFlags, Body, GeoLocation, Horizon, SolarTimeConfig, TrueSolarTimeAdjuster,
    equation_of_time, moon_position, rise_set, sin_altitude, sun_position,
};
use sizhu_time::CalendarMoment;

fn position_bench(c: &mut Criterion) {
    let t = 0.24;
    let loc = GeoLocation::new(116.4, 39.9).unwrap();

    let mut group = c.benchmark_group("position");
    group.bench_function("sun_position", |b| b.iter(|| sun_position(black_box(t))));
    group.bench_function("moon_position", |b| b.iter(|| moon_position(black_box(t))));
    group.bench_function("sin_altitude_sun", |b| {
        b.iter(|| sin_altitude(Body::Sun, black_box(2_460_371.5), &loc))
    });
    group.finish();
}

fn solar_time_bench(c: &mut Criterion) {
    let loc = GeoLocation::new(116.4, 39.9).unwrap();
    let cfg = SolarTimeConfig::default();
    let t = CalendarMoment::new(2024, 3, 1, 12, 0, 0.0).unwrap();
    let adjuster = TrueSolarTimeAdjuster::default();

    let mut group = c.benchmark_group("solar_time");
    group.bench_function("equation_of_time", |b| {
        b.iter(|| equation_of_time(black_box(&t), &loc, &cfg))
    });
    group.bench_function("adjust_all", |b| {
        b.iter(|| adjuster.adjust(black_box(&t), &loc, AdjustFlags::all()))
    });
    group.bench_function("rise_set_sun", |b| {
        b.iter(|| rise_set(black_box(&t), &loc, Horizon::Sunrise, &cfg))
    });
    group.finish();
}

criterion_group!(benches, position_bench, solar_time_bench);
criterion_main!(benches);
