//! Configurable parameters for solar-time computation.

/// Default standard meridian: China Standard Time, 120°E.
pub const DEFAULT_REFERENCE_LONGITUDE_DEG: f64 = 120.0;

/// Sun's upper limb on the horizon: 34′ refraction + 16′ semidiameter.
pub const SUN_HORIZON_DEG: f64 = -50.0 / 60.0;

/// Parameters shared by the equation of time and the adjuster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimeConfig {
    /// Standard meridian of the civil zone, degrees east. Default: 120.0.
    pub reference_longitude_deg: f64,
    /// Sun altitude treated as rise/set, degrees. Default: −50′.
    pub sun_horizon_deg: f64,
    /// Largest disagreement, in minutes, between the rise/set midpoint
    /// and the hour-angle estimate before the hour angle wins. Default: 2.0.
    pub eot_tolerance_min: f64,
}

impl Default for SolarTimeConfig {
    fn default() -> Self {
        Self {
            reference_longitude_deg: DEFAULT_REFERENCE_LONGITUDE_DEG,
            sun_horizon_deg: SUN_HORIZON_DEG,
            eot_tolerance_min: 2.0,
        }
    }
}

impl SolarTimeConfig {
    /// Default config with a different standard meridian.
    pub fn with_reference_longitude(reference_longitude_deg: f64) -> Self {
        Self {
            reference_longitude_deg,
            ..Self::default()
        }
    }

    /// Minutes between the zone's standard time and local mean time at
    /// `longitude_deg`: 4 minutes per degree east of the reference.
    pub fn longitude_offset_minutes(&self, longitude_deg: f64) -> f64 {
        (longitude_deg - self.reference_longitude_deg) * 4.0
    }
}
