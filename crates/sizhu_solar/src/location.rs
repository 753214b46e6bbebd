//! Observer location.

use crate::error::SolarError;

/// Geographic location on Earth's surface. Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    longitude_deg: f64,
    latitude_deg: f64,
}

impl GeoLocation {
    /// Longitude in degrees east ∈ [-180, 180], latitude in degrees north
    /// ∈ [-90, 90].
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Result<Self, SolarError> {
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLocation(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLocation(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        Ok(Self {
            longitude_deg,
            latitude_deg,
        })
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}
