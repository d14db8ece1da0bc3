use serde::{Deserialize, Serialize};

pub const AU_TO_KM: f64 = 1.495978707e8;

/// Equatorial radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A length quantity with astronomical units (AU) as the base unit.
///
/// Orbits and the ecosphere are measured in AU; planetary radii are
/// usually read back in kilometers or Earth radii.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let radius = Length::from_km(6378.0);
///
/// assert!((radius.to_earth_radii() - 1.0).abs() < 1e-12);
/// assert!(orbit > radius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.to_km() / EARTH_RADIUS_KM
    }
}
