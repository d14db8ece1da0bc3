use serde::{Deserialize, Serialize};

/// Freezing point of water in Kelvin
pub const FREEZING_POINT_OF_WATER: f64 = 273.15;

/// A temperature with Kelvin as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let surface = Temperature::from_kelvin(288.15);
/// assert!((surface.to_celsius() - 15.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - FREEZING_POINT_OF_WATER
    }
}
