use serde::{Deserialize, Serialize};
use std::ops::Div;

/// Mass of the Sun in grams
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Earth masses per solar mass, as used throughout the Dole model
pub const SOLAR_MASS_IN_EARTH_MASSES: f64 = 332_775.64;

/// A mass quantity with solar masses as the base unit.
///
/// The accretion model works in solar masses from the seed nucleus
/// (1e-15 M☉) up to gas giants, so the base unit keeps every value
/// in a range where f64 retains full precision.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let seed = Mass::from_solar_masses(1.0e-15);
///
/// assert!(seed < earth);
/// assert!((earth.to_earth_masses() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// Uses the fixed ratio of 332,775.64 Earth masses per solar mass.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / SOLAR_MASS_IN_EARTH_MASSES)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let sun = Mass::from_solar_masses(1.0);
    /// assert_eq!(sun.to_earth_masses(), 332_775.64);
    /// ```
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_IN_EARTH_MASSES
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.to_grams() / 1000.0
    }
}

/// Mass over mass is a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
