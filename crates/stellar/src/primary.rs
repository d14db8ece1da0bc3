//! Host star parameters consumed by the accretion engine.
//!
//! The engine needs only two scalars from the star: its mass, which sets
//! the extent and density of the dust disk, and its luminosity, which sets
//! the critical mass for gas capture.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// Mass and luminosity of the primary star.
///
/// Immutable for the duration of one generation run.
///
/// # Examples
/// ```
/// use stellar::StarParameters;
/// use units::Mass;
///
/// let sun = StarParameters::sun();
/// assert_eq!(sun.mass_solar(), 1.0);
///
/// let dwarf = StarParameters::from_mass(Mass::from_solar_masses(0.5));
/// assert!(dwarf.luminosity < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarParameters {
    /// Stellar mass
    pub mass: Mass,
    /// Stellar luminosity in solar luminosities (L☉)
    pub luminosity: f64,
}

impl StarParameters {
    /// Create parameters from an explicit mass and luminosity.
    ///
    /// No validation happens here; the engine rejects non-positive values
    /// before it starts a run.
    pub fn new(mass: Mass, luminosity: f64) -> Self {
        Self { mass, luminosity }
    }

    /// Create parameters for a main sequence star, deriving luminosity
    /// from mass with [`luminosity_from_mass`].
    pub fn from_mass(mass: Mass) -> Self {
        Self::new(mass, luminosity_from_mass(mass.to_solar_masses()))
    }

    /// One solar mass, one solar luminosity.
    pub fn sun() -> Self {
        Self::new(Mass::from_solar_masses(1.0), 1.0)
    }

    /// Stellar mass in solar masses (M☉)
    pub fn mass_solar(&self) -> f64 {
        self.mass.to_solar_masses()
    }

    /// Radius of the ecosphere, where a planet receives Earth's insolation.
    ///
    /// Scales as √L; 1 AU for the Sun.
    pub fn ecosphere_radius(&self) -> Length {
        Length::from_au(self.luminosity.sqrt())
    }
}

impl Default for StarParameters {
    fn default() -> Self {
        Self::sun()
    }
}

/// Main sequence luminosity (L☉) for a star of the given mass (M☉).
///
/// Piecewise power law `L = M^n`:
/// - M < 1: n = 1.75 (M - 0.1) + 3.325
/// - M ≥ 1: n = 0.5 (2 - M) + 4.4
///
/// Only accurate for stars reasonably close to a solar mass.
pub fn luminosity_from_mass(mass_solar: f64) -> f64 {
    let n = if mass_solar < 1.0 {
        1.75 * (mass_solar - 0.1) + 3.325
    } else {
        0.5 * (2.0 - mass_solar) + 4.4
    };
    mass_solar.powf(n)
}
