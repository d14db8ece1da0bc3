use serde::{Deserialize, Serialize};
use units::SOLAR_MASS_IN_EARTH_MASSES;

use crate::disk::OrbitalZone;

/// A growing body on a Keplerian orbit.
///
/// Starts at the protoplanet seed mass and only ever gains mass while it
/// accretes. `mass` tracks the total; `dust_mass` and `gas_mass` are its
/// two components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planetesimal {
    orbital_axis: f64,
    eccentricity: f64,
    mass: f64,
    dust_mass: f64,
    gas_mass: f64,
    is_gas_giant: bool,
}

impl Planetesimal {
    /// A fresh nucleus of `seed_mass` M☉, all of it dust.
    pub fn nucleus(orbital_axis: f64, eccentricity: f64, seed_mass: f64) -> Self {
        Self {
            orbital_axis,
            eccentricity,
            mass: seed_mass,
            dust_mass: seed_mass,
            gas_mass: 0.0,
            is_gas_giant: false,
        }
    }

    /// Semi-major axis (AU)
    pub fn orbital_axis(&self) -> f64 {
        self.orbital_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Total mass (M☉)
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Mass accreted as dust (M☉)
    pub fn dust_mass(&self) -> f64 {
        self.dust_mass
    }

    /// Mass accreted as gas (M☉)
    pub fn gas_mass(&self) -> f64 {
        self.gas_mass
    }

    pub fn is_gas_giant(&self) -> bool {
        self.is_gas_giant
    }

    pub fn mass_earth(&self) -> f64 {
        self.mass * SOLAR_MASS_IN_EARTH_MASSES
    }

    pub fn perihelion(&self) -> f64 {
        self.orbital_axis * (1.0 - self.eccentricity)
    }

    pub fn aphelion(&self) -> f64 {
        self.orbital_axis * (1.0 + self.eccentricity)
    }

    /// `m / (1 + m)`, the mass relative to the star-plus-body system.
    pub fn reduced_mass(&self) -> f64 {
        self.mass / (1.0 + self.mass)
    }

    /// Fractional gravitational reach, `reduced_mass^(1/4)`.
    pub fn reduced_margin(&self) -> f64 {
        self.reduced_mass().powf(0.25)
    }

    /// Gravitational reach (AU)
    pub fn reach(&self) -> f64 {
        self.orbital_axis * self.reduced_margin()
    }

    /// Range the body disturbs gravitationally over one orbit.
    pub fn effect_zone(&self) -> OrbitalZone {
        let margin = self.reduced_margin();
        OrbitalZone::new(
            self.perihelion() * (1.0 - margin),
            self.aphelion() * (1.0 + margin),
        )
    }

    /// Range from which dust on orbits of eccentricity `cloud_eccentricity`
    /// can be swept up.
    pub fn swept_zone(&self, cloud_eccentricity: f64) -> OrbitalZone {
        let effect = self.effect_zone();
        OrbitalZone::new(
            effect.inner / (1.0 + cloud_eccentricity),
            effect.outer / (1.0 - cloud_eccentricity),
        )
    }

    /// Distance from the orbital axis to the inner effect limit.
    pub fn inner_effect_margin(&self) -> f64 {
        self.orbital_axis - self.effect_zone().inner
    }

    /// Distance from the orbital axis to the outer effect limit.
    pub fn outer_effect_margin(&self) -> f64 {
        self.effect_zone().outer - self.orbital_axis
    }

    pub(crate) fn set_components(&mut self, dust_mass: f64, gas_mass: f64, mass: f64) {
        self.dust_mass = dust_mass;
        self.gas_mass = gas_mass;
        self.mass = mass;
    }

    pub(crate) fn mark_gas_giant(&mut self) {
        self.is_gas_giant = true;
    }
}
