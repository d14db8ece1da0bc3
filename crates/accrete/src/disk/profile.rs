//! Radial density law of the disk.

use serde::{Deserialize, Serialize};

/// Density law of the disk around one star.
///
/// Dust density falls off as `A · exp(-α r^γ)`, with `A` already scaled by
/// the square root of the stellar mass. Gas is expressed through the gas to
/// dust ratio `K`: once a nucleus has passed its critical mass the material
/// it sweeps is boosted toward `K` times the dust density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskProfile {
    /// `A0 · √M`
    pub density_scale: f64,
    pub alpha: f64,
    pub gamma: f64,
    /// Gas to dust ratio K
    pub gas_dust_ratio: f64,
    /// Exponent β of the gas capture term
    pub gas_effect_exponent: f64,
    /// Eccentricity of dust particle orbits
    pub cloud_eccentricity: f64,
}

impl DiskProfile {
    /// Dust density at `radius` AU.
    pub fn dust_density(&self, radius: f64) -> f64 {
        self.density_scale * (-self.alpha * radius.powf(self.gamma)).exp()
    }

    /// Combined dust and gas density seen by a nucleus past its critical mass.
    ///
    /// `K · ρ / (1 + √(crit / m) · (K - 1))`
    pub fn mass_density(&self, dust_density: f64, critical_mass: f64, mass: f64) -> f64 {
        let k = self.gas_dust_ratio;
        k * dust_density / (1.0 + (critical_mass / mass).sqrt() * (k - 1.0))
    }

    /// Gas density captured by a gas giant.
    ///
    /// `ρ · K / ((K - 1) · (crit / m)^β + 1)`
    pub fn gas_density(&self, dust_density: f64, critical_mass: f64, mass: f64) -> f64 {
        let k = self.gas_dust_ratio;
        let capture = (critical_mass / mass).powf(self.gas_effect_exponent);
        dust_density * k / ((k - 1.0) * capture + 1.0)
    }
}
