//! Tunable constants of the Dole accretion model.
//!
//! Every constant the engine reads lives in [`AccretionConfig`]. The
//! [`Default`] reproduces the classic Dole / Isaacman-Sagan set, so a run
//! with `AccretionConfig::default()` matches the published model.

use serde::{Deserialize, Serialize};

use crate::disk::{DiskProfile, OrbitalZone};
use crate::error::{AccreteError, Result};

/// Parameters of one accretion run.
///
/// Distances are in AU, masses in solar masses. Zone scales are multiplied
/// by the cube root of the stellar mass.
///
/// # Examples
/// ```
/// use accrete::AccretionConfig;
///
/// let config = AccretionConfig::from_json(r#"{ "gasDustRatio": 60.0 }"#).unwrap();
/// assert_eq!(config.gas_dust_ratio, 60.0);
/// assert_eq!(config.alpha, 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccretionConfig {
    /// Seed mass of a freshly injected nucleus (M☉)
    pub protoplanet_mass: f64,
    /// Dust density scale A0, multiplied by √M
    pub dust_density_coeff: f64,
    /// Exponential falloff of the dust density
    pub alpha: f64,
    /// Radial exponent inside the density exponential
    pub gamma: f64,
    /// Gas to dust mass ratio K
    pub gas_dust_ratio: f64,
    /// Critical mass scale B (M☉)
    pub critical_mass_coeff: f64,
    /// Exponent β applied to critical/mass in the gas pass
    pub gas_effect_exponent: f64,
    /// Eccentricity W of dust particle orbits; widens the swept range
    pub cloud_eccentricity: f64,
    /// Exponent in `e = 1 - U^coeff` for nucleus eccentricity
    pub eccentricity_coeff: f64,
    pub inner_dust_scale: f64,
    pub outer_dust_scale: f64,
    pub innermost_planet_scale: f64,
    pub outermost_planet_scale: f64,
    /// Relative mass gain below which the sweep loop stops
    pub convergence_threshold: f64,
    /// Iteration ceiling of one sweep loop; exceeding it aborts the run
    pub max_sweep_iterations: usize,
    /// Planets at or below this mass are dropped from the result (M☉)
    pub negligible_mass: f64,
}

impl Default for AccretionConfig {
    fn default() -> Self {
        Self {
            protoplanet_mass: 1.0e-15,
            dust_density_coeff: 1.5e-3,
            alpha: 5.0,
            gamma: 1.0 / 3.0,
            gas_dust_ratio: 50.0,
            critical_mass_coeff: 1.2e-5,
            gas_effect_exponent: 0.5,
            cloud_eccentricity: 0.25,
            eccentricity_coeff: 0.077,
            inner_dust_scale: 0.0,
            outer_dust_scale: 200.0,
            innermost_planet_scale: 0.3,
            outermost_planet_scale: 50.0,
            convergence_threshold: 0.01,
            max_sweep_iterations: 10_000,
            negligible_mass: 2.0e-8,
        }
    }
}

impl AccretionConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("protoplanetMass", self.protoplanet_mass),
            ("dustDensityCoeff", self.dust_density_coeff),
            ("alpha", self.alpha),
            ("gamma", self.gamma),
            ("gasDustRatio", self.gas_dust_ratio),
            ("criticalMassCoeff", self.critical_mass_coeff),
            ("gasEffectExponent", self.gas_effect_exponent),
            ("cloudEccentricity", self.cloud_eccentricity),
            ("eccentricityCoeff", self.eccentricity_coeff),
            ("innerDustScale", self.inner_dust_scale),
            ("outerDustScale", self.outer_dust_scale),
            ("innermostPlanetScale", self.innermost_planet_scale),
            ("outermostPlanetScale", self.outermost_planet_scale),
            ("convergenceThreshold", self.convergence_threshold),
            ("negligibleMass", self.negligible_mass),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }

        if self.protoplanet_mass <= 0.0 {
            return Err(invalid("protoplanetMass must be positive"));
        }
        if self.dust_density_coeff <= 0.0 {
            return Err(invalid("dustDensityCoeff must be positive"));
        }
        if self.alpha < 0.0 || self.gamma <= 0.0 {
            return Err(invalid("alpha must be non-negative and gamma positive"));
        }
        if self.gas_dust_ratio < 1.0 {
            return Err(invalid("gasDustRatio must be at least 1"));
        }
        if self.critical_mass_coeff <= 0.0 {
            return Err(invalid("criticalMassCoeff must be positive"));
        }
        if self.gas_effect_exponent < 0.0 {
            return Err(invalid("gasEffectExponent must be non-negative"));
        }
        if !(0.0..1.0).contains(&self.cloud_eccentricity) {
            return Err(invalid("cloudEccentricity must lie in [0, 1)"));
        }
        if self.eccentricity_coeff <= 0.0 {
            return Err(invalid("eccentricityCoeff must be positive"));
        }
        if self.inner_dust_scale < 0.0 || self.outer_dust_scale < 0.0 {
            return Err(invalid("dust scales must be non-negative"));
        }
        if self.innermost_planet_scale <= 0.0
            || self.outermost_planet_scale < self.innermost_planet_scale
        {
            return Err(invalid(
                "planet scales must satisfy 0 < innermostPlanetScale <= outermostPlanetScale",
            ));
        }
        if self.convergence_threshold <= 0.0 || self.convergence_threshold >= 1.0 {
            return Err(invalid("convergenceThreshold must lie in (0, 1)"));
        }
        if self.max_sweep_iterations == 0 {
            return Err(invalid("maxSweepIterations must be at least 1"));
        }
        if self.negligible_mass < 0.0 {
            return Err(invalid("negligibleMass must be non-negative"));
        }
        Ok(())
    }

    /// Extent of the initial dust disk around a star of `star_mass` M☉.
    pub fn dust_limits(&self, star_mass: f64) -> OrbitalZone {
        let scale = star_mass.cbrt();
        OrbitalZone::new(self.inner_dust_scale * scale, self.outer_dust_scale * scale)
    }

    /// Range in which nuclei are injected. The run ends when no dust is
    /// left inside it.
    pub fn formation_zone(&self, star_mass: f64) -> OrbitalZone {
        let scale = star_mass.cbrt();
        OrbitalZone::new(
            self.innermost_planet_scale * scale,
            self.outermost_planet_scale * scale,
        )
    }

    /// Mass above which a nucleus starts capturing gas.
    ///
    /// `B · (perihelion · √L)^(-3/4)`
    pub fn critical_mass(&self, perihelion: f64, luminosity: f64) -> f64 {
        let temperature_scale = perihelion * luminosity.sqrt();
        self.critical_mass_coeff * temperature_scale.powf(-0.75)
    }

    /// Density law of the disk around a star of `star_mass` M☉.
    pub fn disk_profile(&self, star_mass: f64) -> DiskProfile {
        DiskProfile {
            density_scale: self.dust_density_coeff * star_mass.sqrt(),
            alpha: self.alpha,
            gamma: self.gamma,
            gas_dust_ratio: self.gas_dust_ratio,
            gas_effect_exponent: self.gas_effect_exponent,
            cloud_eccentricity: self.cloud_eccentricity,
        }
    }
}

fn invalid(message: impl Into<String>) -> AccreteError {
    AccreteError::InvalidConfig(message.into())
}
