//! Post-accretion planet statistics
//!
//! Empirical relations after Fogg (1985), as popularised by Folkins' and
//! Burrell's accrete programs. None of this feeds back into accretion.
//!
//! # References
//! - Fogg (1985) - "Extra-solar planetary systems: a microcomputer simulation"

use std::f64::consts::PI;

use accrete::{Planetesimal, RandomSource};
use serde::{Deserialize, Serialize};
use stellar::StarParameters;
use tracing::debug;
use units::time::{HOURS_PER_DAY, SECONDS_PER_HOUR};
use units::{Length, Mass, Temperature, Time};

/// Solar constant at Earth (W/m²)
pub const SOLAR_CONSTANT: f64 = 1400.0;

/// Stefan-Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.672e-11;

/// A body needs at least this gas fraction to be reported as a gas giant
pub const GAS_GIANT_MIN_GAS_FRACTION: f64 = 0.1;

/// Reference density of an Earth-mass rock at the ecosphere (g/cm³)
const ROCKY_DENSITY: f64 = 5.5;

/// Moment of inertia ratios
const K2_GAS_GIANT: f64 = 0.24;
const K2_ROCKY: f64 = 0.33;

/// Stellar age (Gyr) assumed for tidal braking
const BRAKING_AGE: f64 = 4.0;

/// How a planet spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rotation {
    /// Spins freely; tidal braking has not stopped it
    Free,
    /// Tidal braking has synchronised day and year
    TidallyLocked,
    /// Locked into a spin-orbit resonance by an eccentric orbit
    Resonant,
}

/// Physical properties of one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetStats {
    pub orbital_axis: Length,
    pub eccentricity: f64,
    pub mass: Mass,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    /// Accretion flag, cleared when less than a tenth of the mass is gas
    pub is_gas_giant: bool,
    /// Black-body temperature, no greenhouse effect
    pub temperature: Temperature,
    /// Bulk density (g/cm³)
    pub density: f64,
    pub radius: Length,
    pub orbital_period: Time,
    pub day_length: Time,
    pub rotation: Rotation,
    /// Surface gravity (m/s²)
    pub surface_gravity: f64,
    /// Escape velocity (km/s)
    pub escape_velocity: f64,
}

impl PlanetStats {
    /// Derive the physical properties of `planet` orbiting `star`.
    ///
    /// Gas giants draw one deviate from `rng` for their gas density;
    /// rocky planets draw none.
    pub fn compute<R: RandomSource>(
        planet: &Planetesimal,
        star: &StarParameters,
        rng: &mut R,
    ) -> Self {
        let a = planet.orbital_axis();
        let mass = Mass::from_solar_masses(planet.mass());
        let dust_mass = Mass::from_solar_masses(planet.dust_mass());
        let gas_mass = Mass::from_solar_masses(planet.gas_mass());
        let mass_earth = mass.to_earth_masses();

        let temperature = blackbody_temperature(star.luminosity, a);
        let is_gas_giant = planet.is_gas_giant() && gas_mass / mass >= GAS_GIANT_MIN_GAS_FRACTION;

        let ecosphere_ratio = star.ecosphere_radius().to_au() / a;
        let (density, k2) = if is_gas_giant {
            let core = rocky_density(dust_mass.to_earth_masses(), ecosphere_ratio);
            let envelope = (0.5 + 0.5 * rng.next_uniform()) * (273.0 / temperature.to_kelvin()).sqrt();
            let volume = dust_mass.to_earth_masses() / core + gas_mass.to_earth_masses() / envelope;
            (mass_earth / volume, K2_GAS_GIANT)
        } else {
            (rocky_density(mass_earth, ecosphere_ratio), K2_ROCKY)
        };

        let orbital_period = Time::from_years((a.powi(3) / star.mass_solar()).sqrt());
        let radius_km = (mass_earth * 6.0e21 / (density * 4.2)).powf(0.333) / 1000.0;

        let (day_length, rotation) = day_length(
            mass_earth,
            radius_km,
            k2,
            star.mass_solar(),
            a,
            planet.eccentricity(),
            orbital_period,
        );

        let stats = Self {
            orbital_axis: Length::from_au(a),
            eccentricity: planet.eccentricity(),
            mass,
            dust_mass,
            gas_mass,
            is_gas_giant,
            temperature,
            density,
            radius: Length::from_km(radius_km),
            orbital_period,
            day_length,
            rotation,
            surface_gravity: surface_gravity(density, radius_km),
            escape_velocity: escape_velocity(mass.to_kg(), radius_km),
        };

        debug!(
            orbital_axis = a,
            mass_earth,
            density,
            radius_km,
            "planet stats computed"
        );
        stats
    }

    /// Radius in Earth radii
    pub fn radius_earth(&self) -> f64 {
        self.radius.to_earth_radii()
    }
}

/// Stats for every planet of a system, in the order given.
pub fn system_stats<R: RandomSource>(
    planets: &[Planetesimal],
    star: &StarParameters,
    rng: &mut R,
) -> Vec<PlanetStats> {
    planets
        .iter()
        .map(|planet| PlanetStats::compute(planet, star, rng))
        .collect()
}

/// Black-body temperature at `distance_au` from a star of `luminosity` L☉.
pub fn blackbody_temperature(luminosity: f64, distance_au: f64) -> Temperature {
    let flux = SOLAR_CONSTANT * luminosity / (distance_au * distance_au);
    Temperature::from_kelvin((flux / (4.0 * STEFAN_BOLTZMANN)).powf(0.25))
}

/// Density (g/cm³) of a rocky body; denser when heavier or closer in.
pub fn rocky_density(mass_earth: f64, ecosphere_ratio: f64) -> f64 {
    mass_earth.powf(0.125) * ecosphere_ratio.powf(0.25) * ROCKY_DENSITY
}

/// Surface gravity (m/s²) from density (g/cm³) and radius (km).
pub fn surface_gravity(density: f64, radius_km: f64) -> f64 {
    4.0e6 * PI * GRAVITATIONAL_CONSTANT * radius_km * density / 3.0
}

/// Escape velocity (km/s) from mass (kg) and radius (km).
pub fn escape_velocity(mass_kg: f64, radius_km: f64) -> f64 {
    (2.0 * GRAVITATIONAL_CONSTANT * mass_kg / (radius_km * 1000.0)).sqrt() / 1000.0
}

/// Length of day from primordial angular momentum less stellar tidal
/// braking.
///
/// A planet braked to a standstill is tidally locked; with an eccentric
/// orbit (e > 0.1) it settles into a spin-orbit resonance instead.
fn day_length(
    mass_earth: f64,
    radius_km: f64,
    k2: f64,
    star_mass: f64,
    a: f64,
    eccentricity: f64,
    orbital_period: Time,
) -> (Time, Rotation) {
    // rad/s
    let spin = (8.73e-2 * mass_earth / (0.5 * k2 * radius_km * radius_km)).sqrt();
    let braking = (radius_km / 6422.0) / mass_earth * star_mass.powi(2) * a.powi(-6) * -1.3e-6 * BRAKING_AGE;
    let spin = spin + braking;

    if spin > 0.0 {
        let hours = 2.0 * PI / (SECONDS_PER_HOUR * spin);
        return (Time::from_hours(hours), Rotation::Free);
    }

    if eccentricity > 0.1 {
        let hours = orbital_period.to_days() * HOURS_PER_DAY * (1.0 - eccentricity) / (1.0 + eccentricity);
        (Time::from_hours(hours), Rotation::Resonant)
    } else {
        (orbital_period, Rotation::TidallyLocked)
    }
}
