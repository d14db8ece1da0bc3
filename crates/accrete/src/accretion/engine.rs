//! The Dole generation loop.
//!
//! Nuclei are injected one at a time at random positions in the formation
//! zone. Each sweeps dust (and, past its critical mass, gas) until its mass
//! stops growing, clears what it swept from the disk, and is then merged
//! with any planet whose orbit it overlaps. The run ends once no dust is
//! left inside the formation zone.
//!
//! ```text
//! Created ──▶ Accreting ──▶ Discarded
//!                 │
//!                 ├──▶ Colliding ──▶ Accreting (merged body)
//!                 │
//!                 └──▶ Inserted
//! ```

use stellar::StarParameters;
use tracing::{debug, info, trace};

use crate::accretion::coalescence::{find_collision, merge};
use crate::bodies::{PlanetSet, Planetesimal};
use crate::config::AccretionConfig;
use crate::disk::{DustField, Material, OrbitalZone};
use crate::error::{AccreteError, Result};
use crate::random::RandomSource;

/// One generation run around a single star.
///
/// Owns its dust field, planet set and random source; nothing is shared
/// between runs.
pub struct AccretionEngine<'a, R: RandomSource> {
    config: &'a AccretionConfig,
    star: StarParameters,
    field: DustField,
    planets: PlanetSet,
    formation_zone: OrbitalZone,
    rng: R,
}

impl<'a, R: RandomSource> AccretionEngine<'a, R> {
    /// Prepare a run, rejecting unusable stars and configurations up front.
    pub fn new(star: StarParameters, config: &'a AccretionConfig, rng: R) -> Result<Self> {
        let star_mass = star.mass_solar();
        if !star_mass.is_finite() || star_mass <= 0.0 {
            return Err(AccreteError::InvalidStarMass(star_mass));
        }
        if !star.luminosity.is_finite() || star.luminosity <= 0.0 {
            return Err(AccreteError::InvalidLuminosity(star.luminosity));
        }
        config.validate()?;

        let field = DustField::new(config.dust_limits(star_mass), config.disk_profile(star_mass));

        Ok(Self {
            config,
            star,
            field,
            planets: PlanetSet::new(),
            formation_zone: config.formation_zone(star_mass),
            rng,
        })
    }

    pub fn dust_field(&self) -> &DustField {
        &self.field
    }

    pub fn planets(&self) -> &PlanetSet {
        &self.planets
    }

    /// Inject nuclei until the formation zone holds no more dust, then
    /// return the surviving planets in orbital order.
    pub fn run(mut self) -> Result<Vec<Planetesimal>> {
        let mut injected = 0usize;
        let mut discarded = 0usize;
        let mut merges = 0usize;

        while self.field.has_accretable_dust(self.formation_zone) {
            let mut nucleus = self.inject_nucleus();
            injected += 1;

            let critical_mass = self
                .config
                .critical_mass(nucleus.perihelion(), self.star.luminosity);
            self.accrete(&mut nucleus, critical_mass)?;
            self.clear_swept(&nucleus);

            if nucleus.mass() == self.config.protoplanet_mass {
                discarded += 1;
                debug!(
                    orbital_axis = nucleus.orbital_axis(),
                    "nucleus swept nothing, discarded"
                );
                continue;
            }

            merges += self.settle(nucleus, critical_mass)?;
        }

        let formed = self.planets.len();
        let negligible = self.config.negligible_mass;
        self.planets.retain(|planet| planet.mass() > negligible);

        info!(
            star_mass = self.star.mass_solar(),
            injected,
            discarded,
            merges,
            formed,
            kept = self.planets.len(),
            "accretion finished"
        );

        Ok(self.planets.into_vec())
    }

    /// Draw a fresh nucleus: orbital axis first, then eccentricity.
    pub fn inject_nucleus(&mut self) -> Planetesimal {
        let zone = self.formation_zone;
        let orbital_axis = self.rng.next_range(zone.inner, zone.outer);
        let eccentricity = 1.0 - self.rng.next_uniform().powf(self.config.eccentricity_coeff);
        Planetesimal::nucleus(orbital_axis, eccentricity, self.config.protoplanet_mass)
    }

    /// Grow `nucleus` until the relative mass gain of one sweep falls
    /// below the convergence threshold.
    ///
    /// Draws exactly one deviate per iteration. Mass never decreases.
    pub fn accrete(&mut self, nucleus: &mut Planetesimal, critical_mass: f64) -> Result<()> {
        let limit = self.config.max_sweep_iterations;

        for iteration in 1..=limit {
            let previous = nucleus.mass();

            let swept_dust = self.field.swept_mass(nucleus, Material::Dust, critical_mass);
            let dust_mass = nucleus.dust_mass().max(swept_dust);

            let capture = self.rng.next_uniform();
            let mut gas_mass = nucleus.gas_mass().max(swept_dust * capture * previous);

            if dust_mass > critical_mass {
                nucleus.mark_gas_giant();
                let swept_gas = self.field.swept_mass(nucleus, Material::Gas, critical_mass);
                gas_mass = gas_mass.max(swept_gas);
            }

            let mass = (dust_mass + gas_mass).max(previous);
            if !mass.is_finite() {
                return Err(AccreteError::NonFiniteMass {
                    orbital_axis: nucleus.orbital_axis(),
                    mass,
                });
            }
            nucleus.set_components(dust_mass, gas_mass, mass);

            trace!(
                orbital_axis = nucleus.orbital_axis(),
                iteration,
                mass,
                dust_mass,
                gas_mass,
                "sweep"
            );

            if (mass - previous) / mass < self.config.convergence_threshold {
                return Ok(());
            }
        }

        Err(AccreteError::ConvergenceStalled {
            orbital_axis: nucleus.orbital_axis(),
            iterations: limit,
        })
    }

    /// Remove what `body` swept from the disk; gas giants take the gas too.
    fn clear_swept(&mut self, body: &Planetesimal) {
        let swept = body.swept_zone(self.field.profile().cloud_eccentricity);
        self.field.update(swept, body.is_gas_giant());
        self.field.compress();
    }

    /// Merge `body` with every planet its orbit overlaps, then insert it.
    ///
    /// The merged body keeps accreting after each merge, which may bring it
    /// into reach of further planets. Returns the number of merges.
    pub(crate) fn settle(&mut self, mut body: Planetesimal, critical_mass: f64) -> Result<usize> {
        let mut merges = 0;

        while let Some(index) = find_collision(&self.planets, &body) {
            let existing = self.planets.remove(index)?;
            debug!(
                existing = existing.orbital_axis(),
                incoming = body.orbital_axis(),
                "orbits overlap, merging"
            );

            body = merge(&existing, &body);
            self.accrete(&mut body, critical_mass)?;
            self.clear_swept(&body);
            merges += 1;
        }

        debug!(
            orbital_axis = body.orbital_axis(),
            mass = body.mass(),
            gas_giant = body.is_gas_giant(),
            "planet inserted"
        );
        self.planets.insert(body);
        Ok(merges)
    }
}
