//! Band bookkeeping for the dust disk.

use std::f64::consts::PI;

use crate::bodies::Planetesimal;
use crate::disk::{DiskProfile, DustBand, OrbitalZone};

/// Which component of the disk a sweep collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Dust, boosted by gas once the nucleus passes its critical mass.
    Dust,
    /// Gas captured by a gas giant over its effect zone.
    Gas,
}

/// Ordered, non-overlapping bands of the disk plus its density law.
///
/// Owned by one generation run. [`update`](Self::update) is the only
/// mutator besides [`compress`](Self::compress); both preserve ordering.
#[derive(Debug, Clone)]
pub struct DustField {
    bands: Vec<DustBand>,
    profile: DiskProfile,
}

impl DustField {
    /// Single pristine band spanning `limits`, or an empty field when the
    /// limits enclose nothing.
    pub fn new(limits: OrbitalZone, profile: DiskProfile) -> Self {
        let bands = if limits.is_empty() {
            Vec::new()
        } else {
            vec![DustBand::pristine(limits)]
        };
        Self { bands, profile }
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    pub fn profile(&self) -> &DiskProfile {
        &self.profile
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether any band still holding dust touches `zone`.
    pub fn has_accretable_dust(&self, zone: OrbitalZone) -> bool {
        self.bands
            .iter()
            .any(|band| band.has_dust && band.zone().intersects(&zone))
    }

    /// Dust density at `radius` AU.
    pub fn density(&self, radius: f64) -> f64 {
        self.profile.dust_density(radius)
    }

    /// Mass `nucleus` would collect from the field in its current state.
    ///
    /// Each band overlapping the relevant range contributes
    /// `width · density(mid) · mid`, evaluated at the midpoint of the clipped
    /// overlap; the sum is scaled by `4π · reach`. A range that misses every
    /// band yields zero.
    pub fn swept_mass(&self, nucleus: &Planetesimal, material: Material, critical_mass: f64) -> f64 {
        let mass = nucleus.mass();
        let range = match material {
            Material::Dust => {
                let swept = nucleus.swept_zone(self.profile.cloud_eccentricity);
                OrbitalZone::new(swept.inner.max(0.0), swept.outer)
            }
            Material::Gas => nucleus.effect_zone(),
        };

        let collected: f64 = self
            .bands
            .iter()
            .filter(|band| match material {
                Material::Dust => band.has_dust,
                Material::Gas => band.has_gas,
            })
            .filter_map(|band| band.zone().overlap(&range).map(|overlap| (band, overlap)))
            .map(|(band, overlap)| {
                let mid = overlap.midpoint();
                let dust = self.profile.dust_density(mid);
                let density = match material {
                    Material::Dust if band.has_gas && mass >= critical_mass => {
                        self.profile.mass_density(dust, critical_mass, mass)
                    }
                    Material::Dust => dust,
                    Material::Gas => self.profile.gas_density(dust, critical_mass, mass),
                };
                overlap.width() * density * mid
            })
            .sum();

        4.0 * PI * nucleus.reach() * collected
    }

    /// Clear dust (and gas, when `consumed_gas`) from every band inside
    /// `cleared`.
    ///
    /// A band straddling an edge of the range is split, so one band becomes
    /// at most three: untouched left part, cleared middle, untouched right.
    pub fn update(&mut self, cleared: OrbitalZone, consumed_gas: bool) {
        let mut bands = Vec::with_capacity(self.bands.len() + 2);

        for band in &self.bands {
            let Some(middle) = band.zone().overlap(&cleared) else {
                bands.push(*band);
                continue;
            };

            if band.inner_edge < middle.inner {
                bands.push(band.with_edges(band.inner_edge, middle.inner));
            }
            bands.push(DustBand::new(
                middle.inner,
                middle.outer,
                false,
                band.has_gas && !consumed_gas,
            ));
            if middle.outer < band.outer_edge {
                bands.push(band.with_edges(middle.outer, band.outer_edge));
            }
        }

        self.bands = bands;
    }

    /// Merge neighbouring bands with identical contents.
    pub fn compress(&mut self) {
        let bands = std::mem::take(&mut self.bands);
        let mut merged: Vec<DustBand> = Vec::with_capacity(bands.len());

        for band in bands {
            match merged.last_mut() {
                Some(last) if last.same_contents(&band) && last.outer_edge >= band.inner_edge => {
                    last.outer_edge = band.outer_edge;
                }
                _ => merged.push(band),
            }
        }

        self.bands = merged;
    }
}
