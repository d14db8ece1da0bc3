use crate::bodies::Planetesimal;
use crate::error::{AccreteError, Result};

/// Planets of a run, kept sorted by orbital axis.
#[derive(Debug, Clone, Default)]
pub struct PlanetSet {
    planets: Vec<Planetesimal>,
}

impl PlanetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planetesimal> {
        self.planets.iter()
    }

    pub fn as_slice(&self) -> &[Planetesimal] {
        &self.planets
    }

    /// Insert keeping ascending orbital order. Equal axes land after the
    /// planets already present.
    pub fn insert(&mut self, planet: Planetesimal) {
        let index = self
            .planets
            .partition_point(|p| p.orbital_axis() <= planet.orbital_axis());
        self.planets.insert(index, planet);
    }

    /// Take the planet at `index` out of the set.
    pub fn remove(&mut self, index: usize) -> Result<Planetesimal> {
        if index >= self.planets.len() {
            return Err(AccreteError::PlanetMissing {
                index,
                len: self.planets.len(),
            });
        }
        Ok(self.planets.remove(index))
    }

    /// Drop every planet for which `keep` is false.
    pub fn retain(&mut self, keep: impl FnMut(&Planetesimal) -> bool) {
        self.planets.retain(keep);
    }

    pub fn into_vec(self) -> Vec<Planetesimal> {
        self.planets
    }
}
