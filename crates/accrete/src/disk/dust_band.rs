use serde::{Deserialize, Serialize};

/// A closed radial interval `[inner, outer]` in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalZone {
    pub inner: f64,
    pub outer: f64,
}

impl OrbitalZone {
    pub fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }

    pub fn midpoint(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }

    /// True when the zone encloses no distance at all.
    pub fn is_empty(&self) -> bool {
        self.outer <= self.inner
    }

    /// Overlap of positive width with `other`, clipped to both zones.
    ///
    /// Zones that merely touch do not overlap.
    pub fn overlap(&self, other: &OrbitalZone) -> Option<OrbitalZone> {
        let clipped = OrbitalZone::new(self.inner.max(other.inner), self.outer.min(other.outer));
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Closed-interval intersection test; touching zones intersect.
    pub fn intersects(&self, other: &OrbitalZone) -> bool {
        self.outer >= other.inner && self.inner <= other.outer
    }
}

/// One band of the disk.
///
/// Bands of a field are ordered by `inner_edge` and only ever touch at
/// their edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustBand {
    /// Inner edge (AU)
    pub inner_edge: f64,
    /// Outer edge (AU)
    pub outer_edge: f64,
    pub has_dust: bool,
    pub has_gas: bool,
}

impl DustBand {
    pub fn new(inner_edge: f64, outer_edge: f64, has_dust: bool, has_gas: bool) -> Self {
        Self {
            inner_edge,
            outer_edge,
            has_dust,
            has_gas,
        }
    }

    /// A pristine band holding both dust and gas.
    pub fn pristine(zone: OrbitalZone) -> Self {
        Self::new(zone.inner, zone.outer, true, true)
    }

    pub fn zone(&self) -> OrbitalZone {
        OrbitalZone::new(self.inner_edge, self.outer_edge)
    }

    /// Same band over a different range.
    pub fn with_edges(&self, inner_edge: f64, outer_edge: f64) -> Self {
        Self {
            inner_edge,
            outer_edge,
            ..*self
        }
    }

    pub fn same_contents(&self, other: &DustBand) -> bool {
        self.has_dust == other.has_dust && self.has_gas == other.has_gas
    }
}
