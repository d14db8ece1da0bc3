//! The protoplanetary dust disk.
//!
//! The disk is modelled as an ordered list of radial bands, each flagged
//! with whether it still holds dust and gas. Nuclei sweep material out of
//! the bands; the cleared ranges are written back with [`DustField::update`].

pub mod dust_band;
pub mod dust_field;
pub mod profile;

#[cfg(test)]
mod dust_field_test;

pub use dust_band::{DustBand, OrbitalZone};
pub use dust_field::{DustField, Material};
pub use profile::DiskProfile;
