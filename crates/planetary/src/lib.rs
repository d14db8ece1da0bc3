//! Physical characterization of accreted planets
//!
//! Turns the bare orbital elements and masses produced by the `accrete`
//! crate into the quantities a reader cares about: density, radius, year
//! and day length, temperature, surface gravity and escape velocity.

pub mod stats;


pub use stats::{PlanetStats, Rotation, system_stats};
