//! Stochastic planet formation after Dole (1970) and Isaacman & Sagan (1977).
//!
//! Planetesimal nuclei are dropped at random into a disk of dust and gas.
//! Each one sweeps up material until it stops growing, bodies whose orbits
//! overlap are merged, and the process repeats until the dust inside the
//! formation zone is used up.
//!
//! # Example
//! ```
//! use accrete::generate_seeded;
//! use stellar::StarParameters;
//!
//! let planets = generate_seeded(StarParameters::sun(), 42).unwrap();
//! for planet in &planets {
//!     println!("{:.3} AU  {:.3} M⊕", planet.orbital_axis(), planet.mass_earth());
//! }
//! ```

pub mod accretion;
pub mod bodies;
pub mod config;
pub mod disk;
pub mod error;
pub mod random;


pub use accretion::{
    AccretedSystem, AccretionEngine, generate, generate_named, generate_random, generate_seeded,
    generate_system,
};
pub use bodies::{PlanetSet, Planetesimal};
pub use config::AccretionConfig;
pub use disk::{DiskProfile, DustBand, DustField, Material, OrbitalZone};
pub use error::{AccreteError, Result};
pub use random::RandomSource;
