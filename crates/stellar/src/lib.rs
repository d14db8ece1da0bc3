//! Host star parameters and sampling.
//!
//! Provides the two stellar scalars the accretion engine consumes (mass and
//! luminosity), either user specified or sampled from an IMF.

pub mod primary;
pub mod sampling;


pub use primary::{StarParameters, luminosity_from_mass};
pub use sampling::{sample_host_mass, sample_power_law, sample_star};
