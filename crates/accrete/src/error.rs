//! Error types for the accretion engine.

use thiserror::Error;

/// Result type for accretion operations.
pub type Result<T> = std::result::Result<T, AccreteError>;

/// Errors that abort a generation run.
///
/// None of these are retried. Precondition errors are raised before the
/// first nucleus is injected; the remaining variants indicate a logic or
/// numeric fault inside the run.
#[derive(Debug, Error)]
pub enum AccreteError {
    /// Star mass must be positive and finite.
    #[error("invalid star mass: {0} M☉ (must be positive and finite)")]
    InvalidStarMass(f64),

    /// Star luminosity must be positive and finite.
    #[error("invalid star luminosity: {0} L☉ (must be positive and finite)")]
    InvalidLuminosity(f64),

    /// A configuration value lies outside its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The sweep loop produced a NaN or infinite mass.
    #[error("non-finite mass {mass} for nucleus at {orbital_axis} AU")]
    NonFiniteMass { orbital_axis: f64, mass: f64 },

    /// The sweep loop did not converge within the configured ceiling.
    #[error("sweep for nucleus at {orbital_axis} AU did not converge after {iterations} iterations")]
    ConvergenceStalled { orbital_axis: f64, iterations: usize },

    /// A planet expected in the planet set was not found.
    #[error("planet set bookkeeping violated: no planet at index {index} (set holds {len})")]
    PlanetMissing { index: usize, len: usize },
}
