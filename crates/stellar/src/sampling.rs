use rand::Rng;
use rand_chacha::ChaChaRng;
use units::Mass;

use crate::primary::StarParameters;

/// Lightest star sampled as a planet host (M☉)
pub const MIN_HOST_MASS: f64 = 0.3;

/// Heaviest star sampled as a planet host (M☉)
///
/// Above this the mass-luminosity fit used for the ecosphere drifts badly.
pub const MAX_HOST_MASS: f64 = 1.5;

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
///
/// # Arguments
/// * `x_min` - Minimum value
/// * `x_max` - Maximum value
/// * `alpha` - Power-law exponent (e.g., -2.3 for Salpeter IMF)
/// * `rng` - Random number generator
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample a host star mass (M☉) from a Kroupa (2001) style broken power law.
///
/// Restricted to [`MIN_HOST_MASS`, `MAX_HOST_MASS`]:
/// - 0.3 ≤ M < 0.5 M☉: α = -1.3
/// - 0.5 ≤ M ≤ 1.5 M☉: α = -2.3
///
/// The segment split (60/40) approximates the integrated IMF over the
/// restricted range.
pub fn sample_host_mass(rng: &mut ChaChaRng) -> f64 {
    let segment: f64 = rng.random();
    if segment < 0.6 {
        sample_power_law(MIN_HOST_MASS, 0.5, -1.3, rng)
    } else {
        sample_power_law(0.5, MAX_HOST_MASS, -2.3, rng)
    }
}

/// Sample a main sequence host star, luminosity derived from mass.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sample_star;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = sample_star(&mut rng);
/// assert!(star.mass_solar() >= 0.3 && star.mass_solar() <= 1.5);
/// ```
pub fn sample_star(rng: &mut ChaChaRng) -> StarParameters {
    StarParameters::from_mass(Mass::from_solar_masses(sample_host_mass(rng)))
}
