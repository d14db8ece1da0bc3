//! Orbit-overlap collision detection.

use crate::bodies::{PlanetSet, Planetesimal};

/// Index of the first planet, in ascending orbital order, whose orbit
/// overlaps `body`.
///
/// Two bodies collide when the gap between their axes is within the
/// facing effect margin of either one: the outer margin of the inner
/// body or the inner margin of the outer body.
pub fn find_collision(planets: &PlanetSet, body: &Planetesimal) -> Option<usize> {
    planets.iter().position(|existing| overlaps(existing, body))
}

/// Whether `body` comes within gravitational reach of `existing`.
pub fn overlaps(existing: &Planetesimal, body: &Planetesimal) -> bool {
    let dist = existing.orbital_axis() - body.orbital_axis();
    let (body_margin, existing_margin) = if dist > 0.0 {
        (body.outer_effect_margin(), existing.inner_effect_margin())
    } else {
        (body.inner_effect_margin(), existing.outer_effect_margin())
    };

    dist.abs() <= body_margin || dist.abs() <= existing_margin
}

/// Combine two bodies whose orbits overlap.
///
/// Mass is conserved exactly. The new axis is the mass-weighted harmonic
/// mean of the two, and the eccentricity follows from conserving their
/// combined orbital angular momentum. Dust and gas components add up and
/// the result is a gas giant if either body was.
pub fn merge(existing: &Planetesimal, body: &Planetesimal) -> Planetesimal {
    let (m1, a1, e1) = (existing.mass(), existing.orbital_axis(), existing.eccentricity());
    let (m2, a2, e2) = (body.mass(), body.orbital_axis(), body.eccentricity());

    let mass = m1 + m2;
    let orbital_axis = mass / (m1 / a1 + m2 / a2);

    let momentum = m1 * (a1 * (1.0 - e1 * e1)).sqrt() + m2 * (a2 * (1.0 - e2 * e2)).sqrt();
    let term = momentum / (mass * orbital_axis.sqrt());
    let eccentricity = (1.0 - term * term).abs().sqrt();

    let mut merged = Planetesimal::nucleus(orbital_axis, eccentricity, mass);
    merged.set_components(
        existing.dust_mass() + body.dust_mass(),
        existing.gas_mass() + body.gas_mass(),
        mass,
    );
    if existing.is_gas_giant() || body.is_gas_giant() {
        merged.mark_gas_giant();
    }
    merged
}
