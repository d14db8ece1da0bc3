use approx::assert_relative_eq;

use crate::bodies::Planetesimal;

#[test]
fn nucleus_starts_as_seed_dust() {
    let nucleus = Planetesimal::nucleus(2.0, 0.1, 1.0e-15);

    assert_eq!(nucleus.mass(), 1.0e-15);
    assert_eq!(nucleus.dust_mass(), 1.0e-15);
    assert_eq!(nucleus.gas_mass(), 0.0);
    assert!(!nucleus.is_gas_giant());
}

#[test]
fn orbit_extremes() {
    let body = Planetesimal::nucleus(2.0, 0.25, 1.0e-6);

    assert_relative_eq!(body.perihelion(), 1.5);
    assert_relative_eq!(body.aphelion(), 2.5);
}

#[test]
fn earth_masses() {
    let earth = Planetesimal::nucleus(1.0, 0.0, 1.0 / 332_775.64);
    assert_relative_eq!(earth.mass_earth(), 1.0, max_relative = 1e-12);
}

#[test]
fn reach_grows_with_mass() {
    let body = Planetesimal::nucleus(4.0, 0.0, 1.0);

    assert_relative_eq!(body.reduced_mass(), 0.5);
    assert_relative_eq!(body.reduced_margin(), 0.5f64.powf(0.25));
    assert_relative_eq!(body.reach(), 4.0 * 0.5f64.powf(0.25));

    let light = Planetesimal::nucleus(4.0, 0.0, 1.0e-12);
    assert!(light.reach() < body.reach());
}

#[test]
fn effect_and_swept_zones() {
    let body = Planetesimal::nucleus(1.0, 0.2, 1.0e-4);
    let margin = body.reduced_margin();

    let effect = body.effect_zone();
    assert_relative_eq!(effect.inner, 0.8 * (1.0 - margin));
    assert_relative_eq!(effect.outer, 1.2 * (1.0 + margin));
    assert_relative_eq!(body.inner_effect_margin(), 1.0 - effect.inner);
    assert_relative_eq!(body.outer_effect_margin(), effect.outer - 1.0);

    let swept = body.swept_zone(0.25);
    assert_relative_eq!(swept.inner, effect.inner / 1.25);
    assert_relative_eq!(swept.outer, effect.outer / 0.75);
    assert!(swept.inner < effect.inner && swept.outer > effect.outer);
}

#[test]
fn set_components_and_gas_giant_flag() {
    let mut body = Planetesimal::nucleus(5.0, 0.0, 1.0e-15);
    body.set_components(1.0e-5, 2.0e-4, 2.1e-4);
    body.mark_gas_giant();

    assert_eq!(body.dust_mass(), 1.0e-5);
    assert_eq!(body.gas_mass(), 2.0e-4);
    assert_eq!(body.mass(), 2.1e-4);
    assert!(body.is_gas_giant());
}

#[test]
fn serializes_camel_case() {
    let body = Planetesimal::nucleus(1.5, 0.05, 3.0e-6);
    let json = serde_json::to_value(&body).expect("planetesimal should serialize");

    assert_eq!(json["orbitalAxis"], 1.5);
    assert_eq!(json["isGasGiant"], false);
    assert_eq!(json["dustMass"], 3.0e-6);

    let back: Planetesimal = serde_json::from_value(json).expect("planetesimal should deserialize");
    assert_eq!(back.orbital_axis(), 1.5);
}
