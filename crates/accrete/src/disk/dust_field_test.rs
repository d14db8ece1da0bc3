use std::f64::consts::PI;

use approx::assert_relative_eq;
use proptest::prelude::*;

use crate::bodies::Planetesimal;
use crate::config::AccretionConfig;
use crate::disk::{DiskProfile, DustBand, DustField, Material, OrbitalZone};

fn solar_profile() -> DiskProfile {
    AccretionConfig::default().disk_profile(1.0)
}

fn field(inner: f64, outer: f64) -> DustField {
    DustField::new(OrbitalZone::new(inner, outer), solar_profile())
}

fn check_well_formed(bands: &[DustBand]) -> Result<(), TestCaseError> {
    for band in bands {
        prop_assert!(band.inner_edge < band.outer_edge, "empty band {:?}", band);
    }
    for pair in bands.windows(2) {
        prop_assert_eq!(pair[0].outer_edge, pair[1].inner_edge, "gap or overlap {:?}", pair);
    }
    Ok(())
}

// ============================================================================
// Construction and queries
// ============================================================================

#[test]
fn new_field_is_one_pristine_band() {
    let field = field(0.0, 200.0);

    assert_eq!(field.bands(), &[DustBand::new(0.0, 200.0, true, true)]);
    assert!(!field.is_empty());
}

#[test]
fn inverted_limits_give_an_empty_field() {
    let field = field(5.0, 5.0);

    assert!(field.is_empty());
    assert!(!field.has_accretable_dust(OrbitalZone::new(0.0, 100.0)));
}

#[test]
fn density_falls_off_with_radius() {
    let field = field(0.0, 200.0);

    assert_relative_eq!(field.density(0.0), 1.5e-3);
    assert_relative_eq!(field.density(1.0), 1.5e-3 * (-5.0f64).exp(), max_relative = 1e-12);
    assert!(field.density(10.0) < field.density(1.0));
}

#[test]
fn accretable_dust_uses_closed_intervals() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(2.0, 10.0), false);
    field.compress();

    // [0, 2] still holds dust and touches the zone at its inner edge
    assert!(field.has_accretable_dust(OrbitalZone::new(2.0, 5.0)));
    assert!(!field.has_accretable_dust(OrbitalZone::new(2.5, 5.0)));
}

#[test]
fn fully_swept_field_has_no_accretable_dust() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(-1.0, 11.0), true);
    field.compress();

    assert_eq!(field.bands(), &[DustBand::new(0.0, 10.0, false, false)]);
    assert!(!field.has_accretable_dust(OrbitalZone::new(0.0, 10.0)));
}

// ============================================================================
// Update and compress
// ============================================================================

#[test]
fn update_splits_straddled_band_in_three() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(2.0, 4.0), false);

    assert_eq!(
        field.bands(),
        &[
            DustBand::new(0.0, 2.0, true, true),
            DustBand::new(2.0, 4.0, false, true),
            DustBand::new(4.0, 10.0, true, true),
        ]
    );
}

#[test]
fn update_consumes_gas_only_when_asked() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(2.0, 4.0), true);

    assert_eq!(field.bands()[1], DustBand::new(2.0, 4.0, false, false));
}

#[test]
fn update_truncates_bands_at_either_edge() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(-5.0, 3.0), false);
    field.update(OrbitalZone::new(8.0, 20.0), false);

    assert_eq!(
        field.bands(),
        &[
            DustBand::new(0.0, 3.0, false, true),
            DustBand::new(3.0, 8.0, true, true),
            DustBand::new(8.0, 10.0, false, true),
        ]
    );
}

#[test]
fn update_outside_field_changes_nothing() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(20.0, 30.0), true);

    assert_eq!(field.bands(), &[DustBand::new(0.0, 10.0, true, true)]);
}

#[test]
fn compress_merges_neighbours_with_same_contents() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(2.0, 4.0), false);
    field.update(OrbitalZone::new(4.0, 6.0), false);
    assert_eq!(field.bands().len(), 4);

    field.compress();

    assert_eq!(
        field.bands(),
        &[
            DustBand::new(0.0, 2.0, true, true),
            DustBand::new(2.0, 6.0, false, true),
            DustBand::new(6.0, 10.0, true, true),
        ]
    );
}

#[test]
fn compress_keeps_bands_with_different_contents() {
    let mut field = field(0.0, 10.0);
    field.update(OrbitalZone::new(2.0, 4.0), false);
    field.update(OrbitalZone::new(4.0, 6.0), true);
    field.compress();

    assert_eq!(field.bands().len(), 4);
}

// ============================================================================
// Sweeping
// ============================================================================

#[test]
fn sweep_over_a_single_band_matches_midpoint_rule() {
    let field = field(0.0, 200.0);
    let nucleus = Planetesimal::nucleus(1.0, 0.1, 1.0e-15);

    let swept = nucleus.swept_zone(0.25);
    let range = OrbitalZone::new(swept.inner.max(0.0), swept.outer);
    let mid = range.midpoint();
    let expected = 4.0 * PI * nucleus.reach() * range.width() * field.density(mid) * mid;

    let mass = field.swept_mass(&nucleus, Material::Dust, 1.2e-5);
    assert_relative_eq!(mass, expected, max_relative = 1e-12);
    assert!(mass > 0.0);
}

#[test]
fn sweep_missing_every_band_collects_nothing() {
    let field = field(0.0, 10.0);
    let nucleus = Planetesimal::nucleus(100.0, 0.0, 1.0e-15);

    assert_eq!(field.swept_mass(&nucleus, Material::Dust, 1.2e-5), 0.0);
    assert_eq!(field.swept_mass(&nucleus, Material::Gas, 1.2e-5), 0.0);
}

#[test]
fn sweep_skips_cleared_bands() {
    let mut field = field(0.0, 200.0);
    let nucleus = Planetesimal::nucleus(1.0, 0.0, 1.0e-15);
    field.update(nucleus.swept_zone(0.25), false);

    assert_eq!(field.swept_mass(&nucleus, Material::Dust, 1.2e-5), 0.0);
    // Gas was left behind
    assert!(field.swept_mass(&nucleus, Material::Gas, 1.2e-5) > 0.0);
}

#[test]
fn gas_boosts_dust_sweep_past_critical_mass() {
    let field = field(0.0, 200.0);
    let nucleus = Planetesimal::nucleus(1.0, 0.0, 1.0e-4);

    let below = field.swept_mass(&nucleus, Material::Dust, 1.0);
    let above = field.swept_mass(&nucleus, Material::Dust, 1.0e-5);
    assert!(above > below, "expected {} > {}", above, below);
}

#[test]
fn gas_sweep_is_zero_once_gas_is_consumed() {
    let mut field = field(0.0, 200.0);
    let nucleus = Planetesimal::nucleus(5.0, 0.0, 1.0e-4);
    field.update(OrbitalZone::new(0.0, 200.0), true);

    assert_eq!(field.swept_mass(&nucleus, Material::Gas, 1.0e-5), 0.0);
}

// ============================================================================
// Invariants under arbitrary update sequences
// ============================================================================

proptest! {
    #[test]
    fn updates_keep_bands_ordered_and_contiguous(
        clears in prop::collection::vec((-10.0f64..210.0, 0.0f64..40.0, any::<bool>()), 1..40)
    ) {
        let mut field = field(0.0, 200.0);

        for (start, width, consumed_gas) in clears {
            field.update(OrbitalZone::new(start, start + width), consumed_gas);
            check_well_formed(field.bands())?;

            field.compress();
            check_well_formed(field.bands())?;

            let bands = field.bands();
            prop_assert_eq!(bands[0].inner_edge, 0.0);
            prop_assert_eq!(bands[bands.len() - 1].outer_edge, 200.0);
            prop_assert!(bands.windows(2).all(|w| !w[0].same_contents(&w[1])));
        }
    }

    #[test]
    fn cleared_range_holds_no_dust(start in 0.0f64..190.0, width in 0.1f64..10.0) {
        let mut field = field(0.0, 200.0);
        let cleared = OrbitalZone::new(start, start + width);
        field.update(cleared, false);
        field.compress();

        let inside = OrbitalZone::new(start + width * 0.25, start + width * 0.75);
        prop_assert!(!field.has_accretable_dust(inside));
    }
}
