//! Test that the same name produces identical systems
//!
//! Usage: cargo run -p accrete --example seed_stability

use accrete::{AccretionConfig, generate_named, generate_system};
use stellar::StarParameters;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use uuid::Uuid;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer())
        .init();

    let star = StarParameters::sun();
    let test_uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    let config = AccretionConfig::default();

    println!("Testing seed stability with UUID: {}", test_uuid);
    println!("Star: 1.0 M☉, 1.0 L☉\n");

    for run in 1..=3 {
        let system = generate_system(star, test_uuid, &config).unwrap();
        println!("Run {}: {} planets", run, system.planets.len());

        for (i, planet) in system.planets.iter().enumerate() {
            println!(
                "  Planet {}: {:.3} M⊕, {:.3} AU{}",
                i,
                planet.mass_earth(),
                planet.orbital_axis(),
                if planet.is_gas_giant() { ", gas giant" } else { "" }
            );
        }
        println!();
    }

    let system1 = generate_system(star, test_uuid, &config).unwrap();
    let system2 = generate_system(star, test_uuid, &config).unwrap();

    if system1.planets.len() != system2.planets.len() {
        eprintln!(
            "❌ FAIL: Planet count differs! {} vs {}",
            system1.planets.len(),
            system2.planets.len()
        );
        std::process::exit(1);
    }

    for (i, (p1, p2)) in system1
        .planets
        .iter()
        .zip(system2.planets.iter())
        .enumerate()
    {
        if p1 != p2 {
            eprintln!("❌ FAIL: Planet {} differs!\n  {:?}\n  {:?}", i, p1, p2);
            std::process::exit(1);
        }
    }

    let named1 = generate_named(star, "Sol").unwrap();
    let named2 = generate_named(star, "Sol").unwrap();
    if named1 != named2 {
        eprintln!("❌ FAIL: Named system 'Sol' differs between runs");
        std::process::exit(1);
    }

    println!("✅ PASS: identical systems for the same seed");
}
