//! Accrete one planetary system and print its orbital table
//!
//! Usage: cargo run -p accrete --example generate_system -- [star_mass] [seed]
//!
//! Set RUST_LOG=accrete=debug to follow every nucleus.

use accrete::generate_seeded;
use stellar::StarParameters;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use units::Mass;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let star_mass: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let star = StarParameters::from_mass(Mass::from_solar_masses(star_mass));
    println!(
        "Star: {:.2} M☉, {:.3} L☉, ecosphere {:.3} AU, seed {}\n",
        star.mass_solar(),
        star.luminosity,
        star.ecosphere_radius().to_au(),
        seed
    );

    let planets = match generate_seeded(star, seed) {
        Ok(planets) => planets,
        Err(e) => {
            eprintln!("❌ Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "{:>3}  {:>9}  {:>6}  {:>12}  {:>10}  {}",
        "#", "axis AU", "ecc", "mass M⊕", "gas M⊕", "type"
    );
    for (i, planet) in planets.iter().enumerate() {
        println!(
            "{:>3}  {:>9.3}  {:>6.3}  {:>12.4}  {:>10.4}  {}",
            i,
            planet.orbital_axis(),
            planet.eccentricity(),
            planet.mass_earth(),
            Mass::from_solar_masses(planet.gas_mass()).to_earth_masses(),
            if planet.is_gas_giant() { "gas giant" } else { "rocky" }
        );
    }

    let total: f64 = planets.iter().map(|p| p.mass_earth()).sum();
    println!("\n{} planets, {:.2} M⊕ in total", planets.len(), total);
}
