//! Accrete planetary systems and report their physical statistics
//!
//! Usage:
//!   cargo run -p planetary --example system_report -- [star_mass] [seed]
//!   cargo run -p planetary --example system_report -- --csv [n_systems]
//!
//! The CSV form samples host stars and writes one row per planet to stdout.

use accrete::generate_seeded;
use planetary::{PlanetStats, Rotation, system_stats};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{StarParameters, sample_star};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use units::Mass;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--csv") {
        let n_systems = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
        write_csv(n_systems);
    } else {
        let star_mass = args.first().and_then(|s| s.parse().ok()).unwrap_or(1.0);
        let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
        print_table(star_mass, seed);
    }
}

fn print_table(star_mass: f64, seed: u64) {
    let star = StarParameters::from_mass(Mass::from_solar_masses(star_mass));
    let planets = match generate_seeded(star, seed) {
        Ok(planets) => planets,
        Err(e) => {
            eprintln!("❌ Generation failed: {}", e);
            std::process::exit(1);
        }
    };
    let stats = system_stats(&planets, &star, &mut ChaChaRng::seed_from_u64(seed));

    println!(
        "Star: {:.2} M☉, {:.3} L☉, seed {}\n",
        star.mass_solar(),
        star.luminosity,
        seed
    );
    println!(
        "{:>8}  {:>10}  {:>6}  {:>7}  {:>6}  {:>6}  {:>9}  {:>10}  type",
        "axis AU", "mass M⊕", "T K", "ρ g/cc", "R R⊕", "g m/s²", "year d", "day h"
    );
    for s in &stats {
        println!(
            "{:>8.3}  {:>10.3}  {:>6.0}  {:>7.2}  {:>6.2}  {:>6.2}  {:>9.1}  {:>10.1}  {}",
            s.orbital_axis.to_au(),
            s.mass.to_earth_masses(),
            s.temperature.to_kelvin(),
            s.density,
            s.radius_earth(),
            s.surface_gravity,
            s.orbital_period.to_days(),
            s.day_length.to_hours(),
            describe(s)
        );
    }
}

fn describe(stats: &PlanetStats) -> &'static str {
    match (stats.is_gas_giant, stats.rotation) {
        (true, _) => "gas giant",
        (false, Rotation::Free) => "rocky",
        (false, Rotation::TidallyLocked) => "rocky, locked",
        (false, Rotation::Resonant) => "rocky, resonant",
    }
}

fn write_csv(n_systems: u64) {
    println!(
        "system_id,stellar_mass,stellar_luminosity,planet_index,axis_au,eccentricity,\
         mass_earth,gas_earth,gas_giant,temperature_k,density,radius_earth,\
         gravity,escape_velocity,period_days,day_hours,rotation"
    );

    let mut star_rng = ChaChaRng::seed_from_u64(n_systems);
    let mut generated = 0;

    for i in 0..n_systems {
        let star = sample_star(&mut star_rng);
        let planets = match generate_seeded(star, i) {
            Ok(planets) => planets,
            Err(e) => {
                eprintln!("system {} skipped: {}", i, e);
                continue;
            }
        };
        let stats = system_stats(&planets, &star, &mut ChaChaRng::seed_from_u64(i));

        for (index, s) in stats.iter().enumerate() {
            println!(
                "{},{:.4},{:.6},{},{:.4},{:.4},{:.4},{:.4},{},{:.1},{:.3},{:.3},{:.3},{:.3},{:.2},{:.2},{:?}",
                i,
                star.mass_solar(),
                star.luminosity,
                index,
                s.orbital_axis.to_au(),
                s.eccentricity,
                s.mass.to_earth_masses(),
                s.gas_mass.to_earth_masses(),
                s.is_gas_giant,
                s.temperature.to_kelvin(),
                s.density,
                s.radius_earth(),
                s.surface_gravity,
                s.escape_velocity,
                s.orbital_period.to_days(),
                s.day_length.to_hours(),
                s.rotation,
            );
        }
        generated += 1;
    }

    eprintln!("Generated {} of {} systems", generated, n_systems);
}
