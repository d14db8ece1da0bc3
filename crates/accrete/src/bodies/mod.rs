//! Bodies formed by accretion.

pub mod planet_set;
pub mod planetesimal;

#[cfg(test)]
mod planetesimal_test;

pub use planet_set::PlanetSet;
pub use planetesimal::Planetesimal;
