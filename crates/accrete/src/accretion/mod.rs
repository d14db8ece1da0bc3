//! Nucleus injection, mass sweeping and coalescence.

pub mod coalescence;
pub mod engine;
pub mod system;


pub use coalescence::{find_collision, merge};
pub use engine::AccretionEngine;
pub use system::{
    AccretedSystem, generate, generate_named, generate_random, generate_seeded, generate_system,
};
