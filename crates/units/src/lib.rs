pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;


pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_IN_EARTH_MASSES};
pub use temperature::Temperature;
pub use time::Time;
