use serde::{Deserialize, Serialize};

/// Days in a sidereal year
pub const DAYS_PER_YEAR: f64 = 365.256;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A time quantity with years as the base unit.
///
/// Orbital periods come out of Kepler's third law in years, while day
/// lengths are naturally expressed in hours.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let year = Time::from_years(1.0);
/// assert!((year.to_days() - 365.256).abs() < 1e-9);
///
/// let day = Time::from_hours(24.0);
/// assert!((day.to_days() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn from_hours(value: f64) -> Self {
        Self::from_days(value / HOURS_PER_DAY)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_hours(&self) -> f64 {
        self.to_days() * HOURS_PER_DAY
    }
}
