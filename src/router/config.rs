use serde::{Deserialize, Serialize};

use crate::{
    router::Error,
    shared::{geo::Distance, time::Duration},
};

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Routing settings, fixed for the lifetime of a router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Time spent at a stop before boarding any bus.
    pub bus_wait_time: Duration,
    /// Bus velocity in km/h.
    pub bus_velocity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bus_wait_time: Duration::from_minutes(6.0),
            bus_velocity: 40.0,
        }
    }
}

impl Config {
    pub fn with_bus_wait_time(mut self, wait_time: Duration) -> Self {
        self.bus_wait_time = wait_time;
        self
    }

    pub fn with_bus_velocity(mut self, velocity: f64) -> Self {
        self.bus_velocity = velocity;
        self
    }

    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR
    }

    pub fn travel_time(&self, distance: Distance) -> Duration {
        Duration::from_minutes(distance.as_meters() / self.meters_per_minute())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.bus_wait_time.is_valid() {
            return Err(Error::InvalidConfig("bus wait time must be a non-negative number"));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(Error::InvalidConfig("bus velocity must be positive"));
        }
        Ok(())
    }
}
