pub mod builder;
pub mod graph;
pub mod itinerary;
pub mod router;

use crate::error::{GuiderError, Result};

/// How long boarding takes and how fast buses go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before each boarding.
    pub bus_wait_time: f64,
    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Result<Self> {
        if !bus_wait_time.is_finite() || bus_wait_time < 0.0 {
            return Err(GuiderError::Configuration(format!(
                "bus wait time must be a non-negative number of minutes, got {bus_wait_time}"
            )));
        }
        if !bus_velocity.is_finite() || bus_velocity <= 0.0 {
            return Err(GuiderError::Configuration(format!(
                "bus velocity must be positive, got {bus_velocity}"
            )));
        }

        Ok(Self {
            bus_wait_time,
            bus_velocity,
        })
    }

    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes needed to ride the given number of meters.
    pub fn ride_time(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}
