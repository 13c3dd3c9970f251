use std::collections::HashMap;

use geo_types::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    /// `x` is longitude, `y` is latitude, both in degrees.
    pub coords: Point,
    /// Road distance in meters to neighbouring stops, keyed by their name.
    pub road_distances: HashMap<String, f64>,
}

impl Stop {
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            coords: Point::new(longitude, latitude),
            road_distances: HashMap::new(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coords.y()
    }

    pub fn longitude(&self) -> f64 {
        self.coords.x()
    }

    pub fn distance_to(&self, other: &str) -> Option<f64> {
        self.road_distances.get(other).copied()
    }
}
