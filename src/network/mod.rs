pub mod bus;
pub mod geo;
pub mod stop;

use std::collections::{BTreeSet, HashMap};

use geo_types::Point;
use itertools::Itertools;
use tracing::debug;

use crate::{
    error::{GuiderError, Result},
    network::{
        bus::{Bus, RouteKind},
        geo::great_circle_distance,
        stop::Stop,
    },
};

/// Aggregated figures for one bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Length along the roads, in meters.
    pub route_length: f64,
    /// Length along straight lines between stops, in meters.
    pub geometric_length: f64,
}

impl BusStats {
    /// Road length over straight-line length; `None` when every stop of the
    /// route sits at the same point and there is no straight-line length.
    pub fn curvature(&self) -> Option<f64> {
        if self.geometric_length > 0.0 {
            Some(self.route_length / self.geometric_length)
        } else {
            None
        }
    }
}

/// Every stop and bus route known to one session.
#[derive(Debug, Default)]
pub struct Registry {
    stops: HashMap<String, Stop>,
    buses: HashMap<String, Bus>,
    // Kept apart from `stops` because routes may name stops before they are declared
    buses_by_stop: HashMap<String, BTreeSet<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a stop or updates an existing one.
    ///
    /// Coordinates are overwritten and the given distances are merged into the
    /// stop's own table. A neighbour that is already declared and has no
    /// distance back to this stop gets the same value for the reverse direction.
    pub fn upsert_stop<I>(&mut self, name: &str, latitude: f64, longitude: f64, distances: I)
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let stop = self
            .stops
            .entry(name.to_owned())
            .or_insert_with(|| Stop::new(name.to_owned(), latitude, longitude));
        stop.coords = Point::new(longitude, latitude);

        let distances = distances.into_iter().collect_vec();
        stop.road_distances.extend(distances.iter().cloned());

        for (neighbour, meters) in distances {
            if let Some(other) = self.stops.get_mut(&neighbour) {
                other
                    .road_distances
                    .entry(name.to_owned())
                    .or_insert(meters);
            }
        }

        debug!(stop = name, "upserted stop");
    }

    /// Registers a bus route, replacing any route with the same name.
    pub fn add_route(&mut self, name: &str, stops: Vec<String>, kind: RouteKind) -> Result<()> {
        if stops.len() < 2 {
            return Err(GuiderError::MalformedInput(format!(
                "bus {name:?} must have at least two stops"
            )));
        }

        if let Some(previous) = self.buses.remove(name) {
            for stop in previous.stops.iter() {
                if let Some(buses) = self.buses_by_stop.get_mut(stop) {
                    buses.remove(name);
                }
            }
        }

        let bus = Bus::new(name.to_owned(), stops, kind);
        for stop in bus.stops.iter() {
            self.buses_by_stop
                .entry(stop.clone())
                .or_default()
                .insert(name.to_owned());
        }
        self.buses.insert(name.to_owned(), bus);

        debug!(bus = name, "added route");
        Ok(())
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    /// Names of every declared or route-referenced stop, sorted.
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops
            .keys()
            .chain(self.buses.values().flat_map(|b| b.stops.iter()))
            .map(String::as_str)
            .sorted()
            .dedup()
            .collect()
    }

    /// Sorted names of the buses serving a declared stop.
    pub fn stop_info(&self, name: &str) -> Option<Vec<String>> {
        self.stops.get(name)?;

        let buses = self
            .buses_by_stop
            .get(name)
            .map(|buses| buses.iter().cloned().collect())
            .unwrap_or_default();

        Some(buses)
    }

    /// Figures for a bus; `None` when the bus is unknown or one of its stops
    /// has not been declared, so its position is unknown.
    pub fn bus_info(&self, name: &str) -> Result<Option<BusStats>> {
        let Some(bus) = self.buses.get(name) else {
            return Ok(None);
        };

        let mut route_length = 0.0;
        let mut geometric_length = 0.0;
        for (from, to) in bus.segments() {
            let (Some(from_stop), Some(to_stop)) = (self.stops.get(from), self.stops.get(to))
            else {
                debug!(bus = name, from, to, "bus passes an undeclared stop");
                return Ok(None);
            };
            route_length += self.road_distance(from, to)?;
            geometric_length += great_circle_distance(from_stop.coords, to_stop.coords);
        }

        Ok(Some(BusStats {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            geometric_length,
        }))
    }

    /// Road distance in meters, falling back to the reverse direction when
    /// only that one was given.
    pub fn road_distance(&self, from: &str, to: &str) -> Result<f64> {
        self.stops
            .get(from)
            .and_then(|s| s.distance_to(to))
            .or_else(|| self.stops.get(to).and_then(|s| s.distance_to(from)))
            .ok_or_else(|| GuiderError::MissingRoadDistance {
                from: from.to_owned(),
                to: to.to_owned(),
            })
    }
}
