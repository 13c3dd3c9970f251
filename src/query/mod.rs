pub mod response;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    error::{GuiderError, Result},
    network::bus::RouteKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SettingsDocument {
    pub bus_wait_time: f64,
    pub bus_velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
}

/// The whole input of one batch run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestDocument {
    pub routing_settings: Option<SettingsDocument>,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Every kind of request the guider accepts, in a single closed set.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Settings {
        bus_wait_time: f64,
        bus_velocity: f64,
    },
    AddStop {
        name: String,
        latitude: f64,
        longitude: f64,
        road_distances: BTreeMap<String, f64>,
    },
    AddRoute {
        name: String,
        stops: Vec<String>,
        kind: RouteKind,
    },
    GetStop {
        id: i64,
        name: String,
    },
    GetBus {
        id: i64,
        name: String,
    },
    GetRoute {
        id: i64,
        from: String,
        to: String,
    },
}

impl RequestDocument {
    /// Replaces settings fields with values given from outside the document.
    /// Without settings in the document both values must be given.
    pub fn override_settings(
        &mut self,
        bus_wait_time: Option<f64>,
        bus_velocity: Option<f64>,
    ) -> Result<()> {
        if let Some(settings) = self.routing_settings.as_mut() {
            settings.bus_wait_time = bus_wait_time.unwrap_or(settings.bus_wait_time);
            settings.bus_velocity = bus_velocity.unwrap_or(settings.bus_velocity);
            return Ok(());
        }

        match (bus_wait_time, bus_velocity) {
            (None, None) => {}
            (Some(bus_wait_time), Some(bus_velocity)) => {
                self.routing_settings = Some(SettingsDocument {
                    bus_wait_time,
                    bus_velocity,
                });
            }
            _ => {
                return Err(GuiderError::Configuration(
                    "document has no routing settings to partially override".to_owned(),
                ))
            }
        }

        Ok(())
    }

    /// Settings first, then base requests, then stat requests, each in
    /// document order.
    pub fn into_requests(self) -> Vec<Request> {
        let settings = self.routing_settings.map(|s| Request::Settings {
            bus_wait_time: s.bus_wait_time,
            bus_velocity: s.bus_velocity,
        });

        settings
            .into_iter()
            .chain(self.base_requests.into_iter().map(Request::from))
            .chain(self.stat_requests.into_iter().map(Request::from))
            .collect()
    }
}

impl From<BaseRequest> for Request {
    fn from(request: BaseRequest) -> Self {
        match request {
            BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } => Request::AddStop {
                name,
                latitude,
                longitude,
                road_distances,
            },
            BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } => Request::AddRoute {
                name,
                stops,
                kind: if is_roundtrip {
                    RouteKind::Circular
                } else {
                    RouteKind::Linear
                },
            },
        }
    }
}

impl From<StatRequest> for Request {
    fn from(request: StatRequest) -> Self {
        match request {
            StatRequest::Stop { id, name } => Request::GetStop { id, name },
            StatRequest::Bus { id, name } => Request::GetBus { id, name },
            StatRequest::Route { id, from, to } => Request::GetRoute { id, from, to },
        }
    }
}
