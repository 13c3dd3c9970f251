//! Request dispatch over one session's registry and routing graph.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::{
    error::{GuiderError, Result},
    network::{bus::RouteKind, Registry},
    query::{response::Response, Request},
    routing::{builder::TransitGraph, itinerary::Itinerary, router::Router, RoutingSettings},
};

/// Graph and router built from a registry snapshot. Never mutated.
#[derive(Debug)]
pub struct FrozenNetwork {
    transit: TransitGraph,
    router: Router,
}

impl FrozenNetwork {
    pub fn build(registry: &Registry, settings: &RoutingSettings) -> Result<Self> {
        let transit = TransitGraph::build(registry, settings)?;
        let router = Router::new(transit.graph());
        Ok(Self { transit, router })
    }

    pub fn transit(&self) -> &TransitGraph {
        &self.transit
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Cheapest trip between two stops; `None` when either stop is unknown
    /// or no bus connects them.
    pub fn plan(&mut self, from: &str, to: &str) -> Option<Itinerary> {
        let from = self.transit.stop_vertex(from)?;
        let to = self.transit.stop_vertex(to)?;
        let route = self.router.build_route(self.transit.graph(), from, to)?;
        Some(Itinerary::assemble(&self.transit, &route))
    }
}

#[derive(Debug)]
enum Phase {
    /// Stops and buses may still change.
    Topology,
    /// The routing graph exists; changing stops or buses discards it.
    Frozen(FrozenNetwork),
}

/// Answers requests in the order they arrive.
#[derive(Debug)]
pub struct TransportGuider {
    registry: Registry,
    settings: Option<RoutingSettings>,
    phase: Phase,
}

impl Default for TransportGuider {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportGuider {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            settings: None,
            phase: Phase::Topology,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> Option<&RoutingSettings> {
        self.settings.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.phase, Phase::Frozen(_))
    }

    /// Processes a whole batch, stopping at the first fatal error.
    pub fn process_all<I>(&mut self, requests: I) -> Result<Vec<Response>>
    where
        I: IntoIterator<Item = Request>,
    {
        let mut responses = vec![];
        for request in requests {
            if let Some(response) = self.process(request)? {
                responses.push(response);
            }
        }

        info!(responses = responses.len(), "processed batch");
        Ok(responses)
    }

    /// Applies one request. Only stat requests produce a response.
    pub fn process(&mut self, request: Request) -> Result<Option<Response>> {
        debug!(?request, "processing request");

        match request {
            Request::Settings {
                bus_wait_time,
                bus_velocity,
            } => {
                self.set_settings(RoutingSettings::new(bus_wait_time, bus_velocity)?);
                Ok(None)
            }
            Request::AddStop {
                name,
                latitude,
                longitude,
                road_distances,
            } => {
                self.add_stop(&name, latitude, longitude, road_distances);
                Ok(None)
            }
            Request::AddRoute { name, stops, kind } => {
                self.add_route(&name, stops, kind)?;
                Ok(None)
            }
            Request::GetStop { id, name } => Ok(Some(Response {
                request_id: id,
                body: self.registry.stop_info(&name).into(),
            })),
            Request::GetBus { id, name } => Ok(Some(Response {
                request_id: id,
                body: self.registry.bus_info(&name)?.into(),
            })),
            Request::GetRoute { id, from, to } => Ok(Some(Response {
                request_id: id,
                body: self.plan(&from, &to)?.into(),
            })),
        }
    }

    pub fn set_settings(&mut self, settings: RoutingSettings) {
        self.settings = Some(settings);
        self.thaw();
    }

    pub fn add_stop(
        &mut self,
        name: &str,
        latitude: f64,
        longitude: f64,
        road_distances: BTreeMap<String, f64>,
    ) {
        self.thaw();
        self.registry
            .upsert_stop(name, latitude, longitude, road_distances);
    }

    pub fn add_route(&mut self, name: &str, stops: Vec<String>, kind: RouteKind) -> Result<()> {
        self.thaw();
        self.registry.add_route(name, stops, kind)
    }

    /// Plans a trip, building the routing graph on first use.
    pub fn plan(&mut self, from: &str, to: &str) -> Result<Option<Itinerary>> {
        let frozen = self.freeze()?;
        Ok(frozen.plan(from, to))
    }

    fn freeze(&mut self) -> Result<&mut FrozenNetwork> {
        if let Phase::Topology = self.phase {
            let settings = self.settings.ok_or_else(|| {
                GuiderError::Configuration(
                    "routing settings must be given before the first route request".to_owned(),
                )
            })?;
            let frozen = FrozenNetwork::build(&self.registry, &settings)?;
            info!(
                stops = frozen.transit().graph().vertex_count() / 2,
                edges = frozen.transit().graph().edge_count(),
                "routing graph frozen"
            );
            self.phase = Phase::Frozen(frozen);
        }

        match &mut self.phase {
            Phase::Frozen(frozen) => Ok(frozen),
            Phase::Topology => unreachable!("phase was just frozen"),
        }
    }

    fn thaw(&mut self) {
        if self.is_frozen() {
            warn!("topology changed after the routing graph was built; it will be rebuilt");
            self.phase = Phase::Topology;
        }
    }
}
