use std::collections::HashMap;

use itertools::Itertools;
use tracing::info;

use crate::{
    error::Result,
    network::{
        bus::{Bus, RouteKind},
        Registry,
    },
    routing::{
        graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId},
        RoutingSettings,
    },
};

/// What an edge of the transit graph stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Waiting to board at a stop.
    Wait { stop: usize },
    /// Riding one bus without getting off, over `span_count` segments.
    Ride { bus: usize, span_count: usize },
}

/// The routing graph built from a registry snapshot.
///
/// Stop `k` (stops sorted by name) owns vertex `2k`, reached when arriving at
/// the stop, and vertex `2k + 1`, left when departing it. The only way from
/// the first to the second is the wait edge, so every boarding pays the wait.
#[derive(Debug)]
pub struct TransitGraph {
    graph: DirectedWeightedGraph,
    kinds: Vec<EdgeKind>,
    stop_names: Vec<String>,
    stop_ids: HashMap<String, usize>,
    bus_names: Vec<String>,
}

impl TransitGraph {
    pub fn build(registry: &Registry, settings: &RoutingSettings) -> Result<Self> {
        let stop_names = registry
            .stop_names()
            .into_iter()
            .map(str::to_owned)
            .collect_vec();
        let stop_ids: HashMap<String, usize> = stop_names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();

        let mut transit = Self {
            graph: DirectedWeightedGraph::new(2 * stop_names.len()),
            kinds: vec![],
            stop_names,
            stop_ids,
            bus_names: vec![],
        };

        for stop in 0..transit.stop_names.len() {
            transit.push(
                Edge {
                    from: arrival(stop),
                    to: departure(stop),
                    weight: settings.bus_wait_time,
                },
                EdgeKind::Wait { stop },
            );
        }

        for bus in registry.buses().sorted_by(|a, b| a.name.cmp(&b.name)) {
            transit.add_bus(registry, settings, bus)?;
        }

        info!(
            vertices = transit.graph.vertex_count(),
            edges = transit.graph.edge_count(),
            "built transit graph"
        );

        Ok(transit)
    }

    fn add_bus(
        &mut self,
        registry: &Registry,
        settings: &RoutingSettings,
        bus: &Bus,
    ) -> Result<()> {
        let bus_id = self.bus_names.len();
        self.bus_names.push(bus.name.clone());

        let outbound = bus.outbound();
        self.add_leg(registry, settings, bus_id, &outbound)?;

        if bus.kind == RouteKind::Linear {
            let inbound = outbound.iter().rev().copied().collect_vec();
            self.add_leg(registry, settings, bus_id, &inbound)?;
        }

        Ok(())
    }

    fn add_leg(
        &mut self,
        registry: &Registry,
        settings: &RoutingSettings,
        bus: usize,
        names: &[&str],
    ) -> Result<()> {
        let stops = names.iter().map(|&s| self.stop_ids[s]).collect_vec();
        let segments = names
            .iter()
            .tuple_windows()
            .map(|(from, to)| registry.road_distance(from, to))
            .collect::<Result<Vec<_>>>()?;
        self.add_rides(settings, bus, &stops, &segments);
        Ok(())
    }

    /// One edge from every stop to every later stop of the sequence.
    /// `segments[k]` is the road distance from `stops[k]` to `stops[k + 1]`.
    fn add_rides(
        &mut self,
        settings: &RoutingSettings,
        bus: usize,
        stops: &[usize],
        segments: &[f64],
    ) {
        for (i, &from) in stops.iter().enumerate() {
            let mut meters = 0.0;
            for (j, &to) in stops.iter().enumerate().skip(i + 1) {
                meters += segments[j - 1];
                self.push(
                    Edge {
                        from: departure(from),
                        to: arrival(to),
                        weight: settings.ride_time(meters),
                    },
                    EdgeKind::Ride {
                        bus,
                        span_count: j - i,
                    },
                );
            }
        }
    }

    fn push(&mut self, edge: Edge, kind: EdgeKind) -> EdgeId {
        self.kinds.push(kind);
        self.graph.add_edge(edge)
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    pub fn edge_kind(&self, id: EdgeId) -> EdgeKind {
        self.kinds[id]
    }

    /// Vertex a trip starting or ending at `stop` is anchored to.
    pub fn stop_vertex(&self, stop: &str) -> Option<VertexId> {
        self.stop_ids.get(stop).map(|&id| arrival(id))
    }

    pub fn stop_name(&self, stop: usize) -> &str {
        &self.stop_names[stop]
    }

    pub fn bus_name(&self, bus: usize) -> &str {
        &self.bus_names[bus]
    }
}

fn arrival(stop: usize) -> VertexId {
    2 * stop
}

fn departure(stop: usize) -> VertexId {
    2 * stop + 1
}
