use serde::Serialize;

use crate::routing::{
    builder::{EdgeKind, TransitGraph},
    router::RouteInfo,
};

/// One step of a trip as shown to a passenger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Item {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl Item {
    pub fn time(&self) -> f64 {
        match self {
            Item::Wait { time, .. } | Item::Bus { time, .. } => *time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<Item>,
}

impl Itinerary {
    /// Turns the edges of a route into wait and bus items, merging rides on the
    /// same bus that follow each other directly.
    pub fn assemble(transit: &TransitGraph, route: &RouteInfo) -> Self {
        let mut items: Vec<Item> = Vec::with_capacity(route.edges.len());

        for &id in route.edges.iter() {
            let weight = transit.graph().edge(id).weight;

            match transit.edge_kind(id) {
                EdgeKind::Wait { stop } => items.push(Item::Wait {
                    stop_name: transit.stop_name(stop).to_owned(),
                    time: weight,
                }),
                EdgeKind::Ride { bus, span_count } => {
                    let name = transit.bus_name(bus);
                    match items.last_mut() {
                        Some(Item::Bus {
                            bus: current,
                            span_count: spans,
                            time,
                        }) if current.as_str() == name => {
                            *spans += span_count;
                            *time += weight;
                        }
                        _ => items.push(Item::Bus {
                            bus: name.to_owned(),
                            span_count,
                            time: weight,
                        }),
                    }
                }
            }
        }

        Self {
            total_time: route.total_weight,
            items,
        }
    }

    pub fn items_time(&self) -> f64 {
        self.items.iter().map(Item::time).sum()
    }
}
