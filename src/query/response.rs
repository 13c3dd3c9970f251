use serde::Serialize;

use crate::{
    network::BusStats,
    routing::itinerary::{Item, Itinerary},
};

const NOT_FOUND: &str = "not found";

/// The answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub request_id: i64,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    NotFound {
        error_message: &'static str,
    },
    Stop {
        buses: Vec<String>,
    },
    Bus {
        route_length: f64,
        /// `null` when the route has no straight-line length.
        curvature: Option<f64>,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Route {
        total_time: f64,
        items: Vec<Item>,
    },
}

impl ResponseBody {
    pub fn not_found() -> Self {
        ResponseBody::NotFound {
            error_message: NOT_FOUND,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResponseBody::NotFound { .. })
    }
}

impl From<Option<Vec<String>>> for ResponseBody {
    fn from(buses: Option<Vec<String>>) -> Self {
        match buses {
            Some(buses) => ResponseBody::Stop { buses },
            None => ResponseBody::not_found(),
        }
    }
}

impl From<Option<BusStats>> for ResponseBody {
    fn from(stats: Option<BusStats>) -> Self {
        match stats {
            Some(stats) => ResponseBody::Bus {
                route_length: stats.route_length,
                curvature: stats.curvature(),
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            },
            None => ResponseBody::not_found(),
        }
    }
}

impl From<Option<Itinerary>> for ResponseBody {
    fn from(itinerary: Option<Itinerary>) -> Self {
        match itinerary {
            Some(Itinerary { total_time, items }) => ResponseBody::Route { total_time, items },
            None => ResponseBody::not_found(),
        }
    }
}
