use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use tracing::debug;

use crate::routing::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A shortest path as the edges taken, in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Flipped so that `BinaryHeap` pops the cheapest state first
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths from one vertex to every reachable vertex.
#[derive(Debug)]
struct ShortestPathTree {
    cost: Vec<f64>,
    prev_edge: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    fn compute(graph: &DirectedWeightedGraph, source: VertexId) -> Self {
        let n = graph.vertex_count();
        let mut cost = vec![f64::INFINITY; n];
        let mut prev_edge = vec![None; n];
        let mut heap = BinaryHeap::new();

        cost[source] = 0.0;
        heap.push(State {
            cost: 0.0,
            vertex: source,
        });

        while let Some(State { cost: current, vertex }) = heap.pop() {
            // Stale entry
            if current > cost[vertex] {
                continue;
            }

            for (id, edge) in graph.outgoing(vertex) {
                let next = current + edge.weight;
                if next < cost[edge.to] {
                    cost[edge.to] = next;
                    prev_edge[edge.to] = Some(id);
                    heap.push(State {
                        cost: next,
                        vertex: edge.to,
                    });
                }
            }
        }

        Self { cost, prev_edge }
    }

    fn route_to(&self, graph: &DirectedWeightedGraph, target: VertexId) -> Option<RouteInfo> {
        if self.cost[target].is_infinite() {
            return None;
        }

        let mut edges = vec![];
        let mut vertex = target;
        while let Some(id) = self.prev_edge[vertex] {
            edges.push(id);
            vertex = graph.edge(id).from;
        }
        edges.reverse();

        Some(RouteInfo {
            edges,
            total_weight: self.cost[target],
        })
    }
}

/// Dijkstra over an immutable graph, remembering the tree of every source
/// already asked about.
///
/// The router must only ever be queried with the graph it was created for;
/// anything else is a bug and panics.
#[derive(Debug)]
pub struct Router {
    vertex_count: usize,
    edge_count: usize,
    trees: HashMap<VertexId, ShortestPathTree>,
}

impl Router {
    pub fn new(graph: &DirectedWeightedGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            trees: HashMap::new(),
        }
    }

    pub fn build_route(
        &mut self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteInfo> {
        assert!(
            graph.vertex_count() == self.vertex_count && graph.edge_count() == self.edge_count,
            "graph changed after the router was built"
        );

        if from == to {
            return Some(RouteInfo {
                edges: vec![],
                total_weight: 0.0,
            });
        }

        let tree = self.trees.entry(from).or_insert_with(|| {
            debug!(source = from, "computing shortest path tree");
            ShortestPathTree::compute(graph, from)
        });

        tree.route_to(graph, to)
    }

    /// Forgets the cached tree for `source`, if any.
    pub fn release(&mut self, source: VertexId) -> bool {
        self.trees.remove(&source).is_some()
    }

    pub fn cached_sources(&self) -> usize {
        self.trees.len()
    }
}
