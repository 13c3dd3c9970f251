pub type VertexId = usize;
pub type EdgeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Directed graph with a fixed vertex set and append-only, non-negative edges.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![],
            incidence: vec![vec![]; vertex_count],
        }
    }

    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(edge.weight >= 0.0, "edge weights must be non-negative");
        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.incidence[vertex].iter().map(|&id| (id, &self.edges[id]))
    }
}
