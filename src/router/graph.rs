use crate::shared::time::Duration;

pub type VertexId = u32;
pub type EdgeId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Duration,
}

/// Directed graph with non-negative weights, stored as an edge list plus
/// per-vertex outgoing incidence lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.incidence.push(Vec::new());
        (self.incidence.len() - 1) as VertexId
    }

    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(edge.weight.is_valid(), "negative or non-finite edge weight");
        let id = self.edges.len() as EdgeId;
        self.incidence[edge.from as usize].push(id);
        self.edges.push(edge);
        id
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex as usize]
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[test]
fn incidence_test() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let weight = Duration::from_minutes(1.0);
    let ab = graph.add_edge(Edge { from: a, to: b, weight });
    let ba = graph.add_edge(Edge { from: b, to: a, weight });
    assert_eq!(graph.incident_edges(a), &[ab]);
    assert_eq!(graph.incident_edges(b), &[ba]);
    assert_eq!(graph.edge(ba).to, a);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}
