use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    router::graph::{EdgeId, Graph, VertexId},
    shared::time::Duration,
};

/// A found path: edges in travel order and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub edges: Vec<EdgeId>,
    pub weight: Duration,
}

/// Minimum weight path search over a built [`Graph`].
///
/// Implementations must not need the graph to be rebuilt between queries.
pub trait ShortestPath {
    fn find(&self, graph: &Graph, from: VertexId, to: VertexId) -> Option<Path>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: Duration,
    vertex: VertexId,
}

impl Eq for Candidate {}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

// Reversed so the max-heap pops the lightest candidate first
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPath for Dijkstra {
    fn find(&self, graph: &Graph, from: VertexId, to: VertexId) -> Option<Path> {
        let vertex_count = graph.vertex_count();
        if from as usize >= vertex_count || to as usize >= vertex_count {
            return None;
        }

        let mut best: Vec<Option<Duration>> = vec![None; vertex_count];
        let mut parents: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut heap = BinaryHeap::new();
        best[from as usize] = Some(Duration::ZERO);
        heap.push(Candidate {
            weight: Duration::ZERO,
            vertex: from,
        });

        while let Some(Candidate { weight, vertex }) = heap.pop() {
            if vertex == to {
                break;
            }
            // Stale entry, a lighter one was already settled
            if best[vertex as usize].is_some_and(|settled| weight > settled) {
                continue;
            }
            for &edge_id in graph.incident_edges(vertex) {
                let edge = graph.edge(edge_id);
                let candidate = weight + edge.weight;
                if best[edge.to as usize].is_none_or(|known| candidate < known) {
                    best[edge.to as usize] = Some(candidate);
                    parents[edge.to as usize] = Some(edge_id);
                    heap.push(Candidate {
                        weight: candidate,
                        vertex: edge.to,
                    });
                }
            }
        }

        let weight = best[to as usize]?;
        Some(Path {
            edges: backtrack(graph, &parents, from, to)?,
            weight,
        })
    }
}

fn backtrack(
    graph: &Graph,
    parents: &[Option<EdgeId>],
    from: VertexId,
    to: VertexId,
) -> Option<Vec<EdgeId>> {
    let mut edges = Vec::new();
    let mut current = to;
    while current != from {
        let edge_id = parents[current as usize]?;
        edges.push(edge_id);
        current = graph.edge(edge_id).from;
    }
    edges.reverse();
    Some(edges)
}
