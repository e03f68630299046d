use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    repository::{self, Bus, Repository},
    router::{
        self, Config,
        graph::{Edge, EdgeId, Graph, VertexId},
    },
    shared::time::Duration,
};

/// The two vertices of a stop. Riders reach `arrival` off a bus and leave
/// from `departure`, the wait edge between them models the dwell time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub arrival: VertexId,
    pub departure: VertexId,
}

/// What a graph edge means for a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Wait {
        stop: u32,
    },
    Ride {
        bus: u32,
        from: u32,
        to: u32,
        span: u32,
    },
}

// Ride edge in stop space, before vertexes are resolved
struct Ride {
    from: u32,
    to: u32,
    span: u32,
    weight: Duration,
}

/// The routing graph derived from a [`Repository`].
///
/// Every stop served by a bus owns an arrival and a departure vertex joined by
/// one wait edge. Each bus contributes a ride edge from every boarding point to
/// every later stop of the same leg, so staying seated through several stops
/// is a single edge and a plain shortest path search picks the best boarding
/// and alighting points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitGraph {
    pub graph: Graph,
    vertices: Vec<Option<StopVertices>>,
    edges: Vec<EdgeKind>,
}

impl TransitGraph {
    pub fn build(repository: &Repository, config: &Config) -> Result<Self, repository::Error> {
        debug!("Building transit graph...");
        let now = Instant::now();
        let mut transit = Self {
            graph: Graph::new(),
            vertices: vec![None; repository.stop_count()],
            edges: Vec::new(),
        };
        transit.add_stops(repository, config);

        let buses: Vec<&Bus> = repository.buses().collect();
        let rides: Vec<Vec<Ride>> = buses
            .par_iter()
            .map(|bus| ride_edges(repository, config, bus))
            .collect::<Result<_, _>>()?;
        for (bus, rides) in buses.into_iter().zip(rides) {
            transit.add_rides(bus, rides);
        }

        debug!(
            "Transit graph has {} vertexes and {} edges, took {:?}",
            transit.graph.vertex_count(),
            transit.graph.edge_count(),
            now.elapsed()
        );
        Ok(transit)
    }

    /// Validates `config` and builds the graph.
    pub fn with_config(repository: &Repository, config: &Config) -> Result<Self, router::Error> {
        config.validate()?;
        Ok(Self::build(repository, config)?)
    }

    /// Vertexes of a stop, `None` when no bus calls there.
    pub fn vertices(&self, stop_idx: u32) -> Option<StopVertices> {
        self.vertices.get(stop_idx as usize).copied().flatten()
    }

    pub fn kind(&self, edge: EdgeId) -> &EdgeKind {
        &self.edges[edge as usize]
    }

    pub fn kinds(&self) -> &[EdgeKind] {
        &self.edges
    }

    // One vertex pair and one wait edge per served stop, however many buses call there
    fn add_stops(&mut self, repository: &Repository, config: &Config) {
        for bus in repository.buses() {
            for &stop in bus.stops.iter() {
                if self.vertices[stop as usize].is_some() {
                    continue;
                }
                let vertices = StopVertices {
                    arrival: self.graph.add_vertex(),
                    departure: self.graph.add_vertex(),
                };
                self.vertices[stop as usize] = Some(vertices);
                self.add_edge(
                    Edge {
                        from: vertices.arrival,
                        to: vertices.departure,
                        weight: config.bus_wait_time,
                    },
                    EdgeKind::Wait { stop },
                );
            }
        }
    }

    fn add_rides(&mut self, bus: &Bus, rides: Vec<Ride>) {
        for ride in rides {
            let (Some(from), Some(to)) = (self.vertices(ride.from), self.vertices(ride.to)) else {
                continue;
            };
            self.add_edge(
                Edge {
                    from: from.departure,
                    to: to.arrival,
                    weight: ride.weight,
                },
                EdgeKind::Ride {
                    bus: bus.index,
                    from: ride.from,
                    to: ride.to,
                    span: ride.span,
                },
            );
        }
    }

    fn add_edge(&mut self, edge: Edge, kind: EdgeKind) {
        let id = self.graph.add_edge(edge);
        debug_assert_eq!(id as usize, self.edges.len());
        self.edges.push(kind);
    }
}

fn ride_edges(
    repository: &Repository,
    config: &Config,
    bus: &Bus,
) -> Result<Vec<Ride>, repository::Error> {
    let mut rides = Vec::new();
    for leg in bus.legs() {
        let hops: Vec<Duration> = leg
            .windows(2)
            .map(|pair| {
                repository
                    .distance(pair[0], pair[1])
                    .map(|distance| config.travel_time(distance))
            })
            .collect::<Result<_, _>>()?;

        for (i, &from) in leg.iter().enumerate() {
            let mut weight = Duration::ZERO;
            for (hop, &to) in leg[i + 1..].iter().enumerate() {
                weight += hops[i + hop];
                // The bus came back to where the rider boarded
                if from == to {
                    continue;
                }
                rides.push(Ride {
                    from,
                    to,
                    span: hop as u32 + 1,
                    weight,
                });
            }
        }
    }
    Ok(rides)
}
