use std::{fmt::Display, sync::Arc};

use crate::{
    repository::Repository,
    router::{
        builder::{EdgeKind, TransitGraph},
        search::Path,
    },
    shared::time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Dwell at a stop before boarding.
    Wait { stop: Arc<str>, time: Duration },
    /// Stay on one bus for `span_count` stops.
    Ride {
        bus: Arc<str>,
        span_count: u32,
        time: Duration,
    },
}

impl Step {
    pub fn time(&self) -> Duration {
        match self {
            Step::Wait { time, .. } | Step::Ride { time, .. } => *time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, Step::Wait { .. })
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Wait { stop, time } => write!(f, "Wait at {stop} for {time}"),
            Step::Ride {
                bus,
                span_count,
                time,
            } => write!(f, "Ride bus {bus} for {span_count} stops, {time}"),
        }
    }
}

/// A rider-facing answer to a route query. Steps alternate wait and ride,
/// starting with a wait at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub steps: Vec<Step>,
    pub total_time: Duration,
}

impl Itinerary {
    /// Resolves a search path into steps. `None` when the graph refers to a
    /// stop or bus that `repository` does not hold.
    pub fn new(path: &Path, transit: &TransitGraph, repository: &Repository) -> Option<Self> {
        let steps = path
            .edges
            .iter()
            .map(|edge_id| {
                let time = transit.graph.edge(*edge_id).weight;
                match *transit.kind(*edge_id) {
                    EdgeKind::Wait { stop } => Some(Step::Wait {
                        stop: repository.stop_by_idx(stop)?.name.clone(),
                        time,
                    }),
                    EdgeKind::Ride { bus, span, .. } => Some(Step::Ride {
                        bus: repository.bus_by_idx(bus)?.name.clone(),
                        span_count: span,
                        time,
                    }),
                }
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            steps,
            total_time: path.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{router::Config, shared::geo::Distance};

    fn transit() -> (Repository, TransitGraph) {
        let mut repository = Repository::new();
        repository.set_distance("A", "B", Distance::from_meters(100.0));
        repository.add_bus("1", &["A", "B", "A"], true).unwrap();
        let transit = TransitGraph::build(&repository, &Config::default()).unwrap();
        (repository, transit)
    }

    fn full_path(transit: &TransitGraph) -> Path {
        let edges: Vec<u32> = (0..transit.kinds().len() as u32).collect();
        let weight = edges.iter().map(|id| transit.graph.edge(*id).weight).sum();
        Path { edges, weight }
    }

    #[test]
    fn resolves_names_through_handles() {
        let (repository, transit) = transit();
        let itinerary = Itinerary::new(&full_path(&transit), &transit, &repository).unwrap();
        assert_eq!(itinerary.steps.len(), transit.kinds().len());
        assert!(itinerary.steps.iter().any(|step| matches!(
            step,
            Step::Ride { bus, .. } if bus.as_ref() == "1"
        )));
        assert!(itinerary.steps.iter().any(|step| matches!(
            step,
            Step::Wait { stop, .. } if stop.as_ref() == "B"
        )));
    }

    #[test]
    fn foreign_repository_does_not_resolve() {
        let (_, transit) = transit();
        let empty = Repository::new();
        assert!(Itinerary::new(&full_path(&transit), &transit, &empty).is_none());
    }
}
