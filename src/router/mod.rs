pub mod builder;
pub mod config;
pub mod graph;
pub mod itinerary;
pub mod search;

pub use builder::*;
pub use config::*;
pub use itinerary::*;
pub use search::*;

use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

use crate::repository::{self, Repository};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid routing settings: {0}")]
    InvalidConfig(&'static str),
    #[error("Failed to build the transit graph: {0}")]
    Repository(#[from] repository::Error),
}

/// Answers fastest-itinerary queries over a finished [`Repository`].
///
/// The transit graph is built once on construction, or borrowed from a caller
/// that already built it; queries only read it.
pub struct Router<'a, S = Dijkstra> {
    repository: &'a Repository,
    transit: Cow<'a, TransitGraph>,
    search: S,
}

impl<'a> Router<'a> {
    pub fn new(repository: &'a Repository, config: Config) -> Result<Self, self::Error> {
        Self::with_search(repository, config, Dijkstra)
    }

    /// Queries a graph previously built from `repository`.
    pub fn with_transit(repository: &'a Repository, transit: &'a TransitGraph) -> Self {
        Self {
            repository,
            transit: Cow::Borrowed(transit),
            search: Dijkstra,
        }
    }
}

impl<'a, S: ShortestPath> Router<'a, S> {
    pub fn with_search(
        repository: &'a Repository,
        config: Config,
        search: S,
    ) -> Result<Self, self::Error> {
        let transit = TransitGraph::with_config(repository, &config)?;
        Ok(Self {
            repository,
            transit: Cow::Owned(transit),
            search,
        })
    }

    /// Fastest itinerary between two stops, starting with the wait at `from`.
    ///
    /// `None` when either stop is unknown, no bus calls at it, or the network
    /// does not connect them.
    pub fn build_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let from = self.vertices_by_name(from)?;
        let to = self.vertices_by_name(to)?;
        let Some(path) = self
            .search
            .find(&self.transit.graph, from.arrival, to.arrival)
        else {
            debug!("No path between vertexes {} and {}", from.arrival, to.arrival);
            return None;
        };
        Itinerary::new(&path, &self.transit, self.repository)
    }

    pub fn transit(&self) -> &TransitGraph {
        &self.transit
    }

    fn vertices_by_name(&self, name: &str) -> Option<StopVertices> {
        let Some(stop) = self.repository.stop_by_name(name) else {
            debug!("Stop {name} is not in the catalogue");
            return None;
        };
        let vertices = self.transit.vertices(stop.index);
        if vertices.is_none() {
            debug!("Stop {name} is not served by any bus");
        }
        vertices
    }
}

impl Repository {
    pub fn router(&self, config: Config) -> Result<Router<'_>, self::Error> {
        Router::new(self, config)
    }
}
