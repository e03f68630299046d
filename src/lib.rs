//! A transport catalogue for bus networks.
//!
//! The [`repository::Repository`] holds stops, buses and road distances and
//! answers structural queries. A [`router::Router`] built over it answers the
//! fastest wait-and-ride itinerary between two stops. The [`json`] module reads
//! the request document format and assembles the answers.

pub mod json;
pub mod repository;
pub mod router;
pub mod shared;

pub mod prelude {
    pub use crate::{
        json::{Document, Response, StatRequest},
        repository::{Bus, BusStats, Repository, Stop, there_and_back},
        router::{Config, Dijkstra, Itinerary, Router, ShortestPath, Step},
        shared::{Coordinate, Distance, Duration},
    };
}
