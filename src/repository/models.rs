use std::{collections::HashSet, sync::Arc};

use serde::Serialize;

use crate::shared::geo::{Coordinate, Distance};

#[derive(Debug, Default, Clone)]
pub struct Stop {
    pub index: u32,
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

#[derive(Debug, Default, Clone)]
pub struct Bus {
    pub index: u32,
    pub name: Arc<str>,
    /// Stop indexes in travel order. For a there-and-back bus this already
    /// holds the forward leg followed by the way back.
    pub stops: Box<[u32]>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Splits the stored route into the directional legs a rider can stay
    /// seated through.
    ///
    /// A round-trip bus is one leg. A there-and-back bus is split at the
    /// turnaround `len / 2`, and both halves include the turnaround stop.
    pub fn legs(&self) -> Vec<&[u32]> {
        if self.stops.is_empty() {
            return vec![];
        }
        if self.is_roundtrip {
            return vec![&self.stops[..]];
        }
        let middle = self.stops.len() / 2;
        vec![&self.stops[..=middle], &self.stops[middle..]]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: Distance,
    /// Road length over great-circle length. `None` when the great-circle
    /// length is zero.
    pub curvature: Option<f64>,
}

/// Expands the stops of one direction into the stored route of a
/// there-and-back bus: `A, B, C` becomes `A, B, C, B, A`.
pub fn there_and_back<T: Clone>(stops: &[T]) -> Vec<T> {
    let mut route = stops.to_vec();
    route.extend(stops.iter().rev().skip(1).cloned());
    route
}
