use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

mod models;
mod source;
pub use models::*;
use thiserror::Error;
use tracing::warn;

use crate::shared::geo::{Coordinate, Distance};

// Sorted so enumeration follows name order
type NameToIndex = BTreeMap<Arc<str>, u32>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Bus {0} is already in the catalogue")]
    DuplicateBus(Arc<str>),
    #[error("No road distance between {from} and {to} in either direction")]
    MissingDistance { from: Arc<str>, to: Arc<str> },
    #[error("Road distance between {from} and {to} is not a non-negative number")]
    InvalidDistance { from: Arc<str>, to: Arc<str> },
}

/// The transport catalogue: stops, buses and the road distances between stops.
///
/// Stops and buses live in append-only arenas and refer to each other by
/// index, so handles stay valid for as long as the repository lives.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub(crate) stops: Vec<Stop>,
    pub(crate) buses: Vec<Bus>,

    stop_lookup: NameToIndex,
    bus_lookup: NameToIndex,
    stop_to_buses: Vec<BTreeSet<Arc<str>>>,
    distances: HashMap<(u32, u32), Distance>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a stop, or moves an existing one to `coordinate`.
    pub fn add_stop(&mut self, name: &str, coordinate: Coordinate) -> u32 {
        if let Some(&index) = self.stop_lookup.get(name) {
            self.stops[index as usize].coordinate = coordinate;
            return index;
        }
        self.insert_stop(name, coordinate)
    }

    /// Adds a bus over the given stop names, in stored route order.
    ///
    /// Unknown stops are created at the zero coordinate and are expected to be
    /// placed later through [`Repository::add_stop`].
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<u32, self::Error> {
        if self.bus_lookup.contains_key(name) {
            return Err(self::Error::DuplicateBus(name.into()));
        }
        let stops: Box<[u32]> = stops
            .iter()
            .map(|stop| self.stop_index_or_insert(stop.as_ref()))
            .collect();
        if stops.is_empty() {
            warn!("Bus {name} has no stops");
        }

        let index = self.buses.len() as u32;
        let name: Arc<str> = name.into();
        for stop_idx in stops.iter() {
            self.stop_to_buses[*stop_idx as usize].insert(name.clone());
        }
        self.bus_lookup.insert(name.clone(), index);
        self.buses.push(Bus {
            index,
            name,
            stops,
            is_roundtrip,
        });
        Ok(index)
    }

    /// Records the road distance travelled from `from` to `to`.
    /// The opposite direction is left untouched.
    pub fn set_distance(&mut self, from: &str, to: &str, distance: Distance) {
        let from = self.stop_index_or_insert(from);
        let to = self.stop_index_or_insert(to);
        self.distances.insert((from, to), distance);
    }

    /// Road distance from one stop to another, falling back to the opposite
    /// direction when only that one was recorded.
    ///
    /// Negative or non-finite distances are rejected here since every length
    /// and travel time is derived from this lookup.
    pub fn distance(&self, from: u32, to: u32) -> Result<Distance, self::Error> {
        let names = || {
            (
                self.stops[from as usize].name.clone(),
                self.stops[to as usize].name.clone(),
            )
        };
        let distance = self
            .distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| {
                let (from, to) = names();
                self::Error::MissingDistance { from, to }
            })?;
        if !distance.is_valid() {
            let (from, to) = names();
            return Err(self::Error::InvalidDistance { from, to });
        }
        Ok(distance)
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        let index = self.stop_lookup.get(name)?;
        Some(&self.stops[*index as usize])
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        let index = self.bus_lookup.get(name)?;
        Some(&self.buses[*index as usize])
    }

    pub fn stop_by_idx(&self, index: u32) -> Option<&Stop> {
        self.stops.get(index as usize)
    }

    pub fn bus_by_idx(&self, index: u32) -> Option<&Bus> {
        self.buses.get(index as usize)
    }

    /// Names of the buses calling at `stop`, in lexicographic order.
    pub fn buses_by_stop(&self, stop: &Stop) -> impl Iterator<Item = &str> {
        self.stop_to_buses[stop.index as usize]
            .iter()
            .map(|name| name.as_ref())
    }

    /// Great-circle length of the stored route.
    pub fn straight_length(&self, bus: &Bus) -> Distance {
        bus.stops
            .windows(2)
            .map(|pair| {
                let from = &self.stops[pair[0] as usize];
                let to = &self.stops[pair[1] as usize];
                from.coordinate.euclidean_distance(&to.coordinate)
            })
            .sum()
    }

    /// Road length of the stored route.
    pub fn fact_length(&self, bus: &Bus) -> Result<Distance, self::Error> {
        bus.stops
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }

    pub fn bus_stats(&self, bus: &Bus) -> Result<BusStats, self::Error> {
        let route_length = self.fact_length(bus)?;
        let straight_length = self.straight_length(bus);
        let curvature = if straight_length.is_zero() {
            None
        } else {
            Some(route_length / straight_length)
        };
        Ok(BusStats {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }

    /// All stops in name order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stop_lookup
            .values()
            .map(|index| &self.stops[*index as usize])
    }

    /// All buses in name order.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.bus_lookup
            .values()
            .map(|index| &self.buses[*index as usize])
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn stop_index_or_insert(&mut self, name: &str) -> u32 {
        match self.stop_lookup.get(name) {
            Some(index) => *index,
            None => self.insert_stop(name, Coordinate::default()),
        }
    }

    fn insert_stop(&mut self, name: &str, coordinate: Coordinate) -> u32 {
        let index = self.stops.len() as u32;
        let name: Arc<str> = name.into();
        self.stop_lookup.insert(name.clone(), index);
        self.stop_to_buses.push(BTreeSet::new());
        self.stops.push(Stop {
            index,
            name,
            coordinate,
        });
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn meters(value: f64) -> Distance {
        Distance::from_meters(value)
    }

    #[test]
    fn add_stop_overwrites_coordinates() {
        let mut repository = Repository::new();
        let first = repository.add_stop("Marushkino", (0.0, 0.0).into());
        let second = repository.add_stop("Marushkino", (55.595884, 37.209755).into());
        assert_eq!(first, second);
        assert_eq!(repository.stop_count(), 1);
        let stop = repository.stop_by_name("Marushkino").unwrap();
        assert_eq!(stop.coordinate, Coordinate::from((55.595884, 37.209755)));
    }

    #[test]
    fn add_bus_creates_unknown_stops() {
        let mut repository = Repository::new();
        repository.add_bus("750", &["A", "B"], true).unwrap();
        let stop = repository.stop_by_name("B").unwrap();
        assert_eq!(stop.coordinate, Coordinate::default());
        let created = stop.index;

        // Real coordinates arrive later and keep the same handle
        let index = repository.add_stop("B", (1.0, 1.0).into());
        assert_eq!(index, created);
        assert_eq!(repository.bus_by_name("750").unwrap().stops[1], index);
    }

    #[test]
    fn duplicate_bus_is_rejected() {
        let mut repository = Repository::new();
        repository.add_bus("256", &["A", "B", "A"], true).unwrap();
        let err = repository.add_bus("256", &["C", "D"], false).unwrap_err();
        assert_eq!(err, Error::DuplicateBus("256".into()));
        assert_eq!(repository.bus_count(), 1);
        assert_eq!(repository.bus_by_name("256").unwrap().stops.len(), 3);
        // The rejected bus leaves no trace on the stops it named
        assert!(repository.stop_by_name("C").is_none());
    }

    #[test]
    fn unknown_names_are_not_found() {
        let repository = Repository::new();
        assert!(repository.stop_by_name("Nowhere").is_none());
        assert!(repository.bus_by_name("0").is_none());
    }

    #[test]
    fn distance_falls_back_to_reverse() {
        let mut repository = Repository::new();
        repository.set_distance("A", "B", meters(100.0));
        let a = repository.stop_by_name("A").unwrap().index;
        let b = repository.stop_by_name("B").unwrap().index;
        assert_eq!(repository.distance(a, b), Ok(meters(100.0)));
        assert_eq!(repository.distance(b, a), Ok(meters(100.0)));
    }

    #[test]
    fn distance_keeps_asymmetry() {
        let mut repository = Repository::new();
        repository.set_distance("A", "B", meters(100.0));
        repository.set_distance("B", "A", meters(250.0));
        let a = repository.stop_by_name("A").unwrap().index;
        let b = repository.stop_by_name("B").unwrap().index;
        assert_eq!(repository.distance(a, b), Ok(meters(100.0)));
        assert_eq!(repository.distance(b, a), Ok(meters(250.0)));
    }

    #[test]
    fn missing_distance_is_an_error() {
        let mut repository = Repository::new();
        let a = repository.add_stop("A", Coordinate::default());
        let b = repository.add_stop("B", Coordinate::default());
        assert_eq!(
            repository.distance(a, b),
            Err(Error::MissingDistance {
                from: "A".into(),
                to: "B".into()
            })
        );
    }

    #[test]
    fn negative_distance_is_an_error() {
        let mut repository = Repository::new();
        repository.set_distance("A", "B", meters(-100000.0));
        let a = repository.stop_by_name("A").unwrap().index;
        let b = repository.stop_by_name("B").unwrap().index;
        let invalid = Error::InvalidDistance {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(repository.distance(a, b), Err(invalid));
        // The reverse fallback is checked too
        assert!(matches!(
            repository.distance(b, a),
            Err(Error::InvalidDistance { .. })
        ));

        repository.add_bus("1", &["A", "B"], false).unwrap();
        let bus = repository.bus_by_name("1").unwrap();
        assert!(matches!(
            repository.bus_stats(bus),
            Err(Error::InvalidDistance { .. })
        ));
    }

    #[test]
    fn handles_resolve_by_index() {
        let mut repository = Repository::new();
        let a = repository.add_stop("A", Coordinate::default());
        let bus = repository.add_bus("1", &["A", "B"], true).unwrap();
        assert_eq!(repository.stop_by_idx(a).unwrap().name.as_ref(), "A");
        assert_eq!(repository.bus_by_idx(bus).unwrap().name.as_ref(), "1");
        assert!(repository.stop_by_idx(2).is_none());
        assert!(repository.bus_by_idx(1).is_none());
    }

    #[test]
    fn bus_stats_for_there_and_back() {
        let mut repository = Repository::new();
        repository.add_stop("A", (55.611087, 37.20829).into());
        repository.add_stop("B", (55.595884, 37.209755).into());
        repository.add_stop("C", (55.632761, 37.333324).into());
        repository.set_distance("A", "B", meters(3900.0));
        repository.set_distance("B", "C", meters(9900.0));
        repository.set_distance("C", "B", meters(9500.0));
        let route = there_and_back(&["A", "B", "C"]);
        repository.add_bus("256", &route, false).unwrap();

        let bus = repository.bus_by_name("256").unwrap();
        let stats = repository.bus_stats(bus).unwrap();
        assert_eq!(stats.stop_count, 5);
        assert_eq!(stats.unique_stop_count, 3);
        assert_eq!(stats.route_length, meters(3900.0 + 9900.0 + 9500.0 + 3900.0));

        let straight = repository.straight_length(bus);
        assert_relative_eq!(
            stats.curvature.unwrap(),
            stats.route_length.as_meters() / straight.as_meters()
        );
        assert!(stats.curvature.unwrap() > 1.0);
    }

    #[test]
    fn single_stop_bus_has_no_curvature() {
        let mut repository = Repository::new();
        repository.add_stop("A", (55.611087, 37.20829).into());
        repository.add_bus("1", &["A"], true).unwrap();
        let bus = repository.bus_by_name("1").unwrap();
        assert!(repository.straight_length(bus).is_zero());
        let stats = repository.bus_stats(bus).unwrap();
        assert_eq!(stats.route_length, Distance::default());
        assert_eq!(stats.curvature, None);
    }

    #[test]
    fn bus_stats_propagates_missing_distance() {
        let mut repository = Repository::new();
        repository.add_bus("1", &["A", "B"], true).unwrap();
        let bus = repository.bus_by_name("1").unwrap();
        assert!(matches!(
            repository.bus_stats(bus),
            Err(Error::MissingDistance { .. })
        ));
    }

    #[test]
    fn buses_by_stop_are_sorted() {
        let mut repository = Repository::new();
        repository.add_bus("828", &["A", "B", "A"], true).unwrap();
        repository.add_bus("256", &["B", "C"], false).unwrap();
        repository.add_bus("36", &["C", "A"], false).unwrap();
        let stop = repository.stop_by_name("A").unwrap();
        let buses: Vec<_> = repository.buses_by_stop(stop).collect();
        assert_eq!(buses, vec!["36", "828"]);

        repository.add_stop("Lonely", Coordinate::default());
        let lonely = repository.stop_by_name("Lonely").unwrap();
        assert_eq!(repository.buses_by_stop(lonely).count(), 0);
    }

    #[test]
    fn enumeration_follows_name_order() {
        let mut repository = Repository::new();
        repository.add_stop("Zeta", Coordinate::default());
        repository.add_stop("Alpha", Coordinate::default());
        repository.add_bus("b", &["Zeta"], true).unwrap();
        repository.add_bus("a", &["Alpha"], true).unwrap();
        let stops: Vec<_> = repository.stops().map(|stop| stop.name.as_ref()).collect();
        let buses: Vec<_> = repository.buses().map(|bus| bus.name.as_ref()).collect();
        assert_eq!(stops, vec!["Alpha", "Zeta"]);
        assert_eq!(buses, vec!["a", "b"]);
    }
}
