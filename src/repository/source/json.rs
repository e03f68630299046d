use crate::{
    json::{self, BaseRequest, BusRequest, Document, StopRequest},
    repository::{Repository, there_and_back},
    shared::{Coordinate, Distance},
};
use std::time::Instant;
use tracing::debug;

impl Repository {
    /// Fills the catalogue from the `base_requests` of a document.
    ///
    /// Stops are placed first, then road distances, then buses, so the
    /// result does not depend on the order requests appear in.
    pub fn load_json(mut self, document: &Document) -> Result<Self, json::Error> {
        let stops: Vec<&StopRequest> = document
            .base_requests
            .iter()
            .filter_map(|request| match request {
                BaseRequest::Stop(stop) => Some(stop),
                BaseRequest::Bus(_) => None,
            })
            .collect();
        let buses: Vec<&BusRequest> = document
            .base_requests
            .iter()
            .filter_map(|request| match request {
                BaseRequest::Bus(bus) => Some(bus),
                BaseRequest::Stop(_) => None,
            })
            .collect();

        self.load_stops(&stops);
        self.load_distances(&stops);
        self.load_buses(&buses)?;
        Ok(self)
    }

    fn load_stops(&mut self, stops: &[&StopRequest]) {
        debug!("Loading stops...");
        let now = Instant::now();
        for stop in stops {
            self.add_stop(
                &stop.name,
                Coordinate {
                    latitude: stop.latitude,
                    longitude: stop.longitude,
                },
            );
        }
        debug!("Loading {} stops took {:?}", stops.len(), now.elapsed());
    }

    fn load_distances(&mut self, stops: &[&StopRequest]) {
        debug!("Loading road distances...");
        let now = Instant::now();
        let mut count = 0;
        for stop in stops {
            for (neighbour, meters) in stop.road_distances.iter() {
                self.set_distance(&stop.name, neighbour, Distance::from_meters(*meters));
                count += 1;
            }
        }
        debug!("Loading {count} road distances took {:?}", now.elapsed());
    }

    fn load_buses(&mut self, buses: &[&BusRequest]) -> Result<(), json::Error> {
        debug!("Loading buses...");
        let now = Instant::now();
        for bus in buses {
            if bus.is_roundtrip {
                self.add_bus(&bus.name, &bus.stops, true)?;
            } else {
                self.add_bus(&bus.name, &there_and_back(&bus.stops), false)?;
            }
        }
        debug!("Loading {} buses took {:?}", buses.len(), now.elapsed());
        Ok(())
    }
}
