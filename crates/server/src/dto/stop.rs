use serde::{Deserialize, Serialize};
use transit_catalogue::prelude::{Coordinate, Repository, Stop};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub name: String,
    pub coordinate: Coordinate,
    pub buses: Vec<String>,
}

impl StopDto {
    pub fn from(stop: &Stop, repo: &Repository) -> Self {
        let name = stop.name.to_string();
        let coordinate = stop.coordinate;
        let buses = repo.buses_by_stop(stop).map(|bus| bus.to_string()).collect();
        Self {
            name,
            coordinate,
            buses,
        }
    }
}
