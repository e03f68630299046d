use serde::{Deserialize, Serialize};
use transit_catalogue::prelude::{Bus, BusStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusDto {
    pub name: String,
    pub is_roundtrip: bool,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length_m: f64,
    pub curvature: Option<f64>,
}

impl BusDto {
    pub fn from(bus: &Bus, stats: BusStats) -> Self {
        Self {
            name: bus.name.to_string(),
            is_roundtrip: bus.is_roundtrip,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            route_length_m: stats.route_length.as_meters(),
            curvature: stats.curvature,
        }
    }
}
