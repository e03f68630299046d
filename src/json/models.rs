use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::router::Config;

/// The whole input document. Keys the catalogue does not use, like
/// `render_settings`, are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Config,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distance in meters from this stop to its neighbours.
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BusRequest {
    pub name: String,
    /// For a there-and-back bus only the way out is listed.
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
