use serde::Serialize;

use crate::{
    json::StatRequest,
    repository::{self, BusStats, Repository},
    router::{Itinerary, Router, ShortestPath, Step},
};

const NOT_FOUND: &str = "not found";
const NOT_SUPPORTED: &str = "not supported";

/// One answer record, matched to its request by `request_id`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        curvature: Option<f64>,
        /// Whole meters.
        route_length: i64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<Item>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Item {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

impl From<&Step> for Item {
    fn from(value: &Step) -> Self {
        match value {
            Step::Wait { stop, time } => Item::Wait {
                stop_name: stop.to_string(),
                time: time.as_minutes(),
            },
            Step::Ride {
                bus,
                span_count,
                time,
            } => Item::Bus {
                bus: bus.to_string(),
                span_count: *span_count,
                time: time.as_minutes(),
            },
        }
    }
}

impl Response {
    pub fn bus(request_id: i64, stats: BusStats) -> Self {
        Response::Bus {
            request_id,
            curvature: stats.curvature,
            route_length: stats.route_length.as_meters().round() as i64,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }

    pub fn route(request_id: i64, itinerary: &Itinerary) -> Self {
        Response::Route {
            request_id,
            total_time: itinerary.total_time.as_minutes(),
            items: itinerary.steps.iter().map(Item::from).collect(),
        }
    }

    pub fn not_found(request_id: i64) -> Self {
        Response::Error {
            request_id,
            error_message: NOT_FOUND.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::Error { error_message, .. } if error_message == NOT_FOUND)
    }
}

impl StatRequest {
    /// Answers the request. Unknown names and missing itineraries become a
    /// "not found" record; only a corrupt catalogue is an error.
    pub fn answer<S: ShortestPath>(
        &self,
        repository: &Repository,
        router: &Router<'_, S>,
    ) -> Result<Response, repository::Error> {
        let response = match self {
            StatRequest::Bus { id, name } => match repository.bus_by_name(name) {
                Some(bus) if !bus.stops.is_empty() => {
                    Response::bus(*id, repository.bus_stats(bus)?)
                }
                _ => Response::not_found(*id),
            },
            StatRequest::Stop { id, name } => match repository.stop_by_name(name) {
                Some(stop) => Response::Stop {
                    request_id: *id,
                    buses: repository
                        .buses_by_stop(stop)
                        .map(|bus| bus.to_string())
                        .collect(),
                },
                None => Response::not_found(*id),
            },
            StatRequest::Route { id, from, to } => match router.build_route(from, to) {
                Some(itinerary) => Response::route(*id, &itinerary),
                None => Response::not_found(*id),
            },
            StatRequest::Map { id } => Response::Error {
                request_id: *id,
                error_message: NOT_SUPPORTED.to_string(),
            },
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{geo::Distance, time::Duration};
    use serde_json::json;

    #[test]
    fn serializes_route_items() {
        let itinerary = Itinerary {
            steps: vec![
                Step::Wait {
                    stop: "Biryulyovo Zapadnoye".into(),
                    time: Duration::from_minutes(6.0),
                },
                Step::Ride {
                    bus: "297".into(),
                    span_count: 2,
                    time: Duration::from_minutes(5.235),
                },
            ],
            total_time: Duration::from_minutes(11.235),
        };
        let value = serde_json::to_value(Response::route(5, &itinerary)).unwrap();
        assert_eq!(
            value,
            json!({
                "request_id": 5,
                "total_time": 11.235,
                "items": [
                    {"type": "Wait", "stop_name": "Biryulyovo Zapadnoye", "time": 6.0},
                    {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.235}
                ]
            })
        );
    }

    #[test]
    fn serializes_not_found() {
        let response = Response::not_found(12);
        assert!(response.is_not_found());
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"request_id": 12, "error_message": "not found"})
        );
    }

    #[test]
    fn undefined_curvature_is_null() {
        let response = Response::Bus {
            request_id: 1,
            curvature: None,
            route_length: 0,
            stop_count: 1,
            unique_stop_count: 1,
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["curvature"], serde_json::Value::Null);
    }

    #[test]
    fn route_length_is_whole_meters() {
        let stats = BusStats {
            stop_count: 3,
            unique_stop_count: 2,
            route_length: Distance::from_meters(27200.0),
            curvature: Some(1.2),
        };
        let value = serde_json::to_value(Response::bus(1, stats)).unwrap();
        assert_eq!(value["route_length"], json!(27200));
        assert!(value["route_length"].is_i64());
    }
}
