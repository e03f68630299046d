use serde::{Deserialize, Serialize};
use transit_catalogue::prelude::{Itinerary, Step};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum StepDto {
    Wait {
        stop: String,
        minutes: f64,
    },
    Ride {
        bus: String,
        span_count: u32,
        minutes: f64,
    },
}

impl From<&Step> for StepDto {
    fn from(value: &Step) -> Self {
        match value {
            Step::Wait { stop, time } => StepDto::Wait {
                stop: stop.to_string(),
                minutes: time.as_minutes(),
            },
            Step::Ride {
                bus,
                span_count,
                time,
            } => StepDto::Ride {
                bus: bus.to_string(),
                span_count: *span_count,
                minutes: time.as_minutes(),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItineraryDto {
    pub from: String,
    pub to: String,
    pub total_minutes: f64,
    pub steps: Vec<StepDto>,
}

impl ItineraryDto {
    pub fn from(from: &str, to: &str, itinerary: &Itinerary) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            total_minutes: itinerary.total_time.as_minutes(),
            steps: itinerary.steps.iter().map(StepDto::from).collect(),
        }
    }
}
