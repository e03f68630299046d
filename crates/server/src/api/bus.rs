use std::{collections::HashMap, sync::Arc};

use crate::{dto::BusDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub async fn bus(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let name = params.get("name").ok_or(StatusCode::BAD_REQUEST)?;
    let bus = state
        .repository
        .bus_by_name(name)
        .filter(|bus| !bus.stops.is_empty())
        .ok_or(StatusCode::NOT_FOUND)?;
    let stats = state.repository.bus_stats(bus).map_err(|err| {
        error!("Failed to compute stats for bus {name}: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(BusDto::from(bus, stats)).into_response())
}
