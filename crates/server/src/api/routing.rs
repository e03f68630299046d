use std::{collections::HashMap, sync::Arc};

use crate::{dto::ItineraryDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn routing(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let from = params.get("from").ok_or(StatusCode::BAD_REQUEST)?;
    let to = params.get("to").ok_or(StatusCode::BAD_REQUEST)?;
    let itinerary = state
        .router()
        .build_route(from, to)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ItineraryDto::from(from, to, &itinerary)).into_response())
}
