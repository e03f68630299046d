use std::{collections::HashMap, sync::Arc};

use crate::{dto::StopDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn stop(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let name = params.get("name").ok_or(StatusCode::BAD_REQUEST)?;
    let stop = state
        .repository
        .stop_by_name(name)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(StopDto::from(stop, &state.repository)).into_response())
}
