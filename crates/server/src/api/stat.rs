use std::sync::Arc;

use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use transit_catalogue::json::{StatRequest, answer_all};

pub async fn stat(
    State(state): State<Arc<AppState>>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Result<Response, StatusCode> {
    let answers = answer_all(&requests, &state.repository, &state.router()).map_err(|err| {
        error!("Failed to answer stat requests: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(answers).into_response())
}
