mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use std::{fmt::Display, sync::Arc, time::Instant};
use tracing::{error, info};
use transit_catalogue::{json::Document, prelude::Repository};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing request document");
        std::process::exit(1);
    }
    let batch = args.iter().skip(2).any(|arg| arg == "--batch");

    info!("Loading data...");
    let now = Instant::now();
    let document = or_exit(Document::from_path(&args[1]), "Failed to read document");

    if batch {
        let answers = or_exit(document.process(), "Failed to answer requests");
        let output = or_exit(serde_json::to_string_pretty(&answers), "Failed to write answers");
        println!("{output}");
        return;
    }

    let repository = or_exit(
        Repository::new().load_json(&document),
        "Failed to load catalogue",
    );
    let state = Arc::new(or_exit(
        AppState::new(repository, document.routing_settings),
        "Failed to build router",
    ));
    info!("Loading data took {:?}", now.elapsed());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let app = axum::Router::new()
        .route("/bus", get(api::bus))
        .route("/stop", get(api::stop))
        .route("/route", get(api::routing))
        .route("/stat", post(api::stat))
        .with_state(state);
    let listener = or_exit(
        tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await,
        "Failed to bind",
    );
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}

fn or_exit<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("{context}: {err}");
            std::process::exit(1);
        }
    }
}
