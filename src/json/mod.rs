use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    str::FromStr,
    time::Instant,
};
use thiserror::Error;
use tracing::debug;

mod models;
mod response;
pub use models::*;
pub use response::*;

use crate::{
    repository::{self, Repository},
    router::{self, Router, ShortestPath},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalogue error: {0}")]
    Repository(#[from] repository::Error),
    #[error("Router error: {0}")]
    Router(#[from] router::Error),
}

impl Document {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, self::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads the catalogue, builds the router and answers every stat request
    /// in order.
    pub fn process(&self) -> Result<Vec<Response>, self::Error> {
        let repository = Repository::new().load_json(self)?;
        let router = repository.router(self.routing_settings)?;
        answer_all(&self.stat_requests, &repository, &router)
    }
}

impl FromStr for Document {
    type Err = self::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

pub fn answer_all<S: ShortestPath>(
    requests: &[StatRequest],
    repository: &Repository,
    router: &Router<'_, S>,
) -> Result<Vec<Response>, self::Error> {
    debug!("Answering {} stat requests...", requests.len());
    let now = Instant::now();
    let responses = requests
        .iter()
        .map(|request| request.answer(repository, router))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Answering stat requests took {:?}", now.elapsed());
    Ok(responses)
}
