use transit_catalogue::{
    prelude::*,
    router::{self, TransitGraph},
};

pub struct AppState {
    pub repository: Repository,
    transit: TransitGraph,
}

impl AppState {
    pub fn new(repository: Repository, config: Config) -> Result<Self, router::Error> {
        let transit = TransitGraph::with_config(&repository, &config)?;
        Ok(Self {
            repository,
            transit,
        })
    }

    pub fn router(&self) -> Router<'_> {
        Router::with_transit(&self.repository, &self.transit)
    }
}
