use std::sync::Arc;

use configs::StoreConfig;
use service::{PersonRepository, PersonService};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub persons: Arc<PersonService>,
}

impl ServerState {
    pub fn new(persons: Arc<PersonService>) -> Self {
        Self { persons }
    }

    /// Fresh store for one server instance, seeded when configured.
    pub fn from_config(cfg: &StoreConfig) -> Self {
        let repo = if cfg.seed_sample { PersonRepository::with_seed() } else { PersonRepository::new() };
        Self::new(PersonService::new(repo))
    }
}
