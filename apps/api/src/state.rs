use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::mapping::StdRngSource;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable result store. Default: InMemorySessionStore.
    pub sessions: Arc<dyn SessionStore>,
    /// Random source for the card engine. Locked only for the duration of one
    /// synchronous `derive_card` call, never across an await.
    pub rng: Arc<Mutex<StdRngSource>>,
}

impl AppState {
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        let rng = StdRngSource::from_seed_or_entropy(config.rng_seed);
        Self {
            config,
            sessions,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
