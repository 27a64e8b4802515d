use std::sync::Arc;

use crate::config::Config;
use crate::services::prediction_service::PredictionService;

/// State shared across handlers. Every prediction is computed from scratch,
/// so there is no mutable state here — just the config and the orchestrator.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let service = Arc::new(PredictionService::new(&config));
        Self { config, service }
    }
}
