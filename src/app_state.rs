use std::sync::Arc;

use crate::{
    config::Config,
    services::{GeminiModelService, GenerationService, TextGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model: Arc<dyn TextGenerator> = Arc::new(GeminiModelService::new(&config));
        Self::with_generator(config, model)
    }

    /// Builds state around any generator; tests pass stubs here.
    pub fn with_generator(config: Config, model: Arc<dyn TextGenerator>) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new(model)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_keeps_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.max_upload_bytes, 1024);
    }
}
