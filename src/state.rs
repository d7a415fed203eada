// src/state.rs

use crate::{classifier::EmailClassifier, config::Config, llm::ModelClient};
use std::sync::Arc;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<EmailClassifier>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let classifier = EmailClassifier::new(ModelClient::from_config(&config));
        Self {
            classifier: Arc::new(classifier),
            config: Arc::new(config),
        }
    }
}
