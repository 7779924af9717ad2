use std::sync::Arc;

use crate::{
    backends::{github, EventSource},
    config::Config,
};

#[derive(Debug, Clone)]
pub struct ServiceHandler {
    event_source: Arc<dyn EventSource>,
}

impl ServiceHandler {
    pub fn new(event_source: Arc<dyn EventSource>) -> Self {
        Self { event_source }
    }

    pub fn new_defaults(config: &Config) -> Self {
        Self {
            event_source: Arc::new(github::Client::from_config(config)),
        }
    }

    pub fn events(&self) -> &dyn EventSource {
        self.event_source.as_ref()
    }
}
