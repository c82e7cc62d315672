pub mod api;
pub mod service;

use std::sync::Arc;

use axum::Router;
use bcodes_core::Module;

use service::RegistryService;

/// Registry module — building-code record management.
pub struct RegistryModule {
    service: Arc<RegistryService>,
}

impl RegistryModule {
    pub fn new(service: RegistryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for RegistryModule {
    fn name(&self) -> &str {
        "building-codes"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
