//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AttributeService;
use crate::domain::repositories::DomainRepository;

#[derive(Clone)]
pub struct AppState {
    pub attribute_service: Arc<AttributeService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self {
            attribute_service: Arc::new(AttributeService::new(repository)),
        }
    }
}
