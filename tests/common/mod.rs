#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::Utc;
use domain_attributes::AppError;
use domain_attributes::api::handlers::{
    classify_handler, domain_attributes_list_handler, health_handler, metadata_handler,
};
use domain_attributes::domain::entities::Domain;
use domain_attributes::domain::repositories::DomainRepository;
use domain_attributes::state::AppState;
use serde_json::json;
use std::sync::Arc;

/// In-memory stand-in for the naming service's domain store.
pub struct InMemoryDomainRepository {
    domains: Vec<Domain>,
}

impl InMemoryDomainRepository {
    pub fn with_names(names: &[&str]) -> Self {
        let now = Utc::now();
        let domains = names
            .iter()
            .enumerate()
            .map(|(i, name)| Domain::new(i as i64 + 1, name.to_string(), now, now))
            .collect();

        Self { domains }
    }
}

#[async_trait]
impl DomainRepository for InMemoryDomainRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Domain>, AppError> {
        Ok(self.domains.iter().find(|d| d.name == name).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Domain>, AppError> {
        Ok(self
            .domains
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.domains.len() as i64)
    }
}

/// Repository whose every call fails, simulating a lost database.
pub struct FailingDomainRepository;

#[async_trait]
impl DomainRepository for FailingDomainRepository {
    async fn find_by_name(&self, _name: &str) -> Result<Option<Domain>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<Domain>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub const REGISTERED: &[&str] = &[
    "202.crypto",
    "9999.x",
    "10000.x",
    "10001.x",
    "0202.nft",
    "0x199fnfwnef.nft",
    "WEFff.x",
    "1-.nft",
];

pub fn create_test_state(repository: Arc<dyn DomainRepository>) -> AppState {
    AppState::new(repository)
}

pub fn make_server_with(repository: Arc<dyn DomainRepository>) -> TestServer {
    let app = Router::new()
        .route("/metadata/{name}", get(metadata_handler))
        .route("/health", get(health_handler))
        .route("/api/domains", get(domain_attributes_list_handler))
        .route("/api/classify", post(classify_handler))
        .with_state(create_test_state(repository));

    TestServer::new(app).unwrap()
}

pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryDomainRepository::with_names(REGISTERED)))
}
