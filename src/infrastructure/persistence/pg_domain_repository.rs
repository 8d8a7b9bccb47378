//! PostgreSQL implementation of domain repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Domain;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

/// PostgreSQL repository for registered domains.
///
/// Only issues `SELECT` statements; the `domains` table is owned by the
/// naming service.
pub struct PgDomainRepository {
    pool: Arc<PgPool>,
}

impl PgDomainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Domain>, AppError> {
        let domain = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM domains
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Domain>, AppError> {
        let domains = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM domains
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM domains")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
