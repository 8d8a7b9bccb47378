//! Attribute computation for stored and ad-hoc domain names.

use crate::domain::attributes::DomainAttributes;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Upper bound for a single page of [`AttributeService::list_attributes`].
pub const MAX_PAGE_SIZE: i64 = 100;

/// Service computing metadata attributes for domain names.
///
/// Classification itself never touches the repository; the repository is
/// only used to resolve whether a name is registered.
pub struct AttributeService {
    repository: Arc<dyn DomainRepository>,
}

impl AttributeService {
    /// Creates a new attribute service.
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self { repository }
    }

    /// Computes attributes for a registered domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain is not registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn metadata_for(&self, name: &str) -> Result<DomainAttributes, AppError> {
        let domain = self
            .repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Domain not found", json!({"name": name})))?;

        Ok(self.classify(&domain.name))
    }

    /// Classifies a name without checking whether it is registered.
    pub fn classify(&self, name: &str) -> DomainAttributes {
        let attributes = DomainAttributes::from_name(name);

        metrics::counter!(
            "domain_attributes_classified_total",
            "character_set" => attributes.character_set.as_str(),
            "number_club" => attributes.number_club.map_or("none", |c| c.as_str())
        )
        .increment(1);

        tracing::debug!(
            name,
            character_set = %attributes.character_set,
            number_club = ?attributes.number_club,
            "Classified domain"
        );

        attributes
    }

    /// Classifies several names, preserving input order.
    pub fn classify_batch<S: AsRef<str>>(&self, names: &[S]) -> Vec<DomainAttributes> {
        names.iter().map(|n| self.classify(n.as_ref())).collect()
    }

    /// Pages through registered domains with their attributes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside `1..=100` or
    /// `offset` is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_attributes(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DomainAttributes>, AppError> {
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::bad_request(
                "Invalid page size",
                json!({"min": 1, "max": MAX_PAGE_SIZE}),
            ));
        }

        if offset < 0 {
            return Err(AppError::bad_request(
                "Offset must not be negative",
                json!({"offset": offset}),
            ));
        }

        let domains = self.repository.list(limit, offset).await?;

        Ok(domains.iter().map(|d| self.classify(&d.name)).collect())
    }

    /// Number of registered domains; also used as a database health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn registered_count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
