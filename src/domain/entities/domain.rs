//! Domain entity as read from the naming service's store.

use chrono::{DateTime, Utc};

/// A registered domain name.
///
/// `name` is stored with its suffix (e.g. `"202.crypto"`). This service only
/// reads domains; rows are created and updated by the naming service.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Domain {
    /// Creates a new Domain instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let domain = Domain::new(1, "202.crypto".to_string(), Utc::now(), Utc::now());
    /// ```
    pub fn new(
        id: i64,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_creation() {
        let now = Utc::now();
        let domain = Domain::new(1, "202.crypto".to_string(), now, now);

        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "202.crypto");
        assert_eq!(domain.created_at, now);
    }
}
