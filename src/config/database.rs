//! PostgreSQL settings for the preference store

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on the pool; one connection per in-flight request is plenty.
pub const MAX_POOL_SIZE: u32 = 50;

/// Connection settings, only consulted when the in-memory store is off.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Apply `migrations/` before serving
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        let scheme = self.url.split_once("://").map(|(scheme, _)| scheme);
        if !matches!(scheme, Some("postgres" | "postgresql")) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(ValidationError::PoolSizeOutOfRange(self.max_connections));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn migrations_run_unless_disabled() {
        let config = DatabaseConfig::default();
        assert!(config.run_migrations);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn url_is_required_when_postgres_is_used() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("DATABASE__URL"))
        );
    }

    #[test]
    fn both_postgres_schemes_are_accepted() {
        assert!(with_url("postgres://prefs@db/user_preferences").validate().is_ok());
        assert!(with_url("postgresql://prefs@db/user_preferences").validate().is_ok());
    }

    #[test]
    fn other_schemes_are_rejected() {
        for url in ["mysql://db/prefs", "sqlite::memory:", "postgres"] {
            assert_eq!(
                with_url(url).validate(),
                Err(ValidationError::InvalidDatabaseUrl),
                "{url}"
            );
        }
    }

    #[test]
    fn pool_must_hold_at_least_one_connection() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..with_url("postgres://db/prefs")
        };
        assert_eq!(config.validate(), Err(ValidationError::PoolSizeOutOfRange(0)));
    }

    #[test]
    fn pool_is_capped() {
        let at_cap = DatabaseConfig {
            max_connections: MAX_POOL_SIZE,
            ..with_url("postgres://db/prefs")
        };
        assert!(at_cap.validate().is_ok());

        let over = DatabaseConfig {
            max_connections: MAX_POOL_SIZE + 1,
            ..at_cap
        };
        assert_eq!(
            over.validate(),
            Err(ValidationError::PoolSizeOutOfRange(MAX_POOL_SIZE + 1))
        );
    }
}
