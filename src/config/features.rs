//! Feature flags configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Serialize read-modify-write cycles per user (otherwise last write wins)
    #[serde(default = "default_serialize_user_updates")]
    pub serialize_user_updates: bool,

    /// Keep preferences in process memory instead of PostgreSQL
    #[serde(default)]
    pub in_memory_store: bool,
}

impl FeatureFlags {
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if self.in_memory_store && environment == Environment::Production {
            return Err(ValidationError::InMemoryStoreInProduction);
        }
        Ok(())
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            serialize_user_updates: default_serialize_user_updates(),
            in_memory_store: false,
        }
    }
}

fn default_serialize_user_updates() -> bool {
    true
}
