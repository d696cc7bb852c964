//! In-memory PreferenceRepository.
//!
//! Data is lost on restart. Used by the integration tests and when
//! `features.in_memory_store` is enabled in development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::preferences::PreferenceRecord;
use crate::ports::PreferenceRepository;

#[derive(Debug, Default)]
pub struct InMemoryPreferenceRepository {
    records: RwLock<HashMap<UserId, PreferenceRecord>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, replacing any existing one.
    pub async fn insert(&self, user_id: UserId, record: PreferenceRecord) {
        self.records.write().await.insert(user_id, record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PreferenceRecord>, DomainError> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(user_id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(
                DomainError::new(ErrorCode::PreferencesNotFound, "Preferences not found")
                    .with_detail("user_id", user_id.as_str()),
            ),
        }
    }

    async fn create(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(user_id) {
            return Err(
                DomainError::new(ErrorCode::PreferencesExist, "User already has preferences")
                    .with_detail("user_id", user_id.as_str()),
            );
        }
        records.insert(user_id.clone(), record.clone());
        Ok(())
    }
}
