//! Shared mock repository for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::preferences::PreferenceRecord;
use crate::ports::PreferenceRepository;

pub struct MockPreferenceRepository {
    records: Mutex<HashMap<UserId, PreferenceRecord>>,
    saves: Mutex<usize>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockPreferenceRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            saves: Mutex::new(0),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn with_record(self, user_id: &UserId, record: PreferenceRecord) -> Self {
        self.records.lock().unwrap().insert(user_id.clone(), record);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn stored(&self, user_id: &UserId) -> Option<PreferenceRecord> {
        self.records.lock().unwrap().get(user_id).cloned()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PreferenceRepository for MockPreferenceRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PreferenceRecord>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::database("Simulated read failure"));
        }
        Ok(self.stored(user_id))
    }

    async fn save(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::database("Simulated write failure"));
        }
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(user_id) {
            return Err(
                DomainError::new(ErrorCode::PreferencesNotFound, "Preferences not found")
                    .with_detail("user_id", user_id.as_str()),
            );
        }
        records.insert(user_id.clone(), record.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    async fn create(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::database("Simulated write failure"));
        }
        let mut records = self.records.lock().unwrap();
        if records.contains_key(user_id) {
            return Err(
                DomainError::new(ErrorCode::PreferencesExist, "Preferences already exist")
                    .with_detail("user_id", user_id.as_str()),
            );
        }
        records.insert(user_id.clone(), record.clone());
        Ok(())
    }
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-123").unwrap()
}
