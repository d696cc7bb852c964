//! GetPreferencesHandler - Query handler for the caller's preference record.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::preferences::{PreferenceError, PreferenceRecord};
use crate::ports::PreferenceRepository;

/// Query for a user's preferences.
#[derive(Debug, Clone)]
pub struct GetPreferencesQuery {
    pub user_id: UserId,
}

/// Handler for reading preferences.
pub struct GetPreferencesHandler {
    repository: Arc<dyn PreferenceRepository>,
}

impl GetPreferencesHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPreferencesQuery) -> Result<PreferenceRecord, PreferenceError> {
        self.repository
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| PreferenceError::not_found(query.user_id))
    }
}
