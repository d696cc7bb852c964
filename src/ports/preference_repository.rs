//! Preference repository port.
//!
//! The store of per-user preference records. Exactly one record exists per
//! provisioned user; the command interpreter only ever reads and saves an
//! existing record.
//!
//! # Example
//!
//! ```ignore
//! async fn toggle_dark(
//!     repo: &dyn PreferenceRepository,
//!     user_id: &UserId,
//! ) -> Result<PreferenceRecord, DomainError> {
//!     let mut record = repo
//!         .find_by_user(user_id)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::PreferencesNotFound, "missing"))?;
//!     record.theme = Theme::Dark;
//!     repo.save(user_id, &record).await?;
//!     Ok(record)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::preferences::PreferenceRecord;

/// Repository port for per-user preference records.
///
/// Writes are last-write-wins; callers that need read-modify-write
/// consistency serialize per user (see `application::UserLocks`).
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Find the record for a user.
    ///
    /// Returns `None` if the user has not been provisioned.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PreferenceRecord>, DomainError>;

    /// Persist the full record of an existing user.
    ///
    /// # Errors
    ///
    /// - `PreferencesNotFound` if the user has no record
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError>;

    /// Create the record for a newly provisioned user.
    ///
    /// # Errors
    ///
    /// - `PreferencesExist` if the user already has a record
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError>;
}
