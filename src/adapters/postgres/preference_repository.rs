//! PostgreSQL implementation of PreferenceRepository.
//!
//! One row per user in `user_preferences`, keyed by a unique `user_id`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::preferences::{Language, PreferenceRecord, Theme};
use crate::ports::PreferenceRepository;

const USER_ID_UNIQUE_CONSTRAINT: &str = "user_preferences_user_id_key";

/// PostgreSQL implementation of the PreferenceRepository port.
pub struct PostgresPreferenceRepository {
    pool: PgPool,
}

impl PostgresPreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a preference record.
#[derive(Debug, sqlx::FromRow)]
struct PreferenceRow {
    theme: String,
    language: String,
    notifications: bool,
}

impl TryFrom<PreferenceRow> for PreferenceRecord {
    type Error = DomainError;

    fn try_from(row: PreferenceRow) -> Result<Self, Self::Error> {
        let theme = row.theme.parse::<Theme>().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid theme value: {}", e))
        })?;
        let language = Language::new(&row.language).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid language value: {}", e))
        })?;

        Ok(PreferenceRecord::new(theme, language, row.notifications))
    }
}

fn not_found(user_id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::PreferencesNotFound, "Preferences not found")
        .with_detail("user_id", user_id.as_str())
}

#[async_trait]
impl PreferenceRepository for PostgresPreferenceRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PreferenceRecord>, DomainError> {
        let row: Option<PreferenceRow> = sqlx::query_as(
            r#"
            SELECT theme, language, notifications
            FROM user_preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to load preferences");
            DomainError::database(format!("Failed to find preferences: {}", e))
        })?;

        row.map(PreferenceRecord::try_from).transpose()
    }

    async fn save(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE user_preferences SET
                theme = $2,
                language = $3,
                notifications = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(record.theme.as_str())
        .bind(record.language.as_str())
        .bind(record.notifications)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to save preferences");
            DomainError::database(format!("Failed to save preferences: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(not_found(user_id));
        }

        Ok(())
    }

    async fn create(&self, user_id: &UserId, record: &PreferenceRecord) -> Result<(), DomainError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_preferences (
                id, user_id, theme, language, notifications, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_str())
        .bind(record.theme.as_str())
        .bind(record.language.as_str())
        .bind(record.notifications)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some(USER_ID_UNIQUE_CONSTRAINT) {
                    return DomainError::new(
                        ErrorCode::PreferencesExist,
                        "User already has preferences",
                    )
                    .with_detail("user_id", user_id.as_str());
                }
            }
            tracing::error!(user_id = %user_id, error = %e, "Failed to create preferences");
            DomainError::database(format!("Failed to create preferences: {}", e))
        })?;

        Ok(())
    }
}
