use crate::models::{LifestyleAnswers, MatchAlert, NewMatch, SavedProfile};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL client for saved lifestyle profiles and match alerts
///
/// The matching engine never persists anything; this client owns the state
/// the alert sweep needs between runs (the last-seen cat ids per profile)
/// and the alerts it raises.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Save lifestyle answers for a user
    ///
    /// `last_seen_cat_ids` is the ranking the user has already been shown,
    /// so the next sweep only alerts for cats that appear afterwards.
    pub async fn save_profile(
        &self,
        user_id: &str,
        answers: &LifestyleAnswers,
        last_seen_cat_ids: &[String],
    ) -> Result<SavedProfile, PostgresError> {
        let query = r#"
            INSERT INTO saved_profiles
                (id, user_id, answers, last_seen_cat_ids, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, user_id, answers, last_seen_cat_ids, created_at, updated_at
        "#;

        let row = sqlx::query(query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(Json(answers))
            .bind(last_seen_cat_ids)
            .fetch_one(&self.pool)
            .await?;

        let profile = profile_from_row(&row);

        tracing::debug!("Saved profile {} for user {}", profile.id, user_id);

        Ok(profile)
    }

    /// Saved profiles of one user, newest first
    pub async fn list_profiles_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<SavedProfile>, PostgresError> {
        let query = r#"
            SELECT id, user_id, answers, last_seen_cat_ids, created_at, updated_at
            FROM saved_profiles
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(profile_from_row).collect())
    }

    /// Every saved profile, for the alert sweep
    pub async fn list_all_profiles(&self) -> Result<Vec<SavedProfile>, PostgresError> {
        let query = r#"
            SELECT id, user_id, answers, last_seen_cat_ids, created_at, updated_at
            FROM saved_profiles
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(profile_from_row).collect())
    }

    /// Delete a saved profile and its alerts
    pub async fn delete_profile(&self, profile_id: Uuid) -> Result<(), PostgresError> {
        let result = sqlx::query("DELETE FROM saved_profiles WHERE id = $1")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PostgresError::NotFound(format!("Profile {}", profile_id)));
        }

        Ok(())
    }

    /// Store the outcome of one sweep for one profile
    ///
    /// Inserts the new alerts and replaces the profile's last-seen set in a
    /// single transaction. Alerts already raised for the same cat are skipped.
    pub async fn record_sweep_result(
        &self,
        profile: &SavedProfile,
        new_matches: &[NewMatch],
        seen_cat_ids: &[String],
    ) -> Result<Vec<MatchAlert>, PostgresError> {
        let mut tx = self.pool.begin().await?;
        let mut alerts = Vec::with_capacity(new_matches.len());

        let insert = r#"
            INSERT INTO match_alerts
                (id, user_id, profile_id, cat_id, cat_name, score, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, NOW())
            ON CONFLICT (profile_id, cat_id) DO NOTHING
            RETURNING id, user_id, profile_id, cat_id, cat_name, score, is_read, created_at
        "#;

        for new_match in new_matches {
            let row = sqlx::query(insert)
                .bind(Uuid::new_v4())
                .bind(&profile.user_id)
                .bind(profile.id)
                .bind(&new_match.cat_id)
                .bind(&new_match.cat_name)
                .bind(new_match.score as i16)
                .fetch_optional(&mut *tx)
                .await?;

            if let Some(row) = row {
                alerts.push(alert_from_row(&row));
            }
        }

        sqlx::query(
            r#"
            UPDATE saved_profiles
            SET last_seen_cat_ids = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(profile.id)
        .bind(seen_cat_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Recorded {} alerts for profile {} ({} cats seen)",
            alerts.len(),
            profile.id,
            seen_cat_ids.len()
        );

        Ok(alerts)
    }

    /// Alerts of one user, newest first
    pub async fn list_alerts(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> Result<Vec<MatchAlert>, PostgresError> {
        let query = r#"
            SELECT id, user_id, profile_id, cat_id, cat_name, score, is_read, created_at
            FROM match_alerts
            WHERE user_id = $1 AND ($2 = FALSE OR is_read = FALSE)
            ORDER BY created_at DESC, score DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(unread_only)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(alert_from_row).collect())
    }

    /// Mark one alert as read
    pub async fn mark_alert_read(&self, alert_id: Uuid) -> Result<(), PostgresError> {
        let result = sqlx::query("UPDATE match_alerts SET is_read = TRUE WHERE id = $1")
            .bind(alert_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PostgresError::NotFound(format!("Alert {}", alert_id)));
        }

        Ok(())
    }

    /// Mark every unread alert of a user as read
    pub async fn mark_all_read(&self, user_id: &str) -> Result<u64, PostgresError> {
        let query = "UPDATE match_alerts SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE";

        let result = sqlx::query(query)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Marked {} alerts read for user {}", result.rows_affected(), user_id);

        Ok(result.rows_affected())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &PgRow) -> SavedProfile {
    let answers: Json<LifestyleAnswers> = row.get("answers");

    SavedProfile {
        id: row.get("id"),
        user_id: row.get("user_id"),
        answers: answers.0,
        last_seen_cat_ids: row.get("last_seen_cat_ids"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn alert_from_row(row: &PgRow) -> MatchAlert {
    MatchAlert {
        id: row.get("id"),
        user_id: row.get("user_id"),
        profile_id: row.get("profile_id"),
        cat_id: row.get("cat_id"),
        cat_name: row.get("cat_name"),
        score: row.get("score"),
        is_read: row.get("is_read"),
        created_at: row.get("created_at"),
    }
}
