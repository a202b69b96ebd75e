use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{AthleteProfile, Plan, TrainingProgress};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored progress is corrupt: {0}")]
    Corrupt(String),
}

/// Persistence for dashboard progress, keyed by user.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<Option<TrainingProgress>, StoreError>;
    async fn save(&self, user_id: Uuid, progress: &TrainingProgress) -> Result<(), StoreError>;
    /// Returns whether anything was deleted.
    async fn delete(&self, user_id: Uuid) -> Result<bool, StoreError>;
}

pub struct PgProgressStore {
    db: PgPool,
}

#[derive(FromRow)]
struct ProgressRow {
    completed_workouts: Json<BTreeSet<String>>,
    current_week: i32,
    user_data: Json<AthleteProfile>,
    generated_plan: Option<Json<Plan>>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProgressRow> for TrainingProgress {
    type Error = StoreError;

    fn try_from(row: ProgressRow) -> Result<Self, Self::Error> {
        let current_week = u32::try_from(row.current_week)
            .map_err(|_| StoreError::Corrupt(format!("current_week {}", row.current_week)))?;

        Ok(TrainingProgress {
            completed_workouts: row.completed_workouts.0,
            current_week,
            user_data: row.user_data.0,
            generated_plan: row.generated_plan.map(|plan| plan.0),
            updated_at: row.updated_at,
        })
    }
}

impl PgProgressStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProgressStore for PgProgressStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<TrainingProgress>, StoreError> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            SELECT completed_workouts, current_week, user_data, generated_plan, updated_at
            FROM training_progress
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        row.map(TrainingProgress::try_from).transpose()
    }

    async fn save(&self, user_id: Uuid, progress: &TrainingProgress) -> Result<(), StoreError> {
        let current_week = i32::try_from(progress.current_week)
            .map_err(|_| StoreError::Corrupt(format!("current_week {}", progress.current_week)))?;

        sqlx::query(
            r#"
            INSERT INTO training_progress
                (user_id, completed_workouts, current_week, user_data, generated_plan, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                completed_workouts = EXCLUDED.completed_workouts,
                current_week = EXCLUDED.current_week,
                user_data = EXCLUDED.user_data,
                generated_plan = EXCLUDED.generated_plan,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user_id)
        .bind(Json(&progress.completed_workouts))
        .bind(current_week)
        .bind(Json(&progress.user_data))
        .bind(progress.generated_plan.as_ref().map(Json))
        .bind(progress.updated_at)
        .execute(&self.db)
        .await?;

        debug!(%user_id, "progress saved");
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM training_progress WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryProgressStore {
    entries: RwLock<HashMap<Uuid, TrainingProgress>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<TrainingProgress>, StoreError> {
        Ok(self.entries.read().await.get(&user_id).cloned())
    }

    async fn save(&self, user_id: Uuid, progress: &TrainingProgress) -> Result<(), StoreError> {
        self.entries.write().await.insert(user_id, progress.clone());
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.entries.write().await.remove(&user_id).is_some())
    }
}
