//! Weekly progress log repository

use super::{to_decimal, to_f64};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fittrack_shared::ProgressLog;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProgressLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: NaiveDate,
    pub workout_status: String,
    pub diet_status: String,
    pub weight: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ProgressLogRecord {
    pub fn to_log(&self) -> Result<ProgressLog> {
        Ok(ProgressLog {
            week_start_date: self.week_start_date,
            workout_status: self.workout_status.parse()?,
            diet_status: self.diet_status.parse()?,
            weight: to_f64(self.weight),
        })
    }
}

pub struct ProgressRepository;

impl ProgressRepository {
    pub async fn create(pool: &PgPool, user_id: Uuid, log: &ProgressLog) -> Result<ProgressLogRecord> {
        let record = sqlx::query_as::<_, ProgressLogRecord>(
            r#"
            INSERT INTO progress_logs (user_id, week_start_date, workout_status, diet_status, weight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, week_start_date, workout_status, diet_status, weight, created_at
            "#,
        )
        .bind(user_id)
        .bind(log.week_start_date)
        .bind(log.workout_status.as_str())
        .bind(log.diet_status.as_str())
        .bind(to_decimal(log.weight)?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn week_logged(pool: &PgPool, user_id: Uuid, week_start_date: NaiveDate) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM progress_logs WHERE user_id = $1 AND week_start_date = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(week_start_date)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// The newest `limit` weeks for a user, returned oldest first
    pub async fn list_recent(pool: &PgPool, user_id: Uuid, limit: i64) -> Result<Vec<ProgressLogRecord>> {
        let mut records = sqlx::query_as::<_, ProgressLogRecord>(
            r#"
            SELECT id, user_id, week_start_date, workout_status, diet_status, weight, created_at
            FROM progress_logs
            WHERE user_id = $1
            ORDER BY week_start_date DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        records.reverse();
        Ok(records)
    }
}
