//! Weekly progress service

use crate::error::ApiError;
use crate::repositories::{ProgressLogRecord, ProgressRepository};
use fittrack_shared::types::{ProgressLogRequest, ProgressLogResponse};
use fittrack_shared::{summarize_progress, ProgressLog, ProgressSummary, PROGRESS_WINDOW_WEEKS};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub const PROGRESS_LOGGED: &str = "Progress logged successfully";

pub struct ProgressService;

impl ProgressService {
    /// Record one week; a second log for the same week is a conflict
    pub async fn log_week(
        pool: &PgPool,
        user_id: Uuid,
        request: ProgressLogRequest,
    ) -> Result<ProgressLogResponse, ApiError> {
        let log = request.into_log()?;

        let duplicate = format!(
            "Progress already logged for week starting {}",
            log.week_start_date
        );

        if ProgressRepository::week_logged(pool, user_id, log.week_start_date)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(duplicate));
        }

        // A concurrent log for the same week can still pass the check above
        let record = ProgressRepository::create(pool, user_id, &log)
            .await
            .map_err(|e| ApiError::from_insert(e, duplicate))?;

        info!(
            user_id = %user_id,
            week = %log.week_start_date,
            workout = log.workout_status.as_str(),
            diet = log.diet_status.as_str(),
            "Progress logged"
        );

        Ok(ProgressLogResponse {
            id: record.id,
            log,
            created_at: record.created_at,
        })
    }

    /// Analytics over the most recent weeks, oldest first
    pub async fn summary(pool: &PgPool, user_id: Uuid) -> Result<ProgressSummary, ApiError> {
        let records = ProgressRepository::list_recent(pool, user_id, PROGRESS_WINDOW_WEEKS as i64)
            .await
            .map_err(ApiError::Internal)?;

        let logs = records
            .iter()
            .map(ProgressLogRecord::to_log)
            .collect::<anyhow::Result<Vec<ProgressLog>>>()
            .map_err(ApiError::Internal)?;

        Ok(summarize_progress(&logs))
    }
}
