//! Workout plan repository
//!
//! The generated plan is stored whole as a JSONB document; the inputs it was
//! generated from are kept in their own columns for querying.

use anyhow::Result;
use chrono::{DateTime, Utc};
use fittrack_shared::WorkoutPlan;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutPlanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub experience_level: String,
    pub activity_level: String,
    pub plan_json: Json<WorkoutPlan>,
    pub created_at: DateTime<Utc>,
}

pub struct WorkoutPlanRepository;

impl WorkoutPlanRepository {
    pub async fn create(pool: &PgPool, user_id: Uuid, plan: &WorkoutPlan) -> Result<WorkoutPlanRecord> {
        let record = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            INSERT INTO workout_plans (user_id, goal, experience_level, activity_level, plan_json)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, goal, experience_level, activity_level, plan_json, created_at
            "#,
        )
        .bind(user_id)
        .bind(plan.goal.as_str())
        .bind(plan.experience_level.as_str())
        .bind(plan.activity_level.as_str())
        .bind(Json(plan))
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Most recently generated plan for a user
    pub async fn find_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<WorkoutPlanRecord>> {
        let record = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, goal, experience_level, activity_level, plan_json, created_at
            FROM workout_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
