//! Workout plan service

use crate::error::ApiError;
use crate::repositories::{WorkoutPlanRecord, WorkoutPlanRepository};
use fittrack_shared::generate_plan;
use fittrack_shared::types::{GeneratePlanRequest, WorkoutPlanResponse};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub const PLAN_GENERATED: &str = "Workout plan generated successfully";
pub const PLAN_NOT_FOUND: &str = "No workout plan found";

impl From<WorkoutPlanRecord> for WorkoutPlanResponse {
    fn from(record: WorkoutPlanRecord) -> Self {
        WorkoutPlanResponse {
            id: record.id,
            plan: record.plan_json.0,
            created_at: record.created_at,
        }
    }
}

pub struct WorkoutService;

impl WorkoutService {
    /// Generate a weekly plan from the request and append it to the history
    pub async fn generate(
        pool: &PgPool,
        user_id: Uuid,
        request: GeneratePlanRequest,
    ) -> Result<WorkoutPlanResponse, ApiError> {
        let (goal, experience_level, activity_level) = request.into_inputs()?;
        let plan = generate_plan(goal, experience_level, activity_level);

        let record = WorkoutPlanRepository::create(pool, user_id, &plan)
            .await
            .map_err(ApiError::Internal)?;

        info!(
            user_id = %user_id,
            plan_id = %record.id,
            goal = %goal,
            experience = %experience_level,
            "Workout plan generated"
        );
        Ok(record.into())
    }

    pub async fn latest(pool: &PgPool, user_id: Uuid) -> Result<WorkoutPlanResponse, ApiError> {
        WorkoutPlanRepository::find_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(WorkoutPlanResponse::from)
            .ok_or_else(|| ApiError::NotFound(PLAN_NOT_FOUND.to_string()))
    }
}
