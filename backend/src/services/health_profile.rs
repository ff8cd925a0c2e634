//! Health profile service
//!
//! Metrics are recomputed from the stored profile on every read.

use crate::error::ApiError;
use crate::repositories::{HealthProfileRecord, HealthProfileRepository};
use fittrack_shared::types::{HealthProfileRequest, HealthProfileResponse};
use fittrack_shared::{compute_metrics, HealthProfile};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

pub const PROFILE_SAVED: &str = "Health profile saved successfully";
pub const PROFILE_NOT_FOUND: &str = "Profile not found";

fn respond(profile: HealthProfile, record: Option<&HealthProfileRecord>) -> HealthProfileResponse {
    HealthProfileResponse {
        id: record.map(|r| r.id),
        calculated: compute_metrics(&profile),
        goal_label: profile.primary_goal.label().to_string(),
        profile,
        created_at: record.map(|r| r.created_at),
    }
}

pub struct HealthProfileService;

impl HealthProfileService {
    /// Validate and store a new profile, returning it with its metrics
    pub async fn save(
        pool: &PgPool,
        user_id: Uuid,
        request: HealthProfileRequest,
    ) -> Result<HealthProfileResponse, ApiError> {
        let profile = request.into_profile()?;

        let record = HealthProfileRepository::create(pool, user_id, &profile)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, profile_id = %record.id, "Health profile saved");
        Ok(respond(profile, Some(&record)))
    }

    /// Newest stored profile with freshly computed metrics
    pub async fn latest(pool: &PgPool, user_id: Uuid) -> Result<HealthProfileResponse, ApiError> {
        let record = HealthProfileRepository::find_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(PROFILE_NOT_FOUND.to_string()))?;

        let profile = record.to_profile().map_err(ApiError::Internal)?;
        Ok(respond(profile, Some(&record)))
    }

    /// Metrics for an unsaved profile
    pub fn preview(request: HealthProfileRequest) -> Result<HealthProfileResponse, ApiError> {
        let profile = request.into_profile()?;
        debug!(goal = %profile.primary_goal, "Previewing health metrics");
        Ok(respond(profile, None))
    }
}
