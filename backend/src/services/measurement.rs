//! Body measurement service

use crate::error::ApiError;
use crate::repositories::{MeasurementRecord, MeasurementRepository};
use fittrack_shared::types::{MeasurementRequest, MeasurementResponse};
use fittrack_shared::{summarize_measurements, BodyMeasurement, MeasurementSummary};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub const MEASUREMENTS_SAVED: &str = "Body measurements saved successfully";
pub const MEASUREMENTS_NOT_FOUND: &str = "No measurements found";

impl From<MeasurementRecord> for MeasurementResponse {
    fn from(record: MeasurementRecord) -> Self {
        MeasurementResponse {
            id: record.id,
            measurement: BodyMeasurement::from(&record),
            created_at: record.created_at,
        }
    }
}

pub struct MeasurementService;

impl MeasurementService {
    pub async fn record(
        pool: &PgPool,
        user_id: Uuid,
        request: MeasurementRequest,
    ) -> Result<MeasurementResponse, ApiError> {
        let measurement = request.into_measurement()?;

        let record = MeasurementRepository::create(pool, user_id, &measurement)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, date = %measurement.measurement_date, "Body measurements saved");
        Ok(record.into())
    }

    /// Full series with change since the first entry
    pub async fn summary(pool: &PgPool, user_id: Uuid) -> Result<MeasurementSummary, ApiError> {
        let records = MeasurementRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let series: Vec<BodyMeasurement> = records.iter().map(BodyMeasurement::from).collect();

        summarize_measurements(&series)
            .ok_or_else(|| ApiError::NotFound(MEASUREMENTS_NOT_FOUND.to_string()))
    }
}
