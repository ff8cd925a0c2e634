//! Body measurement repository

use super::{to_decimal, to_f64};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fittrack_shared::BodyMeasurement;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Body measurement record from database (girths in cm)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub measurement_date: NaiveDate,
    pub waist: Decimal,
    pub chest: Decimal,
    pub hips: Decimal,
    pub arms: Decimal,
    pub thighs: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&MeasurementRecord> for BodyMeasurement {
    fn from(record: &MeasurementRecord) -> Self {
        BodyMeasurement {
            measurement_date: record.measurement_date,
            waist: to_f64(record.waist),
            chest: to_f64(record.chest),
            hips: to_f64(record.hips),
            arms: to_f64(record.arms),
            thighs: to_f64(record.thighs),
        }
    }
}

pub struct MeasurementRepository;

impl MeasurementRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        measurement: &BodyMeasurement,
    ) -> Result<MeasurementRecord> {
        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            INSERT INTO body_measurements (user_id, measurement_date, waist, chest, hips, arms, thighs)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, measurement_date, waist, chest, hips, arms, thighs, created_at
            "#,
        )
        .bind(user_id)
        .bind(measurement.measurement_date)
        .bind(to_decimal(measurement.waist)?)
        .bind(to_decimal(measurement.chest)?)
        .bind(to_decimal(measurement.hips)?)
        .bind(to_decimal(measurement.arms)?)
        .bind(to_decimal(measurement.thighs)?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Every measurement for a user, oldest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MeasurementRecord>> {
        let records = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT id, user_id, measurement_date, waist, chest, hips, arms, thighs, created_at
            FROM body_measurements
            WHERE user_id = $1
            ORDER BY measurement_date ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
