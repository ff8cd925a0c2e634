//! Health profile repository
//!
//! Profiles are append-only; the newest row per user is the current one.
//! Calculated metrics are not stored.

use super::{to_decimal, to_f64};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fittrack_shared::HealthProfile;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age: i32,
    pub biological_sex: String,
    pub height_cm: Decimal,
    pub weight_kg: Decimal,
    pub activity_level: String,
    pub experience_level: String,
    pub primary_goal: String,
    pub created_at: DateTime<Utc>,
}

impl HealthProfileRecord {
    /// Rebuild the domain profile from the stored columns
    pub fn to_profile(&self) -> Result<HealthProfile> {
        Ok(HealthProfile {
            age: u32::try_from(self.age).context("stored age is negative")?,
            biological_sex: self.biological_sex.parse()?,
            height_cm: to_f64(self.height_cm),
            weight_kg: to_f64(self.weight_kg),
            activity_level: self.activity_level.parse()?,
            experience_level: self.experience_level.parse()?,
            primary_goal: self.primary_goal.parse()?,
        })
    }
}

pub struct HealthProfileRepository;

impl HealthProfileRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        profile: &HealthProfile,
    ) -> Result<HealthProfileRecord> {
        let record = sqlx::query_as::<_, HealthProfileRecord>(
            r#"
            INSERT INTO health_profiles (
                user_id, age, biological_sex, height_cm, weight_kg,
                activity_level, experience_level, primary_goal
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, age, biological_sex, height_cm, weight_kg,
                      activity_level, experience_level, primary_goal, created_at
            "#,
        )
        .bind(user_id)
        .bind(i32::try_from(profile.age)?)
        .bind(profile.biological_sex.as_str())
        .bind(to_decimal(profile.height_cm)?)
        .bind(to_decimal(profile.weight_kg)?)
        .bind(profile.activity_level.as_str())
        .bind(profile.experience_level.as_str())
        .bind(profile.primary_goal.as_str())
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Newest profile for a user
    pub async fn find_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<HealthProfileRecord>> {
        let record = sqlx::query_as::<_, HealthProfileRecord>(
            r#"
            SELECT id, user_id, age, biological_sex, height_cm, weight_kg,
                   activity_level, experience_level, primary_goal, created_at
            FROM health_profiles
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
