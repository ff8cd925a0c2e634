//! API request and response types
//!
//! Request bodies keep every field optional so a missing value surfaces as a
//! [`ValidationError`] naming the field instead of a deserializer rejection.

use crate::analytics::{BodyMeasurement, DietStatus, ProgressLog, WorkoutStatus};
use crate::errors::ValidationError;
use crate::health_metrics::{
    ActivityLevel, BiologicalSex, CalculatedMetrics, ExperienceLevel, HealthProfile, PrimaryGoal,
};
use crate::validation::{self, require, require_text};
use crate::workout_plan::WorkoutPlan;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JSON envelope wrapping every successful response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

/// Error body: `{ success: false, message, code }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn parse_label<T>(field: &'static str, value: Option<String>) -> Result<T, ValidationError>
where
    T: std::str::FromStr<Err = ValidationError>,
{
    require_text(field, value)?.parse()
}

// ============================================================================
// Auth
// ============================================================================

/// Role given to every new account
pub const DEFAULT_ROLE_ID: i32 = 1;

/// Registration body. The role is never taken from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration input after validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i32,
}

impl RegisterRequest {
    pub fn into_account(self) -> Result<NewAccount, ValidationError> {
        let name = require_text("name", self.name)?;
        validation::validate_name(&name)?;
        let email = normalized_email(self.email)?;
        let password = require("password", self.password)?;
        validation::validate_password(&password)?;

        Ok(NewAccount {
            name,
            email,
            password,
            role_id: DEFAULT_ROLE_ID,
        })
    }
}

/// Trimmed, lowercased and checked against the one email rule shared by
/// registration and login
fn normalized_email(email: Option<String>) -> Result<String, ValidationError> {
    let email = require_text("email", email)?.to_lowercase();
    validation::validate_email(&email)?;
    Ok(email)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login input after validation
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<Credentials, ValidationError> {
        let email = normalized_email(self.email)?;
        let password = require("password", self.password)?;
        Ok(Credentials { email, password })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Health profile
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthProfileRequest {
    pub age: Option<i64>,
    pub biological_sex: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub experience_level: Option<String>,
    pub primary_goal: Option<String>,
}

impl HealthProfileRequest {
    /// Check presence, parse labels and validate ranges
    pub fn into_profile(self) -> Result<HealthProfile, ValidationError> {
        let age = require("age", self.age)?;
        let age = u32::try_from(age).map_err(|_| ValidationError::OutOfRange {
            field: "age",
            min: f64::from(validation::MIN_AGE),
            max: f64::from(validation::MAX_AGE),
        })?;

        let profile = HealthProfile {
            age,
            biological_sex: parse_label::<BiologicalSex>("biological_sex", self.biological_sex)?,
            height_cm: require("height_cm", self.height_cm)?,
            weight_kg: require("weight_kg", self.weight_kg)?,
            activity_level: parse_label::<ActivityLevel>("activity_level", self.activity_level)?,
            experience_level: parse_label::<ExperienceLevel>("experience_level", self.experience_level)?,
            primary_goal: parse_label::<PrimaryGoal>("primary_goal", self.primary_goal)?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub profile: HealthProfile,
    pub calculated: CalculatedMetrics,
    pub goal_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Workout plans
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    pub goal: Option<String>,
    pub experience_level: Option<String>,
    pub activity_level: Option<String>,
}

impl GeneratePlanRequest {
    pub fn into_inputs(self) -> Result<(PrimaryGoal, ExperienceLevel, ActivityLevel), ValidationError> {
        Ok((
            parse_label("goal", self.goal)?,
            parse_label("experience_level", self.experience_level)?,
            parse_label("activity_level", self.activity_level)?,
        ))
    }
}

/// A stored plan with its row id and generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub plan: WorkoutPlan,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Body measurements
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementRequest {
    pub measurement_date: Option<NaiveDate>,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub hips: Option<f64>,
    pub arms: Option<f64>,
    pub thighs: Option<f64>,
}

impl MeasurementRequest {
    pub fn into_measurement(self) -> Result<BodyMeasurement, ValidationError> {
        let girth = |field: &'static str, value: Option<f64>| -> Result<f64, ValidationError> {
            let value = require(field, value)?;
            validation::validate_girth_cm(field, value)?;
            Ok(value)
        };

        Ok(BodyMeasurement {
            measurement_date: require("measurement_date", self.measurement_date)?,
            waist: girth("waist", self.waist)?,
            chest: girth("chest", self.chest)?,
            hips: girth("hips", self.hips)?,
            arms: girth("arms", self.arms)?,
            thighs: girth("thighs", self.thighs)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub measurement: BodyMeasurement,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Weekly progress
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressLogRequest {
    pub week_start_date: Option<NaiveDate>,
    pub workout_status: Option<String>,
    pub diet_status: Option<String>,
    pub weight: Option<f64>,
}

impl ProgressLogRequest {
    pub fn into_log(self) -> Result<ProgressLog, ValidationError> {
        let weight = require("weight", self.weight)?;
        validation::validate_weight_kg(weight)?;

        Ok(ProgressLog {
            week_start_date: require("week_start_date", self.week_start_date)?,
            workout_status: parse_label::<WorkoutStatus>("workout_status", self.workout_status)?,
            diet_status: parse_label::<DietStatus>("diet_status", self.diet_status)?,
            weight,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressLogResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub log: ProgressLog,
    pub created_at: DateTime<Utc>,
}
