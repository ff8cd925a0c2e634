//! Database repositories
//!
//! Data access layer. Each repository is a unit struct whose async
//! functions take the pool explicitly and return `anyhow::Result`.

pub mod health_profile;
pub mod measurement;
pub mod progress;
pub mod user;
pub mod workout_plan;

pub use health_profile::{HealthProfileRecord, HealthProfileRepository};
pub use measurement::{MeasurementRecord, MeasurementRepository};
pub use progress::{ProgressLogRecord, ProgressRepository};
pub use user::{CreateUser, UserRecord, UserRepository};
pub use workout_plan::{WorkoutPlanRecord, WorkoutPlanRepository};

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Convert a validated measurement into a NUMERIC bind value
pub(crate) fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::try_from(value).map_err(|e| anyhow::anyhow!("Cannot store {} as NUMERIC: {}", value, e))
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
