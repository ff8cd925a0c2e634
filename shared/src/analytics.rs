//! Progress and body measurement analytics
//!
//! Both summaries expect their input ordered oldest first and report figures
//! rounded to 2 decimal places.

use crate::errors::ValidationError;
use crate::health_metrics::{label_key, round2};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of weekly logs the progress summary looks at
pub const PROGRESS_WINDOW_WEEKS: usize = 12;

pub const NO_PROGRESS_MESSAGE: &str = "No progress data found";

// ============================================================================
// Weekly progress
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutStatus {
    Completed,
    Partial,
    Missed,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Completed => "Completed",
            WorkoutStatus::Partial => "Partial",
            WorkoutStatus::Missed => "Missed",
        }
    }
}

impl FromStr for WorkoutStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "completed" => Ok(WorkoutStatus::Completed),
            "partial" => Ok(WorkoutStatus::Partial),
            "missed" => Ok(WorkoutStatus::Missed),
            _ => Err(ValidationError::Unrecognized {
                field: "workout_status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietStatus {
    Followed,
    Mostly,
    Skipped,
}

impl DietStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietStatus::Followed => "Followed",
            DietStatus::Mostly => "Mostly",
            DietStatus::Skipped => "Skipped",
        }
    }
}

impl FromStr for DietStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "followed" => Ok(DietStatus::Followed),
            "mostly" => Ok(DietStatus::Mostly),
            "skipped" => Ok(DietStatus::Skipped),
            _ => Err(ValidationError::Unrecognized {
                field: "diet_status",
                value: s.to_string(),
            }),
        }
    }
}

/// One week of self-reported adherence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    pub week_start_date: NaiveDate,
    pub workout_status: WorkoutStatus,
    pub diet_status: DietStatus,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub week: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub total_weeks: usize,
    pub weight_trend: Vec<WeightPoint>,
    pub workout_completion_percent: f64,
    pub diet_adherence_percent: f64,
}

/// Progress summary, or an explicit "no data" marker for an empty history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressSummary {
    NoData { message: String },
    Report(ProgressReport),
}

/// Full credit for `full`, half credit for `half`, as a percentage of `total`
fn half_credit_percent(full: usize, half: usize, total: usize) -> f64 {
    round2((full as f64 + 0.5 * half as f64) / total as f64 * 100.0)
}

pub fn summarize_progress(logs: &[ProgressLog]) -> ProgressSummary {
    if logs.is_empty() {
        return ProgressSummary::NoData {
            message: NO_PROGRESS_MESSAGE.to_string(),
        };
    }

    let total = logs.len();
    let count_workout = |status: WorkoutStatus| logs.iter().filter(|l| l.workout_status == status).count();
    let count_diet = |status: DietStatus| logs.iter().filter(|l| l.diet_status == status).count();

    ProgressSummary::Report(ProgressReport {
        total_weeks: total,
        weight_trend: logs
            .iter()
            .map(|l| WeightPoint {
                week: l.week_start_date,
                weight: l.weight,
            })
            .collect(),
        workout_completion_percent: half_credit_percent(
            count_workout(WorkoutStatus::Completed),
            count_workout(WorkoutStatus::Partial),
            total,
        ),
        diet_adherence_percent: half_credit_percent(
            count_diet(DietStatus::Followed),
            count_diet(DietStatus::Mostly),
            total,
        ),
    })
}

// ============================================================================
// Body measurements
// ============================================================================

/// Girths in centimeters recorded on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    pub measurement_date: NaiveDate,
    pub waist: f64,
    pub chest: f64,
    pub hips: f64,
    pub arms: f64,
    pub thighs: f64,
}

/// Per-field difference between two measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementChange {
    pub waist: f64,
    pub chest: f64,
    pub hips: f64,
    pub arms: f64,
    pub thighs: f64,
}

impl MeasurementChange {
    pub fn between(first: &BodyMeasurement, latest: &BodyMeasurement) -> Self {
        Self {
            waist: round2(latest.waist - first.waist),
            chest: round2(latest.chest - first.chest),
            hips: round2(latest.hips - first.hips),
            arms: round2(latest.arms - first.arms),
            thighs: round2(latest.thighs - first.thighs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSummary {
    pub total_records: usize,
    pub change_since_start: MeasurementChange,
    pub series: Vec<BodyMeasurement>,
}

/// Summarize a date-ordered series; `None` when there is nothing to report
pub fn summarize_measurements(series: &[BodyMeasurement]) -> Option<MeasurementSummary> {
    let (first, latest) = (series.first()?, series.last()?);

    Some(MeasurementSummary {
        total_records: series.len(),
        change_since_start: MeasurementChange::between(first, latest),
        series: series.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn week(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::weeks(i64::from(n))
    }

    fn log(n: u32, workout: WorkoutStatus, diet: DietStatus, weight: f64) -> ProgressLog {
        ProgressLog {
            week_start_date: week(n),
            workout_status: workout,
            diet_status: diet,
            weight,
        }
    }

    fn measurement(n: u32, waist: f64, chest: f64) -> BodyMeasurement {
        BodyMeasurement {
            measurement_date: week(n),
            waist,
            chest,
            hips: 98.0,
            arms: 32.0,
            thighs: 55.0,
        }
    }

    #[test]
    fn test_empty_progress_reports_no_data() {
        let summary = summarize_progress(&[]);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({ "message": "No progress data found" })
        );
    }

    #[test]
    fn test_completed_and_partial_average_to_75() {
        let logs = [
            log(0, WorkoutStatus::Completed, DietStatus::Followed, 80.0),
            log(1, WorkoutStatus::Partial, DietStatus::Skipped, 79.4),
        ];
        let ProgressSummary::Report(report) = summarize_progress(&logs) else {
            panic!("expected a report");
        };
        assert_eq!(report.total_weeks, 2);
        assert_eq!(report.workout_completion_percent, 75.0);
        assert_eq!(report.diet_adherence_percent, 50.0);
        assert_eq!(report.weight_trend[0], WeightPoint { week: week(0), weight: 80.0 });
        assert_eq!(report.weight_trend[1].weight, 79.4);
    }

    #[test]
    fn test_percentages_round_to_two_places() {
        let logs = [
            log(0, WorkoutStatus::Completed, DietStatus::Mostly, 70.0),
            log(1, WorkoutStatus::Missed, DietStatus::Skipped, 70.0),
            log(2, WorkoutStatus::Missed, DietStatus::Skipped, 70.0),
        ];
        let ProgressSummary::Report(report) = summarize_progress(&logs) else {
            panic!("expected a report");
        };
        assert_eq!(report.workout_completion_percent, 33.33);
        assert_eq!(report.diet_adherence_percent, 16.67);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!("completed".parse::<WorkoutStatus>().unwrap(), WorkoutStatus::Completed);
        assert_eq!("Mostly".parse::<DietStatus>().unwrap(), DietStatus::Mostly);
        assert!("sometimes".parse::<DietStatus>().is_err());
    }

    #[test]
    fn test_empty_measurements_is_none() {
        assert!(summarize_measurements(&[]).is_none());
    }

    #[test]
    fn test_measurement_change_since_start() {
        let series = [
            measurement(0, 90.0, 100.0),
            measurement(1, 88.7, 100.5),
            measurement(2, 86.9, 101.2),
        ];
        let summary = summarize_measurements(&series).unwrap();
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.change_since_start.waist, -3.1);
        assert_eq!(summary.change_since_start.chest, 1.2);
        assert_eq!(summary.change_since_start.hips, 0.0);
        assert_eq!(summary.series, series.to_vec());
    }

    #[test]
    fn test_single_measurement_has_zero_change() {
        let summary = summarize_measurements(&[measurement(0, 80.0, 95.0)]).unwrap();
        assert_eq!(summary.total_records, 1);
        assert_eq!(summary.change_since_start.waist, 0.0);
    }

    fn workout_status() -> impl Strategy<Value = WorkoutStatus> {
        prop_oneof![
            Just(WorkoutStatus::Completed),
            Just(WorkoutStatus::Partial),
            Just(WorkoutStatus::Missed),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: completion is always a percentage and the trend keeps input order
        #[test]
        fn prop_completion_bounded(
            statuses in prop::collection::vec(workout_status(), 1..=PROGRESS_WINDOW_WEEKS)
        ) {
            let logs: Vec<ProgressLog> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| log(i as u32, *s, DietStatus::Followed, 70.0 + i as f64))
                .collect();
            let ProgressSummary::Report(report) = summarize_progress(&logs) else {
                panic!("expected a report");
            };
            prop_assert!(report.workout_completion_percent >= 0.0);
            prop_assert!(report.workout_completion_percent <= 100.0);
            prop_assert_eq!(report.diet_adherence_percent, 100.0);
            let weeks: Vec<NaiveDate> = report.weight_trend.iter().map(|p| p.week).collect();
            let expected: Vec<NaiveDate> = logs.iter().map(|l| l.week_start_date).collect();
            prop_assert_eq!(weeks, expected);
        }
    }
}
