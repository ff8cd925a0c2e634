//! FitTrack WASM Module
//!
//! Browser bindings for the intake form: the same calculator and plan
//! generator the API uses, so the preview shown before submitting always
//! matches what the server stores.
//!
//! Every function takes and returns JSON text in the API envelope
//! `{ success, message?, data? }`.

use fittrack_shared::types::{ApiResponse, GeneratePlanRequest, HealthProfileRequest, HealthProfileResponse};
use fittrack_shared::{compute_metrics, generate_plan, ValidationError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn envelope<T: Serialize>(result: Result<T, ValidationError>) -> String {
    let json = match result {
        Ok(data) => serde_json::to_string(&ApiResponse::ok(data)),
        Err(err) => serde_json::to_string(&ApiResponse::<()> {
            success: false,
            message: Some(err.to_string()),
            data: None,
        }),
    };
    json.unwrap_or_else(|e| format!(r#"{{"success":false,"message":"{}"}}"#, e))
}

fn parse_request<R: serde::de::DeserializeOwned>(json: &str) -> Result<R, ValidationError> {
    serde_json::from_str(json).map_err(|e| ValidationError::Invalid(format!("Malformed request: {}", e)))
}

/// Calculate BMI, calorie targets and the safety floor for a profile
///
/// Input is the same JSON body accepted by `POST /api/v1/health-profile`.
#[wasm_bindgen(js_name = calculateHealthMetrics)]
pub fn calculate_health_metrics(profile_json: &str) -> String {
    envelope(
        parse_request::<HealthProfileRequest>(profile_json)
            .and_then(HealthProfileRequest::into_profile)
            .map(|profile| HealthProfileResponse {
                id: None,
                calculated: compute_metrics(&profile),
                goal_label: profile.primary_goal.label().to_string(),
                profile,
                created_at: None,
            }),
    )
}

/// Preview a weekly workout plan without saving it
#[wasm_bindgen(js_name = previewWorkoutPlan)]
pub fn preview_workout_plan(goal: &str, experience_level: &str, activity_level: &str) -> String {
    let request = GeneratePlanRequest {
        goal: Some(goal.to_string()),
        experience_level: Some(experience_level.to_string()),
        activity_level: Some(activity_level.to_string()),
    };
    envelope(
        request
            .into_inputs()
            .map(|(goal, experience, activity)| generate_plan(goal, experience, activity)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_calculate_health_metrics() {
        let result = parse(&calculate_health_metrics(
            r#"{"age":30,"biological_sex":"female","height_cm":160,"weight_kg":45,
                "activity_level":"sedentary","experience_level":"beginner","primary_goal":"loss"}"#,
        ));
        assert_eq!(result["success"], true);
        assert_eq!(result["data"]["calculated"]["target_calories"], 1200);
        assert_eq!(result["data"]["calculated"]["was_floor_applied"], true);
        assert_eq!(result["data"]["goal_label"], "Weight Loss");
    }

    #[test]
    fn test_calculate_rejects_missing_field() {
        let result = parse(&calculate_health_metrics(r#"{"age":30}"#));
        assert_eq!(result["success"], false);
        assert_eq!(result["message"], "biological_sex is required");
    }

    #[test]
    fn test_calculate_rejects_malformed_json() {
        let result = parse(&calculate_health_metrics("not json"));
        assert_eq!(result["success"], false);
    }

    #[test]
    fn test_preview_workout_plan() {
        let result = parse(&preview_workout_plan("gain", "intermediate", "active"));
        assert_eq!(result["success"], true);
        assert_eq!(result["data"]["weekly_plan"].as_array().unwrap().len(), 7);
        assert_eq!(result["data"]["weekly_plan"][0]["exercises"][0]["sets_reps"], "3 × 8-12");
    }
}
