//! Health metrics calculations module
//!
//! Turns a submitted health profile into BMI, BMR, maintenance calories and a
//! goal-adjusted daily calorie target.
//!
//! # Precision
//!
//! BMI is rounded to 2 decimal places and the category is judged on that
//! rounded value, so the number shown to the user always agrees with its
//! label. Calorie figures are whole kilocalories: maintenance is rounded once,
//! and the goal adjustment and safety floor are applied to the rounded value.

use crate::errors::ValidationError;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Label parsing
// ============================================================================

/// Reduce a user-facing label to a comparison key.
///
/// "Very Active", "very_active", "veryActive" and "VERY-ACTIVE" all map to
/// "veryactive".
pub(crate) fn label_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Lowest daily calorie target the calculator will recommend
    pub fn minimum_calories(&self) -> i32 {
        match self {
            BiologicalSex::Male => 1500,
            BiologicalSex::Female => 1200,
        }
    }

    /// Sex-specific constant of the Mifflin-St Jeor equation
    fn bmr_offset(&self) -> f64 {
        match self {
            BiologicalSex::Male => 5.0,
            BiologicalSex::Female => -161.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(ValidationError::Unrecognized {
                field: "biological_sex",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Factor scaling BMR to total daily energy expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Ok(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryactive" | "extraactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(ValidationError::Unrecognized {
                field: "activity_level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training experience, drives workout volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(ValidationError::Unrecognized {
                field: "experience_level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryGoal {
    Loss,
    Gain,
    Recomp,
    Maintain,
    Endurance,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 5] = [
        PrimaryGoal::Loss,
        PrimaryGoal::Gain,
        PrimaryGoal::Recomp,
        PrimaryGoal::Maintain,
        PrimaryGoal::Endurance,
    ];

    /// Daily kcal added to maintenance for this goal
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            PrimaryGoal::Loss => -500,
            PrimaryGoal::Gain => 300,
            PrimaryGoal::Recomp => -200,
            PrimaryGoal::Maintain => 0,
            PrimaryGoal::Endurance => 200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::Loss => "loss",
            PrimaryGoal::Gain => "gain",
            PrimaryGoal::Recomp => "recomp",
            PrimaryGoal::Maintain => "maintain",
            PrimaryGoal::Endurance => "endurance",
        }
    }

    /// Display label shown next to the calorie target
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::Loss => "Weight Loss",
            PrimaryGoal::Gain => "Muscle Gain",
            PrimaryGoal::Recomp => "Body Recomposition",
            PrimaryGoal::Maintain => "Maintenance",
            PrimaryGoal::Endurance => "Endurance Training",
        }
    }
}

impl FromStr for PrimaryGoal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "loss" | "weightloss" => Ok(PrimaryGoal::Loss),
            "gain" | "musclegain" => Ok(PrimaryGoal::Gain),
            "recomp" | "bodyrecomposition" => Ok(PrimaryGoal::Recomp),
            "maintain" | "maintenance" => Ok(PrimaryGoal::Maintain),
            "endurance" | "endurancetraining" | "improveendurance" => Ok(PrimaryGoal::Endurance),
            _ => Err(ValidationError::Unrecognized {
                field: "primary_goal",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometrics and preferences submitted on the intake form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    pub biological_sex: BiologicalSex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub experience_level: ExperienceLevel,
    pub primary_goal: PrimaryGoal,
}

impl HealthProfile {
    /// Check every numeric field against its allowed range
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_age(self.age)?;
        validation::validate_height_cm(self.height_cm)?;
        validation::validate_weight_kg(self.weight_kg)?;
        Ok(())
    }
}

// ============================================================================
// BMI
// ============================================================================

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_OVERWEIGHT_FROM: f64 = 25.0;
pub const BMI_OBESE_FROM: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open BMI range `[low, high)` covered by this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, BMI_UNDERWEIGHT_BELOW),
            BmiCategory::Normal => (BMI_UNDERWEIGHT_BELOW, BMI_OVERWEIGHT_FROM),
            BmiCategory::Overweight => (BMI_OVERWEIGHT_FROM, BMI_OBESE_FROM),
            BmiCategory::Obese => (BMI_OBESE_FROM, f64::INFINITY),
        }
    }
}

/// BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and calorie targets
// ============================================================================

/// Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age: u32, sex: BiologicalSex) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex.bmr_offset()
}

/// Maintenance calories, rounded to the nearest kcal
pub fn maintenance_calories(bmr: f64, activity_level: ActivityLevel) -> i32 {
    (bmr * activity_level.multiplier()).round() as i32
}

/// Goal-adjusted target and whether the safety floor raised it
pub fn target_calories(maintenance: i32, goal: PrimaryGoal, sex: BiologicalSex) -> (i32, bool) {
    let raw = maintenance + goal.calorie_adjustment();
    let floor = sex.minimum_calories();
    if raw < floor {
        (floor, true)
    } else {
        (raw, false)
    }
}

/// Metrics derived from a health profile; never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub maintenance_calories: i32,
    pub goal_adjustment: i32,
    pub target_calories: i32,
    pub minimum_calories: i32,
    pub was_floor_applied: bool,
}

/// Compute all derived metrics for a profile.
///
/// The profile is expected to have passed [`HealthProfile::validate`].
pub fn compute_metrics(profile: &HealthProfile) -> CalculatedMetrics {
    let bmi = round2(calculate_bmi(profile.weight_kg, profile.height_cm));
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.biological_sex,
    );
    let maintenance = maintenance_calories(bmr, profile.activity_level);
    let (target, was_floor_applied) =
        target_calories(maintenance, profile.primary_goal, profile.biological_sex);

    CalculatedMetrics {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr: round2(bmr),
        activity_multiplier: profile.activity_level.multiplier(),
        maintenance_calories: maintenance,
        goal_adjustment: profile.primary_goal.calorie_adjustment(),
        target_calories: target,
        minimum_calories: profile.biological_sex.minimum_calories(),
        was_floor_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn male_profile() -> HealthProfile {
        HealthProfile {
            age: 25,
            biological_sex: BiologicalSex::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Moderate,
            experience_level: ExperienceLevel::Beginner,
            primary_goal: PrimaryGoal::Loss,
        }
    }

    // =========================================================================
    // BMI
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.857).abs() < 0.001);
        assert_eq!(round2(bmi), 22.86);
    }

    #[rstest]
    #[case(16.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.99, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(42.0, BmiCategory::Obese)]
    fn test_bmi_categories(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_category_judged_on_rounded_bmi() {
        // 24.996 displays as 25.0 and must be labelled Overweight
        let height_cm = 100.0;
        let metrics = compute_metrics(&HealthProfile {
            height_cm,
            weight_kg: 24.996,
            ..male_profile()
        });
        assert_eq!(metrics.bmi, 25.0);
        assert_eq!(metrics.bmi_category, BmiCategory::Overweight);
    }

    // =========================================================================
    // BMR and calories
    // =========================================================================

    #[test]
    fn test_male_moderate_weight_loss() {
        let profile = male_profile();
        let bmr = calculate_bmr_mifflin(70.0, 175.0, 25, BiologicalSex::Male);
        assert_eq!(bmr, 1673.75);

        let metrics = compute_metrics(&profile);
        assert_eq!(metrics.bmi, 22.86);
        assert_eq!(metrics.bmi_category, BmiCategory::Normal);
        assert_eq!(metrics.bmr, 1673.75);
        assert_eq!(metrics.maintenance_calories, 2594);
        assert_eq!(metrics.target_calories, 2094);
        assert_eq!(metrics.goal_adjustment, -500);
        assert!(!metrics.was_floor_applied);
    }

    #[test]
    fn test_female_floor_applied() {
        let profile = HealthProfile {
            age: 30,
            biological_sex: BiologicalSex::Female,
            height_cm: 160.0,
            weight_kg: 45.0,
            activity_level: ActivityLevel::Sedentary,
            experience_level: ExperienceLevel::Beginner,
            primary_goal: PrimaryGoal::Loss,
        };
        let metrics = compute_metrics(&profile);
        assert_eq!(metrics.bmr, 1139.0);
        assert_eq!(metrics.maintenance_calories, 1367);
        assert_eq!(metrics.target_calories, 1200);
        assert_eq!(metrics.minimum_calories, 1200);
        assert!(metrics.was_floor_applied);
    }

    #[rstest]
    #[case(PrimaryGoal::Loss, 2094)]
    #[case(PrimaryGoal::Gain, 2894)]
    #[case(PrimaryGoal::Recomp, 2394)]
    #[case(PrimaryGoal::Maintain, 2594)]
    #[case(PrimaryGoal::Endurance, 2794)]
    fn test_goal_adjustments(#[case] goal: PrimaryGoal, #[case] expected: i32) {
        let metrics = compute_metrics(&HealthProfile {
            primary_goal: goal,
            ..male_profile()
        });
        assert_eq!(metrics.target_calories, expected);
    }

    #[test]
    fn test_floor_not_applied_at_exact_floor() {
        assert_eq!(target_calories(2000, PrimaryGoal::Loss, BiologicalSex::Male), (1500, false));
        assert_eq!(target_calories(1999, PrimaryGoal::Loss, BiologicalSex::Male), (1500, true));
    }

    #[test]
    fn test_compute_metrics_is_repeatable() {
        let profile = male_profile();
        assert_eq!(compute_metrics(&profile), compute_metrics(&profile));
    }

    // =========================================================================
    // Label parsing
    // =========================================================================

    #[rstest]
    #[case("very_active", ActivityLevel::VeryActive)]
    #[case("Very Active", ActivityLevel::VeryActive)]
    #[case("veryActive", ActivityLevel::VeryActive)]
    #[case("Sedentary", ActivityLevel::Sedentary)]
    #[case("light", ActivityLevel::Light)]
    #[case("Moderate", ActivityLevel::Moderate)]
    #[case("active", ActivityLevel::Active)]
    fn test_activity_level_labels(#[case] raw: &str, #[case] expected: ActivityLevel) {
        assert_eq!(raw.parse::<ActivityLevel>().unwrap(), expected);
    }

    #[rstest]
    #[case("Weight Loss", PrimaryGoal::Loss)]
    #[case("Muscle Gain", PrimaryGoal::Gain)]
    #[case("recomp", PrimaryGoal::Recomp)]
    #[case("Maintenance", PrimaryGoal::Maintain)]
    #[case("endurance", PrimaryGoal::Endurance)]
    fn test_goal_labels(#[case] raw: &str, #[case] expected: PrimaryGoal) {
        assert_eq!(raw.parse::<PrimaryGoal>().unwrap(), expected);
    }

    #[test]
    fn test_unrecognized_labels_rejected() {
        assert!("couch".parse::<ActivityLevel>().is_err());
        assert!("expert".parse::<ExperienceLevel>().is_err());
        assert!("".parse::<BiologicalSex>().is_err());
        assert_eq!("Male".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
        }
        for goal in PrimaryGoal::ALL {
            assert_eq!(goal.to_string().parse::<PrimaryGoal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ActivityLevel::VeryActive).unwrap(), "\"very_active\"");
        assert_eq!(serde_json::to_string(&BmiCategory::Normal).unwrap(), "\"Normal\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: heavier weight gives a higher BMI at the same height
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 20.0f64..100.0,
            weight2 in 100.0f64..500.0,
            height in 50.0f64..300.0
        ) {
            prop_assert!(calculate_bmi(weight2, height) > calculate_bmi(weight1, height));
        }

        /// Property: male BMR exceeds female BMR by exactly 166 kcal
        #[test]
        fn prop_male_female_bmr_gap(
            weight in 20.0f64..500.0,
            height in 50.0f64..300.0,
            age in 10u32..=100
        ) {
            let male = calculate_bmr_mifflin(weight, height, age, BiologicalSex::Male);
            let female = calculate_bmr_mifflin(weight, height, age, BiologicalSex::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-6);
        }

        /// Property: the target never drops below the sex-specific floor
        #[test]
        fn prop_target_respects_floor(
            weight in 20.0f64..500.0,
            height in 50.0f64..300.0,
            age in 10u32..=100,
            male in any::<bool>(),
            activity_idx in 0usize..5,
            goal_idx in 0usize..5
        ) {
            let sex = if male { BiologicalSex::Male } else { BiologicalSex::Female };
            let profile = HealthProfile {
                age,
                biological_sex: sex,
                height_cm: height,
                weight_kg: weight,
                activity_level: ActivityLevel::ALL[activity_idx],
                experience_level: ExperienceLevel::Intermediate,
                primary_goal: PrimaryGoal::ALL[goal_idx],
            };
            let metrics = compute_metrics(&profile);
            prop_assert!(metrics.target_calories >= sex.minimum_calories());
            prop_assert_eq!(
                metrics.was_floor_applied,
                metrics.maintenance_calories + metrics.goal_adjustment < sex.minimum_calories()
            );
        }
    }
}
