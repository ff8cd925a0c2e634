//! Weekly workout plan generation
//!
//! A plan is a fixed seven-day focus rotation. Each focus owns a constant,
//! ordered list of exercises with a form tip; experience level only changes
//! the set count, rep range and rest interval.

use crate::health_metrics::{ActivityLevel, ExperienceLevel, PrimaryGoal};
use serde::{Deserialize, Serialize};

/// Training focus of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutFocus {
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
    #[serde(rename = "Cardio & Core")]
    CardioCore,
    #[serde(rename = "Push Muscles")]
    Push,
    #[serde(rename = "Pull Muscles")]
    Pull,
    #[serde(rename = "Full Body")]
    FullBody,
    #[serde(rename = "Active Recovery")]
    ActiveRecovery,
}

/// Exercise entry of the static library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub tip: &'static str,
}

const fn ex(name: &'static str, tip: &'static str) -> ExerciseTemplate {
    ExerciseTemplate { name, tip }
}

const UPPER_BODY: [ExerciseTemplate; 3] = [
    ex("Push-ups", "Keep body straight and core tight."),
    ex("Bench Press", "Control the bar and avoid locking elbows."),
    ex("Shoulder Press", "Do not arch your lower back."),
];

const LOWER_BODY: [ExerciseTemplate; 3] = [
    ex("Squats", "Keep knees aligned with toes."),
    ex("Lunges", "Keep torso upright and step controlled."),
    ex("Leg Press", "Do not lock knees at the top."),
];

const CARDIO_CORE: [ExerciseTemplate; 3] = [
    ex("Plank", "Maintain neutral spine."),
    ex("Jump Rope", "Stay light on your feet."),
    ex("Mountain Climbers", "Keep hips low and core tight."),
];

const PUSH: [ExerciseTemplate; 3] = [
    ex("Chest Press", "Control the movement."),
    ex("Tricep Dips", "Keep elbows close to body."),
    ex("Incline Push-ups", "Maintain straight body alignment."),
];

const PULL: [ExerciseTemplate; 3] = [
    ex("Pull-ups", "Avoid swinging your body."),
    ex("Lat Pulldown", "Pull elbows down and back."),
    ex("Barbell Row", "Keep back flat."),
];

const FULL_BODY: [ExerciseTemplate; 3] = [
    ex("Deadlift", "Keep neutral spine and drive through heels."),
    ex("Burpees", "Land softly and control breathing."),
    ex("Kettlebell Swings", "Use hips, not arms."),
];

const ACTIVE_RECOVERY: [ExerciseTemplate; 3] = [
    ex("Walking", "Maintain steady breathing."),
    ex("Stretching", "Hold each stretch 20-30 sec."),
    ex("Yoga", "Focus on slow breathing."),
];

/// Monday through Sunday
pub const WEEKLY_ROTATION: [(&str, WorkoutFocus); 7] = [
    ("Monday", WorkoutFocus::UpperBody),
    ("Tuesday", WorkoutFocus::LowerBody),
    ("Wednesday", WorkoutFocus::CardioCore),
    ("Thursday", WorkoutFocus::Push),
    ("Friday", WorkoutFocus::Pull),
    ("Saturday", WorkoutFocus::FullBody),
    ("Sunday", WorkoutFocus::ActiveRecovery),
];

const RECOVERY_DURATION: &str = "20-30 minutes";
const RECOVERY_REST: &str = "N/A";
const PLANK_HOLD: &str = "30-45 sec";

impl WorkoutFocus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutFocus::UpperBody => "Upper Body",
            WorkoutFocus::LowerBody => "Lower Body",
            WorkoutFocus::CardioCore => "Cardio & Core",
            WorkoutFocus::Push => "Push Muscles",
            WorkoutFocus::Pull => "Pull Muscles",
            WorkoutFocus::FullBody => "Full Body",
            WorkoutFocus::ActiveRecovery => "Active Recovery",
        }
    }

    pub fn exercises(&self) -> &'static [ExerciseTemplate] {
        match self {
            WorkoutFocus::UpperBody => &UPPER_BODY,
            WorkoutFocus::LowerBody => &LOWER_BODY,
            WorkoutFocus::CardioCore => &CARDIO_CORE,
            WorkoutFocus::Push => &PUSH,
            WorkoutFocus::Pull => &PULL,
            WorkoutFocus::FullBody => &FULL_BODY,
            WorkoutFocus::ActiveRecovery => &ACTIVE_RECOVERY,
        }
    }
}

/// Sets, reps and rest for one experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingVolume {
    pub sets: u8,
    pub reps: &'static str,
    pub rest: &'static str,
}

impl ExperienceLevel {
    pub fn volume(&self) -> TrainingVolume {
        match self {
            ExperienceLevel::Beginner => TrainingVolume { sets: 2, reps: "12-15", rest: "90 sec" },
            ExperienceLevel::Intermediate => TrainingVolume { sets: 3, reps: "8-12", rest: "60 sec" },
            ExperienceLevel::Advanced => TrainingVolume { sets: 4, reps: "6-10", rest: "45 sec" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise_name: String,
    pub sets_reps: String,
    pub rest_interval: String,
    pub form_guidance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub focus: WorkoutFocus,
    pub exercises: Vec<PlannedExercise>,
}

/// Legend describing how volume scales with experience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRule {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
}

impl Default for ProgressionRule {
    fn default() -> Self {
        Self {
            beginner: "Lower volume (2 sets)".to_string(),
            intermediate: "Moderate volume (3 sets)".to_string(),
            advanced: "Higher volume (4 sets)".to_string(),
        }
    }
}

/// A generated week of training. Stored as an opaque JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub goal: PrimaryGoal,
    pub experience_level: ExperienceLevel,
    pub activity_level: ActivityLevel,
    pub progression_rule: ProgressionRule,
    pub weekly_plan: Vec<DayPlan>,
}

fn plan_exercise(focus: WorkoutFocus, template: &ExerciseTemplate, volume: TrainingVolume) -> PlannedExercise {
    let (sets_reps, rest) = match focus {
        WorkoutFocus::ActiveRecovery => (RECOVERY_DURATION.to_string(), RECOVERY_REST),
        WorkoutFocus::CardioCore if template.name == "Plank" => {
            (format!("{} × {}", volume.sets, PLANK_HOLD), volume.rest)
        }
        _ => (format!("{} × {}", volume.sets, volume.reps), volume.rest),
    };

    PlannedExercise {
        exercise_name: template.name.to_string(),
        sets_reps,
        rest_interval: rest.to_string(),
        form_guidance: template.tip.to_string(),
    }
}

/// Build the seven-day plan for the given goal and levels
pub fn generate_plan(
    goal: PrimaryGoal,
    experience_level: ExperienceLevel,
    activity_level: ActivityLevel,
) -> WorkoutPlan {
    let volume = experience_level.volume();

    let weekly_plan = WEEKLY_ROTATION
        .iter()
        .map(|&(day, focus)| DayPlan {
            day: day.to_string(),
            focus,
            exercises: focus
                .exercises()
                .iter()
                .map(|template| plan_exercise(focus, template, volume))
                .collect(),
        })
        .collect();

    WorkoutPlan {
        goal,
        experience_level,
        activity_level,
        progression_rule: ProgressionRule::default(),
        weekly_plan,
    }
}
