//! Request and response types for the four plan domains.
//!
//! Field names follow the JSON the web layer and the generation service use
//! (`camelCase`). Text fields also accept JSON numbers and integer fields also
//! accept numeric strings, since generated JSON mixes the two freely.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The four kinds of plan the pipeline produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    Workout,
    Diet,
    Yoga,
    RunningPlan,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Workout => "workout",
            Domain::Diet => "diet",
            Domain::Yoga => "yoga",
            Domain::RunningPlan => "runningPlan",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- requests ---

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    /// Muscle group to target, e.g. "chest", "back", "legs", "arms", "full body".
    pub target_muscle: String,
    pub duration_in_minutes: u32,
    /// "beginner", "intermediate" or "advanced".
    pub fitness_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietRequest {
    /// "vegetarian", "vegan", "keto" or anything else for a balanced plan.
    pub dietary_preference: String,
    pub fitness_goal: String,
    pub daily_calories: u32,
    pub allergies: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct YogaRequest {
    pub goal: String,
    pub duration_in_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunningPlanRequest {
    pub goal: String,
    /// Human readable, e.g. "8 weeks".
    pub timeframe: String,
    pub fitness_level: String,
}

/// A request for any of the four domains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "domain", rename_all = "camelCase")]
pub enum PlanRequest {
    Workout(WorkoutRequest),
    Diet(DietRequest),
    Yoga(YogaRequest),
    RunningPlan(RunningPlanRequest),
}

impl PlanRequest {
    pub fn domain(&self) -> Domain {
        match self {
            PlanRequest::Workout(_) => Domain::Workout,
            PlanRequest::Diet(_) => Domain::Diet,
            PlanRequest::Yoga(_) => Domain::Yoga,
            PlanRequest::RunningPlan(_) => Domain::RunningPlan,
        }
    }
}

// --- responses ---

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Exercise {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub sets: String,
    #[serde(deserialize_with = "string_or_number")]
    pub reps: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkoutPlan {
    pub exercises: Vec<Exercise>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Meal {
    pub name: String,
    pub ingredients: String,
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub calories: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DietPlan {
    pub meals: Vec<Meal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct YogaPose {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub hold: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct YogaPlan {
    pub poses: Vec<YogaPose>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunningSession {
    pub day: String,
    #[serde(rename = "type")]
    pub session_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub distance: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunningWeek {
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub week_number: u32,
    pub sessions: Vec<RunningSession>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunningPlan {
    pub weeks: Vec<RunningWeek>,
}

/// A generated plan for any of the four domains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Plan {
    Workout(WorkoutPlan),
    Diet(DietPlan),
    Yoga(YogaPlan),
    RunningPlan(RunningPlan),
}

impl Plan {
    pub fn domain(&self) -> Domain {
        match self {
            Plan::Workout(_) => Domain::Workout,
            Plan::Diet(_) => Domain::Diet,
            Plan::Yoga(_) => Domain::Yoga,
            Plan::RunningPlan(_) => Domain::RunningPlan,
        }
    }
}

/// Common surface of the four response types, used by the parser and the
/// orchestrator to stay generic over the domain.
pub trait PlanPayload: serde::de::DeserializeOwned + Send + 'static {
    const DOMAIN: Domain;
    /// Name of the top-level list, for log lines.
    const ITEMS: &'static str;

    fn item_count(&self) -> usize;
}

impl PlanPayload for WorkoutPlan {
    const DOMAIN: Domain = Domain::Workout;
    const ITEMS: &'static str = "exercises";

    fn item_count(&self) -> usize {
        self.exercises.len()
    }
}

impl PlanPayload for DietPlan {
    const DOMAIN: Domain = Domain::Diet;
    const ITEMS: &'static str = "meals";

    fn item_count(&self) -> usize {
        self.meals.len()
    }
}

impl PlanPayload for YogaPlan {
    const DOMAIN: Domain = Domain::Yoga;
    const ITEMS: &'static str = "poses";

    fn item_count(&self) -> usize {
        self.poses.len()
    }
}

impl PlanPayload for RunningPlan {
    const DOMAIN: Domain = Domain::RunningPlan;
    const ITEMS: &'static str = "weeks";

    fn item_count(&self) -> usize {
        self.weeks.len()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn integer_or_numeric_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        D::Error::custom(format!("expected non-negative integer, got {value}"))
    })
}
