//! Fitness plan generation backed by a text-generation service.
//!
//! [`PlanGenerator`] turns a typed request into a prompt, asks a
//! [`GenerationClient`] for text, pulls the JSON object out of the reply and
//! binds it to the domain's plan type. Any failure along the way yields the
//! rule-based plan for the same request instead, so callers always get a plan.

pub mod error;
pub mod extract;
pub mod fallback;
pub mod middleware;
pub mod observability;
pub mod orchestrator;
pub mod parse;
pub mod prompts;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{ExtractionError, PlannerError, PlannerResult};
pub use gemini_client::{Config, GeminiClient, GenerationClient, GenerationError};
pub use middleware::LoggingMiddleware;
pub use observability::init_tracing;
pub use orchestrator::PlanGenerator;
pub use types::{
    DietPlan, DietRequest, Domain, Exercise, Meal, Plan, PlanPayload, PlanRequest, RunningPlan,
    RunningPlanRequest, RunningSession, RunningWeek, WorkoutPlan, WorkoutRequest, YogaPlan,
    YogaPose, YogaRequest,
};
