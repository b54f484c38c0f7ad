//! Per-domain generation: prompt, generate, extract, parse, or fall back.
//!
//! Every public operation is total. Failures at any stage are logged and
//! counted, then replaced by the deterministic plan from [`crate::fallback`].

use std::sync::Arc;

use gemini_client::{Config, GeminiClient, GenerationClient, GenerationError};
use tracing::{debug, error, info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::extract::extract_json;
use crate::fallback::{fallback_diet, fallback_running_plan, fallback_workout, fallback_yoga};
use crate::middleware::LoggingMiddleware;
use crate::parse::parse_plan;
use crate::prompts::{diet_prompt, running_plan_prompt, workout_prompt, yoga_prompt};
use crate::types::{
    DietPlan, DietRequest, Domain, Plan, PlanPayload, PlanRequest, RunningPlan,
    RunningPlanRequest, WorkoutPlan, WorkoutRequest, YogaPlan, YogaRequest,
};

/// Stage at which a call left the generation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FallbackReason {
    ClientEmpty,
    ExtractFailed,
    ParseFailed,
}

impl FallbackReason {
    fn as_str(self) -> &'static str {
        match self {
            FallbackReason::ClientEmpty => "client_empty",
            FallbackReason::ExtractFailed => "extract_failed",
            FallbackReason::ParseFailed => "parse_failed",
        }
    }
}

impl From<&PlannerError> for FallbackReason {
    fn from(err: &PlannerError) -> Self {
        match err {
            PlannerError::Generation(_) => FallbackReason::ClientEmpty,
            PlannerError::Extraction(_) => FallbackReason::ExtractFailed,
            PlannerError::Parse(_) => FallbackReason::ParseFailed,
        }
    }
}

/// Terminal state of one orchestration call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Succeeded,
    FallenBack(FallbackReason),
}

fn record_outcome(domain: Domain, outcome: Outcome) {
    match outcome {
        Outcome::Succeeded => metrics::counter!(
            "plan_generation_total",
            "domain" => domain.as_str(),
            "outcome" => "generated"
        )
        .increment(1),
        Outcome::FallenBack(reason) => metrics::counter!(
            "plan_generation_total",
            "domain" => domain.as_str(),
            "outcome" => "fallback",
            "reason" => reason.as_str()
        )
        .increment(1),
    }
}

/// Generates plans for all four domains through one [`GenerationClient`].
///
/// Cheap to clone; clones share the client. Holds no mutable state, so any
/// number of calls may run concurrently.
#[derive(Clone)]
pub struct PlanGenerator {
    client: Arc<dyn GenerationClient>,
}

impl PlanGenerator {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Build a Gemini-backed generator with call logging.
    pub fn from_config(config: Config) -> Result<Self, GenerationError> {
        let client = GeminiClient::new(config)?;
        Ok(Self::new(Arc::new(LoggingMiddleware::new(client))))
    }

    pub fn from_env() -> Result<Self, GenerationError> {
        Self::from_config(Config::from_env()?)
    }

    pub async fn generate_workout(&self, request: &WorkoutRequest) -> WorkoutPlan {
        info!(
            target_muscle = %request.target_muscle,
            duration = request.duration_in_minutes,
            fitness_level = %request.fitness_level,
            "Generating workout"
        );
        self.resolve(workout_prompt(request), || fallback_workout(request))
            .await
            .0
    }

    pub async fn generate_diet(&self, request: &DietRequest) -> DietPlan {
        info!(
            preference = %request.dietary_preference,
            goal = %request.fitness_goal,
            calories = request.daily_calories,
            allergies = %request.allergies,
            "Generating diet"
        );
        self.resolve(diet_prompt(request), || fallback_diet(request))
            .await
            .0
    }

    pub async fn generate_yoga_plan(&self, request: &YogaRequest) -> YogaPlan {
        info!(
            goal = %request.goal,
            duration = request.duration_in_minutes,
            "Generating yoga plan"
        );
        self.resolve(yoga_prompt(request), || fallback_yoga(request))
            .await
            .0
    }

    pub async fn generate_running_plan(&self, request: &RunningPlanRequest) -> RunningPlan {
        info!(
            goal = %request.goal,
            timeframe = %request.timeframe,
            level = %request.fitness_level,
            "Generating running plan"
        );
        self.resolve(running_plan_prompt(request), || {
            fallback_running_plan(request)
        })
        .await
        .0
    }

    /// Generate a plan for any domain. The returned variant always matches
    /// the request's.
    pub async fn generate(&self, request: &PlanRequest) -> Plan {
        match request {
            PlanRequest::Workout(r) => Plan::Workout(self.generate_workout(r).await),
            PlanRequest::Diet(r) => Plan::Diet(self.generate_diet(r).await),
            PlanRequest::Yoga(r) => Plan::Yoga(self.generate_yoga_plan(r).await),
            PlanRequest::RunningPlan(r) => {
                Plan::RunningPlan(self.generate_running_plan(r).await)
            }
        }
    }

    /// Client, extraction and parsing as one fallible chain.
    async fn attempt<P: PlanPayload>(&self, prompt: &str) -> PlannerResult<P> {
        let text = self.client.generate(prompt).await?;
        debug!(domain = %P::DOMAIN, raw = %text, "Generated text received");
        let json = extract_json(&text)?;
        Ok(parse_plan::<P>(&json)?)
    }

    pub(crate) async fn resolve<P, F>(&self, prompt: String, fallback: F) -> (P, Outcome)
    where
        P: PlanPayload,
        F: FnOnce() -> P,
    {
        let domain = P::DOMAIN;
        debug!(%domain, %prompt, "Prompt built");

        let (plan, outcome) = match self.attempt::<P>(&prompt).await {
            Ok(plan) => {
                info!(
                    %domain,
                    "Generated {} ({} {}) via generation service",
                    domain,
                    plan.item_count(),
                    P::ITEMS
                );
                (plan, Outcome::Succeeded)
            }
            Err(err) => {
                match &err {
                    PlannerError::Generation(e) if e.is_config() => {
                        warn!(%domain, error = %e, "Generation service not configured")
                    }
                    PlannerError::Generation(e) => {
                        error!(%domain, error = %e, "Generation service returned no result")
                    }
                    other => warn!(%domain, error = %other, "Failed to use generated {} JSON", domain),
                }
                warn!(%domain, "Falling back to rule-based {} plan", domain);
                (fallback(), Outcome::FallenBack(FallbackReason::from(&err)))
            }
        };
        record_outcome(domain, outcome);
        (plan, outcome)
    }
}
