use fitness_planner::{
    DietRequest, PlanGenerator, PlanRequest, RunningPlanRequest, WorkoutRequest, YogaRequest,
    init_tracing,
};

// Runs one request per domain. Without GEMINI_API_KEY every plan is the
// rule-based fallback.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let generator = PlanGenerator::from_env()?;

    let requests = [
        PlanRequest::Workout(WorkoutRequest {
            target_muscle: "chest".into(),
            duration_in_minutes: 30,
            fitness_level: "beginner".into(),
        }),
        PlanRequest::Diet(DietRequest {
            dietary_preference: "vegetarian".into(),
            fitness_goal: "muscle gain".into(),
            daily_calories: 2400,
            allergies: "none".into(),
        }),
        PlanRequest::Yoga(YogaRequest {
            goal: "Stress Relief".into(),
            duration_in_minutes: 20,
        }),
        PlanRequest::RunningPlan(RunningPlanRequest {
            goal: "Run a 10k".into(),
            timeframe: "6 weeks".into(),
            fitness_level: "intermediate".into(),
        }),
    ];

    for request in &requests {
        let plan = generator.generate(request).await;
        println!("== {} ==", request.domain());
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
