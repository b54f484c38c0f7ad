//! Prompt text for each plan domain, with the JSON shape the reply must follow.

use crate::types::{DietRequest, PlanRequest, RunningPlanRequest, WorkoutRequest, YogaRequest};

pub fn workout_prompt(request: &WorkoutRequest) -> String {
    format!(
        "You are an expert fitness trainer. Create a personalized {}-minute workout routine targeting {} muscles for someone at {} fitness level.\n\
         Respond ONLY with valid JSON (no markdown, no code fences) in this exact format:\n\
         {{\"exercises\":[{{\"name\":\"...\",\"sets\":\"3\",\"reps\":\"10-12\",\"description\":\"...\"}}]}}\n\
         4-6 exercises. Progressive, safe, concise descriptions. No extra keys and no commentary.",
        request.duration_in_minutes, request.target_muscle, request.fitness_level
    )
}

pub fn diet_prompt(request: &DietRequest) -> String {
    format!(
        "You are a professional nutritionist. Build a one-day meal plan.\n\
         Preference: {} Goal: {} Calories: {} Allergies: {}\n\
         Respond ONLY with valid JSON (no markdown, no code fences) in this exact format:\n\
         {{\"meals\":[{{\"name\":\"...\",\"ingredients\":\"...\",\"calories\":450,\"description\":\"...\"}}]}}\n\
         Include breakfast, lunch, dinner and 1-2 snacks. Meal calories must sum close to {} calories. No extra keys and no commentary.",
        request.dietary_preference,
        request.fitness_goal,
        request.daily_calories,
        request.allergies,
        request.daily_calories
    )
}

pub fn yoga_prompt(request: &YogaRequest) -> String {
    format!(
        "You are a certified yoga instructor. Create a {}-minute yoga flow focused on the goal: {}.\n\
         Provide 6-10 sequential poses with mindful transitions. Keep pose names standard.\n\
         Respond ONLY with valid JSON (no markdown, no code fences) in this exact format:\n\
         {{\"poses\":[{{\"name\":\"Mountain Pose\",\"hold\":\"60 sec\",\"description\":\"Brief clear guidance\"}}]}}\n\
         Each pose requires: name, hold (seconds or breaths), description (succinct alignment and breathing cues). No extra keys and no commentary.",
        request.duration_in_minutes, request.goal
    )
}

pub fn running_plan_prompt(request: &RunningPlanRequest) -> String {
    format!(
        "You are an experienced running coach. Create a structured week-by-week running plan to achieve the goal: {} within {}.\n\
         Athlete level: {}.\n\
         Include variety: easy runs, long runs, interval and tempo work, recovery, and rest days.\n\
         Respond ONLY with valid JSON (no markdown, no code fences) in this exact format:\n\
         {{\"weeks\":[{{\"weekNumber\":1,\"sessions\":[{{\"day\":\"Mon\",\"type\":\"Easy Run\",\"distance\":\"3 km\",\"notes\":\"Conversational pace\"}}]}}]}}\n\
         Distance units concise (km). 5-7 sessions per week, include at least one rest day. No extra keys and no commentary outside the JSON.",
        request.goal, request.timeframe, request.fitness_level
    )
}

/// Prompt for any domain.
pub fn prompt_for(request: &PlanRequest) -> String {
    match request {
        PlanRequest::Workout(r) => workout_prompt(r),
        PlanRequest::Diet(r) => diet_prompt(r),
        PlanRequest::Yoga(r) => yoga_prompt(r),
        PlanRequest::RunningPlan(r) => running_plan_prompt(r),
    }
}
