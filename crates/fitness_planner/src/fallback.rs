//! Rule-based plans used whenever the generation path fails.
//!
//! Every function here is pure and total: the same request always yields the
//! same plan, and unrecognized categories route to an explicit default arm.

use crate::types::{
    DietPlan, DietRequest, Exercise, Meal, Plan, PlanRequest, RunningPlan, RunningPlanRequest,
    RunningSession, RunningWeek, WorkoutPlan, WorkoutRequest, YogaPlan, YogaPose, YogaRequest,
};

/// Weeks used when the timeframe has no leading positive number.
pub const DEFAULT_RUNNING_WEEKS: u32 = 4;
/// Easy-run distance in km for week one.
const BASE_EASY_KM: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Arms,
    /// Default for any unrecognized muscle name.
    FullBody,
}

impl MuscleGroup {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "chest" => MuscleGroup::Chest,
            "back" => MuscleGroup::Back,
            "legs" => MuscleGroup::Legs,
            "arms" => MuscleGroup::Arms,
            _ => MuscleGroup::FullBody,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// `None` for labels outside the three known levels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Some(FitnessLevel::Beginner),
            "intermediate" => Some(FitnessLevel::Intermediate),
            "advanced" => Some(FitnessLevel::Advanced),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    Keto,
    /// Default for any unrecognized preference.
    Balanced,
}

impl DietaryPreference {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "vegetarian" => DietaryPreference::Vegetarian,
            "vegan" => DietaryPreference::Vegan,
            "keto" => DietaryPreference::Keto,
            _ => DietaryPreference::Balanced,
        }
    }
}

fn exercise(name: &str, sets: &str, reps: &str, description: &str) -> Exercise {
    Exercise {
        name: name.into(),
        sets: sets.into(),
        reps: reps.into(),
        description: description.into(),
    }
}

fn meal(name: &str, ingredients: &str, calories: u32, description: &str) -> Meal {
    Meal {
        name: name.into(),
        ingredients: ingredients.into(),
        calories,
        description: description.into(),
    }
}

fn pose(name: &str, hold: &str, description: &str) -> YogaPose {
    YogaPose {
        name: name.into(),
        hold: hold.into(),
        description: description.into(),
    }
}

fn session(day: &str, session_type: &str, distance: String, notes: &str) -> RunningSession {
    RunningSession {
        day: day.into(),
        session_type: session_type.into(),
        distance,
        notes: notes.into(),
    }
}

pub fn fallback_workout(request: &WorkoutRequest) -> WorkoutPlan {
    let exercises = match MuscleGroup::from_label(&request.target_muscle) {
        MuscleGroup::Chest => chest_exercises(FitnessLevel::from_label(&request.fitness_level)),
        MuscleGroup::Back => back_exercises(),
        MuscleGroup::Legs => leg_exercises(),
        MuscleGroup::Arms => arm_exercises(),
        MuscleGroup::FullBody => full_body_exercises(),
    };
    WorkoutPlan { exercises }
}

fn chest_exercises(level: Option<FitnessLevel>) -> Vec<Exercise> {
    match level {
        Some(FitnessLevel::Beginner) => vec![
            exercise("Wall Push-ups", "3", "8-12", "Beginner-friendly chest exercise against wall"),
            exercise("Incline Push-ups", "3", "6-10", "Push-ups with hands elevated on bench"),
            exercise("Knee Push-ups", "3", "5-8", "Modified push-ups from knees"),
            exercise("Chest Squeeze", "3", "10-15", "Isometric chest contraction exercise"),
        ],
        Some(FitnessLevel::Intermediate) => vec![
            exercise("Standard Push-ups", "3", "10-15", "Classic bodyweight chest exercise"),
            exercise("Wide-Grip Push-ups", "3", "8-12", "Push-ups with wider hand placement"),
            exercise("Diamond Push-ups", "3", "6-10", "Push-ups with hands in diamond shape"),
            exercise("Decline Push-ups", "3", "8-12", "Push-ups with feet elevated"),
        ],
        // Unknown levels get the hardest set.
        Some(FitnessLevel::Advanced) | None => vec![
            exercise("One-Arm Push-ups", "3", "3-6", "Advanced single-arm push-up variation"),
            exercise("Archer Push-ups", "3", "5-8", "Single-sided push-up movement"),
            exercise("Explosive Push-ups", "4", "6-10", "Plyometric push-up with hand clap"),
            exercise("Hindu Push-ups", "3", "8-12", "Dynamic flowing push-up movement"),
        ],
    }
}

fn back_exercises() -> Vec<Exercise> {
    vec![
        exercise("Superman", "3", "10-15", "Lying back extension exercise"),
        exercise("Reverse Fly", "3", "12-15", "Rear deltoid and upper back exercise"),
        exercise("Bird Dog", "3", "10 each side", "Core and back stability exercise"),
        exercise("Good Mornings", "3", "12-15", "Hip hinge movement for lower back"),
    ]
}

fn leg_exercises() -> Vec<Exercise> {
    vec![
        exercise("Bodyweight Squats", "3", "12-20", "Basic lower body exercise"),
        exercise("Lunges", "3", "10 each leg", "Single-leg strength exercise"),
        exercise("Calf Raises", "3", "15-20", "Lower leg strengthening exercise"),
        exercise("Wall Sit", "3", "30-60 sec", "Isometric quad strengthening"),
    ]
}

fn arm_exercises() -> Vec<Exercise> {
    vec![
        exercise("Tricep Dips", "3", "8-12", "Bodyweight tricep exercise"),
        exercise("Pike Push-ups", "3", "6-10", "Shoulder and tricep focused exercise"),
        exercise("Arm Circles", "3", "15 each direction", "Shoulder mobility and strength"),
        exercise("Plank to Push-up", "3", "8-12", "Dynamic arm and core exercise"),
    ]
}

fn full_body_exercises() -> Vec<Exercise> {
    vec![
        exercise("Burpees", "3", "8-12", "Full body high-intensity exercise"),
        exercise("Mountain Climbers", "3", "20-30", "Dynamic full body cardio exercise"),
        exercise("Jumping Jacks", "3", "15-25", "Full body cardiovascular exercise"),
        exercise("Plank", "3", "30-60 sec", "Core stability exercise"),
    ]
}

pub fn fallback_diet(request: &DietRequest) -> DietPlan {
    let meals = match DietaryPreference::from_label(&request.dietary_preference) {
        DietaryPreference::Vegetarian => vec![
            meal("Veggie Protein Bowl", "Quinoa, black beans, avocado, spinach", 400, "High-protein vegetarian breakfast"),
            meal("Lentil Salad", "Green lentils, cucumber, tomato, feta", 350, "Protein-rich lunch option"),
            meal("Stuffed Bell Peppers", "Peppers, rice, cheese, herbs", 450, "Nutritious vegetarian dinner"),
            meal("Greek Yogurt with Nuts", "Greek yogurt, almonds, berries", 200, "Protein-packed snack"),
        ],
        DietaryPreference::Vegan => vec![
            meal("Chia Seed Pudding", "Chia seeds, almond milk, banana", 350, "Plant-based protein breakfast"),
            meal("Buddha Bowl", "Tofu, quinoa, kale, tahini dressing", 450, "Complete vegan lunch"),
            meal("Lentil Curry", "Red lentils, coconut milk, vegetables", 400, "Hearty vegan dinner"),
            meal("Hummus with Veggies", "Hummus, carrots, bell peppers", 180, "Plant-based snack"),
        ],
        DietaryPreference::Keto => vec![
            meal("Avocado Eggs", "Eggs, avocado, bacon, cheese", 450, "High-fat keto breakfast"),
            meal("Keto Caesar Salad", "Romaine, chicken, parmesan, keto dressing", 400, "Low-carb lunch"),
            meal("Salmon with Asparagus", "Salmon, asparagus, butter sauce", 500, "Keto-friendly dinner"),
            meal("Keto Fat Bombs", "Coconut oil, nuts, cocoa", 200, "High-fat keto snack"),
        ],
        DietaryPreference::Balanced => vec![
            meal("Balanced Breakfast", "Oatmeal, berries, protein powder, nuts", 350, "Well-rounded morning meal"),
            meal("Chicken Quinoa Bowl", "Grilled chicken, quinoa, mixed vegetables", 450, "Balanced lunch option"),
            meal("Lean Protein Dinner", "Fish, sweet potato, broccoli", 500, "Balanced evening meal"),
            meal("Mixed Nuts", "Almonds, walnuts, dried fruit", 200, "Healthy balanced snack"),
        ],
    };
    DietPlan { meals }
}

/// Fixed nine-pose flow; the request does not vary it.
pub fn fallback_yoga(_request: &YogaRequest) -> YogaPlan {
    YogaPlan {
        poses: vec![
            pose("Centering Breath", "60 sec", "Seated or standing, deepen breathing to settle"),
            pose("Cat-Cow", "6 breaths", "Alternate spinal flexion/extension with inhales and exhales"),
            pose("Downward Dog", "60 sec", "Press through palms, lengthen spine, soften knees"),
            pose("Low Lunge", "45 sec each", "Front knee over ankle, hips square, steady breath"),
            pose("Warrior II", "45 sec each", "Front knee bent, arms extended, gaze over front hand"),
            pose("Triangle", "45 sec each", "Straighten front leg, hinge at hip, lengthen both sides"),
            pose("Seated Forward Fold", "60 sec", "Lengthen spine on inhale, fold gently on exhale"),
            pose("Supine Twist", "45 sec each", "Arms wide, shoulders grounded, gentle spinal rotation"),
            pose("Savasana", "2 min", "Relax fully, natural breath, release tension"),
        ],
    }
}

/// Number of weeks named by the leading token of a timeframe such as "8 weeks".
///
/// Returns [`DEFAULT_RUNNING_WEEKS`] when the token is missing, non-numeric or
/// zero.
pub fn weeks_in_timeframe(timeframe: &str) -> u32 {
    timeframe
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|weeks| *weeks > 0)
        .unwrap_or(DEFAULT_RUNNING_WEEKS)
}

/// Linear progression: easy runs grow by 1 km per week, the long run stays
/// 4 km above them. No taper.
pub fn fallback_running_plan(request: &RunningPlanRequest) -> RunningPlan {
    let weeks = (1..=weeks_in_timeframe(&request.timeframe))
        .map(|week_number| {
            let easy = BASE_EASY_KM + (week_number - 1);
            let long_run = easy + 4;
            RunningWeek {
                week_number,
                sessions: vec![
                    session("Mon", "Rest", "-".into(), "Recovery / mobility"),
                    session("Tue", "Easy Run", format!("{easy} km"), "Comfortable pace"),
                    session("Wed", "Intervals", format!("{} km", easy - 1), "Short repeats / speed focus"),
                    session("Thu", "Easy Run", format!("{easy} km"), "Steady aerobic"),
                    session("Fri", "Rest", "-".into(), "Sleep & nutrition focus"),
                    session("Sat", "Tempo", format!("{} km", easy + 1), "Sustained comfortably hard"),
                    session("Sun", "Long Run", format!("{long_run} km"), "Endurance building"),
                ],
            }
        })
        .collect();
    RunningPlan { weeks }
}

/// Fallback for any domain; the variant always matches the request.
pub fn fallback_for(request: &PlanRequest) -> Plan {
    match request {
        PlanRequest::Workout(r) => Plan::Workout(fallback_workout(r)),
        PlanRequest::Diet(r) => Plan::Diet(fallback_diet(r)),
        PlanRequest::Yoga(r) => Plan::Yoga(fallback_yoga(r)),
        PlanRequest::RunningPlan(r) => Plan::RunningPlan(fallback_running_plan(r)),
    }
}
