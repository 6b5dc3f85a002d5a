//! Response schemas sent to the generation service
//!
//! The Generative Language API accepts an OpenAPI-style schema and
//! constrains the model's JSON output to it. These mirror the shared plan
//! types field for field.

use serde_json::{json, Value};

fn exercise_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "repsOrDuration": { "type": "STRING" },
            "intensity": { "type": "STRING", "enum": ["Beginner", "Intermediate", "Advanced"] },
        },
        "required": ["name", "repsOrDuration", "intensity"],
    })
}

/// Schema for a single-day workout: warm-up, workout, cool-down
pub(super) fn workout_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "warmUp": { "type": "ARRAY", "items": exercise_schema() },
            "workout": { "type": "ARRAY", "items": exercise_schema() },
            "coolDown": { "type": "ARRAY", "items": exercise_schema() },
        },
        "required": ["warmUp", "workout", "coolDown"],
    })
}

fn meal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "calories": { "type": "NUMBER" },
            "protein": { "type": "NUMBER" },
            "carbs": { "type": "NUMBER" },
            "fats": { "type": "NUMBER" },
        },
        "required": ["name", "calories", "protein", "carbs", "fats"],
    })
}

fn diet_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "breakfast": meal_schema(),
            "midMeal": meal_schema(),
            "lunch": meal_schema(),
            "snack": meal_schema(),
            "dinner": meal_schema(),
        },
        "required": ["breakfast", "midMeal", "lunch", "snack", "dinner"],
    })
}

/// Schema for the full 7-day plan
pub(super) fn weekly_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "days": {
                "type": "ARRAY",
                "description": "A list of 7 daily plans for the week.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING", "description": "The day of the week (e.g., 'Day 1')." },
                        "workoutPlan": workout_plan_schema(),
                        "dietPlan": diet_plan_schema(),
                        "motivationalTip": { "type": "STRING" },
                        "hydrationReminder": { "type": "STRING" },
                    },
                    "required": ["day", "workoutPlan", "dietPlan", "motivationalTip", "hydrationReminder"],
                },
            },
        },
        "required": ["days"],
    })
}
