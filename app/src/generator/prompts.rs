//! Prompt construction for the generation service

use fitness_planner_shared::{BodyPartProfile, UserProfile};

/// Build the weekly plan prompt from a user profile
pub(super) fn weekly_plan_prompt(profile: &UserProfile) -> String {
    let health_conditions = if profile.health_conditions.trim().is_empty() {
        "None"
    } else {
        profile.health_conditions.as_str()
    };

    format!(
        "You are an expert trainer and dietician.\n\
         Based on the client's profile below, generate a personalized 7-day fitness and diet plan.\n\
         \n\
         Client Profile:\n\
         - Age: {}\n\
         - Gender: {:?}\n\
         - Fitness Goal: {}\n\
         - Health Conditions: {}\n\
         - Available Workout Time: {} minutes per day\n\
         - Intensity Level: {}\n\
         - Dietary Preference: {}\n\
         - Client's Region for Diet Plan: {}\n\
         \n\
         The plan must include:\n\
         1. A daily workout schedule for 7 days, broken into Warm-up, Workout, and Cool-down. \
         Each exercise needs a name, repetitions/duration (e.g., '12 reps', '30 seconds'), and an intensity tag.\n\
         2. A daily diet plan for 7 days, with meal-wise breakdown (Breakfast, Mid-meal, Lunch, Snack, Dinner), \
         tailored to the client's region. Include nutrition values (Calories, Protein, Carbs, Fats) for each meal.\n\
         3. A unique motivational tip and a hydration reminder for each day.\n\
         \n\
         The response must be a single JSON object that strictly follows the provided schema. \
         Do not include any introductory text or markdown formatting.",
        profile.age,
        profile.gender,
        profile.goal,
        health_conditions,
        profile.time_available,
        profile.intensity,
        profile.diet,
        profile.region,
    )
}

/// Build the single-day workout prompt from body-part preferences
pub(super) fn body_part_prompt(profile: &BodyPartProfile) -> String {
    format!(
        "You are an expert gym trainer.\n\
         Generate a single-day, gym-style workout plan based on the following client preferences.\n\
         The workout should be structured with a suitable warm-up, a main workout, and a cool-down.\n\
         \n\
         Client Preferences:\n\
         - Target Body Part: {}\n\
         - Intensity Level: {}\n\
         - Available Workout Time: {} minutes\n\
         \n\
         Instructions:\n\
         - The main workout should consist of 4-6 exercises that effectively target the specified body part.\n\
         - Include a brief, dynamic warm-up (2-3 exercises) and a static cool-down (2-3 exercises).\n\
         - For each exercise, provide a name, repetitions/duration (e.g., '3 sets of 12 reps', '30 seconds'), \
         and an intensity tag ('Beginner', 'Intermediate', or 'Advanced').\n\
         - Ensure the total workout duration fits within the client's available time.\n\
         \n\
         The response must be a single JSON object that strictly follows the provided schema. \
         Do not include any introductory text or markdown formatting.",
        profile.body_part, profile.intensity, profile.time_available,
    )
}
