//! Common test fixtures for integration tests

use fitness_planner_shared::{
    BodyPart, BodyPartProfile, DailyPlan, DietPlan, DietPreference, Exercise, FitnessGoal, Gender,
    Intensity, Meal, UserProfile, WeeklyPlan, WorkoutPlan,
};

pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 30,
        gender: Gender::Male,
        goal: FitnessGoal::WeightLoss,
        health_conditions: String::new(),
        time_available: 45,
        intensity: Intensity::Beginner,
        diet: DietPreference::NonVeg,
        region: "Indian".to_string(),
    }
}

pub fn sample_body_part_profile() -> BodyPartProfile {
    BodyPartProfile {
        body_part: BodyPart::Chest,
        intensity: Intensity::Intermediate,
        time_available: 60,
    }
}

pub fn exercise(name: &str) -> Exercise {
    Exercise {
        name: name.to_string(),
        reps_or_duration: "12 reps".to_string(),
        intensity: Intensity::Beginner,
    }
}

fn meal(name: &str) -> Meal {
    Meal {
        name: name.to_string(),
        calories: 350.0,
        protein: 15.0,
        carbs: 45.0,
        fats: 10.0,
    }
}

pub fn sample_workout_plan() -> WorkoutPlan {
    WorkoutPlan {
        warm_up: vec![exercise("Arm circles"), exercise("Jumping jacks")],
        workout: vec![
            exercise("Bench press"),
            exercise("Push-ups"),
            exercise("Chest fly"),
        ],
        cool_down: vec![exercise("Chest stretch")],
    }
}

pub fn sample_weekly_plan() -> WeeklyPlan {
    WeeklyPlan {
        days: (1..=7)
            .map(|i| DailyPlan {
                day: format!("Day {}", i),
                workout_plan: sample_workout_plan(),
                diet_plan: DietPlan {
                    breakfast: meal("Poha"),
                    mid_meal: meal("Fruit"),
                    lunch: meal("Dal and rice"),
                    snack: meal("Sprouts"),
                    dinner: meal("Roti and sabzi"),
                },
                motivational_tip: "One day at a time".to_string(),
                hydration_reminder: "Two litres today".to_string(),
            })
            .collect(),
    }
}
