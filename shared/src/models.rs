//! Data models for the Fitness Planner application
//!
//! All types serialize with the camelCase field names used by the portable
//! plan document format, so exported documents stay byte-compatible across
//! hosts.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Number of daily plans in a generated week
pub const DAYS_PER_WEEK: usize = 7;

// ============================================================================
// Profile Enums
// ============================================================================

/// Gender selection for the weekly plan profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Primary fitness goal driving plan generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    Maintenance,
    Stamina,
    Flexibility,
    Rehab,
}

impl FitnessGoal {
    /// Human-readable label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::Stamina => "Stamina",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::Rehab => "Rehab",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight loss" => Ok(FitnessGoal::WeightLoss),
            "muscle gain" => Ok(FitnessGoal::MuscleGain),
            "maintenance" => Ok(FitnessGoal::Maintenance),
            "stamina" => Ok(FitnessGoal::Stamina),
            "flexibility" => Ok(FitnessGoal::Flexibility),
            "rehab" => Ok(FitnessGoal::Rehab),
            _ => Err(format!("Unknown fitness goal: {}", s)),
        }
    }
}

/// Workout intensity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intensity::Beginner => "Beginner",
            Intensity::Intermediate => "Intermediate",
            Intensity::Advanced => "Advanced",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Intensity::Beginner),
            "intermediate" => Ok(Intensity::Intermediate),
            "advanced" => Ok(Intensity::Advanced),
            _ => Err(format!("Unknown intensity: {}", s)),
        }
    }
}

/// Dietary preference for meal planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Vegan,
    Eggetarian,
    Custom,
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietPreference::Veg => "Veg",
            DietPreference::NonVeg => "Non-Veg",
            DietPreference::Vegan => "Vegan",
            DietPreference::Eggetarian => "Eggetarian",
            DietPreference::Custom => "Custom",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for DietPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "veg" => Ok(DietPreference::Veg),
            "non-veg" | "nonveg" => Ok(DietPreference::NonVeg),
            "vegan" => Ok(DietPreference::Vegan),
            "eggetarian" => Ok(DietPreference::Eggetarian),
            "custom" => Ok(DietPreference::Custom),
            _ => Err(format!("Unknown diet preference: {}", s)),
        }
    }
}

/// Target body part for the single-day generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyPart {
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Core,
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Legs => "Legs",
            BodyPart::Arms => "Arms",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Core => "Core",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for BodyPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chest" => Ok(BodyPart::Chest),
            "back" => Ok(BodyPart::Back),
            "legs" => Ok(BodyPart::Legs),
            "arms" => Ok(BodyPart::Arms),
            "shoulders" => Ok(BodyPart::Shoulders),
            "core" => Ok(BodyPart::Core),
            _ => Err(format!("Unknown body part: {}", s)),
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Profile driving weekly plan generation
///
/// Immutable once a plan has been generated from it; replaced wholesale on
/// reset or import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(range(min = 12, max = 100))]
    pub age: i32,
    pub gender: Gender,
    pub goal: FitnessGoal,
    /// Free text, may be empty
    pub health_conditions: String,
    /// Minutes available per day
    #[validate(range(min = 10, max = 180))]
    pub time_available: i32,
    pub intensity: Intensity,
    pub diet: DietPreference,
    #[validate(length(min = 1))]
    pub region: String,
}

/// Profile for the single-day body-part generator
///
/// Never persisted into the weekly ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BodyPartProfile {
    pub body_part: BodyPart,
    pub intensity: Intensity,
    /// Minutes available for the session
    #[validate(range(min = 15, max = 120))]
    pub time_available: i32,
}

// ============================================================================
// Plans
// ============================================================================

/// A single exercise within a workout section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    /// Human text, e.g. "12 reps" or "30 seconds"
    pub reps_or_duration: String,
    pub intensity: Intensity,
}

/// A single meal with its nutrition values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// One day's workout, split into ordered sections
///
/// Order is identity for completion tracking: the canonical flattened
/// exercise index runs contiguously across `warm_up ++ workout ++ cool_down`
/// (0-based, warm-up first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub warm_up: Vec<Exercise>,
    pub workout: Vec<Exercise>,
    pub cool_down: Vec<Exercise>,
}

impl WorkoutPlan {
    /// Total number of exercises across all sections
    pub fn exercise_count(&self) -> usize {
        self.warm_up.len() + self.workout.len() + self.cool_down.len()
    }

    /// Iterate all exercises in canonical flattened order with their index
    pub fn flat_exercises(&self) -> impl Iterator<Item = (usize, &Exercise)> {
        self.warm_up
            .iter()
            .chain(self.workout.iter())
            .chain(self.cool_down.iter())
            .enumerate()
    }

    /// Look up an exercise by its canonical flattened index
    pub fn exercise_at(&self, flat_index: usize) -> Option<&Exercise> {
        self.flat_exercises()
            .find(|(i, _)| *i == flat_index)
            .map(|(_, e)| e)
    }
}

/// Fixed meal slot within a day, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    MidMeal,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// All slots in canonical order
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MidMeal,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    /// Position of this slot in the canonical 0..4 meal indexing
    pub fn index(&self) -> usize {
        match self {
            MealSlot::Breakfast => 0,
            MealSlot::MidMeal => 1,
            MealSlot::Lunch => 2,
            MealSlot::Snack => 3,
            MealSlot::Dinner => 4,
        }
    }

    /// Display label for the slot
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MidMeal => "Mid-meal",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// One day's meals across the five fixed slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub breakfast: Meal,
    pub mid_meal: Meal,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,
}

impl DietPlan {
    /// Get the meal in a given slot
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::MidMeal => &self.mid_meal,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Iterate meals in canonical slot order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Meal)> + '_ {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }
}

/// One day of the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Day label from the generator, e.g. "Day 1"
    pub day: String,
    pub workout_plan: WorkoutPlan,
    pub diet_plan: DietPlan,
    pub motivational_tip: String,
    pub hydration_reminder: String,
}

/// A full week of daily plans
///
/// The generator returns exactly [`DAYS_PER_WEEK`] entries; ingestion rejects
/// a plan whose `days` is missing, not a sequence, or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DailyPlan>,
}
