//! Portable plan document codec
//!
//! Converts an in-memory (profile, plan) pair to and from the portable JSON
//! document used for export and import. The document carries no ledger and
//! no timestamps; import therefore always starts with a fresh ledger.
//!
//! Decoding validates the full nested structure, not just the presence of
//! the two top-level keys, so a mangled document is rejected up front
//! instead of failing later at render time.

use crate::errors::DocumentError;
use crate::models::{FitnessGoal, UserProfile, WeeklyPlan};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The persisted (profile, plan) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub user_profile: UserProfile,
    pub weekly_plan: WeeklyPlan,
}

/// Serialize a (profile, plan) pair as a pretty-printed document
pub fn serialize(profile: &UserProfile, plan: &WeeklyPlan) -> serde_json::Result<String> {
    let document = PlanDocument {
        user_profile: profile.clone(),
        weekly_plan: plan.clone(),
    };
    serde_json::to_string_pretty(&document)
}

/// Decode a document back into its (profile, plan) pair
///
/// Fails with [`DocumentError::Malformed`] when the text is not JSON, and
/// with [`DocumentError::InvalidShape`] when the top level lacks
/// `userProfile` or `weeklyPlan`, when the nested structures do not decode,
/// or when the plan has no days.
pub fn deserialize(text: &str) -> Result<(UserProfile, WeeklyPlan), DocumentError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DocumentError::Malformed(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| DocumentError::InvalidShape("expected a top-level object".to_string()))?;
    if !object.contains_key("userProfile") || !object.contains_key("weeklyPlan") {
        return Err(DocumentError::InvalidShape(
            "document must contain userProfile and weeklyPlan".to_string(),
        ));
    }

    let document: PlanDocument =
        serde_json::from_value(value).map_err(|e| DocumentError::InvalidShape(e.to_string()))?;

    if document.weekly_plan.days.is_empty() {
        return Err(DocumentError::InvalidShape(
            "weeklyPlan.days must not be empty".to_string(),
        ));
    }

    Ok((document.user_profile, document.weekly_plan))
}

/// Suggested filename for an exported document
///
/// Whitespace in the goal label collapses to single dashes. Cosmetic only,
/// not part of the document schema.
pub fn suggested_filename(goal: FitnessGoal, date: NaiveDate) -> String {
    let whitespace = regex_lite::Regex::new(r"\s+").unwrap();
    let slug = whitespace.replace_all(goal.label(), "-");
    format!("fitness-plan-{}-{}.json", slug, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DailyPlan, DietPlan, DietPreference, Exercise, Gender, Intensity, Meal, WorkoutPlan,
    };

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 28,
            gender: Gender::Female,
            goal: FitnessGoal::MuscleGain,
            health_conditions: String::new(),
            time_available: 60,
            intensity: Intensity::Intermediate,
            diet: DietPreference::Eggetarian,
            region: "South Indian".to_string(),
        }
    }

    fn meal(name: &str, calories: f64) -> Meal {
        Meal {
            name: name.to_string(),
            calories,
            protein: 18.0,
            carbs: 35.0,
            fats: 9.0,
        }
    }

    fn sample_day(label: &str) -> DailyPlan {
        DailyPlan {
            day: label.to_string(),
            workout_plan: WorkoutPlan {
                warm_up: vec![Exercise {
                    name: "Arm circles".to_string(),
                    reps_or_duration: "30 seconds".to_string(),
                    intensity: Intensity::Beginner,
                }],
                workout: vec![Exercise {
                    name: "Push-ups".to_string(),
                    reps_or_duration: "12 reps".to_string(),
                    intensity: Intensity::Intermediate,
                }],
                cool_down: vec![Exercise {
                    name: "Chest stretch".to_string(),
                    reps_or_duration: "20 seconds".to_string(),
                    intensity: Intensity::Beginner,
                }],
            },
            diet_plan: DietPlan {
                breakfast: meal("Idli with sambar", 320.0),
                mid_meal: meal("Buttermilk", 90.0),
                lunch: meal("Rice, dal, vegetables", 550.0),
                snack: meal("Roasted chana", 150.0),
                dinner: meal("Dosa with chutney", 400.0),
            },
            motivational_tip: "Small steps add up".to_string(),
            hydration_reminder: "Drink a glass of water on waking".to_string(),
        }
    }

    fn sample_plan() -> WeeklyPlan {
        WeeklyPlan {
            days: (1..=7).map(|i| sample_day(&format!("Day {}", i))).collect(),
        }
    }

    #[test]
    fn test_round_trip_preserves_profile_and_plan() {
        let profile = sample_profile();
        let plan = sample_plan();

        let text = serialize(&profile, &plan).unwrap();
        let (decoded_profile, decoded_plan) = deserialize(&text).unwrap();

        assert_eq!(decoded_profile, profile);
        assert_eq!(decoded_plan, plan);
    }

    #[test]
    fn test_serialized_document_uses_stable_keys() {
        let text = serialize(&sample_profile(), &sample_plan()).unwrap();
        assert!(text.contains("\"userProfile\""));
        assert!(text.contains("\"weeklyPlan\""));
        assert!(text.contains("\"warmUp\""));
        assert!(text.contains("\"midMeal\""));
        // Pretty-printed for human inspection
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_non_json_text_is_malformed() {
        let err = deserialize("not a plan at all").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn test_missing_weekly_plan_is_invalid_shape() {
        let profile_only = format!(
            "{{\"userProfile\": {}}}",
            serde_json::to_string(&sample_profile()).unwrap()
        );
        let err = deserialize(&profile_only).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidShape(_)));
    }

    #[test]
    fn test_missing_user_profile_is_invalid_shape() {
        let plan_only = format!(
            "{{\"weeklyPlan\": {}}}",
            serde_json::to_string(&sample_plan()).unwrap()
        );
        let err = deserialize(&plan_only).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidShape(_)));
    }

    #[test]
    fn test_top_level_array_is_invalid_shape() {
        let err = deserialize("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidShape(_)));
    }

    #[test]
    fn test_empty_days_are_rejected() {
        let text = format!(
            "{{\"userProfile\": {}, \"weeklyPlan\": {{\"days\": []}}}}",
            serde_json::to_string(&sample_profile()).unwrap()
        );
        let err = deserialize(&text).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidShape(_)));
    }

    #[test]
    fn test_mangled_nested_structure_is_rejected() {
        // Stricter than a presence-only top-level check: nested decoding
        // failures surface at import time
        let text = format!(
            "{{\"userProfile\": {}, \"weeklyPlan\": {{\"days\": [{{\"day\": 1}}]}}}}",
            serde_json::to_string(&sample_profile()).unwrap()
        );
        let err = deserialize(&text).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidShape(_)));
    }

    #[test]
    fn test_suggested_filename_slugs_goal_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            suggested_filename(FitnessGoal::WeightLoss, date),
            "fitness-plan-Weight-Loss-2024-03-09.json"
        );
        assert_eq!(
            suggested_filename(FitnessGoal::Rehab, date),
            "fitness-plan-Rehab-2024-03-09.json"
        );
    }
}
