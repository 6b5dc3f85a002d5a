//! Progress aggregation over a weekly plan and its completion ledger
//!
//! Pure functions only: the aggregator holds no state, and identical inputs
//! always produce identical output, so callers may recompute on every plan
//! or ledger change (or memoize on the pair).
//!
//! Per-day totals count exercises only. Meal completion is toggleable state
//! in the ledger but never feeds the counts, streaks, or rewards.

use crate::ledger::{CompletionLedger, ItemCategory};
use crate::models::WeeklyPlan;
use serde::{Deserialize, Serialize};

/// Reward unlocked at a 3-day active streak
pub const REWARD_THREE_DAY: &str = "3-Day Streak!";
/// Reward unlocked at a 5-day active streak
pub const REWARD_FIVE_DAY: &str = "Completed 5 days workout streak";
/// Reward unlocked at a full-week active streak
pub const REWARD_FULL_WEEK: &str = "Full Week Champion!";

/// Exercise completion counts for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    /// Chart label, "Day 1" through "Day 7"
    pub label: String,
    /// Exercises marked done, over the flattened warm-up/workout/cool-down range
    pub completed: usize,
    /// Total exercises in the day's plan, from actual plan content
    pub total: usize,
}

impl DayProgress {
    /// A day counts toward a streak when it has exercises and all are done
    fn is_fully_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Aggregated weekly progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub per_day: Vec<DayProgress>,
    /// Consecutive fully-completed days starting from day 0; this is the
    /// streak surfaced to the user and the one rewards are judged against
    pub active_streak: usize,
    /// Longest run of fully-completed days anywhere in the week
    pub best_streak: usize,
    pub rewards: Vec<String>,
}

/// Compute per-day counts, streaks, and rewards for a plan and ledger
pub fn compute_progress(plan: &WeeklyPlan, ledger: &CompletionLedger) -> WeeklyProgress {
    let per_day: Vec<DayProgress> = plan
        .days
        .iter()
        .enumerate()
        .map(|(day_index, day)| {
            let total = day.workout_plan.exercise_count();
            let completed = (0..total)
                .filter(|i| ledger.is_done(day_index, ItemCategory::Exercise, *i))
                .count();
            DayProgress {
                label: format!("Day {}", day_index + 1),
                completed,
                total,
            }
        })
        .collect();

    let active_streak = active_streak(&per_day);
    WeeklyProgress {
        best_streak: best_streak(&per_day),
        rewards: rewards_for(active_streak),
        active_streak,
        per_day,
    }
}

/// Longest run of fully-completed days, scanning the whole week
fn best_streak(per_day: &[DayProgress]) -> usize {
    let mut best = 0;
    let mut current = 0;
    for day in per_day {
        if day.completed > 0 && day.completed == day.total {
            current += 1;
        } else {
            if current > best {
                best = current;
            }
            current = 0;
        }
    }
    best.max(current)
}

/// Prefix streak from day 0, stopping at the first incomplete or empty day
fn active_streak(per_day: &[DayProgress]) -> usize {
    per_day
        .iter()
        .take_while(|day| day.is_fully_complete())
        .count()
}

/// All reward badges whose threshold the active streak meets
fn rewards_for(active_streak: usize) -> Vec<String> {
    let mut rewards = Vec::new();
    if active_streak >= 3 {
        rewards.push(REWARD_THREE_DAY.to_string());
    }
    if active_streak >= 5 {
        rewards.push(REWARD_FIVE_DAY.to_string());
    }
    if active_streak >= 7 {
        rewards.push(REWARD_FULL_WEEK.to_string());
    }
    rewards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyPlan, DietPlan, Exercise, Intensity, Meal, WorkoutPlan};
    use proptest::prelude::*;

    fn exercise(name: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            reps_or_duration: "10 reps".to_string(),
            intensity: Intensity::Beginner,
        }
    }

    fn meal(name: &str) -> Meal {
        Meal {
            name: name.to_string(),
            calories: 400.0,
            protein: 20.0,
            carbs: 40.0,
            fats: 12.0,
        }
    }

    fn diet_plan() -> DietPlan {
        DietPlan {
            breakfast: meal("Oats"),
            mid_meal: meal("Fruit"),
            lunch: meal("Rice and dal"),
            snack: meal("Nuts"),
            dinner: meal("Soup"),
        }
    }

    /// Build a day with the given number of exercises split across sections
    fn day_with_exercises(label: &str, warm_up: usize, workout: usize, cool_down: usize) -> DailyPlan {
        DailyPlan {
            day: label.to_string(),
            workout_plan: WorkoutPlan {
                warm_up: (0..warm_up).map(|i| exercise(&format!("w{}", i))).collect(),
                workout: (0..workout).map(|i| exercise(&format!("m{}", i))).collect(),
                cool_down: (0..cool_down).map(|i| exercise(&format!("c{}", i))).collect(),
            },
            diet_plan: diet_plan(),
            motivational_tip: "Keep going".to_string(),
            hydration_reminder: "Drink water".to_string(),
        }
    }

    /// A week where each day has the given exercise total
    fn plan_with_totals(totals: &[usize]) -> WeeklyPlan {
        WeeklyPlan {
            days: totals
                .iter()
                .enumerate()
                .map(|(i, total)| day_with_exercises(&format!("Day {}", i + 1), 0, *total, 0))
                .collect(),
        }
    }

    /// Mark the first `count` exercises of `day` as done
    fn complete_exercises(ledger: &mut CompletionLedger, day: usize, count: usize) {
        for i in 0..count {
            ledger.toggle(day, ItemCategory::Exercise, i);
        }
    }

    #[test]
    fn test_per_day_totals_come_from_plan_content() {
        let plan = WeeklyPlan {
            days: vec![
                day_with_exercises("Day 1", 2, 3, 2),
                day_with_exercises("Day 2", 1, 4, 1),
            ],
        };
        let ledger = CompletionLedger::new();

        let progress = compute_progress(&plan, &ledger);

        assert_eq!(progress.per_day.len(), 2);
        assert_eq!(progress.per_day[0].label, "Day 1");
        assert_eq!(progress.per_day[0].total, 7);
        assert_eq!(progress.per_day[1].total, 6);
        assert_eq!(progress.per_day[0].completed, 0);
    }

    #[test]
    fn test_completed_counts_use_flattened_indexing() {
        let plan = WeeklyPlan {
            days: vec![day_with_exercises("Day 1", 2, 3, 2)],
        };
        let mut ledger = CompletionLedger::new();
        // Index 4 is the 3rd main-workout exercise; 1 and 5 are neighbours
        ledger.toggle(0, ItemCategory::Exercise, 4);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.per_day[0].completed, 1);

        ledger.toggle(0, ItemCategory::Exercise, 4);
        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.per_day[0].completed, 0);
    }

    #[test]
    fn test_meals_do_not_feed_exercise_counts() {
        let plan = plan_with_totals(&[3]);
        let mut ledger = CompletionLedger::new();
        ledger.toggle(0, ItemCategory::Meal, 0);
        ledger.toggle(0, ItemCategory::Meal, 2);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.per_day[0].completed, 0);
        assert_eq!(progress.active_streak, 0);
    }

    #[test]
    fn test_active_streak_is_a_prefix_scan() {
        // (completed/total): (3,3), (2,2), (1,2), (4,4) -> active streak 2
        let plan = plan_with_totals(&[3, 2, 2, 4]);
        let mut ledger = CompletionLedger::new();
        complete_exercises(&mut ledger, 0, 3);
        complete_exercises(&mut ledger, 1, 2);
        complete_exercises(&mut ledger, 2, 1);
        complete_exercises(&mut ledger, 3, 4);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 2);
    }

    #[test]
    fn test_empty_day_breaks_active_streak() {
        let plan = plan_with_totals(&[2, 0, 3]);
        let mut ledger = CompletionLedger::new();
        complete_exercises(&mut ledger, 0, 2);
        complete_exercises(&mut ledger, 2, 3);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 1);
    }

    #[test]
    fn test_best_streak_scans_past_breaks() {
        // Days 2..5 complete, day 0 incomplete: best 4, active 0
        let plan = plan_with_totals(&[2, 2, 2, 2, 2, 2, 2]);
        let mut ledger = CompletionLedger::new();
        for day in 2..6 {
            complete_exercises(&mut ledger, day, 2);
        }

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 0);
        assert_eq!(progress.best_streak, 4);
    }

    #[test]
    fn test_best_streak_counts_run_ending_on_final_day() {
        let plan = plan_with_totals(&[2, 2, 2]);
        let mut ledger = CompletionLedger::new();
        complete_exercises(&mut ledger, 1, 2);
        complete_exercises(&mut ledger, 2, 2);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.best_streak, 2);
    }

    #[test]
    fn test_rewards_at_streak_five() {
        let plan = plan_with_totals(&[1, 1, 1, 1, 1, 2, 1]);
        let mut ledger = CompletionLedger::new();
        for day in 0..5 {
            complete_exercises(&mut ledger, day, 1);
        }

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 5);
        assert_eq!(
            progress.rewards,
            vec![REWARD_THREE_DAY.to_string(), REWARD_FIVE_DAY.to_string()]
        );
    }

    #[test]
    fn test_full_week_unlocks_every_reward() {
        let plan = plan_with_totals(&[1; 7]);
        let mut ledger = CompletionLedger::new();
        for day in 0..7 {
            complete_exercises(&mut ledger, day, 1);
        }

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 7);
        assert_eq!(progress.rewards.len(), 3);
        assert!(progress.rewards.iter().any(|r| r == REWARD_FULL_WEEK));
    }

    #[test]
    fn test_no_rewards_below_three_days() {
        let plan = plan_with_totals(&[1, 1, 3]);
        let mut ledger = CompletionLedger::new();
        complete_exercises(&mut ledger, 0, 1);
        complete_exercises(&mut ledger, 1, 1);

        let progress = compute_progress(&plan, &ledger);
        assert_eq!(progress.active_streak, 2);
        assert!(progress.rewards.is_empty());
    }

    #[test]
    fn test_recompute_with_same_inputs_is_identical() {
        let plan = plan_with_totals(&[2, 3, 1]);
        let mut ledger = CompletionLedger::new();
        complete_exercises(&mut ledger, 0, 2);
        complete_exercises(&mut ledger, 1, 1);

        let first = compute_progress(&plan, &ledger);
        let second = compute_progress(&plan, &ledger);
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: completed never exceeds total for any day
        #[test]
        fn prop_completed_bounded_by_total(
            totals in proptest::collection::vec(0usize..6, 1..8),
            toggles in proptest::collection::vec((0usize..8, 0usize..8), 0..40),
        ) {
            let plan = plan_with_totals(&totals);
            let mut ledger = CompletionLedger::new();
            for (day, index) in toggles {
                ledger.toggle(day, ItemCategory::Exercise, index);
            }

            let progress = compute_progress(&plan, &ledger);
            for day in &progress.per_day {
                prop_assert!(day.completed <= day.total);
            }
        }

        /// Property: the active streak is never longer than the best streak
        #[test]
        fn prop_active_streak_bounded_by_best(
            totals in proptest::collection::vec(0usize..6, 1..8),
            toggles in proptest::collection::vec((0usize..8, 0usize..8), 0..40),
        ) {
            let plan = plan_with_totals(&totals);
            let mut ledger = CompletionLedger::new();
            for (day, index) in toggles {
                ledger.toggle(day, ItemCategory::Exercise, index);
            }

            let progress = compute_progress(&plan, &ledger);
            prop_assert!(progress.active_streak <= progress.best_streak);
        }

        /// Property: reward thresholds are cumulative, never exclusive
        #[test]
        fn prop_rewards_are_cumulative(streak_days in 0usize..8) {
            let plan = plan_with_totals(&[1; 7]);
            let mut ledger = CompletionLedger::new();
            for day in 0..streak_days.min(7) {
                ledger.toggle(day, ItemCategory::Exercise, 0);
            }

            let progress = compute_progress(&plan, &ledger);
            let expected = [3, 5, 7]
                .iter()
                .filter(|t| progress.active_streak >= **t)
                .count();
            prop_assert_eq!(progress.rewards.len(), expected);
        }
    }
}
