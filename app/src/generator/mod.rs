//! Plan generation collaborator
//!
//! The session treats plan generation as an opaque, fallible call. The
//! [`PlanGenerator`] trait is the seam: the production implementation is
//! [`GeminiClient`], and tests substitute scripted generators.

mod gemini;
mod prompts;
mod schema;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use fitness_planner_shared::{BodyPartProfile, UserProfile, WeeklyPlan, WorkoutPlan};
use serde::Deserialize;
use thiserror::Error;

/// Structured generation failure kinds
///
/// Classification happens here, from HTTP status and the service's error
/// payload, so callers branch on a kind instead of matching substrings in
/// free-text messages.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The API key was rejected; the stored credential must be re-entered
    #[error("Your API key appears to be invalid or has expired.")]
    Unauthorized,

    /// The service is throttling requests
    #[error("The generation service is rate limiting requests. Please try again shortly.")]
    RateLimited,

    /// The model's response was unparseable or failed basic shape checks
    #[error("Failed to generate a valid plan from the AI: {0}")]
    Malformed(String),

    /// Any other failure, surfaced verbatim
    #[error("{0}")]
    Unknown(String),
}

/// Generation collaborator contract
///
/// Both calls must return data conforming exactly to the shared plan
/// shapes; a response failing basic shape checks is an error, not a
/// partial result.
#[async_trait]
pub trait PlanGenerator {
    /// Generate a personalized 7-day fitness and diet plan
    async fn generate_weekly_plan(
        &self,
        profile: &UserProfile,
    ) -> Result<WeeklyPlan, GeneratorError>;

    /// Generate a single-day workout for a target body part
    async fn generate_single_day_workout(
        &self,
        profile: &BodyPartProfile,
    ) -> Result<WorkoutPlan, GeneratorError>;
}

/// Error envelope returned by the Generative Language API
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Map an HTTP failure to a [`GeneratorError`] kind
///
/// 401/403 and any message mentioning the API key count as credential
/// failures; 429 is rate limiting; everything else is surfaced verbatim.
fn classify_failure(status: u16, body: &str) -> GeneratorError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("Generation request failed with status {}", status));

    match status {
        401 | 403 => GeneratorError::Unauthorized,
        429 => GeneratorError::RateLimited,
        _ if message.to_lowercase().contains("api key") => GeneratorError::Unauthorized,
        _ => GeneratorError::Unknown(message),
    }
}
