//! Google Gemini implementation of the generation collaborator
//!
//! Calls the Generative Language API's `generateContent` endpoint in JSON
//! mode with a response schema, then decodes the returned text into the
//! shared plan types. The base URL is configurable so tests can point the
//! client at a local mock server.

use std::time::Duration;

use async_trait::async_trait;
use fitness_planner_shared::{
    BodyPartProfile, UserProfile, WeeklyPlan, WorkoutPlan, DAYS_PER_WEEK,
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::{classify_failure, prompts, schema, GeneratorError, PlanGenerator};
use crate::config::GeneratorConfig;

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// ============================================================================
// Client
// ============================================================================

/// Gemini-backed plan generator
///
/// The API token is supplied explicitly at construction; there is no
/// ambient credential state.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
    api_key: SecretString,
}

impl GeminiClient {
    /// Create a client for the configured service and model
    pub fn new(config: &GeneratorConfig, api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            api_key,
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// Send a prompt in JSON mode and return the model's raw text
    async fn generate_json(&self, prompt: String, response_schema: Value) -> Result<String, GeneratorError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        debug!(model = %self.model, "Sending generation request");

        let response = self
            .client
            .post(self.build_url())
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Unknown(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeneratorError::Unknown(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            error!(status = %status, "Generation service returned an error");
            return Err(classify_failure(status.as_u16(), &text));
        }

        let body: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| GeneratorError::Malformed(format!("unparseable service response: {}", e)))?;

        body.candidates
            .and_then(|mut candidates| candidates.drain(..).next())
            .and_then(|candidate| candidate.content)
            .and_then(|mut content| content.parts.drain(..).next())
            .map(|part| part.text)
            .ok_or_else(|| GeneratorError::Malformed("no content in service response".to_string()))
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate_weekly_plan(
        &self,
        profile: &UserProfile,
    ) -> Result<WeeklyPlan, GeneratorError> {
        let text = self
            .generate_json(prompts::weekly_plan_prompt(profile), schema::weekly_plan_schema())
            .await?;

        let plan: WeeklyPlan = serde_json::from_str(text.trim())
            .map_err(|e| GeneratorError::Malformed(format!("invalid plan structure: {}", e)))?;

        if plan.days.is_empty() {
            return Err(GeneratorError::Malformed("plan contains no days".to_string()));
        }
        if plan.days.len() != DAYS_PER_WEEK {
            warn!(days = plan.days.len(), "Service returned a week of unexpected length");
        }

        debug!(days = plan.days.len(), "Received weekly plan");
        Ok(plan)
    }

    async fn generate_single_day_workout(
        &self,
        profile: &BodyPartProfile,
    ) -> Result<WorkoutPlan, GeneratorError> {
        let text = self
            .generate_json(prompts::body_part_prompt(profile), schema::workout_plan_schema())
            .await?;

        // Missing warmUp/workout/coolDown surfaces here as a decode error
        let plan: WorkoutPlan = serde_json::from_str(text.trim())
            .map_err(|e| GeneratorError::Malformed(format!("invalid workout structure: {}", e)))?;

        debug!(exercises = plan.exercise_count(), "Received single-day workout");
        Ok(plan)
    }
}
