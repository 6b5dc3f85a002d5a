//! Session orchestration
//!
//! Owns the current profile, plan, completion ledger, and view-mode state,
//! and sequences generation, import, export, and reset. All transitions are
//! synchronous; the async generation call sits between [`SessionOrchestrator::begin_weekly_generation`]
//! and [`SessionOrchestrator::complete_weekly_generation`], and a ticket
//! issued at begin time guards against a late result landing after a reset
//! or a newer submission.
//!
//! The orchestrator is single-threaded by design: every mutation happens in
//! response to one discrete user action. A multi-threaded host must wrap it
//! in a mutex or keep it owned by one task.

use chrono::NaiveDate;
use fitness_planner_shared::{
    compute_progress, document, BodyPartProfile, CompletionLedger, DocumentError, ItemCategory,
    UserProfile, WeeklyPlan, WeeklyProgress, WorkoutPlan,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::generator::GeneratorError;

/// Which generator front end is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    Weekly,
    BodyPart,
}

impl Default for GeneratorMode {
    fn default() -> Self {
        GeneratorMode::Weekly
    }
}

/// Observable session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No plan yet; profile form is shown
    NoPlan,
    /// A generation request is in flight
    Generating,
    /// A weekly plan is active
    HasPlan,
    /// The last action failed; prior data may still be present
    Error,
}

/// What kind of generation a ticket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerationKind {
    Weekly,
    BodyPart,
}

/// Token tying an in-flight generation to the submission that started it
///
/// Ids increase monotonically; completing with a ticket that is no longer
/// current discards the result instead of applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    id: u64,
    kind: GenerationKind,
}

/// Outcome of completing a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A weekly plan was stored
    PlanReady,
    /// A single-day workout was stored
    WorkoutReady,
    /// The credential was rejected; the caller must clear the stored token
    /// and re-prompt
    CredentialRejected,
    /// Generation failed; the message is now the session error
    Failed,
    /// The ticket was no longer current; the result was discarded
    Stale,
}

/// An exported plan document plus its suggested filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub contents: String,
    pub filename: String,
}

/// Errors raised by session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("a generation request is already in flight")]
    GenerationInFlight,

    #[error("no plan is active")]
    NoPlanActive,

    #[error("could not encode the plan document: {0}")]
    Export(String),
}

/// Holds session state and sequences every user-triggered operation
#[derive(Default)]
pub struct SessionOrchestrator {
    profile: Option<UserProfile>,
    weekly_plan: Option<WeeklyPlan>,
    single_day_workout: Option<WorkoutPlan>,
    ledger: CompletionLedger,
    error: Option<String>,
    mode: GeneratorMode,
    in_flight: Option<GenerationTicket>,
    next_ticket_id: u64,
}

impl SessionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        if self.in_flight.is_some() {
            SessionPhase::Generating
        } else if self.error.is_some() {
            SessionPhase::Error
        } else if self.profile.is_some() && self.weekly_plan.is_some() {
            SessionPhase::HasPlan
        } else {
            SessionPhase::NoPlan
        }
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GeneratorMode) {
        self.mode = mode;
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn weekly_plan(&self) -> Option<&WeeklyPlan> {
        self.weekly_plan.as_ref()
    }

    pub fn single_day_workout(&self) -> Option<&WorkoutPlan> {
        self.single_day_workout.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an item is currently marked done
    pub fn is_done(&self, day_index: usize, category: ItemCategory, item_index: usize) -> bool {
        self.ledger.is_done(day_index, category, item_index)
    }

    /// Recompute progress from the current plan and ledger
    ///
    /// Fresh on every call; None without an active plan.
    pub fn progress(&self) -> Option<WeeklyProgress> {
        self.weekly_plan
            .as_ref()
            .map(|plan| compute_progress(plan, &self.ledger))
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    /// Start a weekly plan generation for a submitted profile
    ///
    /// Clears any previous plan, error, and ledger. Rejected while another
    /// request is in flight.
    pub fn begin_weekly_generation(
        &mut self,
        profile: UserProfile,
    ) -> Result<GenerationTicket, SessionError> {
        if self.in_flight.is_some() {
            return Err(SessionError::GenerationInFlight);
        }

        info!(goal = %profile.goal, "Starting weekly plan generation");
        self.weekly_plan = None;
        self.error = None;
        self.ledger.clear();
        self.profile = Some(profile);

        Ok(self.issue_ticket(GenerationKind::Weekly))
    }

    /// Apply the result of a weekly generation, unless the ticket went stale
    pub fn complete_weekly_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<WeeklyPlan, GeneratorError>,
    ) -> GenerationOutcome {
        if self.in_flight != Some(ticket) || ticket.kind != GenerationKind::Weekly {
            warn!("Discarding stale weekly generation result");
            return GenerationOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(plan) => {
                info!(days = plan.days.len(), "Weekly plan ready");
                self.weekly_plan = Some(plan);
                GenerationOutcome::PlanReady
            }
            Err(GeneratorError::Unauthorized) => {
                warn!("Credential rejected during generation");
                GenerationOutcome::CredentialRejected
            }
            Err(err) => {
                warn!(error = %err, "Weekly generation failed");
                self.error = Some(err.to_string());
                GenerationOutcome::Failed
            }
        }
    }

    /// Start a single-day workout generation
    ///
    /// Leaves the weekly plan and its ledger untouched.
    pub fn begin_body_part_generation(
        &mut self,
        profile: &BodyPartProfile,
    ) -> Result<GenerationTicket, SessionError> {
        if self.in_flight.is_some() {
            return Err(SessionError::GenerationInFlight);
        }

        info!(body_part = %profile.body_part, "Starting single-day workout generation");
        self.single_day_workout = None;
        self.error = None;

        Ok(self.issue_ticket(GenerationKind::BodyPart))
    }

    /// Apply the result of a single-day generation, unless stale
    pub fn complete_body_part_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<WorkoutPlan, GeneratorError>,
    ) -> GenerationOutcome {
        if self.in_flight != Some(ticket) || ticket.kind != GenerationKind::BodyPart {
            warn!("Discarding stale workout generation result");
            return GenerationOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(plan) => {
                self.single_day_workout = Some(plan);
                GenerationOutcome::WorkoutReady
            }
            Err(GeneratorError::Unauthorized) => {
                warn!("Credential rejected during generation");
                GenerationOutcome::CredentialRejected
            }
            Err(err) => {
                warn!(error = %err, "Workout generation failed");
                self.error = Some(err.to_string());
                GenerationOutcome::Failed
            }
        }
    }

    fn issue_ticket(&mut self, kind: GenerationKind) -> GenerationTicket {
        self.next_ticket_id += 1;
        let ticket = GenerationTicket {
            id: self.next_ticket_id,
            kind,
        };
        self.in_flight = Some(ticket);
        ticket
    }

    // ------------------------------------------------------------------
    // Ledger
    // ------------------------------------------------------------------

    /// Toggle a plan item's completion state
    ///
    /// Only valid while a weekly plan is active; indices come from the
    /// plan's own structure and are not bounds-checked here.
    pub fn toggle_item(
        &mut self,
        day_index: usize,
        category: ItemCategory,
        item_index: usize,
    ) -> Result<(), SessionError> {
        if self.weekly_plan.is_none() {
            return Err(SessionError::NoPlanActive);
        }
        self.ledger.toggle(day_index, category, item_index);
        debug!(day_index, ?category, item_index, "Toggled completion state");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reset, import, export
    // ------------------------------------------------------------------

    /// Clear the whole session back to the profile form
    ///
    /// Also invalidates any outstanding generation ticket so a late result
    /// is discarded rather than applied.
    pub fn reset(&mut self) {
        info!("Session reset");
        self.profile = None;
        self.weekly_plan = None;
        self.single_day_workout = None;
        self.error = None;
        self.ledger.clear();
        self.in_flight = None;
    }

    /// Replace the session contents with an imported document
    ///
    /// On success the ledger starts empty (documents carry no ledger), any
    /// error is cleared, and the view is forced back to the weekly mode.
    /// On failure the prior profile and plan are left untouched.
    pub fn import_document(&mut self, text: &str) -> Result<(), DocumentError> {
        match document::deserialize(text) {
            Ok((profile, plan)) => {
                info!(days = plan.days.len(), "Imported plan document");
                self.profile = Some(profile);
                self.weekly_plan = Some(plan);
                self.ledger.clear();
                self.error = None;
                self.mode = GeneratorMode::Weekly;
                self.in_flight = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Plan import failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Serialize the current (profile, plan) pair for saving
    ///
    /// No state change. Errors with [`SessionError::NoPlanActive`] when
    /// either half is missing, which callers treat as a no-op.
    pub fn export_document(&self, date: NaiveDate) -> Result<ExportedDocument, SessionError> {
        let (profile, plan) = match (&self.profile, &self.weekly_plan) {
            (Some(profile), Some(plan)) => (profile, plan),
            _ => return Err(SessionError::NoPlanActive),
        };

        let contents = document::serialize(profile, plan)
            .map_err(|e| SessionError::Export(e.to_string()))?;
        Ok(ExportedDocument {
            contents,
            filename: document::suggested_filename(profile.goal, date),
        })
    }
}
