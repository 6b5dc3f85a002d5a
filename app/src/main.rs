//! Fitness Planner CLI
//!
//! Interactive front end over the session orchestrator. Collects a fitness
//! profile, sends it to the generation service, and renders the returned
//! plan with completion tracking, streaks, and rewards. Plans can be saved
//! to and restored from portable JSON documents.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use fitness_planner_app::config::AppConfig;
use fitness_planner_app::credentials::CredentialStore;
use fitness_planner_app::error::AppError;
use fitness_planner_app::generator::{GeminiClient, PlanGenerator};
use fitness_planner_app::session::{
    GenerationOutcome, GeneratorMode, SessionOrchestrator, SessionPhase,
};
use fitness_planner_shared::{
    validation, BodyPart, BodyPartProfile, DietPreference, FitnessGoal, Gender, Intensity,
    ItemCategory, UserProfile,
};
use secrecy::SecretString;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.generator.model,
        "Starting Fitness Planner"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut credentials = CredentialStore::new();
    let mut session = SessionOrchestrator::new();

    println!("AI Fitness Planner");
    println!("Type 'help' for the list of commands.\n");

    // A key is required before any generation call
    prompt_for_api_key(&mut input, &mut credentials)?;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(c) => c,
            None => continue,
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),
            "plan" => {
                run_weekly_generation(&mut input, &mut session, &mut credentials, &config).await?;
            }
            "workout" => {
                run_body_part_generation(&mut input, &mut session, &mut credentials, &config)
                    .await?;
            }
            "toggle" => handle_toggle(&mut session, &args),
            "progress" => print_progress(&session),
            "show" => print_plan(&session),
            "export" => handle_export(&session, args.first().copied()),
            "import" => handle_import(&mut session, args.first().copied()),
            "reset" => {
                session.reset();
                println!("Session cleared.");
            }
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "fitness_planner_app=info".into()
        } else {
            "fitness_planner_app=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  plan              generate a weekly plan from your profile");
    println!("  workout           generate a single-day body-part workout");
    println!("  show              display the current plan");
    println!("  progress          show per-day completion, streak, and rewards");
    println!("  toggle D C I      toggle item I (C = exercise|meal) on day D (1-7)");
    println!("  export [PATH]     save the plan document (default: suggested filename)");
    println!("  import PATH       load a previously saved plan document");
    println!("  reset             clear the session and start over");
    println!("  quit              exit");
}

/// Block until an API key has been entered
fn prompt_for_api_key(input: &mut impl BufRead, credentials: &mut CredentialStore) -> Result<()> {
    while !credentials.is_present() {
        let key = prompt(input, "Enter your Gemini API key: ")?;
        if key.is_empty() {
            println!("{}", AppError::MissingCredential);
            continue;
        }
        credentials.set(key);
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt repeatedly until the value parses and passes validation
fn prompt_validated<T, F>(input: &mut impl BufRead, label: &str, check: F) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&T) -> Result<(), String>,
{
    loop {
        let raw = prompt(input, label)?;
        match raw.parse::<T>() {
            Ok(value) => match check(&value) {
                Ok(()) => return Ok(value),
                Err(message) => println!("{}", message),
            },
            Err(err) => println!("{}", err),
        }
    }
}

fn read_user_profile(input: &mut impl BufRead) -> Result<UserProfile> {
    println!("Create your profile:");
    let age = prompt_validated::<i32, _>(input, "  Age (12-100): ", |v| {
        validation::validate_age(*v)
    })?;
    let gender =
        prompt_validated::<Gender, _>(input, "  Gender (Male/Female/Other): ", |_| Ok(()))?;
    let goal = prompt_validated::<FitnessGoal, _>(
        input,
        "  Goal (Weight Loss/Muscle Gain/Maintenance/Stamina/Flexibility/Rehab): ",
        |_| Ok(()),
    )?;
    let health_conditions = prompt(input, "  Health conditions (optional): ")?;
    let time_available = prompt_validated::<i32, _>(input, "  Minutes per day (10-180): ", |v| {
        validation::validate_weekly_time(*v)
    })?;
    let intensity = prompt_validated::<Intensity, _>(
        input,
        "  Intensity (Beginner/Intermediate/Advanced): ",
        |_| Ok(()),
    )?;
    let diet = prompt_validated::<DietPreference, _>(
        input,
        "  Diet (Veg/Non-Veg/Vegan/Eggetarian/Custom): ",
        |_| Ok(()),
    )?;
    let region = {
        loop {
            let value = prompt(input, "  Region for the diet plan: ")?;
            match validation::validate_region(&value) {
                Ok(()) => break value,
                Err(message) => println!("{}", message),
            }
        }
    };

    Ok(UserProfile {
        age,
        gender,
        goal,
        health_conditions,
        time_available,
        intensity,
        diet,
        region,
    })
}

fn read_body_part_profile(input: &mut impl BufRead) -> Result<BodyPartProfile> {
    println!("Single-day workout:");
    let body_part = prompt_validated::<BodyPart, _>(
        input,
        "  Body part (Chest/Back/Legs/Arms/Shoulders/Core): ",
        |_| Ok(()),
    )?;
    let intensity = prompt_validated::<Intensity, _>(
        input,
        "  Intensity (Beginner/Intermediate/Advanced): ",
        |_| Ok(()),
    )?;
    let time_available = prompt_validated::<i32, _>(input, "  Minutes (15-120): ", |v| {
        validation::validate_body_part_time(*v)
    })?;

    Ok(BodyPartProfile {
        body_part,
        intensity,
        time_available,
    })
}

async fn run_weekly_generation(
    input: &mut impl BufRead,
    session: &mut SessionOrchestrator,
    credentials: &mut CredentialStore,
    config: &AppConfig,
) -> Result<()> {
    if session.phase() == SessionPhase::Generating {
        println!("A generation request is already in flight.");
        return Ok(());
    }
    prompt_for_api_key(input, credentials)?;

    let profile = read_user_profile(input)?;
    session.set_mode(GeneratorMode::Weekly);
    let ticket = match session.begin_weekly_generation(profile.clone()) {
        Ok(ticket) => ticket,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    println!("Generating your personalized plan...");
    let client = build_client(config, credentials);
    let result = client.generate_weekly_plan(&profile).await;

    match session.complete_weekly_generation(ticket, result) {
        GenerationOutcome::PlanReady => {
            println!("Your 7-day plan is ready. Try 'show' and 'progress'.");
        }
        GenerationOutcome::CredentialRejected => {
            credentials.clear();
            println!("{}", AppError::InvalidCredential);
            prompt_for_api_key(input, credentials)?;
        }
        GenerationOutcome::Failed => {
            if let Some(message) = session.error_message() {
                println!("Oops! {}", AppError::Generation(message.to_string()));
            }
        }
        outcome => warn!(?outcome, "Unexpected generation outcome"),
    }
    Ok(())
}

async fn run_body_part_generation(
    input: &mut impl BufRead,
    session: &mut SessionOrchestrator,
    credentials: &mut CredentialStore,
    config: &AppConfig,
) -> Result<()> {
    if session.phase() == SessionPhase::Generating {
        println!("A generation request is already in flight.");
        return Ok(());
    }
    prompt_for_api_key(input, credentials)?;

    let profile = read_body_part_profile(input)?;
    session.set_mode(GeneratorMode::BodyPart);
    let ticket = match session.begin_body_part_generation(&profile) {
        Ok(ticket) => ticket,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    println!("Generating your workout...");
    let client = build_client(config, credentials);
    let result = client.generate_single_day_workout(&profile).await;

    match session.complete_body_part_generation(ticket, result) {
        GenerationOutcome::WorkoutReady => {
            if let Some(workout) = session.single_day_workout() {
                print_workout_sections(workout);
            }
        }
        GenerationOutcome::CredentialRejected => {
            credentials.clear();
            println!("{}", AppError::InvalidCredential);
            prompt_for_api_key(input, credentials)?;
        }
        GenerationOutcome::Failed => {
            if let Some(message) = session.error_message() {
                println!("Oops! {}", AppError::Generation(message.to_string()));
            }
        }
        outcome => warn!(?outcome, "Unexpected generation outcome"),
    }
    Ok(())
}

fn build_client(config: &AppConfig, credentials: &CredentialStore) -> GeminiClient {
    let token = credentials
        .get()
        .cloned()
        .unwrap_or_else(|| SecretString::new(String::new()));
    GeminiClient::new(&config.generator, token)
}

fn handle_toggle(session: &mut SessionOrchestrator, args: &[&str]) {
    let (day, category, index) = match args {
        [day, category, index] => (*day, *category, *index),
        _ => {
            println!("Usage: toggle DAY exercise|meal INDEX");
            return;
        }
    };

    let day: usize = match day.parse::<usize>() {
        Ok(d) if (1..=7).contains(&d) => d - 1,
        _ => {
            println!("Day must be 1-7.");
            return;
        }
    };
    let category = match category.to_lowercase().as_str() {
        "exercise" => ItemCategory::Exercise,
        "meal" => ItemCategory::Meal,
        _ => {
            println!("Category must be 'exercise' or 'meal'.");
            return;
        }
    };
    let index: usize = match index.parse() {
        Ok(i) => i,
        Err(_) => {
            println!("Index must be a number.");
            return;
        }
    };

    match session.toggle_item(day, category, index) {
        Ok(()) => {
            let state = if session.is_done(day, category, index) {
                "done"
            } else {
                "not done"
            };
            println!("Day {} {:?} #{} is now {}.", day + 1, category, index, state);
        }
        Err(err) => println!("{}", err),
    }
}

fn print_progress(session: &SessionOrchestrator) {
    let progress = match session.progress() {
        Some(progress) => progress,
        None => {
            println!("No plan yet. Use 'plan' or 'import' first.");
            return;
        }
    };

    for day in &progress.per_day {
        println!("  {}: {}/{} exercises", day.label, day.completed, day.total);
    }
    println!("  Current streak: {} day(s)", progress.active_streak);
    for reward in &progress.rewards {
        println!("  Reward: {}", reward);
    }
}

fn print_plan(session: &SessionOrchestrator) {
    let plan = match session.weekly_plan() {
        Some(plan) => plan,
        None => {
            println!("No plan yet. Use 'plan' or 'import' first.");
            return;
        }
    };

    for (day_index, day) in plan.days.iter().enumerate() {
        println!("{} ({})", day.day, day.motivational_tip);
        for (i, exercise) in day.workout_plan.flat_exercises() {
            let mark = if session.is_done(day_index, ItemCategory::Exercise, i) {
                "x"
            } else {
                " "
            };
            println!(
                "  [{}] {:>2}. {} - {}",
                mark, i, exercise.name, exercise.reps_or_duration
            );
        }
        for (slot, meal) in day.diet_plan.meals() {
            let mark = if session.is_done(day_index, ItemCategory::Meal, slot.index()) {
                "x"
            } else {
                " "
            };
            println!(
                "  [{}] {}: {} ({} kcal)",
                mark,
                slot.label(),
                meal.name,
                meal.calories
            );
        }
        println!("  Hydration: {}", day.hydration_reminder);
    }
}

fn print_workout_sections(workout: &fitness_planner_shared::WorkoutPlan) {
    println!("Warm-up:");
    for exercise in &workout.warm_up {
        println!("  {} - {}", exercise.name, exercise.reps_or_duration);
    }
    println!("Workout:");
    for exercise in &workout.workout {
        println!("  {} - {}", exercise.name, exercise.reps_or_duration);
    }
    println!("Cool-down:");
    for exercise in &workout.cool_down {
        println!("  {} - {}", exercise.name, exercise.reps_or_duration);
    }
}

fn handle_export(session: &SessionOrchestrator, path: Option<&str>) {
    let exported = match session.export_document(Utc::now().date_naive()) {
        Ok(exported) => exported,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let target = path.unwrap_or(exported.filename.as_str());
    match std::fs::write(target, &exported.contents) {
        Ok(()) => println!("Saved plan to {}", target),
        Err(err) => println!("Error writing {}: {}", target, err),
    }
}

fn handle_import(session: &mut SessionOrchestrator, path: Option<&str>) {
    // No path given behaves like a cancelled file picker: a quiet no-op
    let path = match path {
        Some(path) => path,
        None => return,
    };

    let text = match std::fs::read_to_string(Path::new(path)) {
        Ok(text) => text,
        Err(err) => {
            println!("{}", AppError::from(err));
            return;
        }
    };

    match session.import_document(&text) {
        Ok(()) => println!("Plan imported. Try 'show' and 'progress'."),
        Err(err) => println!("{}", err),
    }
}
