//! Input validation functions
//!
//! This module provides validation utilities for profile input.
//! Uses both custom validators and the `validator` crate for derive macros.

/// Validate age for the weekly plan profile (12-100 years)
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < 12 {
        return Err("Age must be at least 12".to_string());
    }
    if age > 100 {
        return Err("Age must be at most 100".to_string());
    }
    Ok(())
}

/// Validate daily workout time for the weekly planner (10-180 minutes)
pub fn validate_weekly_time(minutes: i32) -> Result<(), String> {
    if minutes < 10 {
        return Err("Time available must be at least 10 minutes".to_string());
    }
    if minutes > 180 {
        return Err("Time available must be at most 180 minutes".to_string());
    }
    Ok(())
}

/// Validate session time for the single-day generator (15-120 minutes)
pub fn validate_body_part_time(minutes: i32) -> Result<(), String> {
    if minutes < 15 {
        return Err("Session time must be at least 15 minutes".to_string());
    }
    if minutes > 120 {
        return Err("Session time must be at most 120 minutes".to_string());
    }
    Ok(())
}

/// Validate the diet region (free text, must not be blank)
pub fn validate_region(region: &str) -> Result<(), String> {
    if region.trim().is_empty() {
        return Err("Region cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a meal nutrition value (calories or a macro, in grams)
pub fn validate_macro(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Nutrition value must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Nutrition value cannot be negative".to_string());
    }
    Ok(())
}
