//! Fitness Planner application library
//!
//! Wires the shared domain core to the outside world: configuration,
//! credential storage, the generation collaborator, and the session
//! orchestrator that the CLI front end drives.

pub mod config;
pub mod credentials;
pub mod error;
pub mod generator;
pub mod session;
