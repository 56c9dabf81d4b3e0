//! # HabitMind Core
//!
//! Domain types, traits, and error definitions for the HabitMind coaching
//! engine. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The backend seam is a trait here; implementations live in their own
//! crate. This enables:
//! - Swapping the simulated backend for a real model via configuration
//! - Easy testing with stub backends
//! - Clean dependency graph (all crates depend inward on core)

pub mod backend;
pub mod catalog;
pub mod error;
pub mod habit;
pub mod prompt;

// Re-export key types at crate root for ergonomics
pub use backend::Backend;
pub use error::{BackendError, Error, Result};
pub use habit::{CanonicalHabit, Habit, HabitId, describe_habit, FALLBACK_DESCRIPTION};
pub use prompt::{Classification, PromptPair, Subject, ToolKind};
