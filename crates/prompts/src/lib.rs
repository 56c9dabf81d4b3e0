//! # HabitMind Prompts
//!
//! Structured prompt construction for the five coaching tools. Each
//! builder validates its parameters (habit ids in range, required text
//! non-empty), then binds a fixed instructional template into a
//! [`PromptPair`](habitmind_core::PromptPair) ready for any backend.

pub mod builders;
pub mod params;

pub use builders::{habit_coach, lesson_plan, problem_solver, reflection, self_assessment};
pub use params::{
    HabitCoachParams, LessonPlanParams, ProblemSolverParams, ReflectionParams,
    SelfAssessmentParams,
};
