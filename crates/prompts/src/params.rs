//! Validated parameter structs for the prompt builders.
//!
//! Each tool binds its template from a parameter struct that is checked
//! up front: habit ids must be in range, required free-text fields must be
//! non-empty after trimming, and multi-habit selections must not be empty.
//! A builder therefore either fails fast or renders a complete prompt —
//! never a prompt with blank sections.

use habitmind_core::catalog;
use habitmind_core::error::{Error, Result};
use habitmind_core::habit::{Habit, HabitId};

/// Parameters for the Habit Coach tool.
#[derive(Debug, Clone)]
pub struct HabitCoachParams {
    pub(crate) habit: &'static Habit,
    pub(crate) user_level: String,
    pub(crate) user_question: String,
}

impl HabitCoachParams {
    pub fn new(habit_id: u8, user_level: &str, user_question: &str) -> Result<Self> {
        Ok(Self {
            habit: catalog::lookup(habit_id)?,
            user_level: required("user_level", user_level)?,
            user_question: required("user_question", user_question)?,
        })
    }
}

/// Parameters for the Reflection tool.
#[derive(Debug, Clone)]
pub struct ReflectionParams {
    pub(crate) habit: &'static Habit,
    pub(crate) student_work: String,
}

impl ReflectionParams {
    pub fn new(habit_id: u8, student_work: &str) -> Result<Self> {
        Ok(Self {
            habit: catalog::lookup(habit_id)?,
            student_work: required("student_work", student_work)?,
        })
    }
}

/// Parameters for the Lesson Plan tool.
#[derive(Debug, Clone)]
pub struct LessonPlanParams {
    pub(crate) habit_ids: Vec<HabitId>,
    pub(crate) subject: String,
    pub(crate) grade: String,
    pub(crate) objective: String,
}

impl LessonPlanParams {
    pub fn new(habit_ids: &[u8], subject: &str, grade: &str, objective: &str) -> Result<Self> {
        Ok(Self {
            habit_ids: habit_id_set("habit_ids", habit_ids)?,
            subject: required("subject", subject)?,
            grade: required("grade", grade)?,
            objective: required("objective", objective)?,
        })
    }
}

/// Parameters for the Problem Solver tool.
#[derive(Debug, Clone)]
pub struct ProblemSolverParams {
    pub(crate) problem: String,
    pub(crate) selected_habits: Vec<HabitId>,
}

impl ProblemSolverParams {
    pub fn new(problem: &str, selected_habits: &[u8]) -> Result<Self> {
        Ok(Self {
            problem: required("problem", problem)?,
            selected_habits: habit_id_set("selected_habits", selected_habits)?,
        })
    }
}

/// Parameters for the Self-Assessment tool.
#[derive(Debug, Clone)]
pub struct SelfAssessmentParams {
    pub(crate) habit: &'static Habit,
    pub(crate) user_responses: String,
}

impl SelfAssessmentParams {
    pub fn new(habit_id: u8, user_responses: &str) -> Result<Self> {
        Ok(Self {
            habit: catalog::lookup(habit_id)?,
            user_responses: required("user_responses", user_responses)?,
        })
    }
}

/// Check a required free-text field. The payload itself is carried
/// unmodified; only the emptiness check trims.
fn required(field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::EmptyInput { field });
    }
    Ok(value.to_string())
}

/// Validate a habit-id selection: non-empty, every id in range, sorted
/// ascending and deduplicated so set inputs format deterministically.
fn habit_id_set(field: &'static str, ids: &[u8]) -> Result<Vec<HabitId>> {
    if ids.is_empty() {
        return Err(Error::EmptyInput { field });
    }
    let mut set = ids
        .iter()
        .map(|&id| HabitId::new(id))
        .collect::<Result<Vec<_>>>()?;
    set.sort_unstable();
    set.dedup();
    Ok(set)
}

/// Render a habit-id selection as the `<id1>, <id2>, ...` marker body.
pub(crate) fn join_ids(ids: &[HabitId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
