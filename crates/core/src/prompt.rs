//! Prompt and classification value objects.
//!
//! A [`PromptPair`] is the two-part instruction format consumed by a
//! backend: a system prompt carrying the tool identity and habit markers,
//! and a user message carrying the learner's free text. These are created
//! per call and have no identity beyond it.

use serde::{Deserialize, Serialize};

use crate::habit::CanonicalHabit;

/// The two-part prompt consumed by a (real or simulated) backend.
///
/// Invariant: both parts are non-empty. The system prompt always embeds a
/// literal tool-type phrase and, where applicable, the habit id(s) as
/// `#<id>` or `#<id1>, <id2>, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    /// Instructional framing for the backend.
    pub system_prompt: String,

    /// The learner's free-text payload, carried unmodified.
    pub user_message: String,
}

impl PromptPair {
    pub fn new(system_prompt: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
        }
    }
}

/// The five supported coaching interactions, plus the unknown fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    HabitCoach,
    Reflection,
    LessonPlan,
    ProblemSolver,
    SelfAssessment,
    Unknown,
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ToolKind::HabitCoach => "habit coach",
            ToolKind::Reflection => "reflection",
            ToolKind::LessonPlan => "lesson plan",
            ToolKind::ProblemSolver => "problem solver",
            ToolKind::SelfAssessment => "self-assessment",
            ToolKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Lesson subjects the classifier can recover from a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    English,
    History,
    /// The default when no subject marker is present.
    Science,
}

impl Subject {
    /// Canonical lowercase form, matching the `subject: <name>` markers.
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::English => "english",
            Subject::History => "history",
            Subject::Science => "science",
        }
    }

    /// Capitalized form used in lesson-plan titles.
    pub fn title_case(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Science => "Science",
        }
    }
}

/// What the classifier recovered from a prompt pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Which tool the prompt belongs to. `Unknown` when no tool phrase
    /// matched; that is policy, not an error.
    pub tool: ToolKind,

    /// The habit recovered from the system prompt (habit-coach prompts).
    pub habit: Option<CanonicalHabit>,

    /// The subject recovered from the system prompt (lesson-plan prompts).
    pub subject: Option<Subject>,
}

impl Classification {
    /// A classification carrying only a tool kind.
    pub fn tool(tool: ToolKind) -> Self {
        Self {
            tool,
            habit: None,
            subject: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_kind_displays_its_classifier_phrase() {
        assert_eq!(ToolKind::HabitCoach.to_string(), "habit coach");
        assert_eq!(ToolKind::SelfAssessment.to_string(), "self-assessment");
    }

    #[test]
    fn subject_title_case_matches_lowercase_form() {
        for subject in [Subject::Math, Subject::English, Subject::History, Subject::Science] {
            assert_eq!(
                subject.title_case().to_lowercase(),
                subject.as_str().to_lowercase()
            );
        }
    }
}
