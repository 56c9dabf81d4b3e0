//! Keyword classification of prompt pairs.
//!
//! Classification is two-stage and case-insensitive over the lowercased
//! system prompt. Each stage is a single first-match scan over an explicit
//! ordered `(pattern, tag)` table, so precedence is visible data rather
//! than control flow:
//!
//! 1. Tool dispatch over the five tool-identifying phrases; no match is
//!    `Unknown` (a policy default, not an error).
//! 2. Habit extraction for habit-coach prompts over the 16 habit patterns
//!    in [`CanonicalHabit::ALL`] order; default `Persisting`.
//! 3. Subject extraction for lesson-plan prompts over the three
//!    `subject: <name>` markers; default `Science`.

use habitmind_core::habit::CanonicalHabit;
use habitmind_core::prompt::{Classification, PromptPair, Subject, ToolKind};

/// Ordered tool dispatch table. First match wins.
const TOOL_PATTERNS: [(&str, ToolKind); 5] = [
    ("habit coach", ToolKind::HabitCoach),
    ("reflection", ToolKind::Reflection),
    ("lesson plan", ToolKind::LessonPlan),
    ("problem solver", ToolKind::ProblemSolver),
    ("self-assessment", ToolKind::SelfAssessment),
];

/// Ordered subject marker table. First match wins.
const SUBJECT_MARKERS: [(&str, Subject); 3] = [
    ("subject: math", Subject::Math),
    ("subject: english", Subject::English),
    ("subject: history", Subject::History),
];

/// Scan an ordered pattern table; the first pattern contained in
/// `haystack` yields its tag.
fn first_match<T>(haystack: &str, table: impl IntoIterator<Item = (&'static str, T)>) -> Option<T> {
    table
        .into_iter()
        .find(|(pattern, _)| haystack.contains(pattern))
        .map(|(_, tag)| tag)
}

/// Classify a prompt pair.
///
/// The user message is accepted alongside the system prompt so that
/// content-aware extraction (reflection, problem solver) can slot in
/// later; today only the system prompt is consulted.
pub fn classify(prompt: &PromptPair) -> Classification {
    let system = prompt.system_prompt.to_lowercase();

    let Some(tool) = first_match(&system, TOOL_PATTERNS) else {
        return Classification::tool(ToolKind::Unknown);
    };

    match tool {
        ToolKind::HabitCoach => Classification {
            tool,
            habit: Some(extract_habit(&system)),
            subject: None,
        },
        ToolKind::LessonPlan => Classification {
            tool,
            habit: None,
            subject: Some(extract_subject(&system)),
        },
        _ => Classification::tool(tool),
    }
}

/// Recover the habit named in a lowercased system prompt. Defaults to
/// persisting when no pattern matches.
fn extract_habit(system: &str) -> CanonicalHabit {
    first_match(system, CanonicalHabit::ALL.map(|h| (h.pattern(), h)))
        .unwrap_or(CanonicalHabit::Persisting)
}

/// Recover the lesson subject from a lowercased system prompt. Defaults
/// to science when no marker matches.
fn extract_subject(system: &str) -> Subject {
    first_match(system, SUBJECT_MARKERS).unwrap_or(Subject::Science)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(system: &str) -> PromptPair {
        PromptPair::new(system, "user text")
    }

    #[test]
    fn dispatches_each_tool_phrase() {
        let cases = [
            ("You are a HABIT COACH for students.", ToolKind::HabitCoach),
            ("You are a reflection guide.", ToolKind::Reflection),
            ("Create a lesson plan outline.", ToolKind::LessonPlan),
            ("Welcome to the problem solver's workshop.", ToolKind::ProblemSolver),
            ("Review this self-assessment.", ToolKind::SelfAssessment),
        ];
        for (system, expected) in cases {
            assert_eq!(classify(&pair(system)).tool, expected, "{system}");
        }
    }

    #[test]
    fn unmatched_prompt_is_unknown_not_an_error() {
        let result = classify(&pair("Tell me a story about turtles."));
        assert_eq!(result.tool, ToolKind::Unknown);
        assert_eq!(result.habit, None);
        assert_eq!(result.subject, None);
    }

    #[test]
    fn first_listed_tool_wins_on_overlap() {
        // Not expected from real builders, but the tie-break is contractual.
        let result = classify(&pair("habit coach running a reflection session"));
        assert_eq!(result.tool, ToolKind::HabitCoach);
    }

    #[test]
    fn extracts_each_habit_from_its_canonical_name() {
        for habit in CanonicalHabit::ALL {
            let system = format!(
                "You are a habit coach. Focus on the habit of mind: {}.",
                habit.canonical_name()
            );
            let result = classify(&pair(&system));
            assert_eq!(result.habit, Some(habit), "{}", habit.canonical_name());
        }
    }

    #[test]
    fn coach_prompt_without_habit_pattern_defaults_to_persisting() {
        let result = classify(&pair("You are a habit coach. Help the student."));
        assert_eq!(result.habit, Some(CanonicalHabit::Persisting));
    }

    #[test]
    fn extracts_subject_markers_with_science_default() {
        let cases = [
            ("lesson plan\n- subject: math", Subject::Math),
            ("lesson plan\n- Subject: English", Subject::English),
            ("lesson plan\n- subject: history", Subject::History),
            ("lesson plan\n- subject: basket weaving", Subject::Science),
        ];
        for (system, expected) in cases {
            assert_eq!(classify(&pair(system)).subject, Some(expected), "{system}");
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let prompt = pair("habit coach focused on thinking flexibly");
        assert_eq!(classify(&prompt), classify(&prompt));
    }

    #[test]
    fn habit_extraction_ignores_the_user_message() {
        let prompt = PromptPair::new(
            "You are a habit coach helping with striving for accuracy.",
            "I keep persisting but my answers are wrong.",
        );
        assert_eq!(
            classify(&prompt).habit,
            Some(CanonicalHabit::StrivingForAccuracy)
        );
    }
}
