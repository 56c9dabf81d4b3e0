//! Habit domain types.
//!
//! A [`Habit`] is one of the 16 named dispositions from the Costa/Kallick
//! "Habits of Mind" framework. [`HabitId`] is the validated numeric handle
//! the rest of the system passes around; [`CanonicalHabit`] is the closed
//! enumeration the simulated backend classifies prompt text into.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unique identifier for a Habit of Mind. The valid range is the dense
/// 1..=16; construction outside that range fails with `InvalidHabitId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(u8);

impl HabitId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 16;

    /// Validate a raw id.
    pub fn new(id: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(Error::InvalidHabitId { id })
        }
    }

    /// The raw numeric value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single Habit of Mind record as published by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    /// Dense numeric id, 1..=16.
    pub id: u8,

    /// Display name, e.g. "Thinking flexibly".
    pub name: &'static str,

    /// The framework's full description of the habit.
    pub description: &'static str,

    /// Three classroom examples of the habit in action.
    pub examples: [&'static str; 3],
}

/// The closed set of canonical habit identities.
///
/// Each variant carries its canonical lowercase name (as rendered in
/// coaching responses), the substring pattern the classifier scans for,
/// and the one-line coaching description embedded in habit-coach replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalHabit {
    Persisting,
    ManagingImpulsivity,
    ListeningWithUnderstanding,
    ThinkingFlexibly,
    Metacognition,
    StrivingForAccuracy,
    QuestioningAndPosingProblems,
    ApplyingPastKnowledge,
    ThinkingWithClarity,
    GatheringDataThroughSenses,
    CreatingImaginingInnovating,
    RespondingWithWonderment,
    TakingResponsibleRisks,
    FindingHumor,
    ThinkingInterdependently,
    RemainingOpenToContinuousLearning,
}

impl CanonicalHabit {
    /// All 16 habits in catalog order. "Persisting" comes first: it is
    /// both a classifier pattern and the classifier's default.
    pub const ALL: [CanonicalHabit; 16] = [
        CanonicalHabit::Persisting,
        CanonicalHabit::ManagingImpulsivity,
        CanonicalHabit::ListeningWithUnderstanding,
        CanonicalHabit::ThinkingFlexibly,
        CanonicalHabit::Metacognition,
        CanonicalHabit::StrivingForAccuracy,
        CanonicalHabit::QuestioningAndPosingProblems,
        CanonicalHabit::ApplyingPastKnowledge,
        CanonicalHabit::ThinkingWithClarity,
        CanonicalHabit::GatheringDataThroughSenses,
        CanonicalHabit::CreatingImaginingInnovating,
        CanonicalHabit::RespondingWithWonderment,
        CanonicalHabit::TakingResponsibleRisks,
        CanonicalHabit::FindingHumor,
        CanonicalHabit::ThinkingInterdependently,
        CanonicalHabit::RemainingOpenToContinuousLearning,
    ];

    /// Canonical lowercase name as it appears in coaching responses.
    pub fn canonical_name(self) -> &'static str {
        match self {
            CanonicalHabit::Persisting => "persisting",
            CanonicalHabit::ManagingImpulsivity => "managing impulsivity",
            CanonicalHabit::ListeningWithUnderstanding => {
                "listening with understanding and empathy"
            }
            CanonicalHabit::ThinkingFlexibly => "thinking flexibly",
            CanonicalHabit::Metacognition => "thinking about thinking (metacognition)",
            CanonicalHabit::StrivingForAccuracy => "striving for accuracy",
            CanonicalHabit::QuestioningAndPosingProblems => "questioning and posing problems",
            CanonicalHabit::ApplyingPastKnowledge => "applying past knowledge to new situations",
            CanonicalHabit::ThinkingWithClarity => {
                "thinking and communicating with clarity and precision"
            }
            CanonicalHabit::GatheringDataThroughSenses => "gathering data through all senses",
            CanonicalHabit::CreatingImaginingInnovating => "creating, imagining, innovating",
            CanonicalHabit::RespondingWithWonderment => "responding with wonderment and awe",
            CanonicalHabit::TakingResponsibleRisks => "taking responsible risks",
            CanonicalHabit::FindingHumor => "finding humor",
            CanonicalHabit::ThinkingInterdependently => "thinking interdependently",
            CanonicalHabit::RemainingOpenToContinuousLearning => {
                "remaining open to continuous learning"
            }
        }
    }

    /// The substring the classifier matches against a lowercased system
    /// prompt to recover this habit. Patterns are pairwise disjoint over
    /// real prompts; precedence is [`CanonicalHabit::ALL`] order.
    pub fn pattern(self) -> &'static str {
        match self {
            CanonicalHabit::Persisting => "persisting",
            CanonicalHabit::ManagingImpulsivity => "managing impulsivity",
            CanonicalHabit::ListeningWithUnderstanding => "listening with understanding",
            CanonicalHabit::ThinkingFlexibly => "thinking flexibly",
            CanonicalHabit::Metacognition => "metacognition",
            CanonicalHabit::StrivingForAccuracy => "accuracy",
            CanonicalHabit::QuestioningAndPosingProblems => "questioning",
            CanonicalHabit::ApplyingPastKnowledge => "past knowledge",
            CanonicalHabit::ThinkingWithClarity => "clarity",
            CanonicalHabit::GatheringDataThroughSenses => "senses",
            CanonicalHabit::CreatingImaginingInnovating => "creating",
            CanonicalHabit::RespondingWithWonderment => "wonderment",
            CanonicalHabit::TakingResponsibleRisks => "risks",
            CanonicalHabit::FindingHumor => "humor",
            CanonicalHabit::ThinkingInterdependently => "interdependently",
            CanonicalHabit::RemainingOpenToContinuousLearning => "continuous learning",
        }
    }

    /// One-line coaching description embedded in habit-coach responses.
    pub fn coaching_description(self) -> &'static str {
        match self {
            CanonicalHabit::Persisting => {
                "sticking to a task until completion, even when challenges arise"
            }
            CanonicalHabit::ManagingImpulsivity => {
                "taking time to think before acting and considering outcomes"
            }
            CanonicalHabit::ListeningWithUnderstanding => {
                "making an effort to understand others' perspectives"
            }
            CanonicalHabit::ThinkingFlexibly => {
                "considering alternative viewpoints and approaches to problems"
            }
            CanonicalHabit::Metacognition => {
                "being aware of your own thoughts and thinking processes"
            }
            CanonicalHabit::StrivingForAccuracy => {
                "checking your work and setting high standards"
            }
            CanonicalHabit::QuestioningAndPosingProblems => {
                "developing a curious mindset and asking deep questions"
            }
            CanonicalHabit::ApplyingPastKnowledge => {
                "using what you already know to tackle new challenges"
            }
            CanonicalHabit::ThinkingWithClarity => {
                "being clear in your language and avoiding vagueness"
            }
            CanonicalHabit::GatheringDataThroughSenses => {
                "using all available information sources to understand"
            }
            CanonicalHabit::CreatingImaginingInnovating => {
                "generating new ideas and approaches"
            }
            CanonicalHabit::RespondingWithWonderment => "finding joy and curiosity in learning",
            CanonicalHabit::TakingResponsibleRisks => {
                "being willing to try new approaches and learn from mistakes"
            }
            CanonicalHabit::FindingHumor => {
                "maintaining perspective and enjoying the learning process"
            }
            CanonicalHabit::ThinkingInterdependently => "collaborating effectively with others",
            CanonicalHabit::RemainingOpenToContinuousLearning => {
                "always being ready to learn and grow"
            }
        }
    }
}

impl std::fmt::Display for CanonicalHabit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Fallback description for any name outside the canonical set.
pub const FALLBACK_DESCRIPTION: &str = "developing effective thinking patterns";

/// Total description lookup over arbitrary habit names.
///
/// Canonical names map to their fixed descriptions; any other input maps
/// to [`FALLBACK_DESCRIPTION`]. Never fails.
pub fn describe_habit(name: &str) -> &'static str {
    CanonicalHabit::ALL
        .iter()
        .find(|h| h.canonical_name() == name)
        .map(|h| h.coaching_description())
        .unwrap_or(FALLBACK_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_id_accepts_full_range() {
        for id in 1..=16 {
            assert_eq!(HabitId::new(id).unwrap().get(), id);
        }
    }

    #[test]
    fn habit_id_rejects_out_of_range() {
        assert_eq!(HabitId::new(0), Err(Error::InvalidHabitId { id: 0 }));
        assert_eq!(HabitId::new(17), Err(Error::InvalidHabitId { id: 17 }));
    }

    #[test]
    fn description_lookup_is_total_over_canonical_names() {
        for habit in CanonicalHabit::ALL {
            assert_eq!(
                describe_habit(habit.canonical_name()),
                habit.coaching_description()
            );
        }
    }

    #[test]
    fn description_lookup_falls_back_for_unknown_names() {
        assert_eq!(describe_habit("procrastinating"), FALLBACK_DESCRIPTION);
        assert_eq!(describe_habit(""), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn patterns_are_substrings_of_their_canonical_names() {
        // A prompt embedding the canonical name must classify to the same
        // habit under first-match precedence.
        for habit in CanonicalHabit::ALL {
            assert!(habit.canonical_name().contains(habit.pattern()));
            let first = CanonicalHabit::ALL
                .iter()
                .find(|h| habit.canonical_name().contains(h.pattern()))
                .copied();
            assert_eq!(first, Some(habit));
        }
    }
}
