//! The five prompt builders, one per coaching tool.
//!
//! Each builder is a pure function from validated parameters to a
//! [`PromptPair`]. The system prompt embeds everything the classifier
//! later needs — the literal tool-type phrase and the habit id markers
//! (`#<id>` or `#<id1>, <id2>, ...`) — and, for single-habit tools, the
//! habit's catalog name. The user message carries the learner's free text
//! unmodified.
//!
//! Builders are deterministic: identical inputs produce byte-identical
//! prompt pairs.

use habitmind_core::error::Result;
use habitmind_core::prompt::PromptPair;
use tracing::debug;

use crate::params::{
    HabitCoachParams, LessonPlanParams, ProblemSolverParams, ReflectionParams,
    SelfAssessmentParams, join_ids,
};

/// Build the Habit Coach prompt pair.
pub fn habit_coach(habit_id: u8, user_level: &str, user_question: &str) -> Result<PromptPair> {
    let params = HabitCoachParams::new(habit_id, user_level, user_question)?;
    debug!(habit_id, "building habit coach prompt");

    let system_prompt = format!(
        r#"You are an expert educator serving as a habit coach for the "Habits of Mind" framework developed by Arthur Costa and Bena Kallick.

Your role is to help the student develop the habit of mind: #{id} ({name}).

IMPORTANT: Instead of directly answering questions or solving problems for the student, your goal is to guide them through a thinking process that helps them develop this specific habit. You should:

1. Ask Socratic questions that prompt deeper thinking
2. Provide scaffolding that guides their thinking process
3. Suggest strategies they can apply themselves
4. Offer examples that illustrate the habit in action
5. Encourage the student to notice their own thinking

The student's experience level is: {level}

Remember, your goal is not to give answers, but to help them develop their own thinking skills through this habit of mind."#,
        id = params.habit.id,
        name = params.habit.name,
        level = params.user_level,
    );

    Ok(PromptPair::new(system_prompt, params.user_question))
}

/// Build the Reflection prompt pair.
pub fn reflection(habit_id: u8, student_work: &str) -> Result<PromptPair> {
    let params = ReflectionParams::new(habit_id, student_work)?;
    debug!(habit_id, "building reflection prompt");

    let system_prompt = format!(
        r#"You are an AI reflection guide specialized in helping students develop the "Habits of Mind" framework by Arthur Costa and Bena Kallick.

Your task is to analyze the student's work and provide feedback specifically related to Habit #{id} ({name}).

IMPORTANT GUIDELINES:
- Do NOT evaluate the factual correctness of their work
- Focus ONLY on how they're applying (or could better apply) the specific habit of mind
- Provide specific observations about their thinking process
- Ask 2-3 reflective questions to help them become more aware of their thinking
- Suggest 1-2 concrete strategies to strengthen this habit in future work
- Be encouraging, positive, and growth-minded

The student's work to analyze follows in their message."#,
        id = params.habit.id,
        name = params.habit.name,
    );

    Ok(PromptPair::new(system_prompt, params.student_work))
}

/// Build the Lesson Plan prompt pair. The learning objective doubles as
/// the user message.
pub fn lesson_plan(
    habit_ids: &[u8],
    subject: &str,
    grade: &str,
    objective: &str,
) -> Result<PromptPair> {
    let params = LessonPlanParams::new(habit_ids, subject, grade, objective)?;
    debug!(habits = %join_ids(&params.habit_ids), "building lesson plan prompt");

    let system_prompt = format!(
        r#"You are an expert curriculum designer specializing in integrating the "Habits of Mind" framework by Arthur Costa and Bena Kallick into classroom instruction.

Your task is to create a lesson plan outline that explicitly integrates Habits of Mind #{ids} into a lesson on:
- Subject: {subject}
- Grade level: {grade}
- Learning objective: {objective}

IMPORTANT: Your lesson plan should include:
1. A brief introduction connecting the habits to the content
2. 2-3 learning activities that explicitly develop these habits while teaching the content
3. Suggested questions teachers can ask to promote these specific habits
4. A formative assessment strategy that evaluates both content knowledge AND application of these habits
5. Extension ideas for students to further practice these habits

Focus on being practical, concrete, and classroom-ready. Provide a lesson framework that any teacher could easily implement."#,
        ids = join_ids(&params.habit_ids),
        subject = params.subject,
        grade = params.grade,
        objective = params.objective,
    );

    Ok(PromptPair::new(system_prompt, params.objective))
}

/// Build the Problem Solver prompt pair.
pub fn problem_solver(problem: &str, selected_habits: &[u8]) -> Result<PromptPair> {
    let params = ProblemSolverParams::new(problem, selected_habits)?;
    debug!(habits = %join_ids(&params.selected_habits), "building problem solver prompt");

    let system_prompt = format!(
        r#"You are an AI thinking coach running a problem solver's workshop grounded in the "Habits of Mind" framework by Arthur Costa and Bena Kallick.

Your task is to guide the student through solving a problem using specific Habits of Mind (#{ids}).

IMPORTANT: You must NOT solve the problem for them. Instead:
1. Help them recognize which habits would be most useful for this specific problem
2. Provide thinking prompts for each relevant habit that guides their approach
3. Ask questions that help them apply these habits to the problem
4. Suggest strategies aligned with these habits that they can try
5. Encourage them to step back and examine their problem-solving process

For each habit you discuss, explicitly name it so they learn to recognize which habit they're using.

The problem they're working on follows in their message."#,
        ids = join_ids(&params.selected_habits),
    );

    Ok(PromptPair::new(system_prompt, params.problem))
}

/// Build the Self-Assessment prompt pair.
pub fn self_assessment(habit_id: u8, user_responses: &str) -> Result<PromptPair> {
    let params = SelfAssessmentParams::new(habit_id, user_responses)?;
    debug!(habit_id, "building self-assessment prompt");

    let system_prompt = format!(
        r#"You are an AI coach specialized in helping students develop the "Habits of Mind" framework by Arthur Costa and Bena Kallick.

Your task is to provide personalized feedback on the student's self-assessment of Habit #{id} ({name}).

Based on their responses, you should:
1. Identify 2-3 specific strengths in how they're currently applying this habit
2. Suggest 2-3 specific growth opportunities to develop this habit further
3. Recommend 1-2 concrete, actionable strategies they can practice immediately
4. Provide a closing question to deepen their understanding of this habit
5. Connect this habit to real-world applications relevant to students

Your feedback should be encouraging, growth-oriented, and specific to their responses.

The student's self-assessment responses follow in their message."#,
        id = params.habit.id,
        name = params.habit.name,
    );

    Ok(PromptPair::new(system_prompt, params.user_responses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_coach_prompt_embeds_its_id_marker() {
        for id in 1..=16 {
            let pair = habit_coach(id, "beginner", "How do I start?").unwrap();
            assert!(pair.system_prompt.contains(&format!("#{id}")));
            assert!(!pair.system_prompt.is_empty());
            assert!(!pair.user_message.is_empty());
        }
    }

    #[test]
    fn coach_prompt_embeds_phrase_and_habit_name() {
        let pair = habit_coach(4, "beginner", "How do I solve this?").unwrap();
        let lower = pair.system_prompt.to_lowercase();
        assert!(lower.contains("habit coach"));
        assert!(lower.contains("habit of mind: #4"));
        assert!(lower.contains("thinking flexibly"));
        assert_eq!(pair.user_message, "How do I solve this?");
    }

    #[test]
    fn builders_are_deterministic() {
        let a = lesson_plan(&[2, 7], "Math", "5th", "Fractions").unwrap();
        let b = lesson_plan(&[7, 2, 2], "Math", "5th", "Fractions").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lesson_plan_embeds_subject_marker_and_id_list() {
        let pair = lesson_plan(&[2, 7], "Math", "5th", "Fractions").unwrap();
        let lower = pair.system_prompt.to_lowercase();
        assert!(lower.contains("lesson plan"));
        assert!(lower.contains("subject: math"));
        assert!(pair.system_prompt.contains("#2, 7"));
    }

    #[test]
    fn problem_solver_embeds_phrase_and_carries_problem() {
        let pair = problem_solver("Design a bridge from straws", &[1, 4, 8]).unwrap();
        let lower = pair.system_prompt.to_lowercase();
        assert!(lower.contains("problem solver"));
        assert!(pair.system_prompt.contains("#1, 4, 8"));
        assert_eq!(pair.user_message, "Design a bridge from straws");
    }

    #[test]
    fn each_prompt_contains_exactly_one_tool_phrase() {
        let phrases = [
            "habit coach",
            "reflection",
            "lesson plan",
            "problem solver",
            "self-assessment",
        ];
        let pairs = [
            habit_coach(1, "beginner", "q").unwrap(),
            reflection(1, "work").unwrap(),
            lesson_plan(&[1], "Math", "5th", "obj").unwrap(),
            problem_solver("p", &[1]).unwrap(),
            self_assessment(1, "r").unwrap(),
        ];
        for (i, pair) in pairs.iter().enumerate() {
            let lower = pair.system_prompt.to_lowercase();
            let hits: Vec<_> = phrases.iter().filter(|p| lower.contains(**p)).collect();
            assert_eq!(hits.len(), 1, "prompt {i} matched {hits:?}");
        }
    }

    #[test]
    fn invalid_ids_propagate_from_every_builder() {
        assert!(habit_coach(0, "beginner", "q").is_err());
        assert!(reflection(17, "work").is_err());
        assert!(lesson_plan(&[1, 17], "Math", "5th", "obj").is_err());
        assert!(problem_solver("p", &[42]).is_err());
        assert!(self_assessment(255, "r").is_err());
    }
}
