//! The simulated model backend.
//!
//! Stands in for a real generative backend: classifies the prompt pair,
//! renders the templated response, and resolves after a fixed artificial
//! delay that models network latency. It never fails — the error path on
//! [`Backend::invoke`] exists for real backends substituted at this seam.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use habitmind_core::backend::Backend;
use habitmind_core::error::BackendError;
use habitmind_core::prompt::PromptPair;

use crate::classify::classify;
use crate::respond;

/// Backend that deterministically synthesizes responses in-process.
///
/// Each invocation is an independent future over independently computed
/// results; concurrent calls share no state and need no queue or lock.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    /// The fixed artificial delay applied by default.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Override the artificial delay. Tests use `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn invoke(&self, prompt: PromptPair) -> Result<String, BackendError> {
        debug!(
            backend = self.name(),
            latency_ms = self.latency.as_millis() as u64,
            system_prompt_len = prompt.system_prompt.len(),
            "simulating model invocation"
        );

        tokio::time::sleep(self.latency).await;

        let classification = classify(&prompt);
        debug!(tool = %classification.tool, "classified prompt");

        Ok(respond::render(&classification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> SimulatedBackend {
        SimulatedBackend::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn invoke_never_fails_and_returns_trimmed_markdown() {
        let prompt = PromptPair::new("You are a reflection guide.", "my essay");
        let text = backend().invoke(prompt).await.unwrap();
        assert!(text.starts_with("Thank you for sharing your work."));
        assert_eq!(text, text.trim());
    }

    #[tokio::test]
    async fn unknown_prompts_get_the_fallback() {
        let prompt = PromptPair::new("Talk like a pirate.", "arr");
        let text = backend().invoke(prompt).await.unwrap();
        assert_eq!(text, respond::FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn identical_prompts_yield_identical_responses() {
        let prompt = PromptPair::new("habit coach: thinking flexibly", "q");
        let backend = backend();
        let a = backend.invoke(prompt.clone()).await.unwrap();
        let b = backend.invoke(prompt).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn concurrent_invocations_are_independent() {
        let backend = SimulatedBackend::with_latency(Duration::from_millis(10));
        let prompts = [
            ("You are a habit coach for persisting.", "persisting"),
            ("Create a lesson plan.\n- subject: history", "History"),
            ("problem solver's workshop", "Persisting"),
        ];

        let results = futures::future::join_all(
            prompts
                .iter()
                .map(|(system, _)| backend.invoke(PromptPair::new(*system, "text"))),
        )
        .await;

        for ((_, expected), result) in prompts.iter().zip(results) {
            assert!(result.unwrap().contains(expected));
        }
    }

    #[tokio::test]
    async fn latency_is_applied_on_the_timer_not_the_thread() {
        tokio::time::pause();
        let backend = SimulatedBackend::new();
        let prompt = PromptPair::new("self-assessment review", "answers");

        let invocation = backend.invoke(prompt);
        tokio::pin!(invocation);

        // Nothing resolves before the artificial delay elapses.
        assert!(
            tokio::time::timeout(Duration::from_millis(1499), &mut invocation)
                .await
                .is_err()
        );

        tokio::time::advance(Duration::from_millis(2)).await;
        let text = invocation.await.unwrap();
        assert!(text.starts_with("Thank you for your thoughtful self-assessment."));
    }
}
