//! Backend trait — the abstraction over generative-model backends.
//!
//! A Backend accepts a [`PromptPair`] and eventually produces a markdown
//! response string. The shipped implementation simulates the model; a real
//! API-backed implementation substitutes here without touching callers.
//!
//! Contract notes:
//! - `invoke` must not block the caller: it is an async operation that may
//!   complete on a timer or on network I/O.
//! - Concurrent invocations are independent; implementations must not
//!   share mutable state between calls.
//! - The simulated backend always succeeds; real backends report
//!   [`BackendError`] and callers already handle it.

use async_trait::async_trait;

use crate::error::BackendError;
use crate::prompt::PromptPair;

/// The core backend trait.
#[async_trait]
pub trait Backend: Send + Sync {
    /// A human-readable name for this backend (e.g., "simulated").
    fn name(&self) -> &str;

    /// Send a prompt pair and get the response text.
    async fn invoke(&self, prompt: PromptPair) -> Result<String, BackendError>;
}
