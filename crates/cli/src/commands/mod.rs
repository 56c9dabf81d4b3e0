//! Command implementations and shared output plumbing.

pub mod habits;

use anyhow::{Context, Result};
use tracing::info;

use habitmind_config::AppConfig;
use habitmind_core::prompt::PromptPair;

/// Invoke the configured backend with a prompt pair and print the result.
pub async fn respond(config: &AppConfig, prompt: PromptPair, json: bool) -> Result<()> {
    let registry = habitmind_backends::build_from_config(config);
    let backend = registry
        .default_backend()
        .with_context(|| format!("no backend registered under `{}`", config.backend))?;

    info!(backend = backend.name(), "invoking backend");
    let response = backend.invoke(prompt.clone()).await?;

    if json {
        let out = serde_json::json!({
            "system_prompt": prompt.system_prompt,
            "user_message": prompt.user_message,
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{response}");
    }

    Ok(())
}
