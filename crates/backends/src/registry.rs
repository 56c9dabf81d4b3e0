//! Backend registry — selects the backend that serves invocations.
//!
//! This is the substitution point for a real model backend: register it
//! under its own name and point the config at it. Only the simulated
//! backend ships today.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use habitmind_core::backend::Backend;

use crate::simulated::SimulatedBackend;

/// Routes invocations to the configured backend.
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn Backend>>,
    default_backend: String,
}

impl BackendRegistry {
    /// Create a new registry with a default backend name.
    pub fn new(default_backend: impl Into<String>) -> Self {
        Self {
            backends: HashMap::new(),
            default_backend: default_backend.into(),
        }
    }

    /// Register a backend.
    pub fn register(&mut self, name: impl Into<String>, backend: Arc<dyn Backend>) {
        self.backends.insert(name.into(), backend);
    }

    /// Get the default backend.
    pub fn default_backend(&self) -> Option<Arc<dyn Backend>> {
        self.backends.get(&self.default_backend).cloned()
    }

    /// Get a specific backend by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Backend>> {
        self.backends.get(name).cloned()
    }

    /// List all registered backend names.
    pub fn list(&self) -> Vec<&str> {
        self.backends.keys().map(|s| s.as_str()).collect()
    }
}

/// Build the registry from configuration.
pub fn build_from_config(config: &habitmind_config::AppConfig) -> BackendRegistry {
    let mut registry = BackendRegistry::new(&config.backend);

    let latency = Duration::from_millis(config.simulated.latency_ms);
    registry.register("simulated", Arc::new(SimulatedBackend::with_latency(latency)));

    registry
}
