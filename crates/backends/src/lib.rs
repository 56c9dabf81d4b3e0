//! Backend implementations for HabitMind.
//!
//! All backends implement the `habitmind_core::Backend` trait. The
//! registry selects the configured backend; the simulated backend is the
//! only one shipped, pairing the keyword classifier with the response
//! synthesizer behind an artificial network delay.

pub mod classify;
pub mod registry;
pub mod respond;
pub mod simulated;

pub use classify::classify;
pub use registry::{BackendRegistry, build_from_config};
pub use respond::FALLBACK_RESPONSE;
pub use simulated::SimulatedBackend;
