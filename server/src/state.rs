//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup: the optional LLM client (absent when the API key
//! is not configured) and the persona block.

use std::sync::Arc;

use crate::llm::LlmGenerate;
use crate::services::persona::Persona;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the API key is not configured.
    pub llm: Option<Arc<dyn LlmGenerate>>,
    /// Persona block prepended to every prompt.
    pub persona: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmGenerate>>, persona: &Persona) -> Self {
        Self { llm, persona: Arc::clone(&persona.text) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
