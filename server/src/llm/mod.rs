//! LLM: generation adapter for the portfolio chat endpoint.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables ([`config::LlmConfig`]).
//! [`gemini::GeminiClient`] is the only provider and implements
//! [`LlmGenerate`] directly, so handlers depend only on the trait and tests
//! can swap in mocks. Turning the raw response into display text is the job
//! of [`extract`].

pub mod config;
pub mod extract;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::LlmGenerate;
