//! Chat service: request body → persona prompt → LLM → reply text.
//!
//! DESIGN
//! ======
//! Stateless: every call builds its prompt from the persona block and the
//! single incoming message. No conversation history is kept or sent. The
//! HTTP mapping of [`ChatError`] lives in `routes::chat`.

use serde_json::Value;
use tracing::{debug, info};

use crate::llm::extract::extract_reply;
use crate::llm::types::LlmError;
use crate::llm::LlmGenerate;

/// Messages longer than this are cut before trimming and validation.
pub const MAX_MESSAGE_CHARS: usize = 4000;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("LLM not configured")]
    NotConfigured,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("empty message")]
    EmptyMessage,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Handle one chat request body and return the reply text.
///
/// The configuration check runs before the body is looked at, and the LLM is
/// only called once the message passes validation.
///
/// # Errors
///
/// See [`ChatError`]; every variant is terminal for the request.
pub async fn handle_chat(llm: Option<&dyn LlmGenerate>, persona: &str, body: &[u8]) -> Result<String, ChatError> {
    let llm = llm.ok_or(ChatError::NotConfigured)?;

    let body: Value = serde_json::from_slice(body).map_err(|e| ChatError::InvalidBody(e.to_string()))?;
    let user_text = truncate_chars(message_field(&body), MAX_MESSAGE_CHARS);
    info!(message_len = user_text.len(), model = llm.model(), "chat: message received");

    if user_text.trim().is_empty() {
        debug!("chat: rejected empty message");
        return Err(ChatError::EmptyMessage);
    }

    let prompt = build_prompt(persona, user_text);
    let raw = llm.generate(&prompt).await?;
    let reply = extract_reply(&raw);
    debug!(reply_len = reply.len(), "chat: reply produced");
    Ok(reply)
}

// =============================================================================
// HELPERS
// =============================================================================

/// The `message` field when it is a string; anything else reads as empty.
fn message_field(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// First `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Persona block, a blank line, then the user turn and the generation cue.
/// The persona is stored without its trailing newline, so the blank line is
/// added here.
fn build_prompt(persona: &str, user_text: &str) -> String {
    format!("{persona}\n\nUser: {user_text}\nAssistant:")
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
