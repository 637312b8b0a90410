//! Reply extraction: turn a raw generation response into display text.
//!
//! DESIGN
//! ======
//! Provider responses do not share one shape: the native Gemini payload keeps
//! text under `candidates[0].content.parts`, while compatibility layers and
//! older SDK paths expose a flat `text` or `output_text` field. Each shape is
//! a [`ReplyStrategy`]; strategies are tried in priority order and the first
//! non-empty result wins.
//!
//! TRADE-OFFS
//! ==========
//! When nothing matches, the whole raw response is serialized and returned as
//! the reply. The caller always gets a string, at the cost of possibly showing
//! provider internals (safety blocks, usage metadata) to the end user.

use serde_json::Value;

/// One way of reading text out of a raw response.
pub trait ReplyStrategy: Sync {
    /// Short name used in debug logs.
    fn name(&self) -> &'static str;

    /// Return the text this strategy finds, if any. Empty strings count as
    /// "nothing found" at the call site, so implementations may return them.
    fn extract(&self, raw: &Value) -> Option<String>;
}

/// Concatenated text parts of the first candidate, skipping thought parts.
/// This mirrors the SDK's `text` accessor.
pub struct CandidateText;

/// A top-level `text` string.
pub struct TextField;

/// A top-level `output_text` string.
pub struct OutputTextField;

impl ReplyStrategy for CandidateText {
    fn name(&self) -> &'static str {
        "candidate_text"
    }

    fn extract(&self, raw: &Value) -> Option<String> {
        let parts = raw
            .get("candidates")?
            .as_array()?
            .first()?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let mut out = String::new();
        let mut found = false;
        for part in parts {
            if part.get("thought").and_then(Value::as_bool) == Some(true) {
                continue;
            }
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                out.push_str(text);
                found = true;
            }
        }
        found.then_some(out)
    }
}

impl ReplyStrategy for TextField {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extract(&self, raw: &Value) -> Option<String> {
        raw.get("text")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

impl ReplyStrategy for OutputTextField {
    fn name(&self) -> &'static str {
        "output_text"
    }

    fn extract(&self, raw: &Value) -> Option<String> {
        raw.get("output_text")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Strategies in priority order.
pub static DEFAULT_STRATEGIES: [&dyn ReplyStrategy; 3] = [&CandidateText, &TextField, &OutputTextField];

/// Extract reply text with [`DEFAULT_STRATEGIES`]. Never fails.
#[must_use]
pub fn extract_reply(raw: &Value) -> String {
    extract_with(&DEFAULT_STRATEGIES, raw)
}

/// Extract reply text with a caller-supplied strategy list, falling back to
/// the serialized raw response.
#[must_use]
pub fn extract_with(strategies: &[&dyn ReplyStrategy], raw: &Value) -> String {
    for strategy in strategies {
        if let Some(text) = strategy.extract(raw).filter(|t| !t.is_empty()) {
            tracing::debug!(strategy = strategy.name(), "reply extracted");
            return text;
        }
    }
    tracing::debug!("no strategy matched; returning serialized response");
    raw.to_string()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
