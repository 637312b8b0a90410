//! Chat widget state machine.
//!
//! DESIGN
//! ======
//! The widget is either idle or waiting on exactly one reply. The waiting
//! state carries the id of the placeholder assistant message, so there is no
//! way to represent two pending sends or a pending send without a
//! placeholder. Errors are not a state: they end up as the placeholder's
//! content and the machine returns to idle.
//!
//! A send is split into [`ChatState::begin_submit`] (append messages, lock
//! input) and [`ChatState::resolve`] (fill the placeholder, unlock). Signal
//! based view code calls the halves around its own `spawn_local`; everything
//! else can use [`ChatState::submit`].

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::api::{ApiError, ChatReply, ChatTransport};
use crate::util::clock::now_ms;

/// Placeholder content while a reply is in flight.
pub const PLACEHOLDER_TEXT: &str = "\u{2026}thinking";
/// Shown when the server answers without reply text.
pub const EMPTY_REPLY_TEXT: &str = "(empty response)";
/// Shown for every failure; the underlying error is never displayed.
pub const ERROR_TEXT: &str = "Error contacting AI service.";

const FIRST_GENERATED_ID: u64 = 1000;

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique within this session only.
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch; display only.
    pub timestamp: f64,
}

/// Fixed conversation shown before the visitor types anything.
pub fn sample_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            role: Role::Assistant,
            content: "Hi! I'm the embedded assistant. Ask me about this portfolio or technologies used.".into(),
            timestamp: 0.0,
        },
        ChatMessage { id: 2, role: Role::User, content: "What stack powers this site?".into(), timestamp: 1.0 },
        ChatMessage {
            id: 3,
            role: Role::Assistant,
            content: "Next.js App Router, TypeScript, Tailwind, shadcn/ui, Framer Motion & Lucide icons.".into(),
            timestamp: 2.0,
        },
    ]
}

// =============================================================================
// SEND STATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending {
        placeholder_id: u64,
    },
}

/// An accepted submit waiting for its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub placeholder_id: u64,
    /// Trimmed text to send.
    pub text: String,
}

// =============================================================================
// CHAT STATE
// =============================================================================

/// State for the chat widget.
///
/// In the Leptos view this sits inside an `RwSignal`; the struct itself is
/// plain data.
#[derive(Clone, Debug)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    input: String,
    open: bool,
    send_state: SendState,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            open: false,
            send_state: SendState::Idle,
            next_id: FIRST_GENERATED_ID,
        }
    }
}

impl ChatState {
    /// Empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Conversation pre-seeded with [`sample_messages`].
    pub fn with_samples() -> Self {
        Self { messages: sample_messages(), ..Self::default() }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn send_state(&self) -> SendState {
        self.send_state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.send_state, SendState::Sending { .. })
    }

    /// Whether the send button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.input.trim().is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, role: Role, content: String) -> u64 {
        let id = self.next_id();
        self.messages.push(ChatMessage { id, role, content, timestamp: now_ms() });
        id
    }

    /// Accept the current input for sending.
    ///
    /// Returns `None` without touching anything when a send is already in
    /// flight or the input is blank. Otherwise appends the user message and
    /// the placeholder, clears the input, and enters [`SendState::Sending`].
    pub fn begin_submit(&mut self) -> Option<PendingSend> {
        if self.is_sending() {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();

        self.push(Role::User, text.clone());
        self.input.clear();
        let placeholder_id = self.push(Role::Assistant, PLACEHOLDER_TEXT.to_owned());
        self.send_state = SendState::Sending { placeholder_id };
        Some(PendingSend { placeholder_id, text })
    }

    /// Fill the placeholder for `pending` and return to idle.
    ///
    /// Returns `false` and changes nothing if `pending` is not the send this
    /// state is waiting on.
    pub fn resolve(&mut self, pending: &PendingSend, outcome: Result<ChatReply, ApiError>) -> bool {
        if self.send_state != (SendState::Sending { placeholder_id: pending.placeholder_id }) {
            return false;
        }

        let content = match outcome {
            Ok(ChatReply { reply }) => reply
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| EMPTY_REPLY_TEXT.to_owned()),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("chat request failed: {e}");
                let _ = e;
                ERROR_TEXT.to_owned()
            }
        };

        if let Some(msg) = self
            .messages
            .iter_mut()
            .rev()
            .find(|m| m.id == pending.placeholder_id)
        {
            msg.content = content;
        }
        self.send_state = SendState::Idle;
        true
    }

    /// Send the current input through `transport` and apply the result.
    ///
    /// Returns `false` if the submit was a no-op (pending send or blank
    /// input); the transport is not called in that case.
    pub async fn submit<T: ChatTransport>(&mut self, transport: &T) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = transport.send(&pending.text).await;
        self.resolve(&pending, outcome)
    }
}
