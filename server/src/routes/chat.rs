//! Chat route.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a JSON envelope with a fixed `error` string. Only
//! upstream and body-parse failures carry a `detail`; the widget never shows
//! it, it exists for whoever reads the network tab or the logs.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::chat::{self, ChatError};
use crate::state::AppState;

pub const MISSING_KEY_ERROR: &str = "Missing Gemini API key on server";
pub const EMPTY_MESSAGE_ERROR: &str = "Empty message";
pub const SERVER_ERROR: &str = "Server error";

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// `POST /api/chat`: answer one message with the persona-prompted model.
///
/// The body is taken as raw bytes so that malformed JSON is reported through
/// the chat envelope instead of Axum's extractor rejection. A body that cannot
/// be buffered at all (over the router's body limit, or a broken stream) goes
/// through the same envelope; the configuration error still wins.
///
/// # Errors
///
/// Returns a [`ChatError`], rendered as a JSON error envelope.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let body = match body {
        Ok(body) => body,
        Err(_) if state.llm.is_none() => return Err(ChatError::NotConfigured),
        Err(rejection) => return Err(ChatError::InvalidBody(rejection.body_text())),
    };
    let reply = chat::handle_chat(state.llm.as_deref(), &state.persona, &body).await?;
    Ok(Json(ChatReply { reply }))
}

pub(crate) fn chat_error_to_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
        ChatError::NotConfigured | ChatError::InvalidBody(_) | ChatError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn chat_error_envelope(err: &ChatError) -> ErrorEnvelope {
    match err {
        ChatError::NotConfigured => ErrorEnvelope { error: MISSING_KEY_ERROR, detail: None },
        ChatError::EmptyMessage => ErrorEnvelope { error: EMPTY_MESSAGE_ERROR, detail: None },
        ChatError::InvalidBody(detail) => ErrorEnvelope { error: SERVER_ERROR, detail: Some(detail.clone()) },
        ChatError::Llm(e) => ErrorEnvelope { error: SERVER_ERROR, detail: Some(e.to_string()) },
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::Llm(e) => tracing::error!(code = e.error_code(), error = %e, "chat: upstream failure"),
            ChatError::InvalidBody(detail) => tracing::warn!(%detail, "chat: unreadable request body"),
            ChatError::NotConfigured => tracing::warn!("chat: request refused, LLM not configured"),
            ChatError::EmptyMessage => {}
        }
        (chat_error_to_status(&self), Json(chat_error_envelope(&self))).into_response()
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
