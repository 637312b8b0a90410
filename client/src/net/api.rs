//! `/api/chat` client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: [`HttpTransport`] reports [`ApiError::Unavailable`], since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`ApiError`], but the chat state machine collapses all
//! of them into one generic message. The server's `error`/`detail` fields are
//! never decoded here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Deserialize;
#[cfg(any(test, feature = "hydrate"))]
use serde::Serialize;

pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Success body of `POST /api/chat`. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("malformed chat response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Seam between the state machine and the network.
pub trait ChatTransport {
    /// Send one message and wait for the reply envelope.
    fn send(&self, message: &str) -> impl Future<Output = Result<ChatReply, ApiError>>;
}

/// Browser transport posting JSON to the chat endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(CHAT_ENDPOINT)
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .body(request_body(message)?)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_reply(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_body(message: &str) -> Result<String, ApiError> {
    serde_json::to_string(&ChatRequest { message }).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a success body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON object.
pub fn parse_reply(body: &str) -> Result<ChatReply, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
