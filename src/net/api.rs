//! HTTP chat gateway for the stats backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with `GatewayError::Unavailable`, since the
//! request is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are reported as distinct
//! `GatewayError` variants for logging; the view collapses them into one
//! user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::ChatGateway;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;
use super::types::{ChatResponse, GatewayError};
use crate::config::GatewayConfig;

/// `ChatGateway` that posts `{"question": ...}` to the configured endpoint.
#[derive(Clone, Debug)]
pub struct HttpChatGateway {
    endpoint: String,
}

impl HttpChatGateway {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self { endpoint: config.endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request(query: &str) -> ChatRequest {
    ChatRequest { question: query.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_request(query: &str) -> Result<String, GatewayError> {
    serde_json::to_string(&chat_request(query)).map_err(|e| GatewayError::Encode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), GatewayError> {
    if ok { Ok(()) } else { Err(GatewayError::Status(status)) }
}

#[async_trait::async_trait(?Send)]
impl ChatGateway for HttpChatGateway {
    async fn send_message(&self, query: &str) -> Result<ChatResponse, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let body = encode_request(query)?;
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| GatewayError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            check_status(resp.ok(), resp.status())?;
            resp.json::<ChatResponse>()
                .await
                .map_err(|e| GatewayError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(GatewayError::Unavailable)
        }
    }
}
