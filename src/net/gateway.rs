//! The backend seam: anything that can answer a chat query.
//!
//! The view receives an `Arc<dyn ChatGateway>` through context instead of
//! building its transport, so tests can drive it with a mock.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use super::types::{ChatResponse, GatewayError};

/// Async chat backend.
///
/// Futures are `?Send`: browser transports are single-threaded, and calls are
/// awaited on the UI task that issued them.
#[async_trait::async_trait(?Send)]
pub trait ChatGateway: Send + Sync {
    /// Send one query and wait for its answer.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for transport failures, non-2xx responses,
    /// or bodies that do not decode as a [`ChatResponse`].
    async fn send_message(&self, query: &str) -> Result<ChatResponse, GatewayError>;
}

/// Run one gateway call, logging the failure reason before handing back
/// the outcome.
pub async fn exchange<G>(gateway: &G, query: &str) -> Result<ChatResponse, GatewayError>
where
    G: ChatGateway + ?Sized,
{
    let outcome = gateway.send_message(query).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("chat gateway error: {e}");
    }
    outcome
}
