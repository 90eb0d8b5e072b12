//! Wire schema for the chat backend.
//!
//! The backend may omit or null out either response field; both are
//! `Option` so a sparse body still decodes and the state layer applies
//! defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Answer returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub evidence: Option<Vec<EvidenceRecord>>,
}

/// A database row the backend cites for its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub table: String,
    pub id: i64,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Why a gateway call failed.
///
/// Only used for diagnostics: the view shows the same message for all of them.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("invalid chat response: {0}")]
    Decode(String),
    #[error("invalid chat request: {0}")]
    Encode(String),
    #[error("chat gateway not available in this build")]
    Unavailable,
}
