//! Conversation history and the request lifecycle of a single chat turn.
//!
//! DESIGN
//! ======
//! `ConversationState` is the only writer of its history. A cycle is
//! `Idle -> Dispatching -> Settled -> Idle`, where `pending` is the whole
//! state: `submit` moves to dispatching and hands back the query to send,
//! `settle` consumes the gateway outcome and returns to idle. Every visible
//! mutation bumps `scroll_seq` so the view can scroll after it re-renders.
//!
//! The caller that receives `Some(query)` from `submit` owns the one gateway
//! call for that cycle; any further `submit` returns `None` until `settle`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatResponse, EvidenceRecord, GatewayError};

/// Bot turn every conversation starts with.
pub const WELCOME_TEXT: &str =
    "Welcome to the NBA Stats Assistant! Ask me about NBA games from the 2023-24 and 2024-25 seasons.";

/// Bot text used when the backend answered without an `answer` field.
pub const NO_ANSWER_TEXT: &str = "No answer provided.";

/// Bot text used for every gateway failure.
pub const GATEWAY_ERROR_TEXT: &str =
    "❌ Error contacting the server. Please make sure the backend is running on port 8000.";

/// Prompts offered as one-click questions.
pub const SUGGESTIONS: [&str; 3] = [
    "Who won Christmas Day 2023?",
    "How many points did Luka score?",
    "Victor Wembanyama debut stats",
];

/// Author of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Short lowercase label, used for CSS modifiers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A citation backing a bot answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvidenceItem {
    pub source_table: String,
    pub record_id: i64,
    pub details: Option<String>,
    pub date: Option<String>,
}

impl From<EvidenceRecord> for EvidenceItem {
    fn from(record: EvidenceRecord) -> Self {
        Self {
            source_table: record.table,
            record_id: record.id,
            details: record.details,
            date: record.date,
        }
    }
}

/// One entry of the conversation. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub evidence: Vec<EvidenceItem>,
}

impl Turn {
    fn user(text: String) -> Self {
        Self { speaker: Speaker::User, text, evidence: Vec::new() }
    }

    fn bot(text: String, evidence: Vec<EvidenceItem>) -> Self {
        Self { speaker: Speaker::Bot, text, evidence }
    }
}

/// State backing the chat view.
///
/// Held in an `RwSignal` owned by the view; history is only reachable
/// read-only, so turns can be appended but never edited or removed.
#[derive(Clone, Debug)]
pub struct ConversationState {
    turns: Vec<Turn>,
    pending: bool,
    pub draft: String,
    pub scroll_seq: u64,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    /// Fresh conversation holding only the welcome turn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::bot(WELCOME_TEXT.to_owned(), Vec::new())],
            pending: false,
            draft: String::new(),
            scroll_seq: 0,
        }
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True while exactly one gateway call is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether `submit` would currently accept the draft.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Accept the draft as a user turn.
    ///
    /// Returns the trimmed query the caller must send exactly once, or `None`
    /// when the draft is blank or a request is already in flight. A rejected
    /// submit leaves the state untouched.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let query = self.draft.trim().to_owned();
        self.turns.push(Turn::user(query.clone()));
        self.draft.clear();
        self.pending = true;
        self.request_scroll();
        Some(query)
    }

    /// Put `suggestion` in the draft and submit it. Ignored while pending.
    pub fn select_suggestion(&mut self, suggestion: &str) -> Option<String> {
        if self.pending {
            return None;
        }
        suggestion.clone_into(&mut self.draft);
        self.submit()
    }

    /// Apply the outcome of the in-flight gateway call.
    ///
    /// Failures become the fixed error turn; the error itself is expected to
    /// have been logged by whoever awaited the gateway.
    pub fn settle(&mut self, outcome: Result<ChatResponse, GatewayError>) {
        let turn = match outcome {
            Ok(resp) => {
                let text = resp.answer.unwrap_or_else(|| NO_ANSWER_TEXT.to_owned());
                let evidence = resp
                    .evidence
                    .unwrap_or_default()
                    .into_iter()
                    .map(EvidenceItem::from)
                    .collect();
                Turn::bot(text, evidence)
            }
            Err(_) => Turn::bot(GATEWAY_ERROR_TEXT.to_owned(), Vec::new()),
        };
        self.turns.push(turn);
        self.pending = false;
        self.request_scroll();
    }

    fn request_scroll(&mut self) {
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }
}
