// src/session/mod.rs
//! Conversation state for one client run: session id, transcript, reasoning
//! depth and the single outstanding turn.

mod reset;
mod transcript;
mod turn;

use std::fmt;

pub use transcript::{Message, Role, Transcript};
pub use turn::{TurnError, TurnRequest};

use crate::api::ReasoningDepth;

/// Opaque token the backend uses to correlate turns of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fresh random (v4 UUID) session id.
pub fn new_session_id() -> SessionId {
    SessionId(uuid::Uuid::new_v4().to_string())
}

#[derive(Debug)]
pub struct ConversationSession {
    id: SessionId,
    transcript: Transcript,
    depth: ReasoningDepth,
    pending: Option<TurnRequest>,
}

impl ConversationSession {
    pub fn new(greeting: impl Into<String>, depth: ReasoningDepth) -> Self {
        Self {
            id: new_session_id(),
            transcript: Transcript::new(greeting),
            depth,
            pending: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn depth(&self) -> ReasoningDepth {
        self.depth
    }

    pub fn set_depth(&mut self, depth: ReasoningDepth) {
        self.depth = depth;
    }

    /// True while a question has been sent and its answer is not in yet.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }
}
