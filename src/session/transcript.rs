// src/session/transcript.rs

use crate::api::QueryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the chat. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub sources: Option<String>,
    pub score: Option<f64>,
    pub confidence: Option<String>,
}

impl Message {
    pub fn new_user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: None,
            score: None,
            confidence: None,
        }
    }

    pub fn new_assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            ..Self::new_user(content)
        }
    }
}

impl From<QueryResult> for Message {
    fn from(result: QueryResult) -> Self {
        Self {
            role: Role::Assistant,
            content: result.answer,
            sources: result.sources,
            score: result.score,
            confidence: result.confidence,
        }
    }
}

/// Ordered chat history, seeded with an assistant greeting.
#[derive(Debug, Clone)]
pub struct Transcript {
    greeting: String,
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut transcript = Self {
            greeting: greeting.into(),
            messages: Vec::new(),
        };
        transcript.reset();
        transcript
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop everything and put the greeting back.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(Message::new_assistant(self.greeting.clone()));
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
