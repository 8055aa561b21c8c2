use thiserror::Error;

use super::{ConversationSession, Message, SessionId};
use crate::api::{QueryResult, ReasoningDepth};

/// Everything the dispatcher needs for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRequest {
    pub question: String,
    pub depth: ReasoningDepth,
    pub session_id: SessionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("a question is already waiting for an answer")]
    TurnInProgress,

    #[error("no question is waiting for an answer")]
    NoPendingTurn,

    #[error("answer belongs to session {0}, which was reset")]
    StaleTurn(SessionId),
}

impl ConversationSession {
    /// Record the user's question as typed and hand back the request to send.
    pub fn begin_turn(&mut self, question: impl Into<String>) -> Result<TurnRequest, TurnError> {
        if self.pending.is_some() {
            return Err(TurnError::TurnInProgress);
        }

        let question = question.into();
        if question.trim().is_empty() {
            return Err(TurnError::EmptyQuestion);
        }

        let request = TurnRequest {
            question: question.clone(),
            depth: self.depth,
            session_id: self.id.clone(),
        };

        self.transcript.append(Message::new_user(question));
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Fold the answer for the outstanding turn into the transcript.
    pub fn complete_turn(&mut self, session_id: &SessionId, result: QueryResult) -> Result<(), TurnError> {
        if session_id != &self.id {
            return Err(TurnError::StaleTurn(session_id.clone()));
        }
        if self.pending.take().is_none() {
            return Err(TurnError::NoPendingTurn);
        }

        self.transcript.append(Message::from(result));
        Ok(())
    }
}
