use super::{ConversationSession, new_session_id};
use crate::log_info;

impl ConversationSession {
    /// Start over: new session id, transcript back to the greeting.
    ///
    /// An answer still in flight for the old id is rejected as stale when it
    /// arrives.
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.id, new_session_id());
        self.transcript.reset();
        self.pending = None;
        log_info!("Session {} reset, now {}", previous, self.id);
    }
}
