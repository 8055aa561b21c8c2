use super::ChatManager;

impl ChatManager {
    /// Forget view state tied to the old transcript.
    pub fn clear(&mut self) {
        self.chat_input.clear();
        self.chat_scroll_offset = 0;
        self.follow_tail = true;
        self.selected_sources = None;
        self.expanded_sources.clear();
    }
}
