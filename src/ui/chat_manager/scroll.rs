use super::ChatManager;

impl ChatManager {
    pub fn scroll_up(&mut self) {
        self.follow_tail = false;
        self.chat_scroll_offset = self.chat_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll_offset += 1;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow_tail = true;
    }

    /// Called at render time once the height of the history is known.
    /// Scrolling past the end re-attaches to the tail.
    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        if self.follow_tail || self.chat_scroll_offset >= max_scroll {
            self.follow_tail = true;
            self.chat_scroll_offset = max_scroll;
        }
    }
}
