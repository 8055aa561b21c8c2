use std::collections::HashSet;

use super::ChatManager;

impl ChatManager {
    pub fn new() -> Self {
        Self {
            chat_input: String::new(),
            chat_scroll_offset: 0,
            follow_tail: true,
            selected_sources: None,
            expanded_sources: HashSet::new(),
        }
    }
}
