mod backspace;
mod clear;
mod cycle_sources;
mod handle_input;
mod new;
mod scroll;
mod take_input;
mod toggle_selected;
mod trait_default;

use std::collections::HashSet;

/// Manages chat UI state that is not part of the conversation itself
#[derive(Debug)]
pub struct ChatManager {
    pub chat_input: String,
    pub chat_scroll_offset: usize,
    /// Keep the newest message in view
    pub follow_tail: bool,
    /// Transcript index of the highlighted sources block
    pub selected_sources: Option<usize>,
    /// Transcript indices whose sources block is open
    pub expanded_sources: HashSet<usize>,
}
