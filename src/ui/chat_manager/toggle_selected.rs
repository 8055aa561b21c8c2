use super::ChatManager;

impl ChatManager {
    /// Open or close the highlighted sources block. Returns false when
    /// nothing is highlighted.
    pub fn toggle_selected(&mut self) -> bool {
        let Some(index) = self.selected_sources else {
            return false;
        };
        if !self.expanded_sources.remove(&index) {
            self.expanded_sources.insert(index);
        }
        true
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded_sources.contains(&index)
    }
}
