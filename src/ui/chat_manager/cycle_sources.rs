use super::ChatManager;

impl ChatManager {
    /// Move the highlight to the next (`direction > 0`) or previous sources
    /// block. `available` holds transcript indices in display order.
    pub fn cycle_sources(&mut self, direction: i32, available: &[usize]) {
        if available.is_empty() {
            self.selected_sources = None;
            return;
        }

        let len = available.len() as i32;
        let position = self
            .selected_sources
            .and_then(|selected| available.iter().position(|&i| i == selected));

        let next = match position {
            None if direction > 0 => 0,
            None => len - 1,
            Some(index) => (index as i32 + direction.signum() + len) % len,
        };
        self.selected_sources = Some(available[next as usize]);
    }

    pub fn clear_selection(&mut self) {
        self.selected_sources = None;
    }
}
