use super::ChatManager;

impl Default for ChatManager {
    fn default() -> Self {
        Self::new()
    }
}
