use super::ChatManager;

impl ChatManager {
    /// Hand over the typed text and empty the input box.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.chat_input)
    }
}
