pub mod chat_manager;
pub mod components;
pub mod projection;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use crate::app::App;
use crate::ui::screens::{chat::render_chat, sidebar::render_sidebar};

const SIDEBAR_WIDTH: u16 = 36;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_WIDTH),
                Constraint::Min(40),
            ])
            .split(area);

        render_sidebar(self, columns[0], buf);
        render_chat(self, columns[1], buf);
    }
}
