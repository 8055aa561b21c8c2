use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::api::ApiHealth;

use super::UiComponent;

impl UiComponent {
    /// API status badge. `None` until the first probe comes back.
    pub fn status(health: Option<ApiHealth>) -> Paragraph<'static> {
        let (text, color) = match health {
            Some(ApiHealth::Connected) => (ApiHealth::Connected.label(), Color::Green),
            Some(ApiHealth::Unstable) => (ApiHealth::Unstable.label(), Color::Yellow),
            Some(ApiHealth::Unreachable) => (ApiHealth::Unreachable.label(), Color::Red),
            None => ("⏳ Checking API...", Color::DarkGray),
        };

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(" Status ")
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
    }
}
