use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::api::ReasoningDepth;
use crate::app::App;
use crate::ui::components::UiComponent;

pub fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(8),     // Caption, depth, reset, contact
            Constraint::Length(3),  // API status
            Constraint::Length(6),  // Controls
        ])
        .split(area);

    Paragraph::new(app.config.chat.sidebar_title.as_str())
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
        )
        .fg(Color::Magenta)
        .bold()
        .alignment(Alignment::Center)
        .render(layout[0], buf);

    Paragraph::new(sidebar_lines(app))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
        )
        .wrap(Wrap { trim: true })
        .render(layout[1], buf);

    UiComponent::status(app.health).render(layout[2], buf);

    UiComponent::help("Enter send • Tab sources • ←/→ depth • ↑/↓ scroll • Ctrl+L clear • Esc quit")
        .render(layout[3], buf);
}

fn sidebar_lines(app: &App) -> Vec<Line<'static>> {
    let depth = app.session.depth().get();
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::styled(app.config.chat.caption.clone(), dim.italic()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reasoning Depth ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("◀ {depth}/{} ▶", ReasoningDepth::MAX), Style::default().fg(Color::Cyan)),
        ]),
        Line::styled(depth_gauge(depth), Style::default().fg(Color::Cyan)),
        Line::styled("Higher values let the AI search longer and deeper.", dim),
        Line::from(""),
        Line::from(vec![
            Span::styled("🗑️  Ctrl+L ", Style::default().fg(Color::Red).bold()),
            Span::raw("Clear Conversation"),
        ]),
    ];

    if !app.config.chat.contact.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Contact:", Style::default().add_modifier(Modifier::BOLD)));
        lines.extend(app.config.chat.contact.iter().map(|c| Line::from(c.clone())));
    }

    lines
}

fn depth_gauge(depth: u8) -> String {
    (ReasoningDepth::MIN..=ReasoningDepth::MAX)
        .map(|step| if step <= depth { '●' } else { '○' })
        .collect()
}
