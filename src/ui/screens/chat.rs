use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

use crate::app::App;
use crate::ui::{
    chat_manager::ChatManager,
    projection::{self, MessageView},
    style::{caption_style, dim_unless_focused, role_prefix, role_style, sources_header_style},
};

pub fn render_chat(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(4),  // Disclaimer
            Constraint::Min(3),     // History
            Constraint::Length(1),  // Spinner / session line
            Constraint::Length(3),  // Input box
        ])
        .split(area);

    Paragraph::new(app.config.chat.title.as_str())
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
        )
        .fg(Color::Green)
        .bold()
        .alignment(Alignment::Center)
        .render(main_layout[0], buf);

    Paragraph::new(format!("ℹ️  {}", app.config.chat.disclaimer))
        .block(
            Block::bordered()
                .title("Info")
                .border_type(BorderType::Rounded)
        )
        .fg(Color::LightBlue)
        .wrap(Wrap { trim: true })
        .render(main_layout[1], buf);

    render_history(app, main_layout[2], buf);
    render_activity(app, main_layout[3], buf);
    render_input(app, main_layout[4], buf);
}

fn render_history(app: &mut App, area: Rect, buf: &mut Buffer) {
    let views = projection::project(app.session.transcript().all());
    let lines = transcript_lines(&views, &app.chat_manager);

    let block = Block::bordered()
        .title("Conversation (↑↓ scroll, Tab sources, Enter open)")
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);

    let history = history_paragraph(lines);
    let max_scroll = history
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);
    app.chat_manager.clamp_scroll(max_scroll);
    let offset = u16::try_from(app.chat_manager.chat_scroll_offset).unwrap_or(u16::MAX);

    history
        .block(block)
        .scroll((offset, 0))
        .render(area, buf);
}

/// Word-wrapped history. Measured before the border is attached so the row
/// count covers the text only.
fn history_paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false })
}

fn render_activity(app: &mut App, area: Rect, buf: &mut Buffer) {
    if app.session.is_waiting() {
        let throbber = Throbber::default()
            .label("🧠 Analyzing documents...")
            .style(Style::default().fg(Color::Cyan))
            .throbber_style(Style::default().fg(Color::Yellow).bold())
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        StatefulWidget::render(throbber, area, buf, &mut app.throbber_state);
        return;
    }

    let session_id = app.session.id().to_string();
    let short_id = session_id.get(..8).unwrap_or(&session_id);
    Line::from(vec![
        Span::styled(" session ", Style::default().fg(Color::DarkGray)),
        Span::styled(short_id.to_string(), Style::default().fg(Color::Gray)),
        Span::styled(
            format!(" • depth {}", app.session.depth().get()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let waiting = app.session.is_waiting();
    let title = if waiting {
        "Waiting for the answer..."
    } else {
        "Ask a question (e.g. What are the main projects?)"
    };
    let cursor = if waiting { "" } else { "▏" };

    Paragraph::new(format!("> {}{}", app.chat_manager.get_input(), cursor))
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
        )
        .style(dim_unless_focused(!waiting, Style::default().fg(Color::Yellow)))
        .render(area, buf);
}

/// Lines for the history pane. Sources blocks are drawn collapsed unless the
/// chat manager has them open.
pub fn transcript_lines(views: &[MessageView<'_>], manager: &ChatManager) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for view in views {
        let mut content = view.content.lines();
        let first_line = content.next().unwrap_or_default().to_string();
        lines.push(Line::from(vec![
            Span::styled(role_prefix(view.role), role_style(view.role)),
            Span::styled(first_line, Style::default().fg(Color::White)),
        ]));
        for line in content {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(line.to_string(), Style::default().fg(Color::White)),
            ]));
        }

        if let Some(details) = &view.details {
            let is_selected = manager.selected_sources == Some(view.index);
            let is_open = manager.is_expanded(view.index);
            let marker = if is_open { "▾" } else { "▸" };
            let hint = match (is_selected, is_open) {
                (true, true) => " [Enter to collapse]",
                (true, false) => " [Enter to expand]",
                (false, _) => "",
            };

            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{marker} 📚 Sources & Details{hint}"),
                    sources_header_style(is_selected),
                ),
            ]));

            if is_open {
                for line in details.sources.lines() {
                    lines.push(Line::from(vec![
                        Span::raw("      "),
                        Span::styled(line.to_string(), Style::default().fg(Color::Gray)),
                    ]));
                }
                if let Some(caption) = &details.caption {
                    lines.push(Line::from(vec![
                        Span::raw("      "),
                        Span::styled(caption.clone(), caption_style()),
                    ]));
                }
            }
        }

        lines.push(Line::from(""));
    }

    lines
}
