use ratatui::style::{Color, Modifier, Style, Stylize};

use crate::session::Role;

/// Bold when the widget takes input, dimmed while it is locked.
pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Assistant => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

pub fn role_prefix(role: Role) -> &'static str {
    match role {
        Role::User => "You: ",
        Role::Assistant => "Assistant: ",
    }
}

/// Header line of a sources block
pub fn sources_header_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)
    }
}

pub fn caption_style() -> Style {
    Style::default().fg(Color::DarkGray).italic()
}
