//! Dashboard controls panel component
//!
//! Renders the current fetch settings, the selected history source, and the
//! active text-entry prompt

use super::super::state::{DashboardState, InputMode};
use crate::environment::Environment;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_controls(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Weather: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}, {}", state.settings.city, state.settings.country),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled("   Crypto: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} vs {}", state.settings.coins, state.settings.currency),
            Style::default().fg(Color::LightYellow),
        ),
    ]));

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    lines.push(Line::from(vec![
        Span::styled("History source: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.selected_source.to_string(),
            Style::default().fg(Color::LightMagenta),
        ),
        Span::styled("   Env: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.environment.to_string(), Style::default().fg(env_color)),
    ]));

    // Active prompt, when a text entry is in progress.
    match &state.input_mode {
        InputMode::Normal => {}
        InputMode::Date => {
            lines.push(Line::from(vec![
                Span::styled(
                    "Date (YYYY-MM-DD): ",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}_", state.input_buffer)),
            ]));
        }
        InputMode::Settings(field) => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Edit {}: ", field.label()),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}_", state.input_buffer)),
            ]));
        }
    }

    let block = Block::default()
        .title("CONTROLS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
