//! Weather card component

use super::super::state::DashboardState;
use super::super::utils::format_temperature;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_weather(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = match &state.weather {
        Some(weather) => vec![
            Line::styled(
                weather.city.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format_temperature(weather.temperature),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                weather.description.clone(),
                Style::default().fg(Color::Gray),
            ),
        ],
        None => vec![Line::styled("—", Style::default().fg(Color::DarkGray))],
    };

    let block = Block::default()
        .title("WEATHER")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
