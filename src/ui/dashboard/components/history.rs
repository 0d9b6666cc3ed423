//! Historical news panel component
//!
//! Only rendered while the historical slice is non-empty

use super::super::state::DashboardState;
use super::headlines::headline_lines;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_history(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = headline_lines(&state.historical_news, Color::LightGreen);

    let block = Block::default()
        .title("HISTORICAL NEWS  [C] Clear")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
