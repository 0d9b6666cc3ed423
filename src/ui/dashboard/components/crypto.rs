//! Crypto prices card component

use super::super::state::DashboardState;
use super::super::utils::{first_price, format_price};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// One row per coin, showing the first currency value present. No currency
/// suffix.
pub fn render_crypto(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = match &state.crypto {
        Some(snapshot) => snapshot
            .iter()
            .map(|(coin, prices)| {
                let value = first_price(prices)
                    .map(format_price)
                    .unwrap_or_else(|| "—".to_string());
                Line::from(vec![
                    Span::styled(
                        format!("{} ", coin.replace('-', " ")),
                        Style::default().fg(Color::LightYellow),
                    ),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            })
            .collect(),
        None => vec![Line::styled("—", Style::default().fg(Color::DarkGray))],
    };

    let block = Block::default()
        .title("CRYPTO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
