//! Quote of the day card component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_quote(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = match &state.quote {
        Some(quote) => {
            let mut lines = vec![Line::styled(
                format!("\u{201c}{}\u{201d}", quote.text),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::ITALIC),
            )];
            if let Some(author) = &quote.author {
                lines.push(Line::styled(
                    format!("— {}", author),
                    Style::default().fg(Color::Gray),
                ));
            }
            lines
        }
        None => vec![Line::styled("—", Style::default().fg(Color::DarkGray))],
    };

    let block = Block::default()
        .title("QUOTE OF THE DAY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
