//! Top headlines panel component

use super::super::state::DashboardState;
use super::super::utils::format_published;
use crate::data::Headline;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Lines for a headline list: bold title, dim source tag and timestamp.
pub fn headline_lines(items: &[Headline], accent: Color) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(items.len() * 2);
    for headline in items {
        lines.push(Line::from(vec![Span::styled(
            headline.title.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )]));

        let mut meta = vec![Span::styled(
            format!("[{}]", headline.source),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(published) = &headline.published {
            meta.push(Span::styled(
                format!(" {}", format_published(published)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(meta));
    }
    lines
}

pub fn render_headlines(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = if state.loading {
        vec![Line::styled(
            "Loading latest news...",
            Style::default().fg(Color::Gray),
        )]
    } else if state.headlines.is_empty() {
        vec![Line::styled("—", Style::default().fg(Color::DarkGray))]
    } else {
        headline_lines(&state.headlines, Color::White)
    };

    let block = Block::default()
        .title("TOP HEADLINES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
