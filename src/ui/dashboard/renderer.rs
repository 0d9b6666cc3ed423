//! Dashboard main renderer

use super::components::{
    controls, crypto, footer, header, headlines, history, logs, quote, weather,
};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(20),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    controls::render_controls(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[2]);

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Fill(1),
            Constraint::Length(6),
        ])
        .split(content_chunks[0]);

    weather::render_weather(f, card_chunks[0], state);
    crypto::render_crypto(f, card_chunks[1], state);
    quote::render_quote(f, card_chunks[2], state);

    // The historical panel only exists while its slice is non-empty.
    if state.historical_news.is_empty() {
        headlines::render_headlines(f, content_chunks[1], state);
    } else {
        let news_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_chunks[1]);
        headlines::render_headlines(f, news_chunks[0], state);
        history::render_history(f, news_chunks[1], state);
    }

    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);
}
