//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts;
use crate::data::FetchSettings;
use crate::environment::Environment;
use crate::ui::dashboard::state::{InputMode, SettingsField};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::workers::core::{Command, Update};
use crate::workers::history::HistoryQuery;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
pub struct App {
    /// All dashboard view state.
    state: DashboardState,

    /// Receives updates from the fetch worker.
    update_receiver: mpsc::Receiver<Update>,

    /// Sends fetch commands to the worker.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts shutdown signal to the worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        settings: FetchSettings,
        update_receiver: mpsc::Receiver<Update>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: DashboardState::new(environment, settings, Instant::now(), ui_config),
            update_receiver,
            command_sender,
            shutdown_sender,
        }
    }

    async fn send_command(&self, command: Command) {
        let _ = self.command_sender.send(command).await;
    }

    async fn send_refresh(&self) {
        self.send_command(Command::Refresh(self.state.settings.clone()))
            .await;
    }

    /// Keys in normal mode. Returns `true` when the app should exit.
    async fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                let _ = self.shutdown_sender.send(());
                return true;
            }
            KeyCode::Char('r') => self.send_refresh().await,
            KeyCode::Char('y') => {
                self.send_command(Command::History(HistoryQuery::Yesterday))
                    .await;
            }
            KeyCode::Char('d') => {
                self.state.input_buffer.clear();
                self.state.input_mode = InputMode::Date;
            }
            KeyCode::Char('e') => {
                self.state.draft = self.state.settings.clone();
                self.state.input_buffer = self.state.draft.city.clone();
                self.state.input_mode = InputMode::Settings(SettingsField::City);
            }
            KeyCode::Char('s') => {
                self.state.selected_source = self.state.selected_source.next();
            }
            KeyCode::Char('l') => {
                self.send_command(Command::History(HistoryQuery::BySource {
                    source: self.state.selected_source,
                    days: cli_consts::DEFAULT_LOOKBACK_DAYS,
                }))
                .await;
            }
            KeyCode::Char('c') => self.state.clear_history(),
            _ => {}
        }
        false
    }

    /// Keys while typing a date. Submit is a no-op on a blank buffer,
    /// mirroring the disabled load button.
    async fn handle_date_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.state.input_buffer.clear();
                self.state.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let date = self.state.input_buffer.trim().to_string();
                if !date.is_empty() {
                    self.send_command(Command::History(HistoryQuery::ByDate(date)))
                        .await;
                    self.state.input_buffer.clear();
                    self.state.input_mode = InputMode::Normal;
                }
            }
            KeyCode::Backspace => {
                self.state.input_buffer.pop();
            }
            KeyCode::Char(c) => self.state.input_buffer.push(c),
            _ => {}
        }
    }

    /// Keys while editing a fetch setting. Enter commits the field and
    /// advances; after the last field the whole draft is applied and a
    /// refresh with the new settings fires.
    async fn handle_settings_key(&mut self, field: SettingsField, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.state.input_buffer.clear();
                self.state.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let value = self.state.input_buffer.trim().to_string();
                if !value.is_empty() {
                    *field_value_mut(&mut self.state.draft, field) = value;
                }
                match field.next() {
                    Some(next) => {
                        self.state.input_buffer = field_value_mut(&mut self.state.draft, next).clone();
                        self.state.input_mode = InputMode::Settings(next);
                    }
                    None => {
                        self.state.settings = self.state.draft.clone();
                        self.state.input_buffer.clear();
                        self.state.input_mode = InputMode::Normal;
                        // Changed inputs trigger a refetch.
                        self.send_refresh().await;
                    }
                }
            }
            KeyCode::Backspace => {
                self.state.input_buffer.pop();
            }
            KeyCode::Char(c) => self.state.input_buffer.push(c),
            _ => {}
        }
    }
}

fn field_value_mut(settings: &mut FetchSettings, field: SettingsField) -> &mut String {
    match field {
        SettingsField::City => &mut settings.city,
        SettingsField::Country => &mut settings.country,
        SettingsField::Coins => &mut settings.coins,
        SettingsField::Currency => &mut settings.currency,
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial combined fetch on startup.
    app.send_refresh().await;

    // UI event loop
    loop {
        // Queue all incoming worker updates for processing
        while let Ok(update) = app.update_receiver.try_recv() {
            app.state.add_update(update);
        }

        // Apply queued updates and advance the animation tick
        app.state.update();

        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(cli_consts::key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match app.state.input_mode.clone() {
                    InputMode::Normal => {
                        if app.handle_normal_key(key.code).await {
                            return Ok(());
                        }
                    }
                    InputMode::Date => app.handle_date_key(key.code).await,
                    InputMode::Settings(field) => app.handle_settings_key(field, key.code).await,
                }
            }
        }
    }
}
