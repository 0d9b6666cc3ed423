//! Dashboard state management
//!
//! Contains the main dashboard state struct and input-mode enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::data::{CryptoSnapshot, FetchSettings, Headline, NewsSource, Quote, Weather};
use crate::environment::Environment;
use crate::events::Event;
use crate::ui::app::UIConfig;
use crate::workers::core::Update;

use std::collections::VecDeque;
use std::time::Instant;

/// Which fetch setting a text edit currently targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SettingsField {
    City,
    Country,
    Coins,
    Currency,
}

impl SettingsField {
    pub fn label(self) -> &'static str {
        match self {
            SettingsField::City => "city",
            SettingsField::Country => "country",
            SettingsField::Coins => "coins",
            SettingsField::Currency => "currency",
        }
    }

    /// Next field in edit order; `None` after the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            SettingsField::City => Some(SettingsField::Country),
            SettingsField::Country => Some(SettingsField::Coins),
            SettingsField::Coins => Some(SettingsField::Currency),
            SettingsField::Currency => None,
        }
    }
}

/// Text-entry mode for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a date for the by-date history query.
    Date,
    /// Editing one fetch setting; Enter advances to the next field.
    Settings(SettingsField),
}

/// All view state for the briefing dashboard.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Current fetch settings; every refresh is parameterized by these.
    pub settings: FetchSettings,
    /// The source the next by-source history query will target.
    pub selected_source: NewsSource,

    /// Whether a combined refresh is in flight.
    pub loading: bool,
    /// Current top headlines. Replaced wholesale on each refresh.
    pub headlines: Vec<Headline>,
    /// Current weather, absent until the first successful fetch.
    pub weather: Option<Weather>,
    /// Current crypto price snapshot, absent until the first successful fetch.
    pub crypto: Option<CryptoSnapshot>,
    /// Quote of the day, absent until the first successful fetch.
    pub quote: Option<Quote>,
    /// Historical news slice. The panel is only shown while non-empty.
    pub historical_news: Vec<Headline>,

    /// Queue of worker updates waiting to be applied.
    pub pending_updates: VecDeque<Update>,
    /// Activity logs for display.
    pub activity_logs: VecDeque<Event>,

    /// Text-entry state.
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Settings draft being edited; committed as a whole on the last field.
    pub draft: FetchSettings,

    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        settings: FetchSettings,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            start_time,
            draft: settings.clone(),
            settings,
            selected_source: NewsSource::Bbc,
            loading: false,
            headlines: Vec::new(),
            weather: None,
            crypto: None,
            quote: None,
            historical_news: Vec::new(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a worker update to the processing queue
    pub fn add_update(&mut self, update: Update) {
        self.pending_updates.push_back(update);
    }

    /// Empties the historical news slice locally. No network call.
    pub fn clear_history(&mut self) {
        self.historical_news.clear();
    }
}
