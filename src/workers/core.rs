//! Core worker types: commands in, updates out

use crate::data::{FetchSettings, Headline};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::workers::history::HistoryQuery;
use crate::workers::refresher::RefreshOutcome;
use tokio::sync::mpsc;

/// What the UI asks the worker to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the combined four-resource refresh with the given settings.
    Refresh(FetchSettings),
    /// Run one of the historical news queries.
    History(HistoryQuery),
}

/// What the worker delivers back to the UI.
///
/// Updates are applied in arrival order; overlapping refreshes are not
/// cancelled, so the last outcome to arrive wins per slice.
#[derive(Debug)]
pub enum Update {
    /// Refresh in flight. Always followed by `Loading(false)` once every
    /// request has settled.
    Loading(bool),
    /// Outcome of a combined refresh, one result per resource.
    Refreshed(RefreshOutcome),
    /// Replacement for the historical news slice.
    History(Vec<Headline>),
    /// Diagnostic event for the activity log.
    Activity(Event),
}

/// Common update sending utilities for workers
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<Update>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<Update>) -> Self {
        Self { sender }
    }

    /// Send a generic update
    pub async fn send(&self, update: Update) {
        let _ = self.sender.send(update).await;
    }

    pub async fn send_refresher_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Update::Activity(Event::refresher_with_level(
                message, event_type, log_level,
            )))
            .await;
    }

    pub async fn send_history_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Update::Activity(Event::history_with_level(
                message, event_type, log_level,
            )))
            .await;
    }
}
