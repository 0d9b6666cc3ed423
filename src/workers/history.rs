//! Historical news queries: yesterday, by date, by source

use super::core::{Update, UpdateSender};
use crate::api::BriefingApi;
use crate::data::NewsSource;
use crate::events::EventType;
use crate::logging::LogLevel;
use std::sync::Arc;

/// One of the three narrower news queries. Each replaces the same
/// historical-news slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryQuery {
    /// Implicit "yesterday" archive query.
    Yesterday,
    /// Explicit date, `YYYY-MM-DD`. Required non-empty.
    ByDate(String),
    /// Named source with a lookback window in days.
    BySource { source: NewsSource, days: u32 },
}

impl HistoryQuery {
    fn describe(&self) -> String {
        match self {
            HistoryQuery::Yesterday => "yesterday's news".to_string(),
            HistoryQuery::ByDate(date) => format!("news for {}", date),
            HistoryQuery::BySource { source, days } => {
                format!("{} news ({} days)", source, days)
            }
        }
    }
}

/// Runs one historical query. On failure the slice is left unchanged: the
/// error goes to the activity log and nothing else happens. No loading
/// indicator is raised.
pub async fn run_history_fetch(
    api: Arc<dyn BriefingApi>,
    query: HistoryQuery,
    updates: UpdateSender,
) {
    let result = match &query {
        HistoryQuery::Yesterday => api.fetch_yesterday_news().await,
        HistoryQuery::ByDate(date) => {
            if date.trim().is_empty() {
                updates
                    .send_history_event(
                        "A date is required to load news by date".to_string(),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
                return;
            }
            api.fetch_news_by_date(date).await
        }
        HistoryQuery::BySource { source, days } => api.fetch_news_by_source(*source, *days).await,
    };

    match result {
        Ok(items) => {
            updates
                .send_history_event(
                    format!("Loaded {} items of {}", items.len(), query.describe()),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
            updates.send(Update::History(items)).await;
        }
        Err(e) => {
            log::error!("Error fetching {}: {}", query.describe(), e);
            updates
                .send_history_event(
                    format!("Error fetching {}: {}", query.describe(), e),
                    EventType::Error,
                    LogLevel::Error,
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBriefingApi;
    use crate::api::error::ApiError;
    use crate::data::Headline;
    use mockall::predicate::eq;
    use tokio::sync::mpsc;

    fn archived_headlines() -> Vec<Headline> {
        vec![
            Headline {
                source: "BBC".to_string(),
                title: "From the archive".to_string(),
                link: "https://example.com/archive".to_string(),
                published: Some("2024-01-15T08:30:00Z".to_string()),
            },
            Headline {
                source: "Al Jazeera".to_string(),
                title: "Another archived story".to_string(),
                link: String::new(),
                published: None,
            },
        ]
    }

    fn json_error() -> ApiError {
        ApiError::Json(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    async fn collect_updates(
        api: MockBriefingApi,
        query: HistoryQuery,
    ) -> Vec<Update> {
        let (sender, mut receiver) = mpsc::channel(16);
        run_history_fetch(Arc::new(api), query, UpdateSender::new(sender)).await;

        let mut updates = Vec::new();
        while let Ok(update) = receiver.try_recv() {
            updates.push(update);
        }
        updates
    }

    fn history_payload(updates: &[Update]) -> Option<&Vec<Headline>> {
        updates.iter().find_map(|update| match update {
            Update::History(items) => Some(items),
            _ => None,
        })
    }

    #[tokio::test]
    /// The yesterday query replaces the slice with the returned items.
    async fn yesterday_replaces_history_slice() {
        let mut api = MockBriefingApi::new();
        api.expect_fetch_yesterday_news()
            .times(1)
            .returning(|| Ok(archived_headlines()));

        let updates = collect_updates(api, HistoryQuery::Yesterday).await;
        assert_eq!(history_payload(&updates), Some(&archived_headlines()));
    }

    #[tokio::test]
    /// The typed date is passed through literally.
    async fn by_date_uses_the_literal_date() {
        let mut api = MockBriefingApi::new();
        api.expect_fetch_news_by_date()
            .with(eq("2024-01-15"))
            .times(1)
            .returning(|_| Ok(archived_headlines()));

        let query = HistoryQuery::ByDate("2024-01-15".to_string());
        let updates = collect_updates(api, query).await;
        assert_eq!(history_payload(&updates), Some(&archived_headlines()));
    }

    #[tokio::test]
    /// A blank date never reaches the network.
    async fn blank_date_is_rejected_without_a_request() {
        // No expectation on the mock: any call would panic the test.
        let api = MockBriefingApi::new();

        let query = HistoryQuery::ByDate("   ".to_string());
        let updates = collect_updates(api, query).await;
        assert!(history_payload(&updates).is_none());
        assert!(updates.iter().any(|update| matches!(
            update,
            Update::Activity(event) if event.event_type == EventType::Error
        )));
    }

    #[tokio::test]
    /// The source query carries the default seven-day window.
    async fn by_source_uses_default_window() {
        let mut api = MockBriefingApi::new();
        api.expect_fetch_news_by_source()
            .with(eq(NewsSource::Bbc), eq(7u32))
            .times(1)
            .returning(|_, _| Ok(archived_headlines()));

        let query = HistoryQuery::BySource {
            source: NewsSource::Bbc,
            days: 7,
        };
        let updates = collect_updates(api, query).await;
        assert_eq!(history_payload(&updates), Some(&archived_headlines()));
    }

    #[tokio::test]
    /// On failure the slice is untouched and the error goes to the log.
    async fn failure_leaves_slice_unchanged() {
        let mut api = MockBriefingApi::new();
        api.expect_fetch_yesterday_news()
            .returning(|| Err(json_error()));

        let updates = collect_updates(api, HistoryQuery::Yesterday).await;
        assert!(history_payload(&updates).is_none());
        assert!(updates.iter().any(|update| matches!(
            update,
            Update::Activity(event) if event.event_type == EventType::Error
        )));
    }
}
