//! The combined four-resource refresh

use super::core::{Update, UpdateSender};
use crate::api::BriefingApi;
use crate::api::error::ApiError;
use crate::data::{CryptoSnapshot, FetchSettings, Headline, Quote, Weather};
use crate::events::EventType;
use crate::logging::LogLevel;
use std::sync::Arc;

/// One `Result` per resource. A failed resource leaves its slice untouched
/// when the outcome is applied; the others still land.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub headlines: Result<Vec<Headline>, ApiError>,
    pub weather: Result<Weather, ApiError>,
    pub crypto: Result<CryptoSnapshot, ApiError>,
    pub quote: Result<Quote, ApiError>,
}

impl RefreshOutcome {
    /// Names and errors of the resources that failed, for diagnostics.
    pub fn failures(&self) -> Vec<(&'static str, &ApiError)> {
        let mut failures = Vec::new();
        if let Err(e) = &self.headlines {
            failures.push(("news", e));
        }
        if let Err(e) = &self.weather {
            failures.push(("weather", e));
        }
        if let Err(e) = &self.crypto {
            failures.push(("crypto", e));
        }
        if let Err(e) = &self.quote {
            failures.push(("quote", e));
        }
        failures
    }
}

/// Issues the four GETs concurrently and waits for every one to settle.
/// No short-circuit on first failure, no retries.
pub async fn refresh_all(api: &dyn BriefingApi, settings: &FetchSettings) -> RefreshOutcome {
    let (headlines, weather, crypto, quote) = tokio::join!(
        api.fetch_headlines(),
        api.fetch_weather(&settings.city, &settings.country),
        api.fetch_crypto(&settings.coins, &settings.currency),
        api.fetch_quote(),
    );
    RefreshOutcome {
        headlines,
        weather,
        crypto,
        quote,
    }
}

/// Runs one refresh end to end: raises the loading flag, fans out, delivers
/// the outcome, and clears the flag unconditionally once all four settled.
pub async fn run_refresh(
    api: Arc<dyn BriefingApi>,
    settings: FetchSettings,
    updates: UpdateSender,
) {
    updates.send(Update::Loading(true)).await;
    updates
        .send_refresher_event(
            format!("Refreshing briefing ({})", settings),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    let outcome = refresh_all(api.as_ref(), &settings).await;

    let failures = outcome.failures();
    if failures.is_empty() {
        updates
            .send_refresher_event(
                "Briefing updated".to_string(),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
    } else {
        for (resource, error) in &failures {
            updates
                .send_refresher_event(
                    format!("Failed to fetch {}: {}", resource, error),
                    EventType::Error,
                    LogLevel::Warn,
                )
                .await;
        }
    }

    updates.send(Update::Refreshed(outcome)).await;
    // The flag clears even when every request failed.
    updates.send(Update::Loading(false)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBriefingApi;
    use crate::data::NewsSource;
    use tokio::sync::mpsc;

    fn settings() -> FetchSettings {
        FetchSettings {
            city: "Auckland".to_string(),
            country: "NZ".to_string(),
            coins: "bitcoin,ethereum".to_string(),
            currency: "nzd".to_string(),
        }
    }

    fn sample_headlines() -> Vec<Headline> {
        vec![Headline {
            source: NewsSource::Bbc.to_string(),
            title: "Example headline".to_string(),
            link: "https://example.com/a".to_string(),
            published: Some("Mon, 15 Jan 2024 08:30:00 GMT".to_string()),
        }]
    }

    fn sample_weather() -> Weather {
        Weather {
            city: "Auckland".to_string(),
            temperature: 17.6,
            description: "light rain".to_string(),
            icon: None,
        }
    }

    fn sample_quote() -> Quote {
        Quote {
            text: "Well begun is half done.".to_string(),
            author: Some("Aristotle".to_string()),
        }
    }

    fn sample_crypto() -> CryptoSnapshot {
        serde_json::from_str(r#"{ "bitcoin": { "nzd": 65000.0 } }"#).unwrap()
    }

    fn json_error() -> ApiError {
        ApiError::Json(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    fn mock_with_three_successes() -> MockBriefingApi {
        let mut api = MockBriefingApi::new();
        api.expect_fetch_headlines()
            .returning(|| Ok(sample_headlines()));
        api.expect_fetch_crypto()
            .returning(|_, _| Ok(sample_crypto()));
        api.expect_fetch_quote().returning(|| Ok(sample_quote()));
        api
    }

    #[tokio::test]
    /// All four resources succeed and the outcome carries each payload.
    async fn refresh_all_collects_every_resource() {
        let mut api = mock_with_three_successes();
        api.expect_fetch_weather()
            .returning(|_, _| Ok(sample_weather()));

        let outcome = refresh_all(&api, &settings()).await;
        assert_eq!(outcome.headlines.unwrap(), sample_headlines());
        assert_eq!(outcome.weather.unwrap(), sample_weather());
        assert_eq!(outcome.crypto.unwrap(), sample_crypto());
        assert_eq!(outcome.quote.unwrap(), sample_quote());
    }

    #[tokio::test]
    /// A failed resource doesn't stop the other three from settling.
    async fn refresh_all_does_not_short_circuit_on_failure() {
        let mut api = mock_with_three_successes();
        api.expect_fetch_weather().returning(|_, _| Err(json_error()));

        let outcome = refresh_all(&api, &settings()).await;
        assert!(outcome.weather.is_err());
        assert!(outcome.headlines.is_ok());
        assert!(outcome.crypto.is_ok());
        assert!(outcome.quote.is_ok());
        assert_eq!(outcome.failures().len(), 1);
        assert_eq!(outcome.failures()[0].0, "weather");
    }

    #[tokio::test]
    /// The loading flag clears after the outcome lands, even with a failure.
    async fn run_refresh_brackets_outcome_with_loading_flag() {
        let mut api = mock_with_three_successes();
        api.expect_fetch_weather().returning(|_, _| Err(json_error()));

        let (sender, mut receiver) = mpsc::channel(16);
        run_refresh(Arc::new(api), settings(), UpdateSender::new(sender)).await;

        let mut saw_outcome = false;
        let mut last_loading = None;
        let mut first_loading = None;
        while let Ok(update) = receiver.try_recv() {
            match update {
                Update::Loading(flag) => {
                    if first_loading.is_none() {
                        first_loading = Some(flag);
                    }
                    last_loading = Some(flag);
                }
                Update::Refreshed(outcome) => {
                    saw_outcome = true;
                    assert!(outcome.weather.is_err());
                    assert!(outcome.headlines.is_ok());
                }
                Update::Activity(_) | Update::History(_) => {}
            }
        }

        assert!(saw_outcome);
        assert_eq!(first_loading, Some(true));
        assert_eq!(last_loading, Some(false));
    }
}
