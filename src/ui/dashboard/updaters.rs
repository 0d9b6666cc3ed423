//! Dashboard state update logic
//!
//! Applies queued worker updates to the dashboard state

use super::state::DashboardState;
use crate::workers::core::Update;
use crate::workers::refresher::RefreshOutcome;

impl DashboardState {
    /// Update the dashboard state with a new tick, applying queued updates
    /// in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: Update) {
        match update {
            Update::Loading(flag) => self.loading = flag,
            Update::Refreshed(outcome) => self.apply_refresh_outcome(outcome),
            Update::History(items) => self.historical_news = items,
            Update::Activity(event) => self.add_to_activity_log(event),
        }
    }

    /// Applies a refresh outcome slice by slice. A failed resource leaves
    /// its slice untouched; prior values persist.
    fn apply_refresh_outcome(&mut self, outcome: RefreshOutcome) {
        if let Ok(items) = outcome.headlines {
            self.headlines = items;
        }
        if let Ok(weather) = outcome.weather {
            self.weather = Some(weather);
        }
        if let Ok(snapshot) = outcome.crypto {
            self.crypto = Some(snapshot);
        }
        if let Ok(quote) = outcome.quote {
            self.quote = Some(quote);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::data::{CryptoSnapshot, FetchSettings, Headline, Quote, Weather};
    use crate::environment::Environment;
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn fresh_state() -> DashboardState {
        let settings = FetchSettings {
            city: "Auckland".to_string(),
            country: "NZ".to_string(),
            coins: "bitcoin,ethereum".to_string(),
            currency: "nzd".to_string(),
        };
        DashboardState::new(
            Environment::Local,
            settings,
            Instant::now(),
            UIConfig::new(false),
        )
    }

    fn sample_headlines() -> Vec<Headline> {
        vec![Headline {
            source: "BBC".to_string(),
            title: "Example headline".to_string(),
            link: "https://example.com/a".to_string(),
            published: None,
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

    fn full_outcome() -> RefreshOutcome {
        RefreshOutcome {
            headlines: Ok(sample_headlines()),
            weather: Ok(sample_weather()),
            crypto: Ok(sample_crypto()),
            quote: Ok(sample_quote()),
        }
    }

    fn json_error() -> ApiError {
        ApiError::Json(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    #[test]
    /// A successful refresh replaces every slice with the fetched payload.
    fn refresh_outcome_replaces_all_slices() {
        let mut state = fresh_state();
        state.add_update(Update::Loading(true));
        state.add_update(Update::Refreshed(full_outcome()));
        state.add_update(Update::Loading(false));
        state.update();

        assert!(!state.loading);
        assert_eq!(state.headlines, sample_headlines());
        assert_eq!(state.weather, Some(sample_weather()));
        assert_eq!(state.crypto, Some(sample_crypto()));
        assert_eq!(state.quote, Some(sample_quote()));
    }

    #[test]
    /// Re-applying the same payload leaves the displayed values identical.
    fn reapplying_same_payload_is_idempotent() {
        let mut state = fresh_state();
        state.add_update(Update::Refreshed(full_outcome()));
        state.update();

        state.add_update(Update::Refreshed(full_outcome()));
        state.update();

        assert_eq!(state.headlines, sample_headlines());
        assert_eq!(state.weather, Some(sample_weather()));
        assert_eq!(state.crypto, Some(sample_crypto()));
        assert_eq!(state.quote, Some(sample_quote()));
    }

    #[test]
    /// A failed resource keeps its prior value while the others update.
    fn failed_resource_keeps_prior_value() {
        let mut state = fresh_state();
        state.add_update(Update::Refreshed(full_outcome()));
        state.update();

        let partial = RefreshOutcome {
            headlines: Ok(Vec::new()),
            weather: Err(json_error()),
            crypto: Ok(sample_crypto()),
            quote: Ok(sample_quote()),
        };
        state.add_update(Update::Loading(true));
        state.add_update(Update::Refreshed(partial));
        state.add_update(Update::Loading(false));
        state.update();

        // Weather failed: the earlier value survives. The rest updated.
        assert_eq!(state.weather, Some(sample_weather()));
        assert!(state.headlines.is_empty());
        assert!(!state.loading);
    }

    #[test]
    /// The loading flag clears even when every resource failed.
    fn loading_clears_when_all_requests_fail() {
        let mut state = fresh_state();
        let failed = RefreshOutcome {
            headlines: Err(json_error()),
            weather: Err(json_error()),
            crypto: Err(json_error()),
            quote: Err(json_error()),
        };
        state.add_update(Update::Loading(true));
        state.add_update(Update::Refreshed(failed));
        state.add_update(Update::Loading(false));
        state.update();

        assert!(!state.loading);
        assert!(state.headlines.is_empty());
        assert_eq!(state.weather, None);
    }

    #[test]
    /// History updates replace the slice; clearing empties it locally.
    fn history_replaces_and_clears_locally() {
        let mut state = fresh_state();
        state.add_update(Update::History(sample_headlines()));
        state.update();
        assert_eq!(state.historical_news, sample_headlines());

        state.clear_history();
        assert!(state.historical_news.is_empty());
        // Clearing history touches nothing else.
        assert_eq!(state.weather, None);
        assert!(state.pending_updates.is_empty());
    }
}
