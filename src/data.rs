//! Wire and view-state types for the briefing dashboard.
//!
//! Every slice is either absent (not yet loaded, or the load failed) or holds
//! the most recent successful response. Responses replace slices wholesale;
//! nothing is merged or deduplicated.

use crate::config::Config;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// A single news headline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Headline {
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub published: Option<String>,
}

/// Envelope for every news endpoint: `{ "items": [...] }`.
///
/// A payload without an `items` field deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub items: Vec<Headline>,
}

/// Current weather for the configured location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    pub city: String,
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Prices for one coin, keyed by currency code.
pub type CoinPrices = BTreeMap<String, f64>;

/// Price snapshot keyed by coin id. Replaced wholesale on each refresh.
pub type CryptoSnapshot = BTreeMap<String, CoinPrices>;

/// Quote of the day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// The inputs a combined refresh is parameterized by: weather location,
/// coin watch list (comma separated), and target currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub city: String,
    pub country: String,
    pub coins: String,
    pub currency: String,
}

impl From<Config> for FetchSettings {
    fn from(config: Config) -> Self {
        FetchSettings {
            city: config.city,
            country: config.country,
            coins: config.coins,
            currency: config.currency,
        }
    }
}

/// The fixed set of sources historical news can be filtered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum NewsSource {
    #[strum(serialize = "BBC")]
    Bbc,
    #[strum(serialize = "The Guardian")]
    Guardian,
    #[strum(serialize = "Al Jazeera")]
    AlJazeera,
}

impl NewsSource {
    /// Next source in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            NewsSource::Bbc => NewsSource::Guardian,
            NewsSource::Guardian => NewsSource::AlJazeera,
            NewsSource::AlJazeera => NewsSource::Bbc,
        }
    }
}

impl Display for FetchSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} | {} vs {}",
            self.city, self.country, self.coins, self.currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_payload_without_items_is_empty() {
        let response: NewsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn headline_list_deserializes() {
        let payload = r#"{
            "items": [
                {
                    "source": "BBC",
                    "title": "Example headline",
                    "link": "https://example.com/a",
                    "published": "Mon, 15 Jan 2024 08:30:00 GMT"
                },
                { "source": "The Guardian", "title": "No link or date" }
            ]
        }"#;
        let response: NewsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].source, "BBC");
        assert_eq!(response.items[1].link, "");
        assert_eq!(response.items[1].published, None);
    }

    #[test]
    fn weather_uses_wire_name_temp() {
        let payload = r#"{ "city": "Auckland", "temp": 17.6, "description": "light rain" }"#;
        let weather: Weather = serde_json::from_str(payload).unwrap();
        assert_eq!(weather.city, "Auckland");
        assert_eq!(weather.temperature, 17.6);
        assert_eq!(weather.icon, None);
    }

    #[test]
    fn crypto_snapshot_is_nested_price_map() {
        let payload = r#"{ "bitcoin": { "nzd": 65000.0 }, "ethereum": { "nzd": 3500.5 } }"#;
        let snapshot: CryptoSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot["bitcoin"]["nzd"], 65000.0);
        assert_eq!(snapshot["ethereum"]["nzd"], 3500.5);
    }

    #[test]
    fn quote_author_is_optional() {
        let quote: Quote = serde_json::from_str(r#"{ "text": "Well begun is half done." }"#).unwrap();
        assert_eq!(quote.author, None);

        let quote: Quote =
            serde_json::from_str(r#"{ "text": "What we think, we become.", "author": "Buddha" }"#)
                .unwrap();
        assert_eq!(quote.author.as_deref(), Some("Buddha"));
    }

    #[test]
    fn news_source_round_trips_through_display() {
        for source in [NewsSource::Bbc, NewsSource::Guardian, NewsSource::AlJazeera] {
            let parsed: NewsSource = source.to_string().parse().unwrap();
            assert_eq!(parsed, source);
        }
        assert_eq!(NewsSource::Guardian.to_string(), "The Guardian");
    }

    #[test]
    fn source_cycle_wraps_around() {
        let mut source = NewsSource::Bbc;
        source = source.next();
        assert_eq!(source, NewsSource::Guardian);
        source = source.next();
        assert_eq!(source, NewsSource::AlJazeera);
        source = source.next();
        assert_eq!(source, NewsSource::Bbc);
    }
}
