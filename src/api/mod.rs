use crate::api::error::ApiError;
use crate::data::{CryptoSnapshot, Headline, NewsSource, Quote, Weather};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::BriefingClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BriefingApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current top headlines.
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, ApiError>;

    /// Fetch the current weather for a city and country code.
    async fn fetch_weather(&self, city: &str, country: &str) -> Result<Weather, ApiError>;

    /// Fetch a price snapshot for a comma-separated coin list against a currency.
    async fn fetch_crypto(&self, ids: &str, vs: &str) -> Result<CryptoSnapshot, ApiError>;

    /// Fetch the quote of the day.
    async fn fetch_quote(&self) -> Result<Quote, ApiError>;

    /// Fetch yesterday's headlines.
    async fn fetch_yesterday_news(&self) -> Result<Vec<Headline>, ApiError>;

    /// Fetch headlines for a specific date (`YYYY-MM-DD`).
    async fn fetch_news_by_date(&self, date: &str) -> Result<Vec<Headline>, ApiError>;

    /// Fetch headlines from one source over a lookback window in days.
    async fn fetch_news_by_source(
        &self,
        source: NewsSource,
        days: u32,
    ) -> Result<Vec<Headline>, ApiError>;
}
