//! Briefing API Client
//!
//! A client for the briefing backend, consuming its read-only JSON endpoints.

use crate::api::BriefingApi;
use crate::api::error::ApiError;
use crate::data::{CryptoSnapshot, Headline, NewsResponse, NewsSource, Quote, Weather};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("briefing-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BriefingClient {
    client: Client,
    environment: Environment,
}

impl BriefingClient {
    /// No explicit timeouts are configured; requests rely on the transport's
    /// defaults.
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Issues a GET and parses the body as JSON. The status code is not
    /// consulted: a non-2xx response with a parseable body behaves exactly
    /// like a success, matching the backend contract.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    fn weather_endpoint(city: &str, country: &str) -> String {
        format!(
            "api/weather?city={}&country={}",
            urlencoding::encode(city),
            urlencoding::encode(country)
        )
    }

    fn crypto_endpoint(ids: &str, vs: &str) -> String {
        format!(
            "api/crypto?ids={}&vs={}",
            urlencoding::encode(ids),
            urlencoding::encode(vs)
        )
    }

    // The date is a literal path segment, exactly as typed.
    fn news_by_date_endpoint(date: &str) -> String {
        format!("api/news/date/{}", date)
    }

    fn news_by_source_endpoint(source: NewsSource, days: u32) -> String {
        format!(
            "api/news/source/{}?days={}",
            urlencoding::encode(&source.to_string()),
            days
        )
    }
}

#[async_trait::async_trait]
impl BriefingApi for BriefingClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_headlines(&self) -> Result<Vec<Headline>, ApiError> {
        let response: NewsResponse = self.get_json("api/news").await?;
        Ok(response.items)
    }

    async fn fetch_weather(&self, city: &str, country: &str) -> Result<Weather, ApiError> {
        self.get_json(&Self::weather_endpoint(city, country)).await
    }

    async fn fetch_crypto(&self, ids: &str, vs: &str) -> Result<CryptoSnapshot, ApiError> {
        self.get_json(&Self::crypto_endpoint(ids, vs)).await
    }

    async fn fetch_quote(&self) -> Result<Quote, ApiError> {
        self.get_json("api/quote").await
    }

    async fn fetch_yesterday_news(&self) -> Result<Vec<Headline>, ApiError> {
        let response: NewsResponse = self.get_json("api/news/yesterday").await?;
        Ok(response.items)
    }

    async fn fetch_news_by_date(&self, date: &str) -> Result<Vec<Headline>, ApiError> {
        let response: NewsResponse = self.get_json(&Self::news_by_date_endpoint(date)).await?;
        Ok(response.items)
    }

    async fn fetch_news_by_source(
        &self,
        source: NewsSource,
        days: u32,
    ) -> Result<Vec<Headline>, ApiError> {
        let response: NewsResponse = self
            .get_json(&Self::news_by_source_endpoint(source, days))
            .await?;
        Ok(response.items)
    }
}
