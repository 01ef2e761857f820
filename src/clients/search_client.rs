use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::SearchResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Returns at most `count` results for `query`, in the order the search
    /// service ranked them.
    async fn search(&self, query: &str, count: u8) -> AppResult<Vec<SearchResult>>;
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Option<Vec<SearchResult>>,
}

/// Google Custom Search JSON API client.
pub struct GoogleSearchClient {
    client: Client,
    api_url: String,
    api_key: SecretString,
    search_engine_id: SecretString,
}

impl GoogleSearchClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build search client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.search_api_url.clone(),
            api_key: config.google_api_key.clone(),
            search_engine_id: config.search_engine_id.clone(),
        })
    }
}

#[async_trait]
impl SearchClient for GoogleSearchClient {
    async fn search(&self, query: &str, count: u8) -> AppResult<Vec<SearchResult>> {
        let num = count.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("cx", self.search_engine_id.expose_secret()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Search API status: {}", status);

        if !status.is_success() {
            return Err(AppError::UpstreamError(format!(
                "search returned {}: {}",
                status, body
            )));
        }

        let parsed: CustomSearchResponse = serde_json::from_str(&body)?;
        let mut results = parsed.items.unwrap_or_default();
        results.truncate(count as usize);

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_items_means_no_results() {
        let parsed: CustomSearchResponse =
            serde_json::from_str(r#"{"kind":"customsearch#search"}"#).unwrap();
        assert!(parsed.items.unwrap_or_default().is_empty());
    }

    #[test]
    fn response_items_keep_optional_fields() {
        let parsed: CustomSearchResponse = serde_json::from_str(
            r#"{"items":[{"title":"A","link":"https://a.example","snippet":"text"},{"title":"B"}]}"#,
        )
        .unwrap();

        let items = parsed.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].snippet.as_deref(), Some("text"));
        assert_eq!(items[1].snippet, None);
    }

    #[test]
    fn items_of_the_wrong_shape_are_rejected() {
        let parsed = serde_json::from_str::<CustomSearchResponse>(r#"{"items":"nope"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn client_builds_from_config_without_secrets() {
        assert!(GoogleSearchClient::new(&Config::default()).is_ok());
    }
}
