use std::env;
use secrecy::{ExposeSecret, SecretString};

use crate::services::blank_generator::DEFAULT_BLANK_INDEX;

pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_CHAT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "mistral-tiny";
pub const DEFAULT_SEARCH_RESULT_COUNT: u8 = 5;
/// Largest `num` the Custom Search API accepts.
pub const MAX_SEARCH_RESULT_COUNT: u8 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub google_api_key: SecretString,
    pub search_engine_id: SecretString,
    pub mistral_api_key: SecretString,
    pub search_api_url: String,
    pub chat_api_url: String,
    pub chat_model: String,
    pub search_result_count: u8,
    pub blank_index: usize,
    pub upstream_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_api_key: SecretString::from(String::new()),
            search_engine_id: SecretString::from(String::new()),
            mistral_api_key: SecretString::from(String::new()),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            search_result_count: DEFAULT_SEARCH_RESULT_COUNT,
            blank_index: DEFAULT_BLANK_INDEX,
            upstream_timeout_secs: 30,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            google_api_key: SecretString::from(env::var("GOOGLE_API_KEY").unwrap_or_default()),
            search_engine_id: SecretString::from(env::var("SEARCH_ENGINE_ID").unwrap_or_default()),
            mistral_api_key: SecretString::from(env::var("MISTRAL_API_KEY").unwrap_or_default()),
            search_api_url: env::var("SEARCH_API_URL").unwrap_or(defaults.search_api_url),
            chat_api_url: env::var("CHAT_API_URL").unwrap_or(defaults.chat_api_url),
            chat_model: env::var("CHAT_MODEL").unwrap_or(defaults.chat_model),
            search_result_count: parse_env("SEARCH_RESULT_COUNT")
                .and_then(valid_result_count)
                .unwrap_or(defaults.search_result_count),
            blank_index: parse_env("BLANK_INDEX").unwrap_or(defaults.blank_index),
            upstream_timeout_secs: parse_env("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: parse_env("WEB_SERVER_PORT").unwrap_or(defaults.web_server_port),
        }
    }

    /// Names of the upstream credentials that are not set.
    ///
    /// Missing credentials do not stop the server; calls to the matching
    /// upstream will be rejected at request time.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        [
            ("GOOGLE_API_KEY", &self.google_api_key),
            ("SEARCH_ENGINE_ID", &self.search_engine_id),
            ("MISTRAL_API_KEY", &self.mistral_api_key),
        ]
        .into_iter()
        .filter(|(_, secret)| secret.expose_secret().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn warn_missing_secrets(&self) {
        for name in self.missing_secrets() {
            log::warn!("{} is not set; requests that need it will fail", name);
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            google_api_key: SecretString::from("google-test-key".to_string()),
            search_engine_id: SecretString::from("test-cx".to_string()),
            mistral_api_key: SecretString::from("mistral-test-key".to_string()),
            ..Self::default()
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

fn valid_result_count(count: u8) -> Option<u8> {
    (1..=MAX_SEARCH_RESULT_COUNT).contains(&count).then_some(count)
}
