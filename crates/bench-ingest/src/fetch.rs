//! HTTP client for the benchmark sites' data endpoint.

use std::time::Duration;

use bench_model::{Category, Record};
use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER};

use crate::error::{IngestError, Result};
use crate::payload::parse_payload;

/// User agent string for requests.
const USER_AGENT_VALUE: &str = concat!("benchq/", env!("CARGO_PKG_VERSION"));

/// Accept header the data endpoint expects from its own page script.
const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";

/// Settings for the fetch client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
    /// Replaces the site origin (`https://<domain>`) in every request URL.
    pub base_url: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: None,
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn origin(&self, category: Category) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => category.origin(),
        }
    }

    /// Landing page URL for `category` under the configured origin.
    pub fn mega_page_url(&self, category: Category) -> String {
        format!("{}{}", self.origin(category), category.mega_page_path())
    }

    /// Data endpoint URL for `category` under the configured origin.
    pub fn data_url(&self, category: Category, cache_buster: i64) -> String {
        format!(
            "{}{}?_={cache_buster}",
            self.origin(category),
            Category::DATA_PATH
        )
    }
}

/// A cookie-carrying session against one benchmark site.
#[derive(Debug, Clone)]
pub struct BenchmarkClient {
    client: Client,
    category: Category,
    config: FetchConfig,
}

impl BenchmarkClient {
    pub fn new(category: Category, config: &FetchConfig) -> Result<Self> {
        let page_url = config.mega_page_url(category);
        let referer = HeaderValue::from_str(&page_url)
            .map_err(|e| IngestError::Network(format!("invalid referer {page_url}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(REFERER, referer);

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| IngestError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            category,
            config: config.clone(),
        })
    }

    /// Visits the mega page (which sets the session cookie), then downloads
    /// and decodes the data endpoint.
    pub fn fetch(&self) -> Result<Vec<Record>> {
        let page_url = self.config.mega_page_url(self.category);
        tracing::debug!("Opening session at {}", page_url);
        self.get_text(&page_url)?;

        let data_url = self
            .config
            .data_url(self.category, Utc::now().timestamp_millis());
        tracing::debug!("Fetching records from {}", data_url);
        let body = self.get_text(&data_url)?;

        let records = parse_payload(&body)?;
        tracing::info!(
            category = %self.category,
            records = records.len(),
            bytes = body.len(),
            "fetched benchmark records"
        );
        Ok(records)
    }

    fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

/// Fetches the full record list for `category` from its live site.
pub fn fetch_records(category: Category, config: &FetchConfig) -> Result<Vec<Record>> {
    BenchmarkClient::new(category, config)?.fetch()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_is_the_live_site() {
        let config = FetchConfig::default();
        assert_eq!(
            config.mega_page_url(Category::Cpu),
            Category::Cpu.mega_page_url()
        );
        assert_eq!(config.data_url(Category::Gpu, 42), Category::Gpu.data_url(42));
    }

    #[test]
    fn base_url_rewrites_both_endpoints() {
        let config = FetchConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.mega_page_url(Category::Storage),
            "http://127.0.0.1:8080/hdd-mega-page.html"
        );
        assert_eq!(
            config.data_url(Category::Storage, 1700000000000),
            "http://127.0.0.1:8080/data/?_=1700000000000"
        );
    }
}
