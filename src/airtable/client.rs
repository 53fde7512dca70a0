//! Airtable API client
//!
//! Paged, read-only access to a single table view. Pages are fetched strictly
//! one after another because each request carries the previous page's offset.

use super::types::{ListRecordsResponse, RawRecord};
use crate::config::StoreConfig;
use crate::error::{FeedError, Result};
use crate::source::{collect_records, RecordSource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Airtable list-records client
pub struct AirtableClient {
    http: Client,
    config: StoreConfig,
    table_url: Url,
}

impl AirtableClient {
    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    /// Create a new client for the given store
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(FeedError::Configuration(
                "Airtable API key is required".to_string(),
            ));
        }

        let table_url = table_url(&config)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            config,
            table_url,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// URL of one list-records page
    pub fn page_url(&self, offset: Option<&str>) -> Url {
        let mut url = self.table_url.clone();
        {
            let mut query = url.query_pairs_mut();
            if !self.config.view_id.is_empty() {
                query.append_pair("view", &self.config.view_id);
            }
            query.append_pair("pageSize", &PAGE_SIZE.to_string());
            if let Some(offset) = offset {
                query.append_pair("offset", offset);
            }
        }
        url
    }

    /// Fetch a single page of records
    pub async fn list_records(&self, offset: Option<&str>) -> Result<ListRecordsResponse> {
        let url = self.page_url(offset);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Request {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch every record in the view, following offsets until exhausted
    pub async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        collect_records(self).await
    }
}

#[async_trait]
impl RecordSource for AirtableClient {
    fn source_id(&self) -> &'static str {
        "airtable"
    }

    async fn fetch_page(&self, offset: Option<&str>) -> Result<ListRecordsResponse> {
        self.list_records(offset).await
    }
}

/// `{api_base}/{base_id}/{table_id}` with both ids percent-encoded
fn table_url(config: &StoreConfig) -> Result<Url> {
    let invalid = |reason: String| {
        FeedError::Configuration(format!(
            "Invalid Airtable API base '{}': {}",
            config.api_base, reason
        ))
    };

    let mut url = Url::parse(&config.api_base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .push(&config.base_id)
        .push(&config.table_id);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: StoreConfig) -> AirtableClient {
        AirtableClient::new(config).unwrap()
    }

    #[test]
    fn test_first_page_url() {
        let client = client(StoreConfig::new("key"));
        assert_eq!(
            client.page_url(None).as_str(),
            "https://api.airtable.com/v0/appp4QinpvtEldbq2/tblQq8U7LQSQcN9YE?view=viwzabB3G62D0L57K&pageSize=100"
        );
    }

    #[test]
    fn test_offset_is_appended_and_encoded() {
        let client = client(StoreConfig::new("key"));
        let url = client.page_url(Some("itrX/recY"));
        assert!(url.as_str().ends_with("&pageSize=100&offset=itrX%2FrecY"));
    }

    #[test]
    fn test_ids_are_path_encoded() {
        let client = client(
            StoreConfig::new("key")
                .with_base_id("app one")
                .with_table_id("Policy/Resources")
                .with_view_id("")
                .with_api_base("http://localhost:8080/v0/"),
        );
        assert_eq!(
            client.page_url(None).as_str(),
            "http://localhost:8080/v0/app%20one/Policy%2FResources?pageSize=100"
        );
    }

    #[test]
    fn test_blank_key_rejected_before_io() {
        let result = AirtableClient::new(StoreConfig::new(""));
        assert!(matches!(result, Err(FeedError::Configuration(_))));
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let result = AirtableClient::new(StoreConfig::new("key").with_api_base("not a url"));
        assert!(matches!(result, Err(FeedError::Configuration(_))));

        let result = AirtableClient::new(StoreConfig::new("key").with_api_base("mailto:x@y.z"));
        assert!(matches!(result, Err(FeedError::Configuration(_))));
    }
}
