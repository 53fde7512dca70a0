//! Record store configuration
//!
//! Read once at the start of a run. The API key is required; every store
//! identifier falls back to the production table when unset or empty.

use crate::error::{FeedError, Result};
use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://api.airtable.com/v0";
pub const DEFAULT_BASE_ID: &str = "appp4QinpvtEldbq2";
pub const DEFAULT_TABLE_ID: &str = "tblQq8U7LQSQcN9YE";
pub const DEFAULT_VIEW_ID: &str = "viwzabB3G62D0L57K";

pub const ENV_API_KEY: &str = "AIRTABLE_API_KEY";
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";
pub const ENV_TABLE_ID: &str = "AIRTABLE_TABLE_ID";
pub const ENV_VIEW_ID: &str = "AIRTABLE_VIEW_ID";
pub const ENV_API_BASE: &str = "AIRTABLE_API_BASE";

/// Connection settings for the Airtable table backing the feed
#[derive(Clone)]
pub struct StoreConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_id: String,
    /// Empty means "no view filter"
    pub view_id: String,
    pub api_base: String,
}

impl StoreConfig {
    /// Create a config for the default table with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_id: DEFAULT_BASE_ID.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            view_id: DEFAULT_VIEW_ID.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup(ENV_API_KEY)).ok_or_else(|| {
            FeedError::Configuration(format!("{} environment variable is required", ENV_API_KEY))
        })?;

        let or_default =
            |key: &str, default: &str| non_empty(lookup(key)).unwrap_or_else(|| default.to_string());

        Ok(Self {
            api_key,
            base_id: or_default(ENV_BASE_ID, DEFAULT_BASE_ID),
            table_id: or_default(ENV_TABLE_ID, DEFAULT_TABLE_ID),
            view_id: or_default(ENV_VIEW_ID, DEFAULT_VIEW_ID),
            api_base: or_default(ENV_API_BASE, DEFAULT_API_BASE),
        })
    }

    pub fn with_base_id(mut self, base_id: impl Into<String>) -> Self {
        self.base_id = base_id.into();
        self
    }

    pub fn with_table_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = table_id.into();
        self
    }

    pub fn with_view_id(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = view_id.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

// Keep the credential out of logs
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("api_key", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("view_id", &self.view_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
