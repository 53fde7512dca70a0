//! Error types for the policy resource feed
//!
//! Only run-level failures live here. Per-record defects (missing or
//! oddly-shaped fields) never surface as errors: the transformer absorbs
//! them with defaults or drops the single record.

use thiserror::Error;

/// Fatal failures of a feed run
#[derive(Error, Debug)]
pub enum FeedError {
    /// Required configuration is missing; raised before any request is made
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The record store answered with a non-success status
    #[error("Airtable request failed: {status} {reason}\n{body}")]
    Request {
        status: u16,
        reason: String,
        body: String,
    },

    /// Connection, TLS, or timeout failure talking to the store
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A page body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// HTTP status carried by a request failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
