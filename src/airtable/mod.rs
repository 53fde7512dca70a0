//! Airtable integration
//!
//! This module provides:
//! - Response types for the list-records endpoint
//! - A paged client implementing [`RecordSource`](crate::source::RecordSource)

pub mod client;
pub mod types;

pub use client::AirtableClient;
pub use types::{ListRecordsResponse, RawRecord};
