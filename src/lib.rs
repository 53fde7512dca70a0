//! Policy Feed - housing policy resources from Airtable
//!
//! This crate pulls every row of the resources table, normalizes the
//! loosely-typed Airtable fields into [`PolicyResource`]s, and derives the
//! presentation attributes the site needs (category, tags, card gradient).
//!
//! ## Pipeline
//! Airtable pages -> raw records -> per-record transform -> re-indexed feed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use policy_feed::fetch_policy_resources;
//!
//! # async fn demo() -> policy_feed::Result<()> {
//! // Reads AIRTABLE_API_KEY (and optional id overrides) from the environment
//! let resources = fetch_policy_resources().await?;
//! for resource in &resources {
//!     println!("{} {} ({})", resource.id, resource.title, resource.policy_area);
//! }
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Store configuration
pub mod config;

// Record store client and wire types
pub mod airtable;
pub mod source;

// Field coercion, code tables, gradients, record transformer
pub mod normalize;

// Fetch -> transform -> re-index driver
pub mod pipeline;

pub use airtable::{AirtableClient, ListRecordsResponse, RawRecord};
pub use config::StoreConfig;
pub use error::{FeedError, Result};
pub use normalize::{PolicyArea, PolicyResource, PolicyType, Region, ResourceType};
pub use pipeline::{fetch_policy_resources, transform_records, PolicyResourcePipeline};
pub use source::{collect_records, RecordSource};
