//! Normalization of raw Airtable rows into [`PolicyResource`]s
//!
//! This module provides:
//! - Field coercion for loosely-typed column values
//! - Canonical code tables for resource type, region, and policy area
//! - Deterministic card gradients
//! - The per-record transformer and the output model

pub mod coerce;
pub mod gradient;
pub mod mapping;
pub mod resource;
pub mod transform;

pub use coerce::{coerce, coerce_preferring_value, FieldValue};
pub use gradient::{gradient, gradient_for_code};
pub use mapping::{map_policy_areas, PolicyArea, PolicyType, Region, ResourceType};
pub use resource::{reindex, PolicyResource};
pub use transform::{format_date, transform_record};
