//! Normalized resource model
//!
//! The UI-ready shape produced by the feed. Serializes with camelCase keys;
//! optional attributes are omitted entirely when the source had no value.

use super::mapping::{PolicyArea, PolicyType, Region, ResourceType};
use serde::Serialize;

/// A housing policy resource ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResource {
    /// 1-based position in the final feed (not the Airtable record id)
    pub id: usize,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub region: Region,
    pub policy_type: PolicyType,
    /// Primary policy area
    pub policy_area: PolicyArea,
    /// Every mapped policy area, in column order
    pub policy_areas: Vec<PolicyArea>,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abundance_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    /// Reserved; the Airtable feed never supplies images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub gradient: &'static str,
}

/// Rewrite every `id` to its 1-based position. Running it twice changes nothing.
pub fn reindex(resources: &mut [PolicyResource]) {
    for (position, resource) in resources.iter_mut().enumerate() {
        resource.id = position + 1;
    }
}
