//! Record transformer
//!
//! Turns one Airtable row into one [`PolicyResource`]. The only way a record
//! is rejected is a blank name; every other defect degrades to a default or
//! to an absent optional attribute.

use super::coerce::{coerce, coerce_preferring_value};
use super::gradient::gradient;
use super::mapping::{first_segment, map_policy_areas, PolicyType, Region, ResourceType};
use super::resource::PolicyResource;
use crate::airtable::types::RawRecord;
use std::collections::HashSet;

/// Column names in the resources table
pub mod fields {
    pub const RESOURCE_NAME: &str = "Resource Name";
    pub const ORG: &str = "Org";
    pub const SUMMARY: &str = "Summary";
    pub const ABUNDANCE_NOTE: &str = "Abundance Note";
    pub const ORG_DESCRIPTION: &str = "Org Description";
    pub const TOOL_TYPE: &str = "Tool Type";
    pub const POLICY_AREA: &str = "Policy Area";
    pub const REGION: &str = "Region";
    pub const URL: &str = "URL";
    pub const DATE: &str = "Date";
    pub const ACCESSIBILITY_SCORE: &str = "Accessibility Score";
    pub const ACCESSIBLE: &str = "Accessible?";
    pub const ABUNDANCE_ALIGNMENT: &str = "Abundance Alignment";
    pub const ABUNDANCE_TAG: &str = "Abundance Tag";
    pub const STRENGTHS: &str = "Strengths";
}

pub const DEFAULT_DATE: &str = "2025-01-01";
pub const MAX_TAGS: usize = 5;

/// Transform a raw record into a resource, or `None` when it has no name.
///
/// `index` is the record's position among records kept so far. It picks the
/// gradient and seeds the provisional `id` (`index + 1`); the driver
/// re-indexes after filtering.
pub fn transform_record(record: &RawRecord, index: usize) -> Option<PolicyResource> {
    let text = |name: &str| coerce(record.field(name)).trim().to_string();

    let title = text(fields::RESOURCE_NAME);
    if title.is_empty() {
        tracing::trace!(record_id = %record.id, "dropping record without a resource name");
        return None;
    }

    let abundance_note = text(fields::ABUNDANCE_NOTE);
    let org_description = coerce_preferring_value(record.field(fields::ORG_DESCRIPTION))
        .trim()
        .to_string();
    let description = first_non_empty([
        text(fields::SUMMARY),
        abundance_note.clone(),
        org_description,
    ])
    .unwrap_or_default();

    let tool_type = text(fields::TOOL_TYPE);
    let region = text(fields::REGION);
    let policy_area_raw = text(fields::POLICY_AREA);
    let areas = map_policy_areas(&policy_area_raw);
    let policy_area = areas.primary();
    let tags = build_tags(&areas.segments);

    let accessibility_score =
        first_non_empty([text(fields::ACCESSIBILITY_SCORE), text(fields::ACCESSIBLE)]);
    let abundance_alignment = first_non_empty([
        text(fields::ABUNDANCE_ALIGNMENT),
        text(fields::ABUNDANCE_TAG),
    ]);
    let strengths = first_non_empty([text(fields::STRENGTHS), abundance_note]);

    Some(PolicyResource {
        id: index + 1,
        title,
        description,
        resource_type: ResourceType::from_label(first_segment(&tool_type)),
        region: Region::from_label(first_segment(&region)),
        policy_type: PolicyType::Housing,
        policy_area,
        policy_areas: areas.mapped,
        date: format_date(&text(fields::DATE)),
        author: text(fields::ORG),
        tags,
        url: non_empty(text(fields::URL)),
        accessibility_score,
        abundance_alignment,
        strengths,
        image: None,
        gradient: gradient(policy_area, index),
    })
}

/// Expand a bare year to January 1st and default an empty date
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        DEFAULT_DATE.to_string()
    } else if raw.chars().count() == 4 {
        format!("{}-01-01", raw)
    } else {
        raw.to_string()
    }
}

/// Lowercased policy-area labels, deduplicated in first-seen order, at most five
pub fn build_tags(segments: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    segments
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn first_non_empty<const N: usize>(candidates: [String; N]) -> Option<String> {
    candidates.into_iter().find(|c| !c.is_empty())
}
