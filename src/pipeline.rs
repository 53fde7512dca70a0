//! Policy resource pipeline
//!
//! Fetch every raw record, transform each one, then assign final ids. Two
//! indices are in play: the survivor counter handed to the transformer
//! (drives gradient choice and the provisional id) and the output position
//! written by [`reindex`].

use crate::airtable::client::AirtableClient;
use crate::airtable::types::RawRecord;
use crate::error::Result;
use crate::normalize::resource::{reindex, PolicyResource};
use crate::normalize::transform::transform_record;
use crate::source::{collect_records, RecordSource};

/// Drives one source through the normalization pipeline
pub struct PolicyResourcePipeline<S> {
    source: S,
}

impl PolicyResourcePipeline<AirtableClient> {
    /// Create a pipeline over the Airtable table configured in the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AirtableClient::from_env()?))
    }
}

impl<S: RecordSource> PolicyResourcePipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and normalize the whole table. Any failed page fails the run.
    pub async fn run(&self) -> Result<Vec<PolicyResource>> {
        let records = collect_records(&self.source).await?;
        let resources = transform_records(&records);

        tracing::info!(
            source = self.source.source_id(),
            fetched = records.len(),
            kept = resources.len(),
            dropped = records.len() - resources.len(),
            "Normalized policy resources"
        );

        Ok(resources)
    }
}

/// Transform already-fetched records, dropping unnamed ones and re-indexing
pub fn transform_records(records: &[RawRecord]) -> Vec<PolicyResource> {
    let mut resources = Vec::with_capacity(records.len());
    for record in records {
        if let Some(resource) = transform_record(record, resources.len()) {
            resources.push(resource);
        }
    }
    reindex(&mut resources);
    resources
}

/// Fetch the configured Airtable view and return normalized resources
pub async fn fetch_policy_resources() -> Result<Vec<PolicyResource>> {
    PolicyResourcePipeline::from_env()?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::gradient::gradient;
    use crate::normalize::mapping::PolicyArea;
    use serde_json::json;

    fn named(id: &str, name: &str) -> RawRecord {
        RawRecord::from_json(id, json!({"Resource Name": name, "Policy Area": "Climate Resiliency"}))
    }

    #[test]
    fn test_dropped_records_do_not_leave_gaps() {
        let records = vec![
            RawRecord::from_json("rec0", json!({})),
            named("rec1", "First"),
            RawRecord::from_json("rec2", json!({"Resource Name": " "})),
            named("rec3", "Second"),
            named("rec4", "Third"),
        ];

        let resources = transform_records(&records);
        let ids: Vec<_> = resources.iter().map(|r| r.id).collect();
        let titles: Vec<_> = resources.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_gradient_follows_survivor_position() {
        // "Second" sits at raw index 3 but survivor index 1
        let records = vec![
            named("rec0", "First"),
            RawRecord::from_json("rec1", json!({})),
            RawRecord::from_json("rec2", json!({})),
            named("rec3", "Second"),
        ];

        let resources = transform_records(&records);
        assert_eq!(resources[1].gradient, gradient(PolicyArea::Climate, 1));
        assert_ne!(resources[1].gradient, gradient(PolicyArea::Climate, 3));
    }

    #[test]
    fn test_empty_input() {
        assert!(transform_records(&[]).is_empty());
        assert!(transform_records(&[RawRecord::from_json("rec0", json!({}))]).is_empty());
    }
}
