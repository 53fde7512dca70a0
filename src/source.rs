//! Record source abstraction
//!
//! The pipeline only needs "give me the page after this offset". Airtable
//! implements it over HTTP; tests implement it over scripted pages.

use crate::airtable::types::{ListRecordsResponse, RawRecord};
use crate::error::Result;
use async_trait::async_trait;

/// A paged producer of raw records
///
/// # Implementation Notes
///
/// - The first call receives `None`; later calls receive the previous page's offset
/// - Return `Err` for any failed page; callers never see partial results
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short identifier used in logs (e.g., "airtable")
    fn source_id(&self) -> &'static str;

    /// Fetch one page, continuing from `offset` when given
    async fn fetch_page(&self, offset: Option<&str>) -> Result<ListRecordsResponse>;
}

/// Follow continuation tokens until the source is exhausted, keeping
/// records in arrival order. The first failed page aborts the whole fetch.
pub async fn collect_records<S>(source: &S) -> Result<Vec<RawRecord>>
where
    S: RecordSource + ?Sized,
{
    let mut records = Vec::new();
    let mut offset: Option<String> = None;
    let mut page = 1usize;

    loop {
        let response = source.fetch_page(offset.as_deref()).await?;
        let count = response.records.len();
        let next = response.next_offset().map(str::to_string);
        records.extend(response.records);

        tracing::debug!(
            source = source.source_id(),
            "Fetched page {} with {} records (total: {})",
            page,
            count,
            records.len()
        );

        match next {
            Some(token) => {
                offset = Some(token);
                page += 1;
            }
            None => break,
        }
    }

    Ok(records)
}
