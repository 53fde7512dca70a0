//! Airtable list-records response types
//!
//! Reference: https://airtable.com/developers/web/api/list-records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One page of a list-records call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    pub records: Vec<RawRecord>,
    /// Continuation token; absent on the last page
    #[serde(default)]
    pub offset: Option<String>,
}

impl ListRecordsResponse {
    pub fn new(records: Vec<RawRecord>, offset: Option<String>) -> Self {
        Self { records, offset }
    }

    /// Continuation token for the next page, ignoring empty tokens
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref().filter(|o| !o.is_empty())
    }
}

/// A table row as returned by the store: an id plus a loosely-typed field map
///
/// Every part decodes leniently: a missing or mistyped id, timestamp, or
/// field map falls back to its default, so one odd row never fails a page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(rename = "createdTime", default, deserialize_with = "lenient")]
    pub created_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            created_time: None,
            fields,
        }
    }

    /// Build a record from a JSON object literal; non-objects give an empty field map
    pub fn from_json(id: impl Into<String>, fields: Value) -> Self {
        match fields {
            Value::Object(map) => Self::new(id, map),
            _ => Self::new(id, Map::new()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Decode any JSON value, falling back to `T::default()` on null or a type mismatch
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode the `records` array one row at a time; non-object rows become empty records
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<RawRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(rows) => Ok(rows
            .into_iter()
            .map(|row| serde_json::from_value(row).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
