//! Field coercion
//!
//! Airtable fields arrive as whatever the column type produces: plain
//! scalars, arrays (multi-selects, lookups), or objects (attachments,
//! buttons, AI-generated text). Everything downstream works on strings, so
//! each raw value is first classified into a closed set of shapes and then
//! flattened.

use serde_json::Value;

/// Shape of a raw field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Missing key or JSON null
    Absent,
    /// String, number, or bool
    Scalar(&'a Value),
    List(&'a [Value]),
    /// Object carrying a `url` sub-key (inner value)
    ObjectWithUrl(&'a Value),
    /// Object carrying a `text` sub-key (inner value)
    ObjectWithText(&'a Value),
    /// Object carrying only a `value` sub-key (inner value)
    ObjectWithValue(&'a Value),
    /// Any other object
    Other,
}

impl<'a> FieldValue<'a> {
    /// Classify a raw value. Sub-keys only count when their value is truthy.
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) => Self::List(items),
            Some(Value::Object(obj)) => {
                let truthy = |key: &str| obj.get(key).filter(|v| is_truthy(v));
                if let Some(url) = truthy("url") {
                    Self::ObjectWithUrl(url)
                } else if let Some(text) = truthy("text") {
                    Self::ObjectWithText(text)
                } else if let Some(inner) = truthy("value") {
                    Self::ObjectWithValue(inner)
                } else {
                    Self::Other
                }
            }
            Some(scalar) => Self::Scalar(scalar),
        }
    }

    /// Flatten to a string. `ObjectWithValue` is treated like any other
    /// object here; see [`coerce_preferring_value`].
    pub fn coerce(self) -> String {
        match self {
            Self::Absent | Self::Other | Self::ObjectWithValue(_) => String::new(),
            Self::Scalar(v) | Self::ObjectWithUrl(v) | Self::ObjectWithText(v) => stringify(v),
            Self::List(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
        }
    }
}

/// Coerce a raw field value into a string. Never fails.
pub fn coerce(value: Option<&Value>) -> String {
    FieldValue::classify(value).coerce()
}

/// Like [`coerce`], but an object's `value` sub-key wins over everything else
pub fn coerce_preferring_value(value: Option<&Value>) -> String {
    if let Some(Value::Object(obj)) = value {
        if let Some(inner) = obj.get("value").filter(|v| is_truthy(v)) {
            return stringify(inner);
        }
    }
    coerce(value)
}

/// Default string conversion for a single value (no object sub-key lookup)
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // whole floats print like integers: 2019.0 -> "2019"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{:.0}", f + 0.0)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
