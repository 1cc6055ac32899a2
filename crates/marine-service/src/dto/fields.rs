//! Loosely typed request fields
//!
//! Admin clients send arrays either as JSON lists or as one comma-separated
//! string, and years as numbers or strings. These wrappers accept every such
//! shape and never fail to deserialize.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Mark a field as present, even when its value is `null`.
///
/// Used with `#[serde(default)]` so that `None` means "absent" and
/// `Some(..)` carries whatever was sent.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Ordered list of trimmed, non-empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextList(pub Vec<String>);

impl TextList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Value::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        };
        Self(items)
    }
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Year as sent by a client; `None` when missing or unparsable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearInput(pub Option<i32>);

impl YearInput {
    /// Create-path reading: zero counts as "no year"
    pub fn non_zero(self) -> Option<i32> {
        self.0.filter(|year| *year != 0)
    }

    fn from_value(value: &Value) -> Self {
        let year = match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .or_else(|| n.as_f64().and_then(truncate)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i32>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            _ => None,
        };
        Self(year)
    }
}

fn truncate(value: f64) -> Option<i32> {
    let value = value.trunc();
    (value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX))
        .then_some(value as i32)
}

impl<'de> Deserialize<'de> for YearInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}
