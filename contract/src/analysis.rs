//! Lenient parse of the document analysis response.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Insights extracted from one uploaded brief.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub summary: Option<String>,
    /// Extracted field name and value, in response order.
    pub fields: Vec<(String, String)>,
    pub differentiators: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Analysis {
    /// # Errors
    ///
    /// Returns a description when `body` is not a JSON object.
    pub fn from_value(body: Value) -> Result<Self, String> {
        let Value::Object(mut map) = body else {
            return Err(format!("expected a JSON object, got {}", kind_of(&body)));
        };
        let fields = take_first(&mut map, &["fields", "extracted_fields"])
            .map(field_pairs)
            .unwrap_or_default();
        let summary = take_first(&mut map, &["result", "summary"])
            .map(text)
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            summary,
            fields,
            differentiators: map.remove("differentiators").map(string_list).unwrap_or_default(),
            risks: map.remove("risks").map(string_list).unwrap_or_default(),
            recommendations: map.remove("recommendations").map(string_list).unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.fields.is_empty()
            && self.differentiators.is_empty()
            && self.risks.is_empty()
            && self.recommendations.is_empty()
    }
}

fn take_first(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .find_map(|key| map.remove(*key).filter(|v| !v.is_null()))
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field_pairs(value: Value) -> Vec<(String, String)> {
    match value {
        Value::Object(map) => map.into_iter().map(|(k, v)| (k, text(v))).collect(),
        _ => Vec::new(),
    }
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(text)
            .filter(|s| !s.trim().is_empty())
            .collect(),
        Value::Null => Vec::new(),
        other => {
            let single = text(other);
            if single.trim().is_empty() { Vec::new() } else { vec![single] }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
