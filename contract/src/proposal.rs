//! Proposal generation request and the sectioned proposal response.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of brief a proposal is generated from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalKind {
    #[default]
    #[serde(rename = "RFP")]
    Rfp,
    #[serde(rename = "TOR")]
    Tor,
}

const RFP_FIELDS: &[&str] = &[
    "Project_Name",
    "Project_Objective",
    "Scope_of_Work",
    "Timeline",
    "Budget",
    "Deliverables",
    "Constraints",
];

const TOR_FIELDS: &[&str] = &[
    "Project_Name",
    "Background",
    "Objectives",
    "Scope_of_Work",
    "Deliverables",
    "Qualifications",
    "Timeline",
    "Budget",
];

/// The one field every draft must fill in.
pub const REQUIRED_FIELD: &str = "Project_Name";

impl ProposalKind {
    pub const ALL: [Self; 2] = [Self::Rfp, Self::Tor];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rfp => "RFP",
            Self::Tor => "TOR",
        }
    }

    /// Ordered field schema for this kind.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Rfp => RFP_FIELDS,
            Self::Tor => TOR_FIELDS,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Body of the "generate a proposal" call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub kind: ProposalKind,
    pub fields: Map<String, Value>,
}

impl GenerateRequest {
    /// Build a request carrying every schema field of `kind`, in schema order.
    /// Missing values are sent as empty strings and unknown keys are dropped.
    pub fn new<'a>(kind: ProposalKind, values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let supplied: Vec<(&str, &str)> = values.into_iter().collect();
        let fields = kind
            .fields()
            .iter()
            .map(|name| {
                let value = supplied
                    .iter()
                    .rev()
                    .find(|(key, _)| key == name)
                    .map_or("", |(_, v)| *v);
                ((*name).to_owned(), Value::String(value.trim().to_owned()))
            })
            .collect();
        Self { kind, fields }
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        self.fields.get(REQUIRED_FIELD).and_then(Value::as_str).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProposalSection {
    pub key: String,
    pub title: String,
    pub body: String,
}

/// Generated proposal, sections in response order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Proposal {
    pub sections: Vec<ProposalSection>,
}

impl Proposal {
    /// Parse `{ "proposal": { key: text, ... } }`.
    ///
    /// A bare string under `proposal` becomes a single "Proposal" section.
    ///
    /// # Errors
    ///
    /// Returns a description of the mismatch when the body has no usable
    /// `proposal` member.
    pub fn from_response(body: Value) -> Result<Self, String> {
        let Value::Object(mut outer) = body else {
            return Err("expected a JSON object".to_owned());
        };
        match outer.remove("proposal") {
            Some(Value::Object(sections)) => Ok(Self {
                sections: sections
                    .into_iter()
                    .map(|(key, value)| ProposalSection { title: section_title(&key), body: section_body(value), key })
                    .collect(),
            }),
            Some(Value::String(text)) => Ok(Self {
                sections: vec![ProposalSection { key: "proposal".to_owned(), title: "Proposal".to_owned(), body: text }],
            }),
            Some(other) => Err(format!("unexpected `proposal` value: {other}")),
            None => Err("missing `proposal`".to_owned()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn section_body(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `executive_summary` -> `Executive Summary`.
#[must_use]
pub fn section_title(key: &str) -> String {
    key.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
