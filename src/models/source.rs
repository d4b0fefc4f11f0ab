use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldError;

/// A controllable item with an on/off status, owned by exactly one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Power {
    pub id: String,
    pub label: String,
    pub status: bool,
}

/// A named category grouping powers. `powers` keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub id: String,
    pub label: String,
    pub powers: Vec<Power>,
}

impl Source {
    /// Number of powers currently switched on.
    pub fn active_amount(&self) -> usize {
        self.powers.iter().filter(|p| p.status).count()
    }

    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            id: self.id.clone(),
            label: self.label.clone(),
            active_amount: self.active_amount(),
        }
    }
}

/// Row of the `GET /sources` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub id: String,
    pub label: String,
    pub active_amount: usize,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePower {
    pub label: String,
}

impl CreatePower {
    /// Checks the raw body shape `{ label: non-empty string }`.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(fields) = body.as_object() else {
            return Err(vec![FieldError::new("body", "expected a JSON object")]);
        };

        match fields.get("label") {
            None | Some(Value::Null) => Err(vec![FieldError::new("label", "label is required")]),
            Some(Value::String(label)) if label.is_empty() => {
                Err(vec![FieldError::new("label", "label must not be empty")])
            }
            Some(Value::String(label)) => Ok(Self {
                label: label.clone(),
            }),
            Some(_) => Err(vec![FieldError::new("label", "label must be a string")]),
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SourceFilters {
    pub active: Option<String>,
}

impl SourceFilters {
    /// Interprets `active`; anything other than "true" counts as false.
    /// The listing does not filter on it.
    pub fn active(&self) -> bool {
        self.active
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}
