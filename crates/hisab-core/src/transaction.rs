//! Transaction detail record and its rendering rows
//!
//! The record comes straight from the server and is not validated: every
//! field may be missing, `null`, or an unexpected JSON type. Rendering turns
//! it into labelled rows of plain text (plus an optional receipt link) so the
//! browser shell never interpolates server data into markup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Opaque transaction identifier taken verbatim from the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Accept any non-blank identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingTransactionId` when the value is absent or blank.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(id) if !id.trim().is_empty() => Ok(Self(id.to_string())),
            _ => Err(Error::MissingTransactionId),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Request path for this transaction under `endpoint`.
    #[must_use]
    pub fn details_path(&self, endpoint: &str) -> String {
        format!("{}/{}", endpoint.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loosely typed JSON field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(serde_json::Value);

impl FieldValue {
    /// Whether the value counts as present for optional content.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }

    /// Plain-text rendering. Missing values render empty.
    #[must_use]
    pub fn to_text(&self) -> String {
        match &self.0 {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => render_number(n),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self(serde_json::Value::from(value))
    }
}

/// Integral floats print without a fractional part (`12.0` -> `12`), the
/// way the amount appears everywhere else on the site.
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
            format!("{v:.0}")
        }
        _ => n.to_string(),
    }
}

/// Transaction detail record returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDetails {
    pub id: FieldValue,
    pub date: FieldValue,
    #[serde(rename = "type")]
    pub kind: FieldValue,
    pub category: FieldValue,
    pub amount: FieldValue,
    pub description: FieldValue,
    pub recurring: FieldValue,
    pub receipt: FieldValue,
}

impl TransactionDetails {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns `Error::JsonParseFailed` if the body is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Receipt file name, when one is attached.
    #[must_use]
    pub fn receipt_name(&self) -> Option<String> {
        self.receipt.is_truthy().then(|| self.receipt.to_text())
    }

    /// Rows shown in the detail modal, in display order.
    #[must_use]
    pub fn rows(&self, currency_symbol: &str, uploads_path: &str) -> Vec<DetailRow> {
        let mut rows = vec![
            DetailRow::text("Date", self.date.to_text()),
            DetailRow::text("Type", self.kind.to_text()),
            DetailRow::text("Category", self.category.to_text()),
            DetailRow::text(
                "Amount",
                format!("{currency_symbol}{}", self.amount.to_text()),
            ),
            DetailRow::text("Description", self.description.to_text()),
            DetailRow::text("Recurring", self.recurring.to_text()),
        ];

        if let Some(receipt) = self.receipt_name() {
            rows.push(DetailRow {
                label: "Receipt",
                value: DetailValue::Link {
                    href: format!("{}/{receipt}", uploads_path.trim_end_matches('/')),
                    text: "View Image".to_string(),
                },
            });
        }

        rows
    }
}

/// Value cell of a detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    /// Opens in a new browsing context.
    Link { href: String, text: String },
}

/// A labelled line in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: DetailValue,
}

impl DetailRow {
    fn text(label: &'static str, value: String) -> Self {
        Self {
            label,
            value: DetailValue::Text(value),
        }
    }

    /// Row flattened to text, e.g. `Amount: $12.5`.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match &self.value {
            DetailValue::Text(text) => format!("{}: {text}", self.label),
            DetailValue::Link { href, text } => format!("{}: {text} <{href}>", self.label),
        }
    }
}
