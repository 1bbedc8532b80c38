//! Wire models for the backend contract. Every field the server may omit or
//! null decodes to `None`, so malformed payloads degrade to placeholders
//! instead of failing the whole response.

use serde::{Deserialize, Serialize};

/// Label shown when the server did not return a usable `item_a`.
pub const GENERIC_ITEM_LABEL: &str = "items";

/// Label shown when the server did not return a usable `item_b`.
pub const GENERIC_CONTAINER_LABEL: &str = "container";

/// One computed comparison, as returned by `POST /calculate` and
/// `GET /history/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub item_a: Option<String>,
    #[serde(default)]
    pub item_b: Option<String>,
    /// How many of item A fit inside one item B. `None` means the server
    /// could not determine a quantity.
    #[serde(default)]
    pub result_value: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ComparisonResult {
    pub fn label_a(&self) -> &str {
        resolve_label(self.item_a.as_deref(), GENERIC_ITEM_LABEL)
    }

    pub fn label_b(&self) -> &str {
        resolve_label(self.item_b.as_deref(), GENERIC_CONTAINER_LABEL)
    }

    /// The numeric ratio, with non-finite values treated as unknown.
    pub fn value(&self) -> Option<f64> {
        self.result_value.filter(|value| value.is_finite())
    }
}

/// One line of the `GET /history` listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub item_a: Option<String>,
    #[serde(default)]
    pub item_b: Option<String>,
    #[serde(default)]
    pub result_value: Option<f64>,
}

impl HistoryEntry {
    pub fn label_a(&self) -> &str {
        resolve_label(self.item_a.as_deref(), GENERIC_ITEM_LABEL)
    }

    pub fn label_b(&self) -> &str {
        resolve_label(self.item_b.as_deref(), GENERIC_CONTAINER_LABEL)
    }

    pub fn value(&self) -> Option<f64> {
        self.result_value.filter(|value| value.is_finite())
    }
}

/// Body of a failed `/calculate` or `/history/{id}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn resolve_label<'a>(label: Option<&'a str>, fallback: &'a str) -> &'a str {
    match label {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}
