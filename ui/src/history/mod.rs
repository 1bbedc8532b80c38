mod list;
pub use list::HistoryList;

use api::models::HistoryEntry;

use crate::core::format;

/// Shared state for the history panel. Each refresh fully replaces the
/// previous state; a load failure replaces the list with its message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub error: Option<String>,
}

impl HistoryState {
    pub fn loaded(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// One-line label for a past comparison. Unlike the results summary, an
/// unknown quantity shows as a terse "N/A" here.
pub(crate) fn entry_label(entry: &HistoryEntry) -> String {
    let quantity = entry
        .value()
        .map(format::format_quantity)
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "{quantity} {}(s) fit inside one {}",
        entry.label_a(),
        entry.label_b()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, value: Option<f64>) -> HistoryEntry {
        HistoryEntry {
            id,
            item_a: Some("apple".into()),
            item_b: Some("basket".into()),
            result_value: value,
        }
    }

    #[test]
    fn label_includes_formatted_value() {
        assert_eq!(
            entry_label(&entry(1, Some(25.0))),
            "25 apple(s) fit inside one basket"
        );
    }

    #[test]
    fn label_shows_na_for_unknown_values() {
        assert_eq!(
            entry_label(&entry(2, None)),
            "N/A apple(s) fit inside one basket"
        );
    }

    #[test]
    fn label_falls_back_to_generic_item_names() {
        let entry = HistoryEntry {
            id: 3,
            ..Default::default()
        };
        assert_eq!(entry_label(&entry), "N/A items(s) fit inside one container");
    }

    #[test]
    fn failed_state_has_no_entries() {
        let state = HistoryState::failed("Error loading history.");
        assert!(state.entries.is_empty());
        assert_eq!(state.error.as_deref(), Some("Error loading history."));
    }

    #[test]
    fn loaded_state_replaces_entries_wholesale() {
        let state = HistoryState::loaded(vec![entry(1, Some(2.0)), entry(2, None)]);
        assert_eq!(state.entries.len(), 2);
        assert!(state.error.is_none());
    }
}
