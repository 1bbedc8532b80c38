mod form;
pub use form::ComparisonForm;

use api::error::ApiError;

/// Events driving the submission-flow coroutine. Each event is handled to
/// completion before the next is taken, so two submissions never overlap.
#[derive(Debug, Clone)]
pub enum CompareEvent {
    /// A validated form submission: both labels trimmed and non-empty.
    Submit { item_a: String, item_b: String },
    /// Reload the history list from the server.
    RefreshHistory,
    /// Fetch one past comparison and re-render it.
    OpenEntry { id: i64 },
}

pub const EMPTY_FIELDS_MESSAGE: &str = "Please fill in both fields.";
pub const CALCULATION_FALLBACK_MESSAGE: &str = "An unknown error occurred during calculation.";
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to the server. Please try again later.";
pub const HISTORY_FAILURE_MESSAGE: &str = "Error loading history.";

/// Trims both inputs, rejecting the submission when either is empty. No
/// network call happens for a rejected submission.
pub fn validate_inputs(item_a: &str, item_b: &str) -> Result<(String, String), &'static str> {
    let item_a = item_a.trim();
    let item_b = item_b.trim();
    if item_a.is_empty() || item_b.is_empty() {
        return Err(EMPTY_FIELDS_MESSAGE);
    }
    Ok((item_a.to_string(), item_b.to_string()))
}

/// Maps a backend failure to banner copy: server-supplied text verbatim, a
/// per-operation fallback when the body carried none, and the generic
/// connectivity line for transport failures.
pub fn user_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Server {
            message: Some(text),
            ..
        } if !text.trim().is_empty() => text.clone(),
        ApiError::Server { .. } => fallback.to_string(),
        ApiError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
    }
}
