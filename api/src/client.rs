//! Fetch-based HTTP client for the three backend endpoints.

use crate::error::ApiError;
use crate::models::{ComparisonResult, ErrorBody, HistoryEntry};

/// Thin wrapper around `reqwest::Client` bound to a backend base URL.
///
/// The default client targets the page origin, which is where the endpoints
/// live when the page is served by the backend itself.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(page_origin())
    }
}

impl ApiClient {
    /// Client for an explicit base URL. A trailing slash is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Computes how many `item_a` fit inside one `item_b`. Inputs are sent
    /// form-encoded, exactly as typed (callers trim beforehand).
    pub async fn calculate(
        &self,
        item_a: &str,
        item_b: &str,
    ) -> Result<ComparisonResult, ApiError> {
        let response = self
            .http
            .post(self.url("/calculate"))
            .form(&[("item_a", item_a), ("item_b", item_b)])
            .send()
            .await?;
        Self::decode_result(response).await
    }

    /// Lists past comparisons, in the order the server returns them.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let response = self.http.get(self.url("/history")).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(response.json().await?)
    }

    /// Fetches one past comparison by identifier.
    pub async fn history_entry(&self, id: i64) -> Result<ComparisonResult, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/history/{id}")))
            .send()
            .await?;
        Self::decode_result(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn decode_result(response: reqwest::Response) -> Result<ComparisonResult, ApiError> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(response.json().await?)
    }

    /// Failure bodies are best-effort: an unreadable or shapeless body still
    /// yields a `Server` error, just without a message.
    async fn failure(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        ApiError::Server {
            status,
            message: body.error,
        }
    }
}

// The fetch backend needs absolute URLs, so the default client resolves the
// page origin at construction.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_page_origin() {
        let client = ApiClient::default();
        assert_eq!(client.url("/calculate"), "/calculate");
        assert_eq!(client.url("/history/3"), "/history/3");
    }

    #[test]
    fn explicit_base_is_joined_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/history"), "http://localhost:5000/history");

        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(client.url("/history"), "http://localhost:5000/history");
    }

    #[test]
    fn calculate_params_form_encode_as_the_server_expects() {
        // `RequestBuilder::form` uses this exact encoding.
        let encoded =
            serde_urlencoded::to_string([("item_a", "tennis ball"), ("item_b", "swimming pool")])
                .unwrap();
        assert_eq!(encoded, "item_a=tennis+ball&item_b=swimming+pool");
    }
}
