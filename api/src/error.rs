//! Failure taxonomy for backend calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a failure status. `message` carries the
    /// `error` field of the response body when one was present.
    #[error("{}", .message.as_deref().unwrap_or("the server rejected the request"))]
    Server { status: u16, message: Option<String> },

    /// The request never completed, or the success body could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}
