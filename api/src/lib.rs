//! Typed client for the comparison backend. The server owns the ratio
//! computation and the history store; this crate only speaks its contract.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
