//! API utilities for loading dashboard data
//!
//! Both collections are plain JSON arrays served over HTTP. The helpers here
//! turn a URL into a typed `Vec<T>` and classify what went wrong when they
//! cannot.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a collection fetch
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Fetch a JSON array from `url`
pub async fn fetch_json_list<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            FetchError::Request("connection refused".into()).to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            FetchError::Parse("expected `[`".into()).to_string(),
            "Failed to parse response: expected `[`"
        );
    }
}
