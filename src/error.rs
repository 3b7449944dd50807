//! Error types for Paystack API operations

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Unified error type for every client operation
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (network error, timeout, TLS, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Paystack rejected the request
    #[error(transparent)]
    Api(Box<ApiError>),
    /// Failed to encode a request body or decode a response
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Response was well-formed JSON but not in the shape the endpoint promises
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    /// The request could not be built from the arguments given
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Returns the vendor error details when this is an [`Error::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(Box::new(err))
    }
}

/// Error reported by the Paystack API, either through an HTTP error status or
/// through a `status: false` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Vendor `message` field, or the raw body when it was not JSON
    pub message: String,
    /// Vendor `errors` field, arbitrary nested JSON
    pub errors: Option<Value>,
    /// URL of the failing request
    pub url: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paystack API error (HTTP {}) at {}: {}",
            self.status_code, self.url, self.message
        )?;
        if let Some(errors) = &self.errors {
            write!(f, "; errors: {}", errors)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Result alias for Paystack operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_without_details() {
        let err = ApiError {
            status_code: 401,
            message: "Invalid key".to_string(),
            errors: None,
            url: "https://api.paystack.co/customer".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "paystack API error (HTTP 401) at https://api.paystack.co/customer: Invalid key"
        );
    }

    #[test]
    fn api_error_display_with_details() {
        let err = ApiError {
            status_code: 400,
            message: "Validation failed".to_string(),
            errors: Some(serde_json::json!({ "email": ["is required"] })),
            url: "https://api.paystack.co/customer".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("HTTP 400"));
        assert!(text.ends_with(r#"; errors: {"email":["is required"]}"#));
    }

    #[test]
    fn error_wraps_api_error_transparently() {
        let api = ApiError {
            status_code: 404,
            message: "Customer not found".to_string(),
            errors: None,
            url: "https://api.paystack.co/customer/CUS_x".to_string(),
        };
        let err = Error::from(api.clone());

        assert_eq!(err.to_string(), api.to_string());
        assert_eq!(err.api_error(), Some(&api));
    }

    #[test]
    fn decode_error_has_no_api_details() {
        let parse_err = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = Error::from(parse_err);

        assert!(err.api_error().is_none());
        assert!(err.to_string().starts_with("Decode error:"));
    }
}
