//! The request/response pipeline shared by every endpoint.

use std::time::Instant;

use log::{debug, error, warn};
use reqwest::header::USER_AGENT;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

use super::PaystackClient;

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    /// Builds a form body from key/value pairs, keeping their order.
    pub fn form<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        RequestBody::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl PaystackClient {
    /// Performs one request against the Paystack API and decodes the result.
    ///
    /// `path` is either an absolute URL or a path relative to the base URL.
    /// When the envelope's `data` is an object, only `data` is decoded into
    /// `T`; otherwise the whole envelope is, which is how lists pick up their
    /// `meta` next to `data`.
    pub fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!("Requesting {method} {url}");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header(USER_AGENT, &self.user_agent);

        request = match &body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => {
                debug!("Request JSON body: {value}");
                request.json(value)
            }
            RequestBody::Form(pairs) => {
                debug!("Request form body: {pairs:?}");
                request.form(pairs)
            }
        };

        let start = Instant::now();
        let response = request.send()?;
        let status = response.status();
        debug!("Response status: {status} (completed in {:?})", start.elapsed());

        let response_text = response.text()?;
        debug!("Response body: {response_text}");

        decode_envelope(status.as_u16(), &url, &response_text)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Turns a raw response into either the decoded destination or an error.
pub(crate) fn decode_envelope<T: DeserializeOwned>(status: u16, url: &str, body: &str) -> Result<T> {
    let mut envelope: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if status >= 400 => {
            error!("Paystack request to {url} failed with status {status}: {body}");
            return Err(ApiError {
                status_code: status,
                message: body.trim().to_string(),
                errors: None,
                url: url.to_string(),
            }
            .into());
        }
        Err(e) => {
            error!("Failed to parse Paystack response from {url}: {e}");
            return Err(e.into());
        }
    };

    let succeeded = envelope.get("status").and_then(Value::as_bool) == Some(true);
    if !succeeded || status >= 400 {
        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let errors = envelope.get("errors").filter(|e| !e.is_null()).cloned();
        warn!("Paystack error from {url} (HTTP {status}): {message}");
        return Err(ApiError {
            status_code: status,
            message,
            errors,
            url: url.to_string(),
        }
        .into());
    }

    let payload = if matches!(envelope.get("data"), Some(Value::Object(_))) {
        envelope["data"].take()
    } else {
        envelope
    };

    serde_json::from_value(payload).map_err(|e| {
        error!("Failed to decode Paystack response from {url}: {e}");
        e.into()
    })
}

/// Appends the pagination query used by every list endpoint.
pub(crate) fn paginate(path: &str, count: u32, offset: u32) -> String {
    format!("{path}?perPage={count}&page={offset}")
}

/// Appends percent-encoded query parameters to `path`.
pub(crate) fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Percent-encodes a code or reference used as a path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
