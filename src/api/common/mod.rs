//
//  okta-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Common API Types
//!
//! Shared types used across the dispatch layer and every resource facade:
//! the error taxonomy and the opaque-cursor pagination parameters.
//!
//! ## Error taxonomy
//!
//! | Variant | Raised | Carries |
//! |---------|--------|---------|
//! | [`ApiError::Config`] | locally, before any network call | a description of the invalid input |
//! | [`ApiError::Network`] | transport-level failure | the underlying `reqwest` error |
//! | [`ApiError::Api`] | any response status outside 200–206 | the HTTP status and decoded error body |
//! | [`ApiError::Decode`] | unparseable success body | the underlying `serde_json` error |
//!
//! There is no distinction between "expected" domain errors (a user that
//! does not exist) and transport-level failures: both travel the same
//! structured path, differentiated only by the status code and body the
//! caller inspects. Nothing is retried or suppressed.
//!
//! ## Example
//!
//! ```rust
//! use okta_client::ApiError;
//!
//! fn describe(err: &ApiError) -> String {
//!     match err {
//!         ApiError::Api { status, .. } if status.as_u16() == 404 => {
//!             format!("not found ({})", err.error_code().unwrap_or("no code"))
//!         }
//!         other => other.to_string(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::Pagination;

/// Unified error type for every operation in this crate.
///
/// Remote failures keep whatever fields the service returned: the error
/// body is decoded as untyped JSON and carried verbatim on
/// [`ApiError::Api`], never re-validated against a schema. The service's
/// usual shape is:
///
/// ```json
/// {
///     "errorCode": "E0000007",
///     "errorSummary": "Not found: Resource not found: missing@acme.com (User)",
///     "errorLink": "E0000007",
///     "errorId": "oaeyM8hqsUKSa2H4kaSmTdgBg",
///     "errorCauses": []
/// }
/// ```
///
/// The [`error_code`](Self::error_code) and
/// [`error_summary`](Self::error_summary) accessors pull those two fields
/// out when present.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid or missing construction input, raised synchronously and
    /// locally before any network call.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport-level failure from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any response with a status outside the success set {200..=206}.
    ///
    /// `body` is the decoded error payload, or `Value::Null` when the
    /// response body was empty or not parseable as JSON.
    #[error("API error ({status}): {}", summarize(.body))]
    Api {
        /// The HTTP status code the service returned.
        status: StatusCode,
        /// The decoded error body, `Value::Null` if unparseable.
        body: Value,
    },

    /// A non-empty success body that could not be decoded as JSON, or a
    /// success body that does not fit the requested type.
    #[error("response decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status for remote failures, `None` for local errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded error body for remote failures.
    pub fn error_body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The service's `errorCode` field, when the error body carries one.
    pub fn error_code(&self) -> Option<&str> {
        self.error_body()?.get("errorCode")?.as_str()
    }

    /// The service's `errorSummary` field, when the error body carries one.
    pub fn error_summary(&self) -> Option<&str> {
        self.error_body()?.get("errorSummary")?.as_str()
    }
}

/// Renders the most useful part of a decoded error body for display.
///
/// Prefers the human-readable summary, falls back to the error code, then
/// to the raw JSON.
fn summarize(body: &Value) -> String {
    if let Some(summary) = body.get("errorSummary").and_then(Value::as_str) {
        return summary.to_string();
    }
    if let Some(code) = body.get("errorCode").and_then(Value::as_str) {
        return code.to_string();
    }
    if body.is_null() {
        return "no error body".to_string();
    }
    body.to_string()
}
