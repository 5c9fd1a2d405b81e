//
//  okta-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Response Normalization
//!
//! Classifies a raw HTTP response into a success value or a structured
//! error, strictly by status code. The body is never inspected to decide
//! the outcome.
//!
//! ## Classification
//!
//! The success set is `{200, 201, 202, 203, 204, 205, 206}`. Any other
//! status is a failure, surfaced as [`ApiError::Api`] carrying the decoded
//! error body.
//!
//! ## Decoding rules
//!
//! - A success body decodes as JSON, into untyped [`Value`] via
//!   [`normalize`] or into a caller-chosen type via [`normalize_as`].
//! - An empty success body decodes to `{}`, never an error. Several
//!   lifecycle endpoints (deactivate, close, unassign) legitimately return
//!   `204 No Content`.
//! - A malformed non-empty success body is an [`ApiError::Decode`].
//! - A failure body decodes in the untyped mode only. When it is empty or
//!   unparseable the error still surfaces, with `Value::Null` as payload.
//!
//! ## Example
//!
//! ```rust
//! use okta_client::api::{normalize, RawResponse};
//! use reqwest::StatusCode;
//! use serde_json::json;
//!
//! let ok = RawResponse::new(StatusCode::NO_CONTENT, String::new());
//! assert_eq!(normalize(ok).unwrap(), json!({}));
//!
//! let err = RawResponse::new(
//!     StatusCode::NOT_FOUND,
//!     r#"{"errorCode":"E0000007"}"#.to_string(),
//! );
//! let failure = normalize(err).unwrap_err();
//! assert_eq!(failure.error_code(), Some("E0000007"));
//! ```

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::common::ApiError;

/// The status codes classified as success.
///
/// Membership in this set is the only input to success/failure
/// classification.
pub const SUCCESS_STATUSES: [u16; 7] = [200, 201, 202, 203, 204, 205, 206];

/// A raw HTTP response as the transport yields it: status code plus body
/// text, for every completed exchange regardless of status.
///
/// Failure classification is deliberately deferred to [`normalize`] /
/// [`normalize_as`] so that callers can choose how to react — the SAML
/// metadata endpoint, for example, returns XML and is served from the raw
/// response directly.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response body, possibly empty.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response from its parts.
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the success set.
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status.as_u16())
    }

    /// Converts the response into the structured error it represents,
    /// decoding the body in the untyped mode.
    ///
    /// Used by call sites that consume the raw response directly (the SAML
    /// metadata endpoint returns XML) but still classify failures the
    /// standard way.
    pub fn into_error(self) -> ApiError {
        ApiError::Api {
            status: self.status,
            body: decode_error_body(&self.body),
        }
    }
}

/// Normalizes a response into untyped JSON (the associative form).
///
/// # Errors
///
/// - [`ApiError::Api`] for any status outside the success set, carrying the
///   decoded error body (`Value::Null` when empty or unparseable).
/// - [`ApiError::Decode`] for a non-empty success body that is not valid
///   JSON.
pub fn normalize(response: RawResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(response.into_error());
    }

    if response.body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// Normalizes a response into a caller-chosen type (the structured form).
///
/// Classification is identical to [`normalize`]; the success value is then
/// decoded into `T`. An empty success body decodes from `{}`, so `T` must
/// tolerate an all-absent shape to be used with bodyless endpoints.
///
/// # Errors
///
/// As [`normalize`], plus [`ApiError::Decode`] when the success value does
/// not fit `T`.
pub fn normalize_as<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
    let value = normalize(response)?;
    Ok(serde_json::from_value(value)?)
}

/// Decodes a failure body in the untyped mode.
///
/// Error bodies are carried verbatim, not re-validated: whatever fields the
/// service returned survive, and an unparseable body becomes `Value::Null`
/// rather than a secondary error.
fn decode_error_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(StatusCode::from_u16(status).unwrap(), body.to_string())
    }

    #[test]
    fn test_every_success_status_is_success() {
        for status in SUCCESS_STATUSES {
            let result = normalize(raw(status, r#"{"ok":true}"#));
            assert_eq!(result.unwrap(), json!({"ok": true}), "status {status}");
        }
    }

    #[test]
    fn test_non_success_statuses_are_failures() {
        for status in [301, 304, 400, 401, 403, 404, 409, 429, 500, 502, 503] {
            let result = normalize(raw(status, r#"{"errorCode":"E0000001"}"#));
            let err = result.unwrap_err();
            assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
            assert_eq!(err.error_code(), Some("E0000001"));
        }
    }

    #[test]
    fn test_empty_success_body_is_empty_object() {
        for status in SUCCESS_STATUSES {
            assert_eq!(normalize(raw(status, "")).unwrap(), json!({}), "status {status}");
        }
    }

    #[test]
    fn test_not_found_scenario() {
        let err = normalize(raw(404, r#"{"errorCode":"E0000007"}"#)).unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.error_body(), Some(&json!({"errorCode": "E0000007"})));
    }

    #[test]
    fn test_malformed_failure_body_still_fails_with_null_payload() {
        let err = normalize(raw(500, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.error_body(), Some(&Value::Null));

        let err = normalize(raw(401, "")).unwrap_err();
        assert_eq!(err.error_body(), Some(&Value::Null));
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let result = normalize(raw(200, "not json"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_normalize_as_typed() {
        #[derive(Deserialize)]
        struct Pong {
            ok: bool,
        }

        let pong: Pong = normalize_as(raw(200, r#"{"ok":true}"#)).unwrap();
        assert!(pong.ok);

        let result: Result<Pong, _> = normalize_as(raw(200, r#"{"ok":"yes"}"#));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_normalize_as_failure_is_classified_before_decoding() {
        #[derive(Deserialize, Debug)]
        struct Pong {
            #[allow(dead_code)]
            ok: bool,
        }

        let result: Result<Pong, _> = normalize_as(raw(404, r#"{"errorCode":"E0000007"}"#));
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), Some("E0000007"));
    }
}
