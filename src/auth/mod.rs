//
//  okta-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module owns the credential side of the dispatch layer: the API token
//! issued by the Okta organization and the `SSWS` authorization scheme
//! derived from it.
//!
//! ## The SSWS scheme
//!
//! Okta authenticates API calls with a proprietary scheme:
//!
//! ```text
//! Authorization: SSWS {api key}
//! ```
//!
//! The scheme is owned by this module and applied by the transport when the
//! connection profile is resolved. Caller-supplied headers merge on top of
//! the built-in defaults, but the authorization value is re-asserted after
//! the merge, so a caller cannot accidentally (or deliberately) unset it.
//!
//! ## Example
//!
//! ```rust
//! use okta_client::auth::ApiToken;
//!
//! let token = ApiToken::new("00a1b2c3d4e5").unwrap();
//! assert_eq!(token.scheme_value(), "SSWS 00a1b2c3d4e5");
//!
//! // Debug output never leaks the key material.
//! assert_eq!(format!("{:?}", token), "ApiToken(***)");
//! ```

use std::fmt;

use reqwest::header::HeaderValue;

use crate::api::ApiError;

/// An Okta API token.
///
/// Newtype over the organization API key. Constructing one validates that
/// the key is non-empty; everything else about the key is opaque to this
/// crate and passed through to the service verbatim.
///
/// # Security
///
/// The `Debug` implementation redacts the key, and the header value produced
/// by [`header_value`](Self::header_value) is marked sensitive so that
/// middleware and logs treat it as secret.
///
/// # Example
///
/// ```rust
/// use okta_client::auth::ApiToken;
///
/// let token = ApiToken::new("00a1b2c3d4e5").unwrap();
/// assert_eq!(token.scheme_value(), "SSWS 00a1b2c3d4e5");
///
/// // An empty key is a configuration error, caught before any network call.
/// assert!(ApiToken::new("").is_err());
/// ```
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a token from the raw API key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ApiError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ApiError::Config("API key must not be empty".to_string()));
        }
        Ok(Self(key))
    }

    /// Returns the full `SSWS {key}` authorization value.
    pub fn scheme_value(&self) -> String {
        format!("SSWS {}", self.0)
    }

    /// Produces the typed authorization header value, marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the key contains bytes that are not
    /// legal in an HTTP header value.
    pub(crate) fn header_value(&self) -> Result<HeaderValue, ApiError> {
        let mut value = HeaderValue::from_str(&self.scheme_value())
            .map_err(|e| ApiError::Config(format!("API key is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_value() {
        let token = ApiToken::new("abc123").unwrap();
        assert_eq!(token.scheme_value(), "SSWS abc123");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(ApiToken::new("").is_err());
        assert!(ApiToken::new("   ").is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let token = ApiToken::new("super-secret").unwrap();
        let rendered = format!("{:?}", token);
        assert_eq!(rendered, "ApiToken(***)");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let token = ApiToken::new("abc123").unwrap();
        let value = token.header_value().unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "SSWS abc123");
    }

    #[test]
    fn test_control_characters_rejected() {
        let token = ApiToken::new("abc\ndef").unwrap();
        assert!(token.header_value().is_err());
    }
}
