//
//  okta-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authenticated Transport
//!
//! This module provides the core HTTP client for the Okta API. It owns a
//! single long-lived [`reqwest::Client`] bound to one base URL and one
//! default header set, reused by every resource facade.
//!
//! ## Features
//!
//! - Base-URL/version composition from the resolved connection profile
//! - Authorization header injection (`SSWS` scheme, owned by the transport)
//! - JSON serialization of request bodies
//! - Raw responses for every completed exchange — failure classification is
//!   deferred to the response normalizer so callers can choose how to react
//! - Crate-versioned `User-Agent` header
//!
//! ## What it does not do
//!
//! No retries, no backoff, no timeout overrides, no connection tuning:
//! whatever the underlying transport's defaults provide is what callers
//! get. The handle holds no mutable per-call state and is safe to share
//! across concurrent callers.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ClientConfig, ConnectionProfile};

use super::common::ApiError;
use super::response::{normalize, normalize_as, RawResponse};

/// The authenticated transport handle.
///
/// Wraps one base URL and one default header set; every resource operation
/// in this crate flows through [`request`](Self::request) or one of its
/// wrappers. The handle is immutable after construction: resource facades
/// share it, none of them may change it.
///
/// # Creating a transport
///
/// ```rust,no_run
/// use okta_client::{ClientConfig, OktaClient};
///
/// // Production, default API version
/// let client = OktaClient::new("acme", "00a1b2c3")?;
///
/// // Preview organization with an extra default header
/// let preview = OktaClient::with_config(
///     "acme",
///     "00a1b2c3",
///     ClientConfig::default()
///         .preview(true)
///         .header("X-Request-Source", "directory-sync"),
/// )?;
/// # Ok::<(), okta_client::ApiError>(())
/// ```
///
/// # Raw vs normalized calls
///
/// The verb primitives ([`get`](Self::get), [`post`](Self::post),
/// [`put`](Self::put), [`delete`](Self::delete)) return a [`RawResponse`]
/// and never fail on a non-2xx status. [`issue`](Self::issue) and
/// [`issue_as`](Self::issue_as) add normalization and are what the facades
/// consume.
pub struct OktaClient {
    /// The underlying HTTP client, carrying the default header set.
    http: Client,
    /// The resolved, immutable connection profile.
    profile: ConnectionProfile,
}

impl OktaClient {
    /// Creates a transport for an organization with default configuration.
    ///
    /// # Parameters
    ///
    /// * `organization` - The organization subdomain (tenant), e.g. `"acme"`
    /// * `key` - The organization API key
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for invalid construction inputs, or
    /// [`ApiError::Network`] if the HTTP client could not be built.
    pub fn new(organization: &str, key: &str) -> Result<Self, ApiError> {
        Self::with_config(organization, key, ClientConfig::default())
    }

    /// Creates a transport with explicit configuration.
    ///
    /// The configuration is resolved once into an immutable
    /// [`ConnectionProfile`]; the base URL and default headers never change
    /// afterwards.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn with_config(
        organization: &str,
        key: &str,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        let profile = ConnectionProfile::resolve(organization, key, config)?;
        Self::from_profile(profile)
    }

    /// Creates a transport from an already-resolved profile.
    pub fn from_profile(profile: ConnectionProfile) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("okta-client/{}", crate::VERSION))
            .default_headers(profile.default_headers())
            .build()?;
        Ok(Self { http, profile })
    }

    /// The resolved connection profile this transport is bound to.
    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// Issues a request and returns the raw response.
    ///
    /// This is the single dispatch capability everything else wraps. The
    /// relative `path` is joined onto the profile's base URL, query pairs
    /// are appended (callers omit absent values before getting here), and
    /// the optional body is serialized as JSON.
    ///
    /// A non-2xx status is **not** an error at this level; the exchange
    /// completes and the status travels on the returned [`RawResponse`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] if `path` cannot be joined onto the base URL
    /// - [`ApiError::Network`] if the request could not be sent or the body
    ///   could not be read
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = self
            .profile
            .base_url()
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid request path {path:?}: {e}")))?;

        let mut request = self.http.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {} returned {}", method, path, status);

        let body = response.text().await?;
        Ok(RawResponse::new(status, body))
    }

    /// `GET` a relative path, returning the raw response.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    /// `POST` a relative path with an optional JSON body, returning the raw
    /// response.
    pub async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        self.request(Method::POST, path, query, body).await
    }

    /// `PUT` a relative path with an optional JSON body, returning the raw
    /// response.
    pub async fn put(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        self.request(Method::PUT, path, query, body).await
    }

    /// `DELETE` a relative path, returning the raw response.
    pub async fn delete(&self, path: &str) -> Result<RawResponse, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Issues a request and normalizes the response into untyped JSON.
    ///
    /// # Errors
    ///
    /// As [`request`](Self::request), plus the normalizer's classification:
    /// [`ApiError::Api`] for any status outside the success set and
    /// [`ApiError::Decode`] for a malformed success body.
    pub async fn issue(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let response = self.request(method, path, query, body).await?;
        normalize(response)
    }

    /// Issues a request and normalizes the response into a typed value.
    ///
    /// # Errors
    ///
    /// As [`issue`](Self::issue), with decoding into `T`.
    pub async fn issue_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let response = self.request(method, path, query, body).await?;
        normalize_as(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_bad_inputs() {
        assert!(OktaClient::new("", "K").is_err());
        assert!(OktaClient::new("acme", "").is_err());
    }

    #[test]
    fn test_profile_is_exposed() {
        let client = OktaClient::new("acme", "K").unwrap();
        assert_eq!(
            client.profile().base_url().as_str(),
            "https://acme.okta.com/api/v1/"
        );
    }
}
