//
//  okta-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module resolves caller-supplied options into an immutable connection
//! profile: the host, base URL, API version, and default header set that the
//! transport is bound to for its whole lifetime.
//!
//! ## Overview
//!
//! Two types live here:
//!
//! - [`ClientConfig`]: the explicit configuration record. Every recognized
//!   option is an enumerated field with a documented default — there is no
//!   loosely-typed option array anywhere in this crate.
//! - [`ConnectionProfile`]: the resolved result. Once constructed, its base
//!   URL never changes.
//!
//! ## Host derivation
//!
//! | `preview` | Host | Base URL |
//! |-----------|------|----------|
//! | `false` | `{org}.okta.com` | `https://{org}.okta.com/api/{version}/` |
//! | `true` | `{org}.oktapreview.com` | `https://{org}.oktapreview.com/api/{version}/` |
//!
//! ## Header merge semantics
//!
//! Built-in defaults are `Authorization: SSWS {key}` and
//! `Content-Type: application/json`. Caller-supplied headers merge on top
//! and win on key collision, with one exception: the authorization header is
//! owned by the transport, so the credential-derived value is re-asserted
//! after the merge and cannot be displaced.
//!
//! ## Example
//!
//! ```rust
//! use okta_client::config::{ClientConfig, ConnectionProfile};
//!
//! let profile = ConnectionProfile::resolve("acme", "00a1b2c3", ClientConfig::default()).unwrap();
//! assert_eq!(profile.base_url().as_str(), "https://acme.okta.com/api/v1/");
//!
//! let preview = ConnectionProfile::resolve(
//!     "acme",
//!     "00a1b2c3",
//!     ClientConfig::default().preview(true),
//! )
//! .unwrap();
//! assert_eq!(preview.base_url().as_str(), "https://acme.oktapreview.com/api/v1/");
//! ```

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::api::ApiError;
use crate::auth::ApiToken;

/// The production host suffix.
///
/// Organization subdomains are prefixed onto this to form the production
/// API host, e.g. `acme.okta.com`.
pub const OKTA_DOMAIN: &str = "okta.com";

/// The preview (sandbox) host suffix.
///
/// Selected by [`ClientConfig::preview`]; organization subdomains are
/// prefixed onto this to form the preview API host, e.g.
/// `acme.oktapreview.com`.
pub const OKTA_PREVIEW_DOMAIN: &str = "oktapreview.com";

/// The default API version segment.
///
/// # Value
///
/// `"v1"`
pub const DEFAULT_API_VERSION: &str = "v1";

/// Client configuration options.
///
/// An explicit record of every recognized option, with documented defaults.
/// Construct with [`ClientConfig::default`] and adjust via the builder
/// methods; validation happens once, at profile resolution, not at point of
/// use.
///
/// # Options
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `api_version` | `"v1"` | API version segment of the base URL |
/// | `headers` | empty | Extra default headers, merged over built-ins |
/// | `preview` | `false` | Target the preview host instead of production |
/// | `base_url` | `None` | Override the derived base URL entirely |
///
/// # Example
///
/// ```rust
/// use okta_client::ClientConfig;
///
/// let config = ClientConfig::default()
///     .api_version("v1")
///     .preview(true)
///     .header("X-Request-Source", "provisioning-job");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API version segment of the base URL. Default `"v1"`.
    pub api_version: String,

    /// Extra default headers, merged over the built-in header set.
    /// Caller values win on key collision, except `Authorization`.
    pub headers: HashMap<String, String>,

    /// Target the preview host (`oktapreview.com`) instead of production
    /// (`okta.com`). Default `false`.
    pub preview: bool,

    /// Optional base URL override for non-standard hosts (reverse proxies,
    /// local mock servers). When set, it replaces the derived org/preview
    /// URL; a trailing `/` is appended if missing so relative paths join
    /// correctly.
    pub base_url: Option<Url>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            headers: HashMap::new(),
            preview: false,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Sets the API version segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Adds an extra default header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Selects the preview host instead of production.
    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Overrides the derived base URL entirely.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }
}

/// A fully-resolved, immutable connection profile.
///
/// Produced once at client construction by [`ConnectionProfile::resolve`];
/// the base URL and default header set never change afterwards. The
/// transport handle is bound to exactly one profile for its whole lifetime.
///
/// # Invariant
///
/// The API version and environment flag together determine the base URL at
/// resolution time. No later call can mutate it.
#[derive(Debug, Clone)]
pub struct ConnectionProfile {
    organization: String,
    token: ApiToken,
    api_version: String,
    preview: bool,
    base_url: Url,
    headers: HeaderMap,
}

impl ConnectionProfile {
    /// Resolves caller options and defaults into a profile.
    ///
    /// This is a pure function of its inputs: no I/O, no side effects,
    /// deterministic. All validation happens here, before any network call.
    ///
    /// # Parameters
    ///
    /// - `organization`: the organization subdomain (tenant), e.g. `"acme"`
    /// - `key`: the organization API key
    /// - `config`: configuration options, see [`ClientConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the organization, key, or API
    /// version is empty, or when an extra header has an invalid name or
    /// value.
    pub fn resolve(
        organization: &str,
        key: &str,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        if organization.trim().is_empty() {
            return Err(ApiError::Config(
                "organization subdomain must not be empty".to_string(),
            ));
        }
        if config.api_version.trim().is_empty() {
            return Err(ApiError::Config("API version must not be empty".to_string()));
        }

        let token = ApiToken::new(key)?;

        let base_url = match config.base_url {
            Some(mut url) => {
                if !url.path().ends_with('/') {
                    url.set_path(&format!("{}/", url.path()));
                }
                url
            }
            None => {
                let domain = if config.preview {
                    OKTA_PREVIEW_DOMAIN
                } else {
                    OKTA_DOMAIN
                };
                let raw = format!(
                    "https://{}.{}/api/{}/",
                    organization, domain, config.api_version
                );
                Url::parse(&raw)
                    .map_err(|e| ApiError::Config(format!("invalid base URL {raw:?}: {e}")))?
            }
        };

        let headers = Self::merge_headers(&token, &config.headers)?;

        Ok(Self {
            organization: organization.to_string(),
            token,
            api_version: config.api_version,
            preview: config.preview,
            base_url,
            headers,
        })
    }

    /// Merges caller headers over the built-in set.
    ///
    /// Caller values win on key collision. The authorization header is
    /// re-asserted from the credential after the merge, so a caller-supplied
    /// `Authorization` entry never survives.
    fn merge_headers(
        token: &ApiToken,
        extra: &HashMap<String, String>,
    ) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Config(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Config(format!("invalid value for header {name}: {e}")))?;
            headers.insert(name, value);
        }

        headers.insert(AUTHORIZATION, token.header_value()?);
        Ok(headers)
    }

    /// The organization subdomain this profile was resolved for.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// The API version segment of the base URL.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Whether the profile targets the preview host.
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// The immutable base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The merged default header set applied to every request.
    pub(crate) fn default_headers(&self) -> HeaderMap {
        self.headers.clone()
    }
}
