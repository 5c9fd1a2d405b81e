//
//  okta-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Okta Client Library
//!
//! A client library for the Okta identity-management REST API, covering the
//! organization-level resource catalog: applications, users, groups, roles,
//! sessions, schemas, and events.
//!
//! ## Overview
//!
//! Every operation in this crate flows through a single dispatch layer:
//! a resolved connection profile (host, API version, default headers), an
//! authenticated transport bound to that profile, and a response normalizer
//! that classifies each HTTP response into a decoded success value or a
//! structured error. The per-resource facades are thin, mechanical mappings
//! of endpoints and parameters onto that layer.
//!
//! ## Module Structure
//!
//! - [`api`]: The authenticated transport and response normalization
//! - [`auth`]: API token handling and the `SSWS` authorization scheme
//! - [`config`]: Client configuration and connection profile resolution
//! - [`models`]: Wire types mirroring the remote service's JSON shapes
//! - [`resources`]: Per-resource facades (users, apps, groups, ...)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use okta_client::Okta;
//!
//! # async fn example() -> Result<(), okta_client::ApiError> {
//! let okta = Okta::new("acme", "00a1b2c3...")?;
//!
//! let user = okta.users().get("00u1ero7vZFVEIYLWPBN").await?;
//! println!("{:?}", user.profile);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All failures surface as [`ApiError`]. Remote failures (any status outside
//! the 200–206 success set) carry the HTTP status and the decoded error body
//! the service returned; nothing is retried or suppressed by this layer.
//!
//! ## Production vs Preview
//!
//! | Environment | Host suffix | Base URL |
//! |-------------|-------------|----------|
//! | Production | `okta.com` | `https://{org}.okta.com/api/{version}/` |
//! | Preview | `oktapreview.com` | `https://{org}.oktapreview.com/api/{version}/` |

/// The authenticated transport and response normalization layer.
///
/// Provides the [`OktaClient`] transport handle, the raw response type,
/// the success/failure classifier, and the [`ApiError`] error taxonomy.
pub mod api;

/// API token handling.
///
/// Owns the `SSWS {key}` authorization scheme. The token is applied by the
/// transport when the connection profile is resolved; callers never build
/// the authorization header themselves.
pub mod auth;

/// Client configuration and connection profile resolution.
///
/// Merges caller-supplied options with documented defaults into an
/// immutable [`ConnectionProfile`] whose base URL never changes after
/// construction.
pub mod config;

/// Wire types mirroring the remote service's JSON shapes.
///
/// Plain data records for users, applications, groups, roles, sessions,
/// schemas, and events, plus their nested value objects. They carry no
/// behavior beyond field access and local validation.
pub mod models;

/// Per-resource facades.
///
/// One immutable facade per resource family, each holding a shared
/// reference to the transport and delegating every operation to it.
pub mod resources;

/// Re-export of the facade factory.
///
/// [`Okta`] is the primary entry point: it owns the transport and exposes
/// one accessor per resource family.
pub use resources::Okta;

/// Re-export of the transport handle for callers that want the dispatch
/// layer without the facade set.
pub use api::OktaClient;

/// Re-export of the error type returned by every operation in this crate.
pub use api::ApiError;

/// Re-export of the client configuration record.
pub use config::{ClientConfig, ConnectionProfile};

/// Re-export of the API token newtype.
pub use auth::ApiToken;

/// Re-export of the opaque-cursor pagination parameters.
pub use api::Pagination;

/// Library version constant.
///
/// The current version of the crate, automatically derived from Cargo.toml
/// at compile time using the `CARGO_PKG_VERSION` environment variable.
/// Used to build the `User-Agent` header on every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
