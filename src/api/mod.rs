//
//  okta-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Dispatch Layer
//!
//! The component every resource operation flows through.
//!
//! ## Architecture
//!
//! - [`client`]: The authenticated transport — one long-lived HTTP client
//!   bound to a resolved base URL and default header set
//! - [`response`]: Response normalization — status-code-driven
//!   success/failure classification and JSON decoding
//! - [`common`]: The error taxonomy and opaque-cursor pagination parameters
//!
//! ## Control flow
//!
//! A resource facade builds a path, query, and/or JSON body, issues the
//! call through the transport, and the raw response passes through the
//! normalizer. The normalized result — a decoded value or a structured
//! error — returns to the caller.

/// The authenticated transport.
pub mod client;

/// Shared types: error taxonomy and pagination parameters.
pub mod common;

/// Response normalization.
pub mod response;

/// Re-export of the transport handle.
pub use client::OktaClient;

/// Re-export of the error and pagination types.
pub use common::{ApiError, Pagination};

/// Re-export of the raw response type and the normalization entry points.
pub use response::{normalize, normalize_as, RawResponse, SUCCESS_STATUSES};
