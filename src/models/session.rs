//
//  okta-client
//  models/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's SSO session.
///
/// The cookie token fields are only present when requested through the
/// `additionalFields` query parameter at session creation, and each token
/// is issued exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique key for the session.
    pub id: String,

    /// Unique key of the session owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Login of the session owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Timestamp when the session expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Current status of the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the session owner has enrolled an MFA factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_active: Option<bool>,

    /// One-time token for setting the session cookie manually.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_token: Option<String>,

    /// One-time URL that sets the session cookie via redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_token_url: Option<String>,

    /// Discoverable resources related to the session.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}
