//
//  okta-client
//  models/app.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Application records, user/group assignments, and key credentials.
//!
//! Application `settings` and `credentials` are open-shaped: every catalog
//! application defines its own keys, so they stay as untyped JSON rather
//! than pretending a fixed schema exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An application added to the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique key for the application.
    pub id: String,

    /// Catalog name of the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Current lifecycle status, `ACTIVE` or `INACTIVE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Authentication mode for the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_on_mode: Option<String>,

    /// Timestamp when the application was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the application was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Timestamp when the application was activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated: Option<DateTime<Utc>>,

    /// Enabled application features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,

    /// Accessibility settings (self-service, error redirect).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Value>,

    /// Visibility settings (app icons, auto-submit toolbar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Value>,

    /// Credentials for the specified sign-on mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,

    /// Settings for the application; shape varies per catalog entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Discoverable resources related to the application.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// Payload for adding an application to the organization.
///
/// `settings` carries the app-specific settings object; the facade wraps it
/// under the `app` key the way the service expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    /// Catalog name of the application.
    pub name: String,

    /// Display label.
    pub label: String,

    /// Authentication mode for the application.
    pub sign_on_mode: String,

    /// App-specific settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Whether to execute the activation lifecycle operation on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate: Option<bool>,
}

/// A user assigned to an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    /// Unique key of the assigned user.
    pub id: String,

    /// Id of the user in the target application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Scope of the assignment, `USER` or `GROUP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Status of the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Timestamp when the assignment was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the assignment was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Timestamp when the assignment status last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_changed: Option<DateTime<Utc>>,

    /// Timestamp when the app password last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_changed: Option<DateTime<Utc>>,

    /// Synchronization state for provisioning-enabled applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_state: Option<String>,

    /// Timestamp of the last provisioning sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,

    /// Credentials for the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,

    /// App-specific profile for the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Value>,

    /// Discoverable resources related to the assignment.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// A group assigned to an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGroup {
    /// Unique key of the assigned group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Timestamp when the assignment was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Assignment priority; lower wins when a user is assigned via several
    /// groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Discoverable resources related to the assignment.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// An application key credential (X.509 certificate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppKeyCredential {
    /// Unique identifier of the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// Cryptographic algorithm family, e.g. `RSA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,

    /// Intended use of the key, e.g. `sig`.
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,

    /// Timestamp when the key was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the key expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// RSA public exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// RSA modulus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// X.509 certificate chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,

    /// SHA-256 thumbprint of the certificate.
    #[serde(rename = "x5t#S256", default, skip_serializing_if = "Option::is_none")]
    pub x5t_s256: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserializes_with_open_shaped_settings() {
        let json = r#"{
            "id": "0oa1gjh63g214q0Hq0g4",
            "name": "bookmark",
            "label": "Sample Bookmark",
            "status": "ACTIVE",
            "signOnMode": "BOOKMARK",
            "settings": {"app": {"url": "https://example.org/bookmark.htm", "requestIntegration": false}}
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, "0oa1gjh63g214q0Hq0g4");
        assert_eq!(app.sign_on_mode.as_deref(), Some("BOOKMARK"));
        assert_eq!(
            app.settings.unwrap()["app"]["url"],
            "https://example.org/bookmark.htm"
        );
    }

    #[test]
    fn test_key_credential_x5t_field_name() {
        let json = r#"{"kid": "akm5hvbbevE341ovl0h7", "kty": "RSA", "use": "sig", "x5t#S256": "CyhOiLD8_9hCFT02nUbkvmlNncBsb31xY_SUbF6fHPA"}"#;
        let key: AppKeyCredential = serde_json::from_str(json).unwrap();
        assert_eq!(key.key_use.as_deref(), Some("sig"));
        assert!(key.x5t_s256.is_some());
    }
}
