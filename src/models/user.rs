//
//  okta-client
//  models/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User records and their nested value objects.
//!
//! A user is the central record of the identity store. The service returns
//! it with a lifecycle `status` (`STAGED`, `PROVISIONED`, `ACTIVE`,
//! `RECOVERY`, `PASSWORD_EXPIRED`, `LOCKED_OUT`, `SUSPENDED`,
//! `DEPROVISIONED`), a profile of directory attributes, and the primary
//! authentication and recovery credentials.
//!
//! # Example
//!
//! ```rust
//! use okta_client::models::User;
//!
//! let json = r#"{
//!     "id": "00u1ero7vZFVEIYLWPBN",
//!     "status": "ACTIVE",
//!     "profile": {"login": "isaac@example.org", "firstName": "Isaac"}
//! }"#;
//!
//! let user: User = serde_json::from_str(json).unwrap();
//! assert_eq!(user.profile.unwrap().first_name.as_deref(), Some("Isaac"));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ApiError;

/// A user of the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique key for the user.
    pub id: String,

    /// Current lifecycle status.
    pub status: Option<String>,

    /// Target status of an in-progress asynchronous status transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitioning_to_status: Option<String>,

    /// Timestamp when the user was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the transition to `ACTIVE` status completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated: Option<DateTime<Utc>>,

    /// Timestamp when the status last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_changed: Option<DateTime<Utc>>,

    /// Timestamp of the last login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    /// Timestamp when the user was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Timestamp when the password last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_changed: Option<DateTime<Utc>>,

    /// Directory attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Primary authentication and recovery credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    /// Discoverable resources related to the user.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// A user's directory attributes.
///
/// All fields are optional; when used as a create or update payload, absent
/// fields are omitted from the serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique login (usually an email address).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Casual way to address the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Primary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Secondary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_email: Option<String>,

    /// URL of the user's online profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    /// Preferred written or spoken language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,

    /// Relationship to the organization (employee, contractor, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    /// Organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Division.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,

    /// Department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Cost center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,

    /// Employee number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,

    /// Mobile phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    /// Primary phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Zip or postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A user's primary authentication and recovery credentials.
///
/// The wire shape for this object uses `recovery_question`, not camelCase —
/// field names here match the service exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Password credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,

    /// Recovery question credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_question: Option<RecoveryQuestion>,

    /// Authentication provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// A password credential.
///
/// The service never returns the value; it is only ever present on
/// requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Password {
    /// The clear-text password, on requests only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A recovery question credential.
///
/// The answer is write-only: the service returns the question but never
/// the answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecoveryQuestion {
    /// The recovery question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// The answer, on requests only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// The authentication provider for a set of credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    /// Provider type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ProviderType>,

    /// Provider instance name, e.g. `"OKTA"` or an AD domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The supported authentication provider types.
///
/// Assigning any other value is a configuration error, raised locally at
/// the point of assignment — see the [`FromStr`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderType {
    /// The built-in directory.
    Okta,
    /// Active Directory delegated authentication.
    ActiveDirectory,
    /// LDAP delegated authentication.
    Ldap,
    /// An inbound federation (SAML) identity provider.
    Federation,
    /// A social identity provider.
    Social,
}

impl ProviderType {
    /// The wire representation of the provider type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Okta => "OKTA",
            Self::ActiveDirectory => "ACTIVE_DIRECTORY",
            Self::Ldap => "LDAP",
            Self::Federation => "FEDERATION",
            Self::Social => "SOCIAL",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OKTA" => Ok(Self::Okta),
            "ACTIVE_DIRECTORY" => Ok(Self::ActiveDirectory),
            "LDAP" => Ok(Self::Ldap),
            "FEDERATION" => Ok(Self::Federation),
            "SOCIAL" => Ok(Self::Social),
            other => Err(ApiError::Config(format!(
                "unsupported provider type: {other:?}"
            ))),
        }
    }
}

/// A link to an application assigned to a user, directly or via group
/// membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLink {
    /// Unique key for the app link.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Sign-on URL for the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,

    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Catalog name of the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Application instance the link points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_instance_id: Option<String>,

    /// The assignment behind the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_assignment_id: Option<String>,

    /// Whether credentials are set up for the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_setup: Option<bool>,

    /// Whether the link is hidden from the end-user dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Sort order on the end-user dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!("OKTA".parse::<ProviderType>().unwrap(), ProviderType::Okta);
        assert_eq!(
            "ACTIVE_DIRECTORY".parse::<ProviderType>().unwrap(),
            ProviderType::ActiveDirectory
        );
        assert!("GOOGLE".parse::<ProviderType>().is_err());
        assert!("okta".parse::<ProviderType>().is_err());
    }

    #[test]
    fn test_provider_type_wire_format() {
        let provider = Provider {
            provider_type: Some(ProviderType::ActiveDirectory),
            name: Some("corp.example.org".to_string()),
        };
        let json = serde_json::to_value(&provider).unwrap();
        assert_eq!(json["type"], "ACTIVE_DIRECTORY");
    }

    #[test]
    fn test_user_deserializes_from_full_record() {
        let json = r#"{
            "id": "00u1ero7vZFVEIYLWPBN",
            "status": "ACTIVE",
            "created": "2023-10-02T10:00:00.000Z",
            "lastUpdated": "2024-01-05T08:15:00.000Z",
            "profile": {
                "login": "isaac@example.org",
                "firstName": "Isaac",
                "lastName": "Brock",
                "email": "isaac@example.org",
                "mobilePhone": "555-415-1337"
            },
            "credentials": {
                "password": {},
                "recovery_question": {"question": "Who is the best cellist?"},
                "provider": {"type": "OKTA", "name": "OKTA"}
            },
            "_links": {"self": {"href": "https://acme.okta.com/api/v1/users/00u1ero7vZFVEIYLWPBN"}}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "00u1ero7vZFVEIYLWPBN");
        assert_eq!(user.status.as_deref(), Some("ACTIVE"));
        let profile = user.profile.unwrap();
        assert_eq!(profile.login.as_deref(), Some("isaac@example.org"));
        assert_eq!(profile.mobile_phone.as_deref(), Some("555-415-1337"));
        let credentials = user.credentials.unwrap();
        assert_eq!(
            credentials.provider.unwrap().provider_type,
            Some(ProviderType::Okta)
        );
        assert_eq!(
            credentials.recovery_question.unwrap().question.as_deref(),
            Some("Who is the best cellist?")
        );
    }

    #[test]
    fn test_profile_serialization_omits_absent_fields() {
        let profile = Profile {
            login: Some("isaac@example.org".to_string()),
            first_name: Some("Isaac".to_string()),
            ..Profile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"login": "isaac@example.org", "firstName": "Isaac"})
        );
    }
}
