//
//  okta-client
//  models/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Group records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A group in the organization.
///
/// Only groups of type `OKTA_GROUP` can be created, updated, or removed
/// through the API; directory-mastered groups (`APP_GROUP`) and the
/// built-in `Everyone` group (`BUILT_IN`) are read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique key for the group.
    pub id: String,

    /// Determines how the group's profile and memberships are managed.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,

    /// Object classes the group satisfies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_class: Option<Vec<String>>,

    /// Timestamp when the group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the group's profile was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Timestamp when the group's memberships were last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_membership_updated: Option<DateTime<Utc>>,

    /// The group's profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<GroupProfile>,

    /// Discoverable resources related to the group.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// The `okta:user_group` profile, also the payload for group creation and
/// updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupProfile {
    /// Name of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GroupProfile {
    /// Convenience constructor for the common name-plus-description case.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}
