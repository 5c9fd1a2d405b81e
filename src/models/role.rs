//
//  okta-client
//  models/role.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Role records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An administrator role assigned to a user.
///
/// Role types include `SUPER_ADMIN`, `ORG_ADMIN`, `APP_ADMIN`,
/// `USER_ADMIN`, `MOBILE_ADMIN`, `READ_ONLY_ADMIN`. `USER_ADMIN` and
/// `APP_ADMIN` assignments can be narrowed with group and app targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique key for the role assignment.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Type of the role.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,

    /// Status of the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Timestamp when the role was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the assignment was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Discoverable resources related to the assignment.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}
