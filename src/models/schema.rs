//
//  okta-client
//  models/schema.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User schema records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The schema describing a user's profile attributes.
///
/// `definitions` is the JSON-Schema subschema map (`base` and `custom`);
/// it stays untyped because custom properties are, by definition, defined
/// by each organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    /// URI of the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// JSON-Schema dialect the schema is written in.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Name of the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Type of the root schema object, always `object`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Timestamp when the schema was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Timestamp when the schema was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Subschema map with `base` and `custom` property definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Value>,

    /// Property bag of the composed profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}
