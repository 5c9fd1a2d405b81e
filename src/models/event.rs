//
//  okta-client
//  models/event.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! System log event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event from the organization's system log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique key for the event.
    pub event_id: String,

    /// Timestamp when the event was published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,

    /// Identifier of the request that produced the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Session in which the event occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The action that was performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<EventAction>,

    /// Parties that performed the action.
    #[serde(default)]
    pub actors: Vec<EventActor>,

    /// Objects the action was performed on.
    #[serde(default)]
    pub targets: Vec<EventActor>,
}

/// The action recorded by an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAction {
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Categories the action belongs to.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Type of the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// URI of the request that performed the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_uri: Option<String>,
}

/// A party to an event, either an actor or a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventActor {
    /// Unique key for the party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Login of the party, when it is a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Type of the party (`User`, `Client`, `AppInstance`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// IP address the party acted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_with_missing_collections() {
        let json = r#"{
            "eventId": "tevGr2BhQTMR72OiBGvKXTp2Q1399593071000",
            "published": "2014-04-09T02:31:11.000Z",
            "action": {
                "message": "Sign-in successful",
                "categories": ["Sign-in Success"],
                "objectType": "core.user_auth.login_success"
            }
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.actors.is_empty());
        assert!(event.targets.is_empty());
        assert_eq!(
            event.action.unwrap().categories,
            vec!["Sign-in Success".to_string()]
        );
    }
}
