//
//  okta-client
//  resources/sessions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Session operations.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient};
use crate::models::Session;

use super::query_pairs;

/// The sessions facade.
pub struct Sessions {
    client: Arc<OktaClient>,
}

impl Sessions {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Creates a session from a session token obtained through the
    /// authentication flow.
    ///
    /// `additional_fields` is a comma-separated list of optional session
    /// properties to include, e.g. `"cookieToken"`; an invalid session
    /// token comes back as a 401.
    pub async fn create(
        &self,
        session_token: &str,
        additional_fields: Option<&str>,
    ) -> Result<Session, ApiError> {
        let query = query_pairs(&[(
            "additionalFields",
            additional_fields.map(|v| v.to_string()),
        )]);
        let body = json!({ "sessionToken": session_token });
        self.client
            .issue_as(Method::POST, "sessions", &query, Some(&body))
            .await
    }

    /// Extends the lifetime of a session. An invalid session id comes back
    /// as a 404.
    pub async fn extend(&self, session_id: &str) -> Result<Session, ApiError> {
        self.client
            .issue_as(Method::PUT, &format!("sessions/{session_id}"), &[], None)
            .await
    }

    /// Closes a session (logout). The service answers `204 No Content`.
    pub async fn close(&self, session_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(Method::DELETE, &format!("sessions/{session_id}"), &[], None)
            .await
    }
}
