//
//  okta-client
//  resources/apps.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Application operations.
//!
//! Covers the application catalog (add, get, list, update, delete,
//! activate, deactivate), user and group assignments, and key credential
//! management. Assignment payloads are open-shaped — each catalog
//! application defines its own credential and profile keys — so they are
//! accepted as untyped JSON.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient, Pagination};
use crate::models::{AppGroup, AppKeyCredential, AppUser, Application, NewApplication};

use super::query_pairs;

/// Filter and pagination options for [`Apps::list`].
#[derive(Debug, Clone, Default)]
pub struct AppListParams {
    /// Searches application names for a prefix match.
    pub q: Option<String>,

    /// A filter expression over a supported subset of app properties.
    pub filter: Option<String>,

    /// Number of results per page.
    pub limit: Option<u32>,

    /// Opaque cursor for the next page.
    pub after: Option<String>,
}

impl AppListParams {
    /// Creates empty options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix query.
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the filter expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the opaque cursor.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        query_pairs(&[
            ("q", self.q.clone()),
            ("filter", self.filter.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("after", self.after.clone()),
        ])
    }
}

/// The applications facade.
pub struct Apps {
    client: Arc<OktaClient>,
}

impl Apps {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Adds a new application to the organization.
    ///
    /// The app-specific settings on the payload are wrapped under the `app`
    /// key the way the service expects.
    pub async fn add(&self, app: NewApplication) -> Result<Application, ApiError> {
        let mut body = serde_json::to_value(&app)?;
        if let Value::Object(ref mut map) = body {
            if let Some(settings) = map.remove("settings") {
                map.insert("settings".to_string(), json!({ "app": settings }));
            }
        }
        self.client
            .issue_as(Method::POST, "apps", &[], Some(&body))
            .await
    }

    /// Fetches an application by id.
    pub async fn get(&self, app_id: &str) -> Result<Application, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("apps/{app_id}"), &[], None)
            .await
    }

    /// Enumerates applications added to the organization.
    pub async fn list(&self, params: AppListParams) -> Result<Vec<Application>, ApiError> {
        self.client
            .issue_as(Method::GET, "apps", &params.to_query(), None)
            .await
    }

    /// Updates an application. The payload is the full updated
    /// representation.
    pub async fn update(&self, app_id: &str, app: Value) -> Result<Application, ApiError> {
        self.client
            .issue_as(Method::PUT, &format!("apps/{app_id}"), &[], Some(&app))
            .await
    }

    /// Removes an inactive application. Applications must be deactivated
    /// before they can be deleted.
    pub async fn delete(&self, app_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(Method::DELETE, &format!("apps/{app_id}"), &[], None)
            .await
    }

    /// Activates an inactive application.
    pub async fn activate(&self, app_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("apps/{app_id}/lifecycle/activate"),
                &[],
                None,
            )
            .await
    }

    /// Deactivates an active application.
    pub async fn deactivate(&self, app_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("apps/{app_id}/lifecycle/deactivate"),
                &[],
                None,
            )
            .await
    }

    /// Assigns a user to an application.
    ///
    /// `app_user` carries the assignment credentials and optional
    /// app-specific profile.
    pub async fn assign_user(&self, app_id: &str, app_user: Value) -> Result<AppUser, ApiError> {
        self.client
            .issue_as(
                Method::POST,
                &format!("apps/{app_id}/users"),
                &[],
                Some(&app_user),
            )
            .await
    }

    /// Fetches a specific user assignment.
    pub async fn get_user(&self, app_id: &str, user_id: &str) -> Result<AppUser, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("apps/{app_id}/users/{user_id}"),
                &[],
                None,
            )
            .await
    }

    /// Enumerates user assignments for an application.
    pub async fn list_users(
        &self,
        app_id: &str,
        page: Pagination,
    ) -> Result<Vec<AppUser>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("apps/{app_id}/users"),
                &page.to_query(),
                None,
            )
            .await
    }

    /// Updates the credentials and/or profile of a user assignment.
    pub async fn update_user(
        &self,
        app_id: &str,
        user_id: &str,
        app_user: Value,
    ) -> Result<AppUser, ApiError> {
        let body = json!({ "appuser": app_user });
        self.client
            .issue_as(
                Method::POST,
                &format!("apps/{app_id}/users/{user_id}"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Removes a user assignment.
    ///
    /// Destructive: the app profile of the assignment is not recoverable,
    /// and provisioning-enabled applications may deactivate the user in the
    /// target application.
    pub async fn remove_user(&self, app_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::DELETE,
                &format!("apps/{app_id}/users/{user_id}"),
                &[],
                None,
            )
            .await
    }

    /// Assigns a group to an application.
    pub async fn assign_group(
        &self,
        app_id: &str,
        group_id: &str,
        app_group: Value,
    ) -> Result<AppGroup, ApiError> {
        let body = json!({ "appgroup": app_group });
        self.client
            .issue_as(
                Method::PUT,
                &format!("apps/{app_id}/groups/{group_id}"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Fetches a group assignment.
    pub async fn get_group(&self, app_id: &str, group_id: &str) -> Result<AppGroup, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("apps/{app_id}/groups/{group_id}"),
                &[],
                None,
            )
            .await
    }

    /// Enumerates group assignments for an application.
    pub async fn list_groups(&self, app_id: &str) -> Result<Vec<AppGroup>, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("apps/{app_id}/groups"), &[], None)
            .await
    }

    /// Removes a group assignment.
    pub async fn remove_group(&self, app_id: &str, group_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::DELETE,
                &format!("apps/{app_id}/groups/{group_id}"),
                &[],
                None,
            )
            .await
    }

    /// Generates a new X.509 certificate for an application key credential.
    pub async fn generate_key(
        &self,
        app_id: &str,
        validity_years: u32,
    ) -> Result<AppKeyCredential, ApiError> {
        let query = query_pairs(&[("validityYears", Some(validity_years.to_string()))]);
        self.client
            .issue_as(
                Method::POST,
                &format!("apps/{app_id}/credentials/keys/generate"),
                &query,
                None,
            )
            .await
    }

    /// Enumerates key credentials for an application.
    pub async fn list_keys(&self, app_id: &str) -> Result<Vec<AppKeyCredential>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("apps/{app_id}/credentials/keys"),
                &[],
                None,
            )
            .await
    }

    /// Fetches a specific key credential by `kid`.
    pub async fn get_key(&self, app_id: &str, kid: &str) -> Result<AppKeyCredential, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("apps/{app_id}/credentials/keys/{kid}"),
                &[],
                None,
            )
            .await
    }

    /// Previews the SAML metadata for an application, based on a specific
    /// key credential.
    ///
    /// The endpoint returns XML, not JSON, so this consumes the raw
    /// response: the body text on a success status, the standard structured
    /// error otherwise.
    pub async fn saml_metadata(&self, app_id: &str, kid: &str) -> Result<String, ApiError> {
        let query = query_pairs(&[("kid", Some(kid.to_string()))]);
        let response = self
            .client
            .get(&format!("apps/{app_id}/sso/saml/metadata"), &query)
            .await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(response.into_error())
        }
    }
}
