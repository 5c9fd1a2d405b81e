//
//  okta-client
//  resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User and lifecycle operations.
//!
//! Covers CRUD over users, the lifecycle transitions (activate, deactivate,
//! suspend, unsuspend, unlock), password and recovery flows, and the
//! read-only views onto a user's assigned applications and groups.
//!
//! Lifecycle endpoints return empty or loosely-shaped objects (an
//! activation link, a reset token), so they normalize in the untyped form;
//! entity endpoints return typed records.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient};
use crate::models::{AppLink, Credentials, Group, Profile, User};

use super::query_pairs;

/// Options for [`Users::create`].
///
/// Both flags are optional; absent flags are omitted from the query string
/// and the server-side defaults apply (`provider=false`, `activate=true`).
#[derive(Debug, Clone, Default)]
pub struct CreateUserParams {
    /// Create the user with the authentication provider named in the
    /// credentials instead of the built-in directory.
    pub provider: Option<bool>,

    /// Execute the activation lifecycle operation as part of creation.
    pub activate: Option<bool>,
}

impl CreateUserParams {
    /// Creates empty options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider flag.
    pub fn provider(mut self, provider: bool) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the activation flag.
    pub fn activate(mut self, activate: bool) -> Self {
        self.activate = Some(activate);
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        query_pairs(&[
            ("provider", self.provider.map(|v| v.to_string())),
            ("activate", self.activate.map(|v| v.to_string())),
        ])
    }
}

/// Filter and pagination options for [`Users::list`].
///
/// All fields are optional and omitted from the request line when absent.
#[derive(Debug, Clone, Default)]
pub struct UserListParams {
    /// Searches `firstName`, `lastName`, and `email` for a prefix match.
    pub q: Option<String>,

    /// A filter expression over a supported subset of user properties.
    pub filter: Option<String>,

    /// A search expression over any user property.
    pub search: Option<String>,

    /// Number of results per page.
    pub limit: Option<u32>,

    /// Opaque cursor for the next page.
    pub after: Option<String>,
}

impl UserListParams {
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

    /// Sets the search expression.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
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
            ("search", self.search.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("after", self.after.clone()),
        ])
    }
}

/// The users facade.
///
/// Holds a shared reference to the transport and delegates every operation
/// to it; the facade itself carries no state and may be constructed freely
/// via [`Okta::users`](crate::Okta::users).
pub struct Users {
    client: Arc<OktaClient>,
}

impl Users {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Creates a new user, with or without credentials.
    ///
    /// # Parameters
    ///
    /// * `profile` - Directory attributes for the new user
    /// * `credentials` - Optional primary authentication credentials
    /// * `params` - Provider and activation flags, see [`CreateUserParams`]
    pub async fn create(
        &self,
        profile: Profile,
        credentials: Option<Credentials>,
        params: CreateUserParams,
    ) -> Result<User, ApiError> {
        let body = json!({
            "profile": profile,
            "credentials": credentials.unwrap_or_default(),
        });
        self.client
            .issue_as(Method::POST, "users", &params.to_query(), Some(&body))
            .await
    }

    /// Fetches a user by id.
    pub async fn get(&self, user_id: &str) -> Result<User, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("users/{user_id}"), &[], None)
            .await
    }

    /// Enumerates users, optionally filtered, with opaque-cursor
    /// pagination.
    pub async fn list(&self, params: UserListParams) -> Result<Vec<User>, ApiError> {
        self.client
            .issue_as(Method::GET, "users", &params.to_query(), None)
            .await
    }

    /// Updates a user's profile and/or credentials with partial-update
    /// semantics.
    pub async fn update(
        &self,
        user_id: &str,
        profile: Option<Profile>,
        credentials: Option<Credentials>,
    ) -> Result<User, ApiError> {
        let body = json!({
            "profile": profile.unwrap_or_default(),
            "credentials": credentials.unwrap_or_default(),
        });
        self.client
            .issue_as(Method::POST, &format!("users/{user_id}"), &[], Some(&body))
            .await
    }

    /// Fetches app links for all applications assigned to a user, directly
    /// or via group membership.
    pub async fn app_links(&self, user_id: &str) -> Result<Vec<AppLink>, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("users/{user_id}/appLinks"), &[], None)
            .await
    }

    /// Fetches the groups the user is a member of.
    pub async fn groups(&self, user_id: &str) -> Result<Vec<Group>, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("users/{user_id}/groups"), &[], None)
            .await
    }

    /// Activates a `STAGED` user.
    ///
    /// Activation is asynchronous on the service side; the user carries
    /// `transitioningToStatus` until it completes. When `send_email` is
    /// `Some(false)` the response carries an activation link for a custom
    /// flow; otherwise it is an empty object.
    pub async fn activate(
        &self,
        user_id: &str,
        send_email: Option<bool>,
    ) -> Result<Value, ApiError> {
        let query = query_pairs(&[("sendEmail", send_email.map(|v| v.to_string()))]);
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/activate"),
                &query,
                None,
            )
            .await
    }

    /// Deactivates a user; the user ends in `DEPROVISIONED` status.
    pub async fn deactivate(&self, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/deactivate"),
                &[],
                None,
            )
            .await
    }

    /// Suspends an `ACTIVE` user.
    ///
    /// An id that is not in the `ACTIVE` state comes back as a 400 with
    /// error code `E0000001`; an unknown id as a 404 with `E0000007`.
    pub async fn suspend(&self, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/suspend"),
                &[],
                None,
            )
            .await
    }

    /// Returns a `SUSPENDED` user to `ACTIVE`.
    pub async fn unsuspend(&self, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/unsuspend"),
                &[],
                None,
            )
            .await
    }

    /// Unlocks a `LOCKED_OUT` user; the current password keeps working.
    pub async fn unlock(&self, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/unlock"),
                &[],
                None,
            )
            .await
    }

    /// Generates a one-time token for a password reset and transitions the
    /// user to `RECOVERY`.
    ///
    /// With `send_email` false the reset link comes back in the response
    /// instead of being mailed to the user.
    pub async fn reset_password(
        &self,
        user_id: &str,
        send_email: bool,
    ) -> Result<Value, ApiError> {
        let query = query_pairs(&[("sendEmail", Some(send_email.to_string()))]);
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/reset_password"),
                &query,
                None,
            )
            .await
    }

    /// Transitions the user to `PASSWORD_EXPIRED`, forcing a change at the
    /// next login. With `temp_password` true the password is reset to a
    /// temporary one carried on the returned user.
    pub async fn expire_password(
        &self,
        user_id: &str,
        temp_password: bool,
    ) -> Result<User, ApiError> {
        let query = query_pairs(&[("tempPassword", Some(temp_password.to_string()))]);
        self.client
            .issue_as(
                Method::POST,
                &format!("users/{user_id}/lifecycle/expire_password"),
                &query,
                None,
            )
            .await
    }

    /// Resets all enrolled MFA factors; the user stays `ACTIVE`.
    pub async fn reset_factors(&self, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/lifecycle/reset_factors"),
                &[],
                None,
            )
            .await
    }

    /// Starts a forgot-password flow, generating a one-time token. Requires
    /// a valid recovery question credential and an `ACTIVE` user.
    pub async fn forgot_password(
        &self,
        user_id: &str,
        send_email: bool,
    ) -> Result<Value, ApiError> {
        let query = query_pairs(&[("sendEmail", Some(send_email.to_string()))]);
        self.client
            .issue(
                Method::POST,
                &format!("users/{user_id}/credentials/forgot_password"),
                &query,
                None,
            )
            .await
    }

    /// Sets a new password by answering the user's recovery question.
    pub async fn forgot_password_reset(
        &self,
        user_id: &str,
        password: &str,
        recovery_answer: &str,
    ) -> Result<Credentials, ApiError> {
        let body = json!({
            "password": password,
            "recovery_question": { "answer": recovery_answer },
        });
        self.client
            .issue_as(
                Method::POST,
                &format!("users/{user_id}/credentials/forgot_password"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Changes a user's password by validating the current one.
    pub async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<Credentials, ApiError> {
        let body = json!({
            "oldPassword": old_password,
            "newPassword": new_password,
        });
        self.client
            .issue_as(
                Method::POST,
                &format!("users/{user_id}/credentials/change_password"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Changes a user's recovery question, validated by their password.
    pub async fn change_recovery_question(
        &self,
        user_id: &str,
        password: &str,
        question: &str,
        answer: &str,
    ) -> Result<Credentials, ApiError> {
        let body = json!({
            "password": { "value": password },
            "recovery_question": { "question": question, "answer": answer },
        });
        self.client
            .issue_as(
                Method::POST,
                &format!("users/{user_id}/credentials/change_recovery_question"),
                &[],
                Some(&body),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_query() {
        let query = CreateUserParams::new().provider(true).to_query();
        assert_eq!(query, vec![("provider".to_string(), "true".to_string())]);
        assert!(CreateUserParams::new().to_query().is_empty());
    }

    #[test]
    fn test_list_params_query_order_and_omission() {
        let query = UserListParams::new()
            .filter(r#"status eq "ACTIVE""#)
            .limit(25)
            .to_query();
        assert_eq!(
            query,
            vec![
                ("filter".to_string(), r#"status eq "ACTIVE""#.to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }
}
