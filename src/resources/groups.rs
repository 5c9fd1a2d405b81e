//
//  okta-client
//  resources/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Group and membership operations.
//!
//! Creation, profile updates, removal, and membership changes are only
//! valid for groups of type `OKTA_GROUP`; the service rejects them for
//! directory-mastered and built-in groups.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient, Pagination};
use crate::models::{Application, Group, GroupProfile, User};

use super::query_pairs;

/// Filter and pagination options for [`Groups::list`].
#[derive(Debug, Clone, Default)]
pub struct GroupListParams {
    /// Searches group names for a prefix match.
    pub q: Option<String>,

    /// A filter expression over a supported subset of group properties.
    pub filter: Option<String>,

    /// Number of results per page.
    pub limit: Option<u32>,

    /// Opaque cursor for the next page.
    pub after: Option<String>,
}

impl GroupListParams {
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

/// The groups facade.
pub struct Groups {
    client: Arc<OktaClient>,
}

impl Groups {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Adds a new `OKTA_GROUP` group.
    pub async fn add(&self, profile: GroupProfile) -> Result<Group, ApiError> {
        let body = json!({ "profile": profile });
        self.client
            .issue_as(Method::POST, "groups", &[], Some(&body))
            .await
    }

    /// Fetches a group by id.
    pub async fn get(&self, group_id: &str) -> Result<Group, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("groups/{group_id}"), &[], None)
            .await
    }

    /// Enumerates groups, optionally filtered, with opaque-cursor
    /// pagination.
    pub async fn list(&self, params: GroupListParams) -> Result<Vec<Group>, ApiError> {
        self.client
            .issue_as(Method::GET, "groups", &params.to_query(), None)
            .await
    }

    /// Updates the profile of an `OKTA_GROUP` group.
    pub async fn update(&self, group_id: &str, profile: GroupProfile) -> Result<Group, ApiError> {
        let body = json!({ "profile": profile });
        self.client
            .issue_as(Method::PUT, &format!("groups/{group_id}"), &[], Some(&body))
            .await
    }

    /// Removes an `OKTA_GROUP` group.
    pub async fn remove(&self, group_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(Method::DELETE, &format!("groups/{group_id}"), &[], None)
            .await
    }

    /// Enumerates the members of a group.
    pub async fn list_members(
        &self,
        group_id: &str,
        page: Pagination,
    ) -> Result<Vec<User>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("groups/{group_id}/users"),
                &page.to_query(),
                None,
            )
            .await
    }

    /// Adds a user to an `OKTA_GROUP` group.
    pub async fn add_user(&self, group_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::PUT,
                &format!("groups/{group_id}/users/{user_id}"),
                &[],
                None,
            )
            .await
    }

    /// Removes a user from an `OKTA_GROUP` group.
    pub async fn remove_user(&self, group_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::DELETE,
                &format!("groups/{group_id}/users/{user_id}"),
                &[],
                None,
            )
            .await
    }

    /// Enumerates the applications assigned to a group.
    pub async fn list_apps(
        &self,
        group_id: &str,
        page: Pagination,
    ) -> Result<Vec<Application>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("groups/{group_id}/apps"),
                &page.to_query(),
                None,
            )
            .await
    }
}
