//
//  okta-client
//  resources/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Administrator role operations.
//!
//! Roles are assigned per user. `USER_ADMIN` assignments can be narrowed to
//! group targets and `APP_ADMIN` assignments to catalog-app targets; the
//! target listings paginate with the usual opaque cursor.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient, Pagination};
use crate::models::{Group, Role};

/// The roles facade.
pub struct Roles {
    client: Arc<OktaClient>,
}

impl Roles {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Lists all roles assigned to a user.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Role>, ApiError> {
        self.client
            .issue_as(Method::GET, &format!("users/{user_id}/roles"), &[], None)
            .await
    }

    /// Assigns a role to a user.
    ///
    /// `role_type` is one of the administrator role types, e.g.
    /// `"USER_ADMIN"` or `"SUPER_ADMIN"`.
    pub async fn assign(&self, user_id: &str, role_type: &str) -> Result<Role, ApiError> {
        let body = json!({ "type": role_type });
        self.client
            .issue_as(
                Method::POST,
                &format!("users/{user_id}/roles"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Unassigns a role from a user. The service answers `204 No Content`.
    pub async fn unassign(&self, user_id: &str, role_id: &str) -> Result<Value, ApiError> {
        self.client
            .issue(
                Method::DELETE,
                &format!("users/{user_id}/roles/{role_id}"),
                &[],
                None,
            )
            .await
    }

    /// Lists the group targets of a `USER_ADMIN` role assignment.
    pub async fn group_targets(
        &self,
        user_id: &str,
        role_id: &str,
        page: Pagination,
    ) -> Result<Vec<Group>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("users/{user_id}/roles/{role_id}/targets/groups"),
                &page.to_query(),
                None,
            )
            .await
    }

    /// Lists the catalog-app targets of an `APP_ADMIN` role assignment.
    ///
    /// Catalog apps are loosely shaped (they are catalog entries, not
    /// application instances), so the listing stays untyped.
    pub async fn app_targets(
        &self,
        user_id: &str,
        role_id: &str,
        page: Pagination,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .issue_as(
                Method::GET,
                &format!("users/{user_id}/roles/{role_id}/targets/catalog/apps"),
                &page.to_query(),
                None,
            )
            .await
    }
}
