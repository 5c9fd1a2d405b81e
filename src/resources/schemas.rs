//
//  okta-client
//  resources/schemas.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User schema operations.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiError, OktaClient};
use crate::models::UserSchema;

/// The schemas facade.
pub struct Schemas {
    client: Arc<OktaClient>,
}

impl Schemas {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Fetches the default user schema.
    pub async fn user_schema(&self) -> Result<UserSchema, ApiError> {
        self.client
            .issue_as(Method::GET, "meta/schemas/user/default", &[], None)
            .await
    }

    /// Adds, updates, or removes custom user profile properties, or updates
    /// a permission on a base property.
    ///
    /// The call has partial-update semantics: a property must be explicitly
    /// set to `null` in `definitions` to be removed from the schema.
    pub async fn update_user_properties(
        &self,
        definitions: Value,
    ) -> Result<UserSchema, ApiError> {
        let body = json!({ "definitions": definitions });
        self.client
            .issue_as(Method::POST, "meta/schemas/user/default", &[], Some(&body))
            .await
    }
}
