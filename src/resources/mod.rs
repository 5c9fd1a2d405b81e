//
//  okta-client
//  resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Facades
//!
//! One facade per resource family, each an immutable view over the shared
//! transport handle. Every public operation is a mechanical mapping of
//! {HTTP verb, path template, query/body shape} onto the dispatch layer:
//! the facade builds the path, query, and body, issues the call, and the
//! normalized result returns to the caller.
//!
//! ## Architecture
//!
//! [`Okta`] is an explicit factory: it owns an `Arc<OktaClient>` and
//! exposes one accessor per family. Facades hold a clone of the handle by
//! value — composition over inheritance — and none of them may mutate it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use okta_client::{ClientConfig, Okta, Pagination};
//!
//! # async fn example() -> Result<(), okta_client::ApiError> {
//! let okta = Okta::with_config("acme", "00a1b2c3", ClientConfig::default().preview(true))?;
//!
//! let members = okta
//!     .groups()
//!     .list_members("00g1emaKYZTWRYYRRTSK", Pagination::new().limit(200))
//!     .await?;
//! println!("{} members", members.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::api::{ApiError, OktaClient};
use crate::config::ClientConfig;

/// Application operations.
pub mod apps;

/// System log operations.
pub mod events;

/// Group and membership operations.
pub mod groups;

/// Administrator role operations.
pub mod roles;

/// User schema operations.
pub mod schemas;

/// Session operations.
pub mod sessions;

/// User and lifecycle operations.
pub mod users;

pub use apps::{AppListParams, Apps};
pub use events::{EventListParams, Events};
pub use groups::{GroupListParams, Groups};
pub use roles::Roles;
pub use schemas::Schemas;
pub use sessions::Sessions;
pub use users::{CreateUserParams, UserListParams, Users};

/// The facade factory and primary entry point of the crate.
///
/// Owns the authenticated transport and exposes one accessor per resource
/// family. The factory is immutable: accessors construct cheap facade
/// values over the shared handle, and nothing is attached or mutated after
/// construction.
///
/// Callers that want the dispatch layer without the facade set can
/// construct an [`OktaClient`] directly and skip this type entirely.
///
/// # Example
///
/// ```rust,no_run
/// use okta_client::Okta;
///
/// # async fn example() -> Result<(), okta_client::ApiError> {
/// let okta = Okta::new("acme", "00a1b2c3")?;
/// let user = okta.users().get("00u1ero7vZFVEIYLWPBN").await?;
/// let apps = okta.users().app_links(&user.id).await?;
/// # Ok(())
/// # }
/// ```
pub struct Okta {
    client: Arc<OktaClient>,
}

impl Okta {
    /// Creates a client for an organization with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for invalid construction inputs.
    pub fn new(organization: &str, key: &str) -> Result<Self, ApiError> {
        Ok(Self::from_client(OktaClient::new(organization, key)?))
    }

    /// Creates a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn with_config(
        organization: &str,
        key: &str,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        Ok(Self::from_client(OktaClient::with_config(
            organization,
            key,
            config,
        )?))
    }

    /// Wraps an already-constructed transport.
    pub fn from_client(client: OktaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The shared transport handle.
    pub fn client(&self) -> &OktaClient {
        &self.client
    }

    /// User and lifecycle operations.
    pub fn users(&self) -> Users {
        Users::new(Arc::clone(&self.client))
    }

    /// Application operations.
    pub fn apps(&self) -> Apps {
        Apps::new(Arc::clone(&self.client))
    }

    /// Group and membership operations.
    pub fn groups(&self) -> Groups {
        Groups::new(Arc::clone(&self.client))
    }

    /// Administrator role operations.
    pub fn roles(&self) -> Roles {
        Roles::new(Arc::clone(&self.client))
    }

    /// Session operations.
    pub fn sessions(&self) -> Sessions {
        Sessions::new(Arc::clone(&self.client))
    }

    /// User schema operations.
    pub fn schemas(&self) -> Schemas {
        Schemas::new(Arc::clone(&self.client))
    }

    /// System log operations.
    pub fn events(&self) -> Events {
        Events::new(Arc::clone(&self.client))
    }
}

/// Renders named optional values as query pairs, omitting absent ones.
///
/// Facades use this to honor the per-call contract that query keys with
/// absent values never reach the request line.
pub(crate) fn query_pairs(pairs: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| ((*name).to_string(), v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_omits_absent_values() {
        let query = query_pairs(&[
            ("provider", Some("true".to_string())),
            ("activate", None),
            ("sendEmail", Some("false".to_string())),
        ]);
        assert_eq!(
            query,
            vec![
                ("provider".to_string(), "true".to_string()),
                ("sendEmail".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_factory_accessors_share_one_transport() {
        let okta = Okta::new("acme", "K").unwrap();
        let users = okta.users();
        let groups = okta.groups();
        drop(users);
        drop(groups);
        assert_eq!(
            okta.client().profile().base_url().as_str(),
            "https://acme.okta.com/api/v1/"
        );
    }
}
