//
//  okta-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Opaque-cursor pagination parameters.
//!
//! List endpoints take a `limit` integer and an opaque `after` cursor, both
//! passed as query parameters. The cursor is a server-issued token that the
//! client passes back verbatim and never interprets; it is taken from the
//! `Link: <...>; rel="next"` header of a previous listing.
//!
//! # Example
//!
//! ```rust
//! use okta_client::Pagination;
//!
//! let page = Pagination::new().limit(25).after("00ub0oNGTSWTBKOLGLNR");
//! assert_eq!(
//!     page.to_query(),
//!     vec![
//!         ("limit".to_string(), "25".to_string()),
//!         ("after".to_string(), "00ub0oNGTSWTBKOLGLNR".to_string()),
//!     ]
//! );
//!
//! // Absent values are omitted from the request line entirely.
//! assert!(Pagination::new().to_query().is_empty());
//! ```

/// Pagination parameters for list endpoints.
///
/// Both fields are optional; absent values are omitted from the query
/// string rather than sent empty. The `after` cursor is opaque: this layer
/// never inspects or constructs one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Number of results per page. Omitted when `None`.
    pub limit: Option<u32>,

    /// Opaque cursor for the next page, as issued by the server.
    /// Omitted when `None`.
    pub after: Option<String>,
}

impl Pagination {
    /// Creates empty pagination parameters (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the opaque cursor for the next page.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Renders the parameters as query pairs, omitting absent values.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after".to_string(), after.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pagination_produces_no_pairs() {
        assert!(Pagination::new().to_query().is_empty());
    }

    #[test]
    fn test_limit_only() {
        let query = Pagination::new().limit(200).to_query();
        assert_eq!(query, vec![("limit".to_string(), "200".to_string())]);
    }

    #[test]
    fn test_cursor_is_passed_through_verbatim() {
        let query = Pagination::new().after("opaque==cursor/value").to_query();
        assert_eq!(
            query,
            vec![("after".to_string(), "opaque==cursor/value".to_string())]
        );
    }
}
