//
//  okta-client
//  resources/events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! System log operations.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;

use crate::api::{ApiError, OktaClient};
use crate::models::Event;

use super::query_pairs;

/// Filter and pagination options for [`Events::list`].
#[derive(Debug, Clone, Default)]
pub struct EventListParams {
    /// Number of results per page.
    pub limit: Option<u32>,

    /// Only events published after this instant.
    /// Mutually exclusive with `after` on the service side.
    pub start_date: Option<DateTime<Utc>>,

    /// Opaque cursor for the next page.
    pub after: Option<String>,

    /// A filter expression over event properties.
    pub filter: Option<String>,
}

impl EventListParams {
    /// Creates empty options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the publication lower bound.
    pub fn start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Sets the opaque cursor.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Sets the filter expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        query_pairs(&[
            ("limit", self.limit.map(|v| v.to_string())),
            (
                "startDate",
                self.start_date
                    .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ),
            ("after", self.after.clone()),
            ("filter", self.filter.clone()),
        ])
    }
}

/// The events facade.
pub struct Events {
    client: Arc<OktaClient>,
}

impl Events {
    pub(crate) fn new(client: Arc<OktaClient>) -> Self {
        Self { client }
    }

    /// Fetches events from the organization's system log.
    pub async fn list(&self, params: EventListParams) -> Result<Vec<Event>, ApiError> {
        self.client
            .issue_as(Method::GET, "events", &params.to_query(), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_date_renders_as_rfc3339() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let query = EventListParams::new().start_date(start).limit(10).to_query();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("startDate".to_string(), "2024-03-01T12:30:00.000Z".to_string()),
            ]
        );
    }
}
