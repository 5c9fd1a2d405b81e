//
//  okta-client
//  tests/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Integration tests for the dispatch layer and resource facades, driven
//! against a local mock server.

use mockito::Matcher;
use okta_client::{ApiError, ClientConfig, Okta, Pagination};
use okta_client::resources::users::UserListParams;
use okta_client::resources::events::EventListParams;
use reqwest::Method;
use serde_json::{json, Value};
use url::Url;

/// Builds a client whose base URL points at the mock server, keeping the
/// standard `/api/v1/` prefix so paths look exactly like production.
fn okta(server: &mockito::Server) -> Okta {
    let base = Url::parse(&format!("{}/api/v1/", server.url())).unwrap();
    Okta::with_config("acme", "test-key", ClientConfig::default().base_url(base)).unwrap()
}

#[tokio::test]
async fn get_user_sends_credentials_and_decodes_typed_record() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/users/00u1ero7vZFVEIYLWPBN")
        .match_header("authorization", "SSWS test-key")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "00u1ero7vZFVEIYLWPBN",
                "status": "ACTIVE",
                "profile": {"login": "isaac@example.org", "firstName": "Isaac"}
            }"#,
        )
        .create_async()
        .await;

    let user = okta(&server)
        .users()
        .get("00u1ero7vZFVEIYLWPBN")
        .await
        .unwrap();

    assert_eq!(user.id, "00u1ero7vZFVEIYLWPBN");
    assert_eq!(user.status.as_deref(), Some("ACTIVE"));
    assert_eq!(user.profile.unwrap().first_name.as_deref(), Some("Isaac"));
    mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_merge_but_cannot_displace_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/users/00u1")
        .match_header("authorization", "SSWS test-key")
        .match_header("x-request-source", "directory-sync")
        .with_status(200)
        .with_body(r#"{"id": "00u1", "status": "ACTIVE"}"#)
        .create_async()
        .await;

    let base = Url::parse(&format!("{}/api/v1/", server.url())).unwrap();
    let config = ClientConfig::default()
        .base_url(base)
        .header("Authorization", "Bearer stolen")
        .header("X-Request-Source", "directory-sync");
    let okta = Okta::with_config("acme", "test-key", config).unwrap();

    okta.users().get("00u1").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn request_body_round_trips_through_an_echoing_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "profile": {"login": "isaac@example.org", "firstName": "Isaac"},
        "credentials": {"password": {"value": "Kn0ck0ut!"}}
    });
    let mock = server
        .mock("POST", "/api/v1/echo")
        .match_body(Matcher::Json(body.clone()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let okta = okta(&server);
    let echoed = okta
        .client()
        .issue(Method::POST, "echo", &[], Some(&body))
        .await
        .unwrap();

    assert_eq!(echoed, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn deactivate_returns_empty_object_for_204_with_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/users/00u1/lifecycle/deactivate")
        .with_status(204)
        .create_async()
        .await;

    let outcome = okta(&server).users().deactivate("00u1").await.unwrap();
    assert_eq!(outcome, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_user_surfaces_as_structured_404() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/users/missing")
        .with_status(404)
        .with_body(r#"{"errorCode": "E0000007", "errorSummary": "Not found: missing"}"#)
        .create_async()
        .await;

    let err = okta(&server).users().get("missing").await.unwrap_err();
    match err {
        ApiError::Api { status, ref body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body["errorCode"], "E0000007");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
    assert_eq!(err.error_code(), Some("E0000007"));
    assert_eq!(err.error_summary(), Some("Not found: missing"));
}

#[tokio::test]
async fn unparseable_error_body_still_fails_with_null_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/users/00u1")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let err = okta(&server).users().get("00u1").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.error_body(), Some(&Value::Null));
}

#[tokio::test]
async fn absent_list_parameters_are_omitted_from_the_request_line() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/users")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .with_status(200)
        .with_body(r#"[{"id": "00u1", "status": "ACTIVE"}, {"id": "00u2", "status": "STAGED"}]"#)
        .create_async()
        .await;

    let users = okta(&server)
        .users()
        .list(UserListParams::new().limit(2))
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn activation_without_email_returns_the_activation_link() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/users/00u1/lifecycle/activate")
        .match_query(Matcher::UrlEncoded("sendEmail".into(), "false".into()))
        .with_status(200)
        .with_body(r#"{"activationUrl": "https://acme.okta.com/welcome/XE6wE17zmphl3KqAPFxO"}"#)
        .create_async()
        .await;

    let outcome = okta(&server)
        .users()
        .activate("00u1", Some(false))
        .await
        .unwrap();

    assert_eq!(
        outcome["activationUrl"],
        "https://acme.okta.com/welcome/XE6wE17zmphl3KqAPFxO"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn group_membership_is_added_with_a_bodyless_put() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v1/groups/00g1/users/00u1")
        .with_status(204)
        .create_async()
        .await;

    let outcome = okta(&server)
        .groups()
        .add_user("00g1", "00u1")
        .await
        .unwrap();

    assert_eq!(outcome, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn group_members_paginate_with_an_opaque_cursor() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/groups/00g1/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "200".into()),
            Matcher::UrlEncoded("after".into(), "00ub0oNGTSWTBKOLGLNR".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"id": "00u3", "status": "ACTIVE"}]"#)
        .create_async()
        .await;

    let members = okta(&server)
        .groups()
        .list_members("00g1", Pagination::new().limit(200).after("00ub0oNGTSWTBKOLGLNR"))
        .await
        .unwrap();

    assert_eq!(members.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn role_assignment_posts_the_role_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/users/00u1/roles")
        .match_body(Matcher::Json(json!({"type": "USER_ADMIN"})))
        .with_status(201)
        .with_body(r#"{"id": "ra1b2c3", "type": "USER_ADMIN", "status": "ACTIVE"}"#)
        .create_async()
        .await;

    let role = okta(&server)
        .roles()
        .assign("00u1", "USER_ADMIN")
        .await
        .unwrap();

    assert_eq!(role.role_type.as_deref(), Some("USER_ADMIN"));
    mock.assert_async().await;
}

#[tokio::test]
async fn session_close_answers_no_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v1/sessions/101W_juydrDRByB7fUdRyE2JQ")
        .with_status(204)
        .create_async()
        .await;

    let outcome = okta(&server)
        .sessions()
        .close("101W_juydrDRByB7fUdRyE2JQ")
        .await
        .unwrap();

    assert_eq!(outcome, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn user_schema_decodes_the_dollar_schema_field() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/meta/schemas/user/default")
        .with_status(200)
        .with_body(
            r##"{
                "id": "https://acme.okta.com/meta/schemas/user/default",
                "$schema": "http://json-schema.org/draft-04/schema#",
                "name": "user",
                "title": "User",
                "type": "object",
                "definitions": {"base": {"id": "#base"}, "custom": {"id": "#custom"}}
            }"##,
        )
        .create_async()
        .await;

    let schema = okta(&server).schemas().user_schema().await.unwrap();
    assert_eq!(
        schema.schema.as_deref(),
        Some("http://json-schema.org/draft-04/schema#")
    );
    assert!(schema.definitions.unwrap().get("custom").is_some());
}

#[tokio::test]
async fn event_listing_passes_filters_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded(
                "filter".into(),
                r#"action.objectType eq "core.user_auth.login_success""#.into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"[{
                "eventId": "tevGr2BhQTMR72OiBGvKXTp2Q1399593071000",
                "published": "2014-04-09T02:31:11.000Z",
                "action": {"message": "Sign-in successful", "categories": ["Sign-in Success"]}
            }]"#,
        )
        .create_async()
        .await;

    let events = okta(&server)
        .events()
        .list(
            EventListParams::new()
                .limit(10)
                .filter(r#"action.objectType eq "core.user_auth.login_success""#),
        )
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, "tevGr2BhQTMR72OiBGvKXTp2Q1399593071000");
    mock.assert_async().await;
}

#[tokio::test]
async fn saml_metadata_is_served_from_the_raw_response() {
    let mut server = mockito::Server::new_async().await;
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?><md:EntityDescriptor/>"#;
    let _mock = server
        .mock("GET", "/api/v1/apps/0oa1/sso/saml/metadata")
        .match_query(Matcher::UrlEncoded("kid".into(), "akm5h".into()))
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(xml)
        .create_async()
        .await;

    let metadata = okta(&server)
        .apps()
        .saml_metadata("0oa1", "akm5h")
        .await
        .unwrap();
    assert_eq!(metadata, xml);
}

#[tokio::test]
async fn saml_metadata_failures_classify_like_everything_else() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/apps/0oa1/sso/saml/metadata")
        .match_query(Matcher::UrlEncoded("kid".into(), "missing".into()))
        .with_status(404)
        .with_body(r#"{"errorCode": "E0000008"}"#)
        .create_async()
        .await;

    let err = okta(&server)
        .apps()
        .saml_metadata("0oa1", "missing")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some("E0000008"));
}

#[tokio::test]
async fn app_creation_wraps_settings_under_the_app_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/apps")
        .match_body(Matcher::Json(json!({
            "name": "bookmark",
            "label": "Sample Bookmark",
            "signOnMode": "BOOKMARK",
            "settings": {"app": {"url": "https://example.org/bookmark.htm"}},
            "activate": true
        })))
        .with_status(201)
        .with_body(
            r#"{"id": "0oa1gjh63g214q0Hq0g4", "name": "bookmark", "status": "ACTIVE", "signOnMode": "BOOKMARK"}"#,
        )
        .create_async()
        .await;

    let app = okta(&server)
        .apps()
        .add(okta_client::models::NewApplication {
            name: "bookmark".to_string(),
            label: "Sample Bookmark".to_string(),
            sign_on_mode: "BOOKMARK".to_string(),
            settings: Some(json!({"url": "https://example.org/bookmark.htm"})),
            activate: Some(true),
        })
        .await
        .unwrap();

    assert_eq!(app.id, "0oa1gjh63g214q0Hq0g4");
    mock.assert_async().await;
}
