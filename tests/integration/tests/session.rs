//! Session lifecycle and error mapping tests.

use httpmock::prelude::*;
use ri_client::{Client, Error, GetUserByIdInput, Options};
use ri_model::session::RapidIdentityUser;
use serde_json::json;
use url::Url;

use crate::common::{bearer, TestEnv};

#[tokio::test]
async fn credentials_create_a_session_whose_token_wins() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;

    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/rest/sessions")
                .json_body(json!({"username": "jdoe", "password": "hunter2"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "session": {"id": "s1", "token": "session-token", "user": {"id": "u1"}}
                }));
        })
        .await;

    // Requests must carry the session token even though a service identity
    // key is also configured.
    let user_lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/ldap/users/u1")
                .header("authorization", bearer("session-token"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"id": "u1", "username": "jdoe"}));
        })
        .await;

    let logout = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/api/rest/sessions")
                .header("authorization", bearer("session-token"));
            then.status(204);
        })
        .await;

    let mut client = Client::new(Options {
        base_url: Some(Url::parse(&server.base_url())?),
        service_identity: "unused-key".to_string(),
        rapid_identity_user: Some(RapidIdentityUser {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
        }),
        ..Options::default()
    })
    .await?;

    login.assert_async().await;

    let user = client
        .get_user_by_id(GetUserByIdInput {
            id: "u1".to_string(),
        })
        .await?;
    user_lookup.assert_async().await;
    assert_eq!(user.username, "jdoe");

    client.close().await?;
    logout.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn rejected_login_surfaces_the_api_error() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/rest/sessions");
            then.status(401).body("invalid credentials");
        })
        .await;

    let result = Client::new(Options {
        base_url: Some(Url::parse(&server.base_url())?),
        rapid_identity_user: Some(RapidIdentityUser {
            username: "jdoe".to_string(),
            password: "wrong".to_string(),
        }),
        ..Options::default()
    })
    .await;

    match result {
        Err(Error::Api {
            status, message, ..
        }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn non_2xx_response_maps_to_api_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    env.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest/admin/ldap/users/missing");
            then.status(404).body("user not found");
        })
        .await;

    let result = env
        .client
        .get_user_by_id(GetUserByIdInput {
            id: "missing".to_string(),
        })
        .await;

    match result {
        Err(Error::Api {
            method,
            status,
            message,
            ..
        }) => {
            assert_eq!(method, reqwest::Method::GET);
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "user not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn close_without_session_is_a_no_op() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;

    // No mocks registered: any request would fail the test with a 404
    // turned into an api error.
    let mut client = Client::new(Options {
        base_url: Some(Url::parse(&server.base_url())?),
        service_identity: "key".to_string(),
        ..Options::default()
    })
    .await?;

    client.close().await?;
    Ok(())
}
