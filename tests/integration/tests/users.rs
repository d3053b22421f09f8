//! User lookup, query, schema attribute and delegation endpoint tests.

use httpmock::prelude::*;
use ri_client::{GetDelegationsForUserInput, RunUserQueryInput};
use ri_model::audit::{AuditReportOperator, AuditReportQuery};
use serde_json::json;

use crate::common::{bearer, TestEnv, SERVICE_KEY};

#[tokio::test]
async fn lists_schema_attributes() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/ldap/schema/attributes")
                .header("authorization", bearer(SERVICE_KEY));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(["cn", "mail", "idautoPersonUsernameMV"]));
        })
        .await;

    let attributes = env.client.get_rapid_identity_attributes().await?;

    mock.assert_async().await;
    assert_eq!(attributes, vec!["cn", "mail", "idautoPersonUsernameMV"]);
    Ok(())
}

#[tokio::test]
async fn user_query_defaults_and_sends_the_query_tree() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let query = AuditReportQuery {
        field_name: "lastName".to_string(),
        field_value: "Doe".to_string(),
        operator_type: AuditReportOperator::Equal,
        ..AuditReportQuery::default()
    };
    let expected_body = serde_json::to_value(&query)?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/rest/users")
                .query_param("search", "advanced")
                .query_param("limit", "1000")
                .query_param("did", "d1")
                .json_body(expected_body.clone());
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"id": "u1", "username": "jdoe", "lastName": "Doe"},
                    {"id": "u2", "username": "jdoe2", "lastName": "Doe"}
                ]));
        })
        .await;

    let users = env
        .client
        .run_user_query(RunUserQueryInput {
            delegation_ids: vec!["d1".to_string()],
            query,
            ..RunUserQueryInput::default()
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].username, "jdoe2");
    Ok(())
}

#[tokio::test]
async fn fetches_delegations_for_user() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/profiles/aggregated/for/u1")
                .header("authorization", bearer(SERVICE_KEY));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "aggregatedDelegation": {
                        "id": "u1",
                        "user": {"id": "u1", "username": "jdoe"},
                        "delegationProfiles": [{
                            "delegation": {"id": "d1", "name": "My Profile", "type": "MY"},
                            "profile": {"id": "u1"}
                        }]
                    }
                }));
        })
        .await;

    let output = env
        .client
        .get_delegations_for_user(GetDelegationsForUserInput {
            user_id: "u1".to_string(),
        })
        .await?;

    mock.assert_async().await;
    let aggregated = output.aggregated_delegation;
    assert_eq!(aggregated.user.username, "jdoe");
    assert_eq!(aggregated.delegation_profiles[0].delegation.kind, "MY");
    Ok(())
}
