//! Authentication policy endpoint tests.

use httpmock::prelude::*;
use ri_client::GetAuthenticationPoliciesForUserInput;
use ri_model::policy::GetAuthenticationPoliciesForUserPayload;
use ri_model::{PolicyCriteria, PolicyMethod};
use serde_json::json;

use crate::common::{bearer, TestEnv, SERVICE_KEY};

#[tokio::test]
async fn fetches_policies_with_query_and_body() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/rest/authn/v1/username")
                .query_param("authenticationPolicies", "true")
                .query_param("claim", "false")
                .query_param("authenticationPolicyField", "name")
                .header("authorization", bearer(SERVICE_KEY))
                .header("accept", "application/json")
                .json_body(json!({"username": "jdoe"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "user": {"id": "u1", "username": "jdoe"},
                    "authenticationPolicies": [{
                        "id": "p1",
                        "version": 1,
                        "name": "Staff",
                        "enabled": true,
                        "criteria": [
                            {"type": "dayOfWeek", "enabled": true, "monday": true, "friday": true}
                        ],
                        "methods": [
                            {"type": "password", "enabled": true, "mustChange": true},
                            {"type": "unknownFutureType", "enabled": true}
                        ]
                    }]
                }));
        })
        .await;

    let output = env
        .client
        .get_authentication_policies_for_user(GetAuthenticationPoliciesForUserInput {
            show_authentication_policies: true,
            show_claims: false,
            authentication_policy_fields_to_show: vec!["name".to_string()],
            user: GetAuthenticationPoliciesForUserPayload {
                username: "jdoe".to_string(),
            },
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(output.user.id, "u1");

    let policy = &output.authentication_policies[0];
    assert_eq!(policy.name, "Staff");
    assert!(matches!(&policy.criteria[0], PolicyCriteria::DayOfWeek(days) if days.friday));
    // The unrecognized method type is dropped, not an error.
    assert_eq!(policy.methods.len(), 1);
    assert!(matches!(&policy.methods[0], PolicyMethod::Password(p) if p.must_change));
    Ok(())
}

#[tokio::test]
async fn malformed_policy_scalar_is_a_decode_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    env.server
        .mock_async(|when, then| {
            when.method(POST).path("/api/rest/authn/v1/username");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "user": {"id": "u1"},
                    "authenticationPolicies": [{"id": "p1", "version": "1"}]
                }));
        })
        .await;

    let result = env
        .client
        .get_authentication_policies_for_user(GetAuthenticationPoliciesForUserInput::default())
        .await;

    assert!(matches!(result, Err(ri_client::Error::Decode(_))));
    Ok(())
}
