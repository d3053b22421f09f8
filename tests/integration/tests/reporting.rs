//! Reporting endpoint tests.

use httpmock::prelude::*;
use ri_client::RunAuditReportInput;
use ri_model::audit::{AuditReportOperator, AuditReportQuery};
use serde_json::json;

use crate::common::{bearer, TestEnv, SERVICE_KEY};

#[tokio::test]
async fn runs_an_audit_query_and_decodes_records() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let query = AuditReportQuery {
        id: "root".to_string(),
        operator_type: AuditReportOperator::And,
        child_nodes: vec![AuditReportQuery {
            field_name: "action.displayName".to_string(),
            field_value: "Login".to_string(),
            operator_type: AuditReportOperator::Equal,
            parent_node: "root".to_string(),
            ..AuditReportQuery::default()
        }],
        ..AuditReportQuery::default()
    };
    let expected_body = serde_json::to_value(&query)?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/rest/reporting/auditQuery")
                .header("authorization", bearer(SERVICE_KEY))
                .json_body(expected_body.clone());
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "auditLogRecords": [{
                        "id": "rec1",
                        "action": {"id": "login", "displayName": "Login"},
                        "perpetratorDn": "cn=jdoe,ou=people,dc=example",
                        "successful": true
                    }],
                    "adminLimitEnforced": false
                }));
        })
        .await;

    let output = env
        .client
        .run_audit_report(RunAuditReportInput { query })
        .await?;

    mock.assert_async().await;
    assert!(!output.admin_limit_enforced);
    let record = &output.audit_log_records[0];
    assert_eq!(record.action.base.display_name, "Login");
    assert!(record.successful);
    Ok(())
}
