//! Bootstrap info endpoint tests.

use httpmock::prelude::*;
use serde_json::json;

use crate::common::{bearer, TestEnv, SERVICE_KEY};

#[tokio::test]
async fn fetches_tenant_bootstrap_info() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/bootstrapInfo")
                .header("authorization", bearer(SERVICE_KEY))
                .header("accept", "application/json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "licenseInfo": {"type": "subscription", "licensee": "Example ISD"},
                    "versionInfo": {"version": "2024.05.1"},
                    "sessionInfo": {"id": "s1", "user": {"id": "u1"}},
                    "moduleInfo": {
                        "connect": {"visible": true},
                        "reporting": {"licensed": true, "auditReportMax": 5000}
                    },
                    "tenantId": "t1",
                    "idaas": true
                }));
        })
        .await;

    let output = env.client.get_bootstrap_info().await?;

    mock.assert_async().await;
    assert_eq!(output.license_info.licensee, "Example ISD");
    assert_eq!(output.version_info.version, "2024.05.1");
    assert!(output.module_info.connect.visible);
    assert_eq!(output.module_info.reporting.audit_report_max, 5000);
    assert_eq!(output.tenant_id, "t1");
    assert!(output.idaas);
    Ok(())
}
