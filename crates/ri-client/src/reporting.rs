//! Audit report queries against the Reporting module.

use reqwest::Method;
use ri_model::audit::{AuditReportQuery, RunAuditReportOutput};

use crate::client::Client;
use crate::error::Result;

/// Input for running an audit report query in the Reporting module.
#[derive(Debug, Clone, Default)]
pub struct RunAuditReportInput {
    /// The query to run.
    pub query: AuditReportQuery,
}

impl Client {
    /// Runs an audit report query.
    ///
    /// Corresponds to `POST /reporting/auditQuery`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn run_audit_report(
        &self,
        input: RunAuditReportInput,
    ) -> Result<RunAuditReportOutput> {
        let url = self.endpoint("/reporting/auditQuery")?;
        let request = self.request(Method::POST, url).json(&input.query);
        let body = self.send(Method::POST, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
