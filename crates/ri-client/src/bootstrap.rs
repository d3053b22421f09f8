//! Tenant bootstrap information.

use reqwest::Method;
use ri_model::bootstrap::GetBootstrapInfoOutput;

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Retrieves tenant and user access information for the invoking user.
    ///
    /// Corresponds to `GET /bootstrapInfo`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_bootstrap_info(&self) -> Result<GetBootstrapInfoOutput> {
        let url = self.endpoint("/bootstrapInfo")?;
        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
