//! Common test utilities and fixtures.

use httpmock::MockServer;
use ri_client::{Client, Options};
use url::Url;

/// Service identity key used by the default test client.
pub const SERVICE_KEY: &str = "test-service-identity";

/// Test environment pairing a mock RapidIdentity tenant with a client.
pub struct TestEnv {
    /// The mock server standing in for the tenant.
    pub server: MockServer,
    /// Client authorized with [`SERVICE_KEY`].
    pub client: Client,
}

impl TestEnv {
    /// Starts a mock server and builds a service-identity client against
    /// it.
    pub async fn new() -> anyhow::Result<Self> {
        let server = MockServer::start_async().await;
        let client = Client::new(Options {
            base_url: Some(Url::parse(&server.base_url())?),
            service_identity: SERVICE_KEY.to_string(),
            ..Options::default()
        })
        .await?;
        Ok(Self { server, client })
    }
}

/// The `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
