//! Client construction, session handling and shared request plumbing.

use reqwest::{header, Method, RequestBuilder, Response};
use ri_model::session::{RapidIdentityUser, Session};
use url::Url;

use crate::error::{Error, Result};

/// Sentinel for the `<Main>` Connect project. Some endpoints distinguish
/// between "all projects" (no `project` parameter) and the `<Main>` project
/// (an empty `project` value), so an empty input string cannot express both.
pub const MAIN_PROJECT: &str = "<Main>";

/// User agent sent when [`Options::user_agent`] is left empty.
pub const DEFAULT_USER_AGENT: &str = concat!("ri-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Configurable options for the RapidIdentity client.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// The HTTP client used for requests to the RapidIdentity REST API.
    pub http_client: reqwest::Client,

    /// The service identity key to use for authorization. See the
    /// RapidIdentity documentation on service identities for setting one up
    /// with the appropriate permissions.
    pub service_identity: String,

    /// Credentials for creating a user session. Leave `None` when using a
    /// service identity; some endpoints require a user session rather than
    /// a service identity.
    pub rapid_identity_user: Option<RapidIdentityUser>,

    /// The RapidIdentity base host URL, for example
    /// `https://portal.us001-rapididentity.com`.
    pub base_url: Option<Url>,

    /// The user agent used in requests. Defaults to
    /// [`DEFAULT_USER_AGENT`] when empty.
    pub user_agent: String,
}

/// Client for the RapidIdentity REST API.
///
/// Created with [`Client::new`]. When constructed with user credentials the
/// client holds a session whose token authorizes every request; call
/// [`Client::close`] to revoke it when done.
#[derive(Debug)]
pub struct Client {
    http_client: reqwest::Client,
    service_identity_key: String,
    session: Option<Session>,
    user_agent: String,
    base_endpoint: String,
}

impl Client {
    /// Creates a new RapidIdentity client with the provided options.
    ///
    /// When [`Options::rapid_identity_user`] is set, the credentials are
    /// exchanged for a session before the client is returned.
    ///
    /// # Errors
    ///
    /// Fails when no base URL is configured or when the session login
    /// request fails.
    pub async fn new(options: Options) -> Result<Self> {
        let base_url = options.base_url.ok_or(url::ParseError::EmptyHost)?;
        let user_agent = if options.user_agent.is_empty() {
            DEFAULT_USER_AGENT.to_string()
        } else {
            options.user_agent
        };

        let mut client = Self {
            http_client: options.http_client,
            service_identity_key: options.service_identity,
            session: None,
            user_agent,
            base_endpoint: format!("{}/api/rest", base_url.as_str().trim_end_matches('/')),
        };

        if let Some(credentials) = options.rapid_identity_user {
            client.session = Some(client.login(&credentials).await?);
        }

        Ok(client)
    }

    async fn login(&self, credentials: &RapidIdentityUser) -> Result<Session> {
        let url = self.endpoint("/sessions")?;
        tracing::debug!(user = %credentials.username, "creating session");

        let response = self
            .http_client
            .post(url)
            .header(header::USER_AGENT, &self.user_agent)
            .json(credentials)
            .send()
            .await?;
        let body = receive_response(Method::POST, response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Revokes the user session, if one is held. A no-op for
    /// service-identity clients.
    ///
    /// # Errors
    ///
    /// Fails when the server rejects the session delete.
    pub async fn close(&mut self) -> Result<()> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };

        let url = self.endpoint("/sessions")?;
        tracing::debug!("revoking session");

        let response = self
            .http_client
            .delete(url)
            .bearer_auth(&session.session.token)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;
        receive_response(Method::DELETE, response).await?;
        self.session = None;
        Ok(())
    }

    /// Joins a path onto the `/api/rest` base endpoint.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_endpoint))?)
    }

    /// Builds a request with the authorization and shared headers every
    /// endpoint uses. The session token takes precedence over the service
    /// identity key.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "sending request");
        let token = match &self.session {
            Some(session) => session.session.token.as_str(),
            None => self.service_identity_key.as_str(),
        };
        self.http_client
            .request(method, url)
            .bearer_auth(token)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, "application/json")
    }

    /// Sends a request and returns the raw response body of a successful
    /// response.
    pub(crate) async fn send(&self, method: Method, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        receive_response(method, response).await
    }
}

/// Reads the response body, mapping any non-2xx status to [`Error::Api`].
async fn receive_response(method: Method, response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(Error::Api {
            method,
            url,
            status,
            message: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Wire literal for a boolean query parameter.
pub(crate) fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Maps the [`MAIN_PROJECT`] sentinel to the empty `project` value the
/// server expects.
pub(crate) fn project_param(project: &str) -> &str {
    if project == MAIN_PROJECT {
        ""
    } else {
        project
    }
}
