//! User session shapes for the `/sessions` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// RapidIdentity username and password for generating a user session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RapidIdentityUser {
    /// RapidIdentity user username.
    pub username: String,

    /// RapidIdentity user password.
    pub password: String,
}

/// A RapidIdentity user session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    /// The session object.
    pub session: SessionInfo,

    /// Whether a password update is required with the session.
    pub password_update_required: bool,

    /// Number of logins remaining before the user is locked out.
    pub grace_logins_remaining: i32,
}

/// Detailed information about one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionInfo {
    /// The session id.
    pub id: String,

    /// The session token, used as the bearer token for subsequent requests.
    pub token: String,

    /// The session user. For a proxy session this is the proxied user.
    pub user: User,

    /// For a proxy session, the user who invoked the proxy.
    pub real_user: User,

    /// The RapidIdentity roles associated with the user. Does not contain
    /// the groups the user is a member of.
    pub roles: Vec<String>,

    /// When the session was created.
    pub created: Option<DateTime<Utc>>,

    /// The client IP address used to create the session.
    pub created_client_ip: String,

    /// The host IP address used to create the session.
    pub created_host_ip: String,

    /// The time the session was last used.
    pub last_used: Option<DateTime<Utc>>,

    /// The client IP address that was last used with the session.
    pub last_used_client_ip: String,

    /// The host IP address that was last used with the session.
    pub last_used_host_ip: String,

    /// When the session was invalidated.
    pub invalidated: Option<DateTime<Utc>>,

    /// Proxy data associated with the session.
    pub proxy_data: ProxyData,
}

/// Proxy metadata attached to a proxy session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyData {
    /// The RapidIdentity roles of the user who initiated the proxy.
    pub permissions: Vec<String>,
}
